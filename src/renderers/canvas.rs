//! DOM container host
//!
//! Creates one `<canvas>` per page through the container's owner document.
//! A host keeps the canvases it inserted in page order, whatever order the
//! pages arrive in, and places them after anything already in the container.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, Node};

use super::backend::CanvasHost;
use crate::error::RenderError;
use crate::models::{CanvasSize, CANVAS_DISPLAY_WIDTH};
use crate::pdfjs::js_error_message;

/// Attribute holding the 1-based page number of a page canvas
pub const PAGE_ATTRIBUTE: &str = "data-pdf-page";

/// A container element page canvases are inserted into.
///
/// One host serves one render; earlier renders' canvases are never moved.
#[derive(Debug)]
pub struct DomCanvasHost {
    document: Document,
    container: Element,
    attached: RefCell<BTreeMap<u32, HtmlCanvasElement>>,
}

impl DomCanvasHost {
    pub fn new(container: Element) -> Result<Self, RenderError> {
        let document = container
            .owner_document()
            .ok_or_else(|| RenderError::canvas("container has no owner document"))?;
        Ok(Self {
            document,
            container,
            attached: RefCell::new(BTreeMap::new()),
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Canvas this host attached for the nearest page after `page`
    fn successor(&self, page: u32) -> Option<Node> {
        self.attached
            .borrow()
            .range((Excluded(page), Unbounded))
            .next()
            .map(|(_, canvas)| Node::from(canvas.clone()))
    }
}

impl CanvasHost<HtmlCanvasElement> for DomCanvasHost {
    fn create_canvas(&self, page: u32, size: CanvasSize) -> Result<HtmlCanvasElement, RenderError> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|e| RenderError::canvas(js_error_message(&e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::canvas("created element is not a canvas"))?;

        canvas.set_width(size.width);
        canvas.set_height(size.height);
        canvas
            .style()
            .set_property("width", CANVAS_DISPLAY_WIDTH)
            .map_err(|e| RenderError::canvas(js_error_message(&e)))?;
        canvas
            .set_attribute(PAGE_ATTRIBUTE, &page.to_string())
            .map_err(|e| RenderError::canvas(js_error_message(&e)))?;

        Ok(canvas)
    }

    fn attach(&self, page: u32, canvas: &HtmlCanvasElement) -> Result<(), RenderError> {
        let successor = self.successor(page);
        self.container
            .insert_before(canvas, successor.as_ref())
            .map_err(|e| RenderError::canvas(js_error_message(&e)))?;
        self.attached.borrow_mut().insert(page, canvas.clone());
        Ok(())
    }
}
