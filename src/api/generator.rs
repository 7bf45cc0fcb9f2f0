//! `PdfGenerator`
//!
//! Keeps the call shape the documents plugin client uses: the library
//! locators arrive with every call, but PDF.js is loaded once, on the first
//! call, and reused afterwards.

use once_cell::unsync::OnceCell;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::source::document_source;
use super::viewer::RenderJob;
use crate::error::RenderError;
use crate::models::{LibraryLocation, RendererConfig};
use crate::pdfjs::{PdfJs, PdfJsLoader};
use crate::renderers::{DomCanvasHost, PageRenderer};
use crate::wasm_warn;

#[wasm_bindgen]
#[derive(Default)]
pub struct PdfGenerator {
    renderer: OnceCell<PageRenderer<PdfJs>>,
}

#[wasm_bindgen]
impl PdfGenerator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the document at `path` into `container` at 2x scale.
    pub fn generate_pdfs(
        &self,
        path: String,
        container: Element,
        import_url: String,
        worker_src: String,
    ) -> Result<RenderJob, JsValue> {
        let renderer = self.renderer_for(LibraryLocation::new(import_url, worker_src))?;
        let host = DomCanvasHost::new(container)?;
        Ok(RenderJob::spawn(
            renderer.start_with(document_source(JsValue::from(path)), host),
        ))
    }

    #[wasm_bindgen(getter, js_name = isLibraryLoaded)]
    pub fn is_library_loaded(&self) -> bool {
        self.renderer
            .get()
            .map_or(false, |renderer| renderer.is_library_loaded())
    }
}

impl PdfGenerator {
    fn renderer_for(&self, location: LibraryLocation) -> Result<&PageRenderer<PdfJs>, RenderError> {
        let renderer = self.renderer.get_or_try_init(|| {
            let config = RendererConfig::dynamic_import(
                location.module_url.clone(),
                location.worker_src.clone(),
            );
            PageRenderer::new(config, PdfJsLoader)
        })?;
        if renderer.config().library != location {
            wasm_warn!(
                "PDF library already loaded from {}, ignoring {}",
                renderer.config().library.module_url,
                location.module_url
            );
        }
        Ok(renderer)
    }
}
