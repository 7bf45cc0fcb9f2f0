//! `PdfViewer` and `RenderJob`
//!
//! A viewer owns one renderer, hence one PDF.js load and one worker, and can
//! render any number of documents into any number of containers.

use futures::future::AbortHandle;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::Element;

use super::helpers::{deserialize, serialize};
use super::source::document_source;
use crate::error::RenderError;
use crate::models::{DocumentSource, RendererConfig, SignedMedia};
use crate::pdfjs::{js_error_message, PdfJs, PdfJsLoader};
use crate::renderers::{DomCanvasHost, PageRenderer, PendingRender};
use crate::{wasm_error, wasm_log, wasm_warn};

/// Renders PDF documents into container elements, one canvas per page
#[wasm_bindgen]
pub struct PdfViewer {
    renderer: PageRenderer<PdfJs>,
}

#[wasm_bindgen]
impl PdfViewer {
    /// Create a viewer from `{ moduleUrl, workerSrc, scale? }`.
    ///
    /// PDF.js is not loaded until the first render.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PdfViewer, JsValue> {
        let config: RendererConfig = deserialize(config, "Invalid renderer config")?;
        Ok(Self::with_config(config)?)
    }

    /// Viewer using the PDF.js build served by the documents plugin on `origin`
    #[wasm_bindgen(js_name = forPlugin)]
    pub fn for_plugin(origin: &str) -> Result<PdfViewer, JsValue> {
        Ok(Self::with_config(RendererConfig::plugin_assets(origin)?)?)
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.renderer.scale()
    }

    /// False until PDF.js has loaded successfully, and after a failed load
    #[wasm_bindgen(getter, js_name = isLibraryLoaded)]
    pub fn is_library_loaded(&self) -> bool {
        self.renderer.is_library_loaded()
    }

    /// Render every page of `source` (URL string, `Uint8Array`, `ArrayBuffer`
    /// or `Blob`) into `container`.
    pub fn render(&self, source: JsValue, container: Element) -> Result<RenderJob, JsValue> {
        let host = DomCanvasHost::new(container)?;
        Ok(RenderJob::spawn(
            self.renderer.start_with(document_source(source), host),
        ))
    }

    /// Render a timeline document reference `{ path, signature }`.
    #[wasm_bindgen(js_name = renderSignedMedia)]
    pub fn render_signed_media(
        &self,
        media: JsValue,
        container: Element,
    ) -> Result<RenderJob, JsValue> {
        let media: SignedMedia = deserialize(media, "Invalid signed media")?;
        let url = media.file_url(&window_origin()?)?;
        let host = DomCanvasHost::new(container)?;
        Ok(RenderJob::spawn(
            self.renderer.start(DocumentSource::from(url), host),
        ))
    }
}

impl PdfViewer {
    pub fn with_config(config: RendererConfig) -> Result<Self, RenderError> {
        Ok(Self {
            renderer: PageRenderer::new(config, PdfJsLoader)?,
        })
    }

    pub fn renderer(&self) -> &PageRenderer<PdfJs> {
        &self.renderer
    }
}

/// A render in flight
///
/// `promise` resolves to `{ pageCount, renderedPages, failures }` once every
/// page has settled and rejects with an `Error` carrying a `code` when the
/// document could not be rendered at all.
#[wasm_bindgen]
pub struct RenderJob {
    promise: js_sys::Promise,
    abort: AbortHandle,
}

#[wasm_bindgen]
impl RenderJob {
    #[wasm_bindgen(getter)]
    pub fn promise(&self) -> js_sys::Promise {
        self.promise.clone()
    }

    /// Stop every unfinished page. The promise rejects with code `CANCELLED`.
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

impl RenderJob {
    pub(crate) fn spawn(pending: PendingRender) -> Self {
        let abort = pending.abort_handle();
        let promise = future_to_promise(async move {
            let report = pending.await.map_err(|e| {
                if e != RenderError::Cancelled {
                    wasm_error!("{}", e);
                }
                e
            })?;
            if report.is_complete() {
                wasm_log!("rendered all {} pages", report.page_count);
            } else {
                wasm_warn!(
                    "rendered {} of {} pages",
                    report.rendered_pages,
                    report.page_count
                );
            }
            serialize(&report, "Unable to serialize render report")
        });
        Self { promise, abort }
    }
}

/// File URL of a timeline document reference on the documents plugin of `origin`
#[wasm_bindgen(js_name = signedMediaUrl)]
pub fn signed_media_url(origin: &str, media: JsValue) -> Result<String, JsValue> {
    let media: SignedMedia = deserialize(media, "Invalid signed media")?;
    Ok(media.file_url(origin)?.into())
}

fn window_origin() -> Result<String, RenderError> {
    web_sys::window()
        .ok_or_else(|| RenderError::config("no window object available"))?
        .location()
        .origin()
        .map_err(|e| RenderError::config(js_error_message(&e)))
}
