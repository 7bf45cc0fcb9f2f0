//! PDF.js implementation of the page pipeline's library traits
//!
//! The worker is a dedicated `PDFWorker` owned by the loaded library and
//! passed to every `getDocument` call, so nothing is written to
//! `GlobalWorkerOptions`.

use once_cell::unsync::OnceCell;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Worker, WorkerOptions, WorkerType};

use super::bindings::{import_module, PdfDocumentProxy, PdfJsModule, PdfPageProxy, PdfWorker};
use super::{js_error_message, set_param, CancelOnDrop};
use crate::error::RenderError;
use crate::models::{DocumentSource, LibraryLocation, Viewport};
use crate::renderers::{LibraryLoader, PdfDocument, PdfLibrary, PdfPage};

/// Loads PDF.js with a dynamic `import()` of the configured module URL
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfJsLoader;

impl LibraryLoader for PdfJsLoader {
    type Library = PdfJs;

    async fn load(self, location: LibraryLocation) -> Result<PdfJs, RenderError> {
        let load_error = |message: String| RenderError::LibraryLoad {
            url: location.module_url.clone(),
            message,
        };

        let module = JsFuture::from(import_module(&location.module_url))
            .await
            .map_err(|e| load_error(js_error_message(&e)))?;

        let has_get_document = js_sys::Reflect::get(&module, &JsValue::from_str("getDocument"))
            .map(|value| value.is_function())
            .unwrap_or(false);
        if !has_get_document {
            return Err(load_error("module does not export getDocument".to_string()));
        }

        let module: PdfJsModule = module.unchecked_into();
        log::debug!(
            "imported PDF.js {}",
            module.version().unwrap_or_else(|| "(unknown version)".to_string())
        );

        Ok(PdfJs {
            module,
            worker: OnceCell::new(),
        })
    }
}

/// A loaded PDF.js module
pub struct PdfJs {
    module: PdfJsModule,
    worker: OnceCell<PdfWorker>,
}

impl PdfLibrary for PdfJs {
    type Document = PdfJsDocument;

    fn configure_worker(&self, worker_src: &str) -> Result<(), RenderError> {
        if self.worker.get().is_some() {
            return Err(RenderError::Worker("worker is already configured".to_string()));
        }
        let worker_error = |e: JsValue| RenderError::Worker(js_error_message(&e));

        let options = WorkerOptions::new();
        options.set_type(WorkerType::Module);
        let port = Worker::new_with_options(worker_src, &options).map_err(worker_error)?;

        let class = self
            .module
            .pdf_worker_class()
            .dyn_into::<js_sys::Function>()
            .map_err(|_| RenderError::Worker("module does not export PDFWorker".to_string()))?;

        let params = js_sys::Object::new();
        set_param(&params, "port", &port).map_err(worker_error)?;
        let worker = js_sys::Reflect::construct(&class, &js_sys::Array::of1(&params))
            .map_err(worker_error)?;

        self.worker
            .set(worker.unchecked_into())
            .map_err(|_| RenderError::Worker("worker is already configured".to_string()))
    }

    async fn open(&self, source: &DocumentSource) -> Result<PdfJsDocument, RenderError> {
        let open_error = |e: JsValue| RenderError::Open(js_error_message(&e));

        let params = js_sys::Object::new();
        match source {
            DocumentSource::Url(url) => set_param(&params, "url", &JsValue::from_str(url)),
            // PDF.js transfers the buffer to its worker, so hand it a copy
            DocumentSource::Bytes(bytes) => {
                set_param(&params, "data", &js_sys::Uint8Array::from(&bytes[..]))
            }
        }
        .map_err(open_error)?;
        if let Some(worker) = self.worker.get() {
            set_param(&params, "worker", worker).map_err(open_error)?;
        }

        let task = self.module.get_document(&params).map_err(open_error)?;
        let guard = CancelOnDrop::new(|| {
            let _ = task.destroy();
        });
        let proxy = JsFuture::from(task.promise()).await.map_err(open_error)?;
        guard.disarm();

        Ok(PdfJsDocument {
            proxy: proxy.unchecked_into(),
        })
    }
}

impl Drop for PdfJs {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.get() {
            worker.destroy();
        }
    }
}

/// An open PDF.js document, destroyed on drop
pub struct PdfJsDocument {
    proxy: PdfDocumentProxy,
}

impl PdfDocument for PdfJsDocument {
    type Page = PdfJsPage;

    fn page_count(&self) -> u32 {
        self.proxy.num_pages()
    }

    async fn page(&self, number: u32) -> Result<PdfJsPage, RenderError> {
        let page_error = |e: JsValue| RenderError::Page {
            page: number,
            message: js_error_message(&e),
        };

        let promise = self.proxy.get_page(number).map_err(page_error)?;
        let proxy = JsFuture::from(promise).await.map_err(page_error)?;
        Ok(PdfJsPage {
            proxy: proxy.unchecked_into(),
            number,
        })
    }
}

impl Drop for PdfJsDocument {
    fn drop(&mut self) {
        let _ = self.proxy.destroy();
    }
}

/// A fetched PDF.js page
pub struct PdfJsPage {
    proxy: PdfPageProxy,
    number: u32,
}

impl PdfJsPage {
    fn js_viewport(&self, scale: f64) -> super::bindings::PageViewport {
        let params = js_sys::Object::new();
        let _ = set_param(&params, "scale", &JsValue::from_f64(scale));
        self.proxy.get_viewport(&params)
    }
}

impl PdfPage for PdfJsPage {
    type Canvas = HtmlCanvasElement;

    fn number(&self) -> u32 {
        self.number
    }

    fn viewport(&self, scale: f64) -> Viewport {
        let viewport = self.js_viewport(scale);
        Viewport::new(scale, viewport.width(), viewport.height())
    }

    async fn render(
        &self,
        canvas: &HtmlCanvasElement,
        viewport: &Viewport,
    ) -> Result<(), RenderError> {
        let render_error = |e: JsValue| RenderError::Render {
            page: self.number,
            message: js_error_message(&e),
        };

        let context = canvas
            .get_context("2d")
            .map_err(render_error)?
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(RenderError::ContextUnavailable(self.number))?;

        let params = js_sys::Object::new();
        set_param(&params, "canvasContext", &context).map_err(render_error)?;
        set_param(&params, "viewport", &self.js_viewport(viewport.scale)).map_err(render_error)?;

        let task = self.proxy.render(&params).map_err(render_error)?;
        let guard = CancelOnDrop::new(|| task.cancel());
        JsFuture::from(task.promise()).await.map_err(render_error)?;
        guard.disarm();

        log::debug!("rendered page {}", self.number);
        Ok(())
    }
}
