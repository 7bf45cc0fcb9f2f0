//! JavaScript bindings for PDF.js
//!
//! Only the surface the renderer touches is declared. The module itself is
//! never linked statically; it is pulled in at runtime with a dynamic
//! `import()` of a caller-supplied URL.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    /// Dynamic `import()` of an ES module by URL
    pub fn import_module(url: &str) -> js_sys::Promise;
}

#[wasm_bindgen]
extern "C" {
    /// The `pdfjs-dist` module namespace
    pub type PdfJsModule;

    #[wasm_bindgen(method, catch, js_name = getDocument)]
    pub fn get_document(
        this: &PdfJsModule,
        params: &js_sys::Object,
    ) -> Result<PdfLoadingTask, JsValue>;

    /// The `PDFWorker` class, `undefined` on builds that do not export it
    #[wasm_bindgen(method, getter, js_name = PDFWorker)]
    pub fn pdf_worker_class(this: &PdfJsModule) -> JsValue;

    #[wasm_bindgen(method, getter)]
    pub fn version(this: &PdfJsModule) -> Option<String>;

    /// Returned by `getDocument`
    pub type PdfLoadingTask;

    #[wasm_bindgen(method, getter)]
    pub fn promise(this: &PdfLoadingTask) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &PdfLoadingTask) -> js_sys::Promise;

    /// `PDFDocumentProxy`
    pub type PdfDocumentProxy;

    #[wasm_bindgen(method, getter, js_name = numPages)]
    pub fn num_pages(this: &PdfDocumentProxy) -> u32;

    #[wasm_bindgen(method, catch, js_name = getPage)]
    pub fn get_page(this: &PdfDocumentProxy, number: u32) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &PdfDocumentProxy) -> js_sys::Promise;

    /// `PDFPageProxy`
    pub type PdfPageProxy;

    #[wasm_bindgen(method, js_name = getViewport)]
    pub fn get_viewport(this: &PdfPageProxy, params: &js_sys::Object) -> PageViewport;

    #[wasm_bindgen(method, catch)]
    pub fn render(this: &PdfPageProxy, params: &js_sys::Object) -> Result<RenderTask, JsValue>;

    pub type PageViewport;

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &PageViewport) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &PageViewport) -> f64;

    /// Returned by `PDFPageProxy.render`
    pub type RenderTask;

    #[wasm_bindgen(method, getter)]
    pub fn promise(this: &RenderTask) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn cancel(this: &RenderTask);

    /// A `PDFWorker` bound to one web worker port
    pub type PdfWorker;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &PdfWorker);
}
