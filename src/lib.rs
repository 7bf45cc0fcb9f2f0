//! PDF Canvas WASM Module
//!
//! Renders every page of a PDF document onto its own `<canvas>` inside a
//! container element. Decoding and rasterization are done by PDF.js; this
//! crate owns library loading, canvas creation and page scheduling.

pub mod api;
pub mod error;
pub mod models;
pub mod pdfjs;
pub mod renderers;
pub mod utils;

// Re-export commonly used types
pub use api::{signed_media_url, PdfGenerator, PdfViewer, RenderJob};
pub use error::{ErrorCode, RenderError};
pub use models::{CanvasSize, DocumentSource, RenderReport, RendererConfig, SignedMedia, Viewport};
pub use renderers::{CanvasHost, LibraryLoader, PageRenderer, PdfDocument, PdfLibrary, PdfPage};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    log::info!("PDF canvas WASM module initialized");
}

/// Crate version, for diagnostics on the JavaScript side.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
