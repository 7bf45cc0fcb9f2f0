//! Capabilities the page pipeline needs from a rendering library and from the
//! container pages are drawn into.
//!
//! Everything runs on the browser's single thread, so none of the futures
//! here are `Send`.
#![allow(async_fn_in_trait)]

use crate::error::RenderError;
use crate::models::{CanvasSize, DocumentSource, LibraryLocation, Viewport};

/// Loads the rendering library. Consumed by the single load a renderer performs.
pub trait LibraryLoader {
    type Library: PdfLibrary;

    async fn load(self, location: LibraryLocation) -> Result<Self::Library, RenderError>;
}

/// A loaded rendering library
pub trait PdfLibrary {
    type Document: PdfDocument;

    /// Bind the library to its worker script. Called once, before any `open`.
    fn configure_worker(&self, worker_src: &str) -> Result<(), RenderError>;

    async fn open(&self, source: &DocumentSource) -> Result<Self::Document, RenderError>;
}

/// An open document. Dropping it releases the library-side resources.
pub trait PdfDocument {
    type Page: PdfPage;

    fn page_count(&self) -> u32;

    /// Fetch a page by its 1-based number.
    async fn page(&self, number: u32) -> Result<Self::Page, RenderError>;
}

/// A fetched page
pub trait PdfPage {
    /// Surface this page draws onto
    type Canvas;

    fn number(&self) -> u32;

    fn viewport(&self, scale: f64) -> Viewport;

    async fn render(&self, canvas: &Self::Canvas, viewport: &Viewport) -> Result<(), RenderError>;
}

/// The container page canvases end up in
pub trait CanvasHost<C> {
    /// Create a canvas whose drawing buffer is `size` and which displays at
    /// the full width of its parent.
    fn create_canvas(&self, page: u32, size: CanvasSize) -> Result<C, RenderError>;

    /// Insert `canvas` into the container, keeping canvases in page order.
    fn attach(&self, page: u32, canvas: &C) -> Result<(), RenderError>;
}

/// Canvas type the pages of library `L` draw onto
pub type CanvasOf<L> =
    <<<L as PdfLibrary>::Document as PdfDocument>::Page as PdfPage>::Canvas;
