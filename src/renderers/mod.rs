//! Renderers module
//!
//! The page pipeline is written against the traits in [`backend`]; PDF.js
//! (see `crate::pdfjs`) and the DOM container in [`canvas`] are one
//! implementation of them.

pub mod backend;
pub mod canvas;
pub mod pipeline;

// Re-export commonly used types
pub use backend::{CanvasHost, CanvasOf, LibraryLoader, PdfDocument, PdfLibrary, PdfPage};
pub use canvas::{DomCanvasHost, PAGE_ATTRIBUTE};
pub use pipeline::{PageRenderer, PendingRender};
