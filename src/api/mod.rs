//! PDF Canvas WASM API
//!
//! JavaScript-facing classes and functions.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serde bridging
//! - `source`: turning JS values into document sources
//! - `viewer`: `PdfViewer` and the `RenderJob` handle every render returns
//! - `generator`: `PdfGenerator`, the documents plugin's original entry point

pub mod generator;
pub mod helpers;
pub mod source;
pub mod viewer;

pub use generator::PdfGenerator;
pub use viewer::{signed_media_url, PdfViewer, RenderJob};
