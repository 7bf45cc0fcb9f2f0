//! Data model for the PDF page renderer
//!
//! Plain values that flow between the JavaScript API, the render pipeline and
//! the library bindings: configuration, document sources, viewports and the
//! report produced when a render settles.

pub mod config;
pub mod report;
pub mod source;
pub mod viewport;

// Re-export commonly used types
pub use config::{LibraryLocation, RendererConfig, DYNAMIC_IMPORT_SCALE, PLUGIN_ASSET_SCALE};
pub use report::{PageFailure, RenderReport};
pub use source::{DocumentSource, SignedMedia};
pub use viewport::{CanvasSize, Viewport, CANVAS_DISPLAY_WIDTH};
