//! Error types for PDF page rendering
//!
//! Every failure that can happen between loading PDF.js and drawing the last
//! page is a [`RenderError`]. At the JavaScript boundary it becomes an `Error`
//! object carrying a stable `code` property.

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Top-level rendering error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Renderer configuration is unusable (empty locator, bad scale)
    #[error("Invalid renderer configuration: {0}")]
    Config(String),

    /// The rendering library module could not be imported
    #[error("Unable to load PDF library from {url}: {message}")]
    LibraryLoad { url: String, message: String },

    /// The library worker could not be set up
    #[error("Unable to configure PDF worker: {0}")]
    Worker(String),

    /// The document source reference is not something the library can open
    #[error("Invalid document source: {0}")]
    Source(String),

    /// The library failed to open the document
    #[error("Unable to open document: {0}")]
    Open(String),

    /// A single page could not be fetched from the document
    #[error("Unable to fetch page {page}: {message}")]
    Page { page: u32, message: String },

    /// Canvas creation or insertion into the container failed
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// The canvas refused to hand out a 2D drawing context
    #[error("2D drawing context unavailable for page {0}")]
    ContextUnavailable(u32),

    /// The library failed while drawing a page
    #[error("Unable to render page {page}: {message}")]
    Render { page: u32, message: String },

    /// The render job was cancelled before it settled
    #[error("Rendering was cancelled")]
    Cancelled,
}

impl RenderError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn canvas(message: impl Into<String>) -> Self {
        Self::Canvas(message.into())
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config(_) => ErrorCode::Config,
            Self::LibraryLoad { .. } => ErrorCode::Library,
            Self::Worker(_) => ErrorCode::Worker,
            Self::Source(_) => ErrorCode::Source,
            Self::Open(_) => ErrorCode::Open,
            Self::Page { .. } => ErrorCode::Page,
            Self::Canvas(_) | Self::ContextUnavailable(_) => ErrorCode::Canvas,
            Self::Render { .. } => ErrorCode::Render,
            Self::Cancelled => ErrorCode::Cancelled,
        }
    }
}

/// Error codes for JavaScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Config,
    Library,
    Worker,
    Source,
    Open,
    Page,
    Canvas,
    Render,
    Cancelled,
}

impl ErrorCode {
    /// Value of the `code` property on JavaScript errors
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Library => "LIBRARY_ERROR",
            ErrorCode::Worker => "WORKER_ERROR",
            ErrorCode::Source => "SOURCE_ERROR",
            ErrorCode::Open => "OPEN_ERROR",
            ErrorCode::Page => "PAGE_ERROR",
            ErrorCode::Canvas => "CANVAS_ERROR",
            ErrorCode::Render => "RENDER_ERROR",
            ErrorCode::Cancelled => "CANCELLED",
        }
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        let js_error = js_sys::Error::new(&err.to_string());
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code().as_str()),
        )
        .ok();
        js_error.into()
    }
}
