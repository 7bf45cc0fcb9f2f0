//! Renderer configuration
//!
//! Where to load PDF.js from, which worker script it runs on, and the scale
//! pages are rasterized at. Passed explicitly into renderer initialization.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::utils::url::plugin_url;

/// Render scale used with a caller-supplied library location
pub const DYNAMIC_IMPORT_SCALE: f64 = 2.0;

/// Render scale used with the plugin's bundled library assets
pub const PLUGIN_ASSET_SCALE: f64 = 1.0;

const PDFJS_MODULE_PATH: &str = "js/pdfjs/build/pdf.mjs";
const PDFJS_WORKER_PATH: &str = "js/pdfjs/build/pdf.worker.mjs";

/// Locators for the rendering library module and its worker script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryLocation {
    /// URL passed to a dynamic `import()` of the PDF.js module
    pub module_url: String,

    /// URL of the PDF.js worker module script
    pub worker_src: String,
}

impl LibraryLocation {
    pub fn new(module_url: impl Into<String>, worker_src: impl Into<String>) -> Self {
        Self {
            module_url: module_url.into(),
            worker_src: worker_src.into(),
        }
    }
}

/// Full renderer configuration, deserializable from a JS object
/// `{ moduleUrl, workerSrc, scale? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererConfig {
    #[serde(flatten)]
    pub library: LibraryLocation,

    /// Viewport scale every page is rendered at
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    DYNAMIC_IMPORT_SCALE
}

impl RendererConfig {
    /// Library located by the caller, pages rendered at 2x.
    pub fn dynamic_import(module_url: impl Into<String>, worker_src: impl Into<String>) -> Self {
        Self {
            library: LibraryLocation::new(module_url, worker_src),
            scale: DYNAMIC_IMPORT_SCALE,
        }
    }

    /// Library served from the documents plugin's asset route, pages rendered at 1x.
    pub fn plugin_assets(origin: &str) -> Result<Self, RenderError> {
        let module_url = plugin_url(origin, PDFJS_MODULE_PATH)?;
        let worker_src = plugin_url(origin, PDFJS_WORKER_PATH)?;
        Ok(Self {
            library: LibraryLocation::new(module_url.as_str(), worker_src.as_str()),
            scale: PLUGIN_ASSET_SCALE,
        })
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Reject configurations the renderer cannot work with.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.library.module_url.trim().is_empty() {
            return Err(RenderError::config("module URL is empty"));
        }
        if self.library.worker_src.trim().is_empty() {
            return Err(RenderError::config("worker URL is empty"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RenderError::config(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
