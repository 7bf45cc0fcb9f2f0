//! Document source references
//!
//! What the renderer is asked to open: a URL the library fetches itself, or
//! raw PDF bytes already in memory. Timeline entries reference documents by a
//! signed path which resolves to a URL on the documents plugin file route.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RenderError;
use crate::utils::url::{encode_component, plugin_url};

/// A document the library can open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Absolute, relative, `blob:` or `data:` URL
    Url(String),

    /// Raw PDF data
    Bytes(Vec<u8>),
}

impl DocumentSource {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Short human-readable form for log lines
    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        match self {
            Self::Url(url) if url.trim().is_empty() => {
                Err(RenderError::Source("document URL is empty".to_string()))
            }
            Self::Bytes(bytes) if bytes.is_empty() => {
                Err(RenderError::Source("document data is empty".to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl From<Url> for DocumentSource {
    fn from(url: Url) -> Self {
        Self::Url(url.into())
    }
}

/// A document path together with the server's signature over it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMedia {
    pub path: String,
    pub signature: String,
}

impl SignedMedia {
    /// URL serving this document from `origin`'s documents plugin file route.
    pub fn file_url(&self, origin: &str) -> Result<Url, RenderError> {
        plugin_url(
            origin,
            &format!(
                "file/{}/{}",
                encode_component(&self.path),
                encode_component(&self.signature)
            ),
        )
    }
}
