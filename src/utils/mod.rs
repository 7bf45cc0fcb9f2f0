//! Utility modules for the PDF renderer

pub mod url;

// Re-export commonly used helpers
pub use self::url::{encode_component, plugin_url, PLUGIN_ROUTE};
