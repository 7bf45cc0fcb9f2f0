//! Outcome of one render job

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// A page that did not make it onto its canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFailure {
    /// 1-based page number
    pub page: u32,
    pub code: String,
    pub message: String,
}

/// Summary produced once every page chain of a document has settled
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub page_count: u32,
    pub rendered_pages: u32,
    pub failures: Vec<PageFailure>,
}

impl RenderReport {
    pub fn new(page_count: u32) -> Self {
        Self {
            page_count,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self) {
        self.rendered_pages += 1;
    }

    pub fn record_failure(&mut self, page: u32, error: &RenderError) {
        self.failures.push(PageFailure {
            page,
            code: error.code().as_str().to_string(),
            message: error.to_string(),
        });
    }

    /// True when every page was drawn
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.rendered_pages == self.page_count
    }
}
