use serde::Serialize;

use crate::error::{LocatorError, Result};
use crate::locator::locator_model::LocatorCandidate;

/// Machine-readable locator listing.
#[derive(Debug, Serialize)]
pub struct LocatorReport<'a> {
    pub source: &'a str,
    /// SHA-1 of the HTML the locators were extracted from.
    pub fingerprint: String,
    pub total: usize,
    pub locators: &'a [LocatorCandidate],
}

impl<'a> LocatorReport<'a> {
    pub fn new(source: &'a str, html: &str, locators: &'a [LocatorCandidate]) -> Self {
        Self {
            source,
            fingerprint: html_fingerprint(html),
            total: locators.len(),
            locators,
        }
    }
}

pub fn render_json(report: &LocatorReport<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|source| LocatorError::Json {
        context: "locator report".to_string(),
        source,
    })
}

pub fn html_fingerprint(html: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(html.as_bytes());
    format!("{:x}", hasher.finalize())
}
