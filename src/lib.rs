//! Derive stable, human-named XPath locators from static HTML.
//!
//! [`parse`] runs every extractor over a document and returns one locator per
//! unique variable name, best strategy first. [`analyze`] reports which
//! checkbox convention a page follows as a reusable xpath template.

use std::sync::LazyLock;

pub mod checkbox;
pub mod cli;
pub mod dom;
pub mod error;
pub mod extract;
pub mod locator;
pub mod report;
pub mod trace;

pub use checkbox::checkbox_model::{
    CheckboxFramework, CheckboxPatternResult, LabelPattern, PLACEHOLDER,
};
pub use error::{LocatorError, Result};
pub use locator::aggregator::{LocatorEngine, ParseOutcome};
pub use locator::locator_config::{LocatorConfig, MarkerConfig, ScriptRange};
pub use locator::locator_model::{Decision, Extractor, LocatorCandidate};
pub use locator::naming::make_identifier;
pub use locator::suffix::suffix_for;

static DEFAULT_ENGINE: LazyLock<LocatorEngine> = LazyLock::new(LocatorEngine::default);

/// Extract locators using the built-in configuration.
pub fn parse(html: &str) -> Vec<LocatorCandidate> {
    DEFAULT_ENGINE.parse(html)
}

/// Detect the page's checkbox convention using the built-in configuration.
pub fn analyze(html: &str) -> CheckboxPatternResult {
    DEFAULT_ENGINE.analyze_checkboxes(html)
}
