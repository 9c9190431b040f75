use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::locator::locator_config::LocatorConfig;
use crate::locator::xpath::IdHeuristics;

// ============================================================================
// Priorities (1 = strongest evidence)
// ============================================================================

pub mod priority {
    /// Descriptive, page-unique id.
    pub const UNIQUE_ID: u8 = 1;
    /// Page-unique `name` attribute.
    pub const UNIQUE_NAME: u8 = 2;
    /// Non-unique id disambiguated by placeholder.
    pub const ID_WITH_PLACEHOLDER: u8 = 3;
    /// Framework binding attribute such as `formcontrolname`.
    pub const BINDING: u8 = 4;
    /// Anchored on associated label or visible text.
    pub const LABEL: u8 = 5;
    /// Generated-looking id, used only because nothing better exists.
    pub const FALLBACK_ID: u8 = 6;
}

// ============================================================================
// Candidates
// ============================================================================

/// Which selector proposed a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Extractor {
    FormField,
    Upload,
    Checkbox,
    Button,
    RowAction,
    Table,
    MenuLink,
    LibraryMenu,
    Display,
}

impl fmt::Display for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Extractor::FormField => "form_field",
            Extractor::Upload => "upload",
            Extractor::Checkbox => "checkbox",
            Extractor::Button => "button",
            Extractor::RowAction => "row_action",
            Extractor::Table => "table",
            Extractor::MenuLink => "menu_link",
            Extractor::LibraryMenu => "library_menu",
            Extractor::Display => "display",
        };
        f.write_str(name)
    }
}

/// A proposed locator: bare variable name, xpath and strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatorCandidate {
    pub variable_name: String,
    pub xpath: String,
    pub priority: u8,
    pub source: Extractor,
}

impl LocatorCandidate {
    pub fn new(
        variable_name: impl Into<String>,
        xpath: impl Into<String>,
        priority: u8,
        source: Extractor,
    ) -> Self {
        Self {
            variable_name: variable_name.into(),
            xpath: xpath.into(),
            priority,
            source,
        }
    }
}

// ============================================================================
// Decisions (recorded for the JSONL trace)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    Kept {
        name: String,
        source: Extractor,
        priority: u8,
    },
    /// Same extractor derived the same name twice; the later element was skipped.
    SkippedRepeat { name: String, source: Extractor },
    /// A `_SELECT` wrapper lost to the `_INPUT` sharing its base name.
    SuppressedSelect { name: String, kept: String },
    /// Another candidate with the same name had better priority or came first.
    DroppedDuplicate {
        name: String,
        source: Extractor,
        winner: Extractor,
    },
}

// ============================================================================
// Session state for one parse call
// ============================================================================

/// Mutable state owned by a single `parse` call.
///
/// `claims` records which extractor first produced each name. A name repeated
/// by the same extractor is refused; a name first claimed by a different
/// extractor is let through so the aggregator can settle it on priority.
pub struct ParseSession<'c> {
    pub config: &'c LocatorConfig,
    pub ids: &'c IdHeuristics,
    claims: HashMap<String, Extractor>,
    decisions: Vec<Decision>,
}

impl<'c> ParseSession<'c> {
    pub fn new(config: &'c LocatorConfig, ids: &'c IdHeuristics) -> Self {
        Self {
            config,
            ids,
            claims: HashMap::new(),
            decisions: Vec::new(),
        }
    }

    /// Try to claim `name` for `source`. Returns false for an empty name or a
    /// repeat within the same extractor.
    pub fn claim(&mut self, name: &str, source: Extractor) -> bool {
        if name.is_empty() {
            return false;
        }
        match self.claims.get(name) {
            Some(owner) if *owner == source => {
                tracing::debug!(name, %source, "skipping repeated name");
                self.decisions.push(Decision::SkippedRepeat {
                    name: name.to_string(),
                    source,
                });
                false
            }
            Some(_) => true,
            None => {
                self.claims.insert(name.to_string(), source);
                true
            }
        }
    }

    /// Claim and wrap in one step; `None` when the claim is refused.
    pub fn propose(
        &mut self,
        name: String,
        xpath: String,
        priority: u8,
        source: Extractor,
    ) -> Option<LocatorCandidate> {
        if self.claim(&name, source) {
            Some(LocatorCandidate::new(name, xpath, priority, source))
        } else {
            None
        }
    }

    pub fn is_claimed(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    pub fn first_claimant(&self, name: &str) -> Option<Extractor> {
        self.claims.get(name).copied()
    }

    pub fn record(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    pub fn into_decisions(self) -> Vec<Decision> {
        self.decisions
    }
}
