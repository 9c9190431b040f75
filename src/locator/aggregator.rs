use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::checkbox::analyzer::analyze_page;
use crate::checkbox::checkbox_model::CheckboxPatternResult;
use crate::dom::page::Page;
use crate::error::Result;
use crate::extract::{
    buttons::extract_buttons, checkboxes::extract_checkboxes, display::extract_display_fields,
    form_fields::extract_form_fields, menus::extract_library_menu_items,
    menus::extract_menu_links, row_actions::extract_row_actions, tables::extract_tables,
    upload::extract_upload_fields,
};
use crate::locator::locator_config::LocatorConfig;
use crate::locator::locator_model::{Decision, Extractor, LocatorCandidate, ParseSession};
use crate::locator::suffix::{suffix_for, suffix_rank};
use crate::locator::xpath::IdHeuristics;

type ExtractFn = fn(&Page, &mut ParseSession<'_>) -> Vec<LocatorCandidate>;

/// Extractors in run order. Earlier entries claim a name first, so on a
/// priority tie across extractors the earlier one wins.
pub const EXTRACTION_ORDER: [(Extractor, ExtractFn); 9] = [
    (Extractor::FormField, extract_form_fields),
    (Extractor::Upload, extract_upload_fields),
    (Extractor::Checkbox, extract_checkboxes),
    (Extractor::Button, extract_buttons),
    (Extractor::RowAction, extract_row_actions),
    (Extractor::Table, extract_tables),
    (Extractor::MenuLink, extract_menu_links),
    (Extractor::LibraryMenu, extract_library_menu_items),
    (Extractor::Display, extract_display_fields),
];

/// Locators plus the decisions that produced them.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub locators: Vec<LocatorCandidate>,
    pub decisions: Vec<Decision>,
}

// ============================================================================
// Engine
// ============================================================================

/// Validated configuration plus the parse and analyze entry points.
///
/// Each call builds its own `ParseSession`, so one engine can serve many
/// documents, including from several threads at once.
#[derive(Debug)]
pub struct LocatorEngine {
    config: LocatorConfig,
    ids: IdHeuristics,
}

impl LocatorEngine {
    pub fn new(config: LocatorConfig) -> Result<Self> {
        let ids = IdHeuristics::new(&config.generated_id_prefixes)?;
        Ok(Self { config, ids })
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn parse(&self, html: &str) -> Vec<LocatorCandidate> {
        self.parse_traced(html).locators
    }

    pub fn parse_traced(&self, html: &str) -> ParseOutcome {
        let page = Page::parse(html);
        self.parse_page(&page)
    }

    pub fn parse_page(&self, page: &Page) -> ParseOutcome {
        let mut session = ParseSession::new(&self.config, &self.ids);
        let mut candidates = Vec::new();

        for (kind, extract) in EXTRACTION_ORDER {
            let found = extract(page, &mut session);
            tracing::debug!(extractor = %kind, count = found.len(), "extractor finished");
            candidates.extend(found);
        }

        let locators = reconcile(candidates, &mut session);
        info!(count = locators.len(), "locators extracted");

        ParseOutcome {
            locators,
            decisions: session.into_decisions(),
        }
    }

    pub fn analyze_checkboxes(&self, html: &str) -> CheckboxPatternResult {
        let page = Page::parse(html);
        analyze_page(&page, &self.config.markers)
    }
}

impl Default for LocatorEngine {
    fn default() -> Self {
        Self::new(LocatorConfig::default()).expect("built-in locator config is valid")
    }
}

// ============================================================================
// Reconciliation
// ============================================================================

/// Merge every extractor's output into one list with unique names.
///
/// 1. A `_SELECT` whose base name also exists as `_INPUT` is dropped.
/// 2. Remaining name collisions keep the lower priority, then the lower
///    suffix rank, then the first seen.
/// 3. The result is stably sorted by priority.
pub fn reconcile(
    candidates: Vec<LocatorCandidate>,
    session: &mut ParseSession<'_>,
) -> Vec<LocatorCandidate> {
    let input_names: HashSet<String> = candidates
        .iter()
        .filter(|c| c.variable_name.ends_with("_INPUT"))
        .map(|c| c.variable_name.clone())
        .collect();

    let mut winners: Vec<LocatorCandidate> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        if let Some(base) = candidate.variable_name.strip_suffix("_SELECT") {
            let input = format!("{}_INPUT", base);
            if input_names.contains(&input) {
                session.record(Decision::SuppressedSelect {
                    name: candidate.variable_name.clone(),
                    kept: input,
                });
                continue;
            }
        }

        match slots.get(&candidate.variable_name) {
            Some(&slot) => {
                let (winner, loser) = if outranks(&candidate, &winners[slot]) {
                    let previous = std::mem::replace(&mut winners[slot], candidate);
                    (winners[slot].source, previous)
                } else {
                    (winners[slot].source, candidate)
                };
                session.record(Decision::DroppedDuplicate {
                    name: loser.variable_name,
                    source: loser.source,
                    winner,
                });
            }
            None => {
                slots.insert(candidate.variable_name.clone(), winners.len());
                winners.push(candidate);
            }
        }
    }

    winners.sort_by_key(|c| c.priority);

    for kept in &winners {
        session.record(Decision::Kept {
            name: kept.variable_name.clone(),
            source: kept.source,
            priority: kept.priority,
        });
    }

    winners
}

/// Strictly better: lower priority, then lower suffix rank. Equal keeps the incumbent.
fn outranks(challenger: &LocatorCandidate, incumbent: &LocatorCandidate) -> bool {
    let key = |c: &LocatorCandidate| (c.priority, suffix_rank(suffix_for(&c.xpath)));
    key(challenger) < key(incumbent)
}
