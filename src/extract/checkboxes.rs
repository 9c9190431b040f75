use tracing::debug;

use crate::checkbox::association::associate_label;
use crate::checkbox::checkbox_model::LabelPattern;
use crate::dom::page::Page;
use crate::extract::common::{Resolved, ident, label_text};
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession, priority};
use crate::locator::xpath::literal;

/// Checkboxes named after their labels, suffixed `_CHECKBOX`.
///
/// The xpath shape follows how the label is attached. A checkbox without a
/// label is kept only when it has a descriptive, page-unique id.
pub fn extract_checkboxes(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let mut out = Vec::new();

    for checkbox in page.elements().filter(|n| n.is_checkbox()) {
        let resolved = match associate_label(page, &checkbox) {
            Some((pattern, label)) => {
                let text = label_text(&label, &config.markers);
                Resolved::suffixed(
                    ident(config, &text, false),
                    pattern.xpath(&literal(&text)),
                    pattern_priority(pattern),
                )
            }
            None => checkbox
                .id()
                .filter(|id| session.ids.is_descriptive(id) && page.is_unique("input", "id", id))
                .and_then(|id| {
                    Resolved::suffixed(
                        ident(config, id, true),
                        format!("//input[@type='checkbox' and @id={}]", literal(id)),
                        priority::UNIQUE_ID,
                    )
                }),
        };

        let Some(found) = resolved else {
            debug!(id = checkbox.id().unwrap_or_default(), "checkbox has no usable label");
            continue;
        };

        if let Some(candidate) = session.propose(found.name, found.xpath, found.priority, Extractor::Checkbox) {
            out.push(candidate);
        }
    }

    out
}

fn pattern_priority(pattern: LabelPattern) -> u8 {
    match pattern {
        LabelPattern::LinkedByFor => priority::UNIQUE_NAME,
        LabelPattern::Parent => priority::ID_WITH_PLACEHOLDER,
        LabelPattern::FollowingSibling | LabelPattern::PrecedingSibling => priority::LABEL,
    }
}
