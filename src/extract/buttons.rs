use std::collections::HashMap;

use tracing::debug;

use crate::dom::page::{Node, Page};
use crate::extract::common::{ident, is_icon, text_anchored};
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession, priority};
use crate::locator::xpath::{TextMatch, by_attr, nth};

/// Positional match among same-title buttons.
const POSITIONAL_TITLE: u8 = priority::LABEL;

struct ButtonInfo {
    id: Option<String>,
    title: Option<String>,
    /// Visible text with icon markup removed.
    text: String,
    /// Full normalized text, as `normalize-space()` sees it.
    raw_text: String,
}

/// Every `<button>` on the page.
///
/// Names come from a descriptive id, else the title, else the visible text.
/// Icon-only buttons (one visible character, no title) are skipped even when
/// they carry an id. When two buttons produce the same name, the stronger
/// locator is kept.
pub fn extract_buttons(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let markers = &config.markers;

    let nodes = page.by_tag("button");
    let buttons: Vec<ButtonInfo> = nodes
        .iter()
        .map(|b| ButtonInfo {
            id: b.id().map(str::to_string),
            title: b.attr_trimmed("title").map(str::to_string),
            text: b.text_excluding(|n| is_icon(&n, markers)),
            raw_text: b.text(),
        })
        .collect();

    let mut best: Vec<LocatorCandidate> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for (index, button) in buttons.iter().enumerate() {
        let descriptive_id = button
            .id
            .as_deref()
            .filter(|id| session.ids.is_descriptive(id));
        let visible_chars = button.text.chars().count();

        if button.title.is_none() && visible_chars <= 1 {
            debug!(index, id = button.id.as_deref(), "skipping icon-only button");
            continue;
        }

        let name = if let Some(id) = descriptive_id {
            ident(config, id, true)
        } else if let Some(title) = &button.title {
            ident(config, title, false)
        } else {
            ident(config, &button.text, false)
        };
        if name.is_empty() {
            continue;
        }

        let (xpath, strength) = locate(page, &nodes, &buttons, index);
        let candidate = LocatorCandidate::new(name.clone(), xpath, strength, Extractor::Button);

        match by_name.get(&name) {
            Some(&slot) => {
                if candidate.priority < best[slot].priority {
                    best[slot] = candidate;
                }
            }
            None => {
                by_name.insert(name, best.len());
                best.push(candidate);
            }
        }
    }

    best.into_iter()
        .filter(|c| session.claim(&c.variable_name, Extractor::Button))
        .collect()
}

fn locate(page: &Page, nodes: &[Node<'_>], buttons: &[ButtonInfo], index: usize) -> (String, u8) {
    let button = &buttons[index];

    if let Some(id) = button.id.as_deref() {
        if page.is_unique("button", "id", id) {
            return (by_attr("button", "id", id), priority::UNIQUE_ID);
        }
    }

    if let Some(title) = button.title.as_deref() {
        let same: Vec<usize> = positions(buttons, |b| b.title.as_deref() == Some(title));
        let expr = by_attr("button", "title", title);
        return if same.len() == 1 {
            (expr, priority::UNIQUE_NAME)
        } else {
            (nth(&expr, rank_of(&same, index)), POSITIONAL_TITLE)
        };
    }

    match TextMatch::new(&button.text, &button.raw_text) {
        Some(text) => text_anchored("//button", nodes, &nodes[index], &text),
        None => (nth("//button", index + 1), priority::FALLBACK_ID),
    }
}

fn positions(buttons: &[ButtonInfo], pred: impl Fn(&ButtonInfo) -> bool) -> Vec<usize> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, b)| pred(b))
        .map(|(i, _)| i)
        .collect()
}

/// 1-based rank of `index` within `same`.
fn rank_of(same: &[usize], index: usize) -> usize {
    same.iter().position(|&i| i == index).map_or(1, |p| p + 1)
}
