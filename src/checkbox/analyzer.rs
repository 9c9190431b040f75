use std::collections::HashMap;

use tracing::debug;

use crate::checkbox::association::associate_label;
use crate::checkbox::checkbox_model::{CheckboxFramework, CheckboxPatternResult, LabelPattern};
use crate::dom::page::{Node, Page};
use crate::locator::locator_config::{FrameworkMarkers, MarkerConfig};

/// How far up the tree library markers are searched for.
const MAX_ANCESTOR_DEPTH: usize = 6;

/// Pick the checkbox convention that dominates a page and return its template.
///
/// Library conventions are scored by walking each checkbox's ancestors for
/// marker tags and classes; unmatched boxes count as standard HTML. On a tie
/// the earlier framework in the marker table wins, and standard HTML wins
/// only when it strictly outnumbers every library.
pub fn analyze_page(page: &Page, markers: &MarkerConfig) -> CheckboxPatternResult {
    let checkboxes: Vec<Node<'_>> = page.elements().filter(|n| n.is_checkbox()).collect();
    if checkboxes.is_empty() {
        return CheckboxPatternResult::no_checkboxes();
    }

    let mut library_counts: Vec<(CheckboxFramework, usize)> = markers
        .checkbox_frameworks
        .iter()
        .map(|fw| (fw.framework, 0))
        .collect();
    let mut standard: Vec<Node<'_>> = Vec::new();

    for checkbox in &checkboxes {
        match detect_framework(checkbox, &markers.checkbox_frameworks) {
            Some(framework) => {
                if let Some(entry) = library_counts.iter_mut().find(|(fw, _)| *fw == framework) {
                    entry.1 += 1;
                }
            }
            None => standard.push(*checkbox),
        }
    }

    debug!(?library_counts, standard = standard.len(), "checkbox framework scores");

    let mut best: Option<(CheckboxFramework, usize)> = None;
    for &(framework, count) in &library_counts {
        if count > 0 && best.is_none_or(|(_, top)| count > top) {
            best = Some((framework, count));
        }
    }

    match best {
        Some((framework, count)) if count >= standard.len() => CheckboxPatternResult::library(framework),
        _ => CheckboxPatternResult::standard(dominant_label_pattern(page, &standard)),
    }
}

/// First framework whose markers appear on the checkbox or a near ancestor.
pub fn detect_framework(
    checkbox: &Node<'_>,
    frameworks: &[FrameworkMarkers],
) -> Option<CheckboxFramework> {
    let lineage = std::iter::once(*checkbox).chain(checkbox.ancestors().take(MAX_ANCESTOR_DEPTH));
    for node in lineage {
        let hit = frameworks
            .iter()
            .find(|fw| node.tag_in(&fw.tags) || node.has_any_class(&fw.classes));
        if let Some(fw) = hit {
            return Some(fw.framework);
        }
    }
    None
}

/// Most common label association among standard checkboxes; label-follows
/// when none could be classified.
fn dominant_label_pattern(page: &Page, checkboxes: &[Node<'_>]) -> LabelPattern {
    let mut counts: HashMap<LabelPattern, usize> = HashMap::new();
    for checkbox in checkboxes {
        if let Some((pattern, _)) = associate_label(page, checkbox) {
            *counts.entry(pattern).or_default() += 1;
        }
    }

    let mut best = LabelPattern::FollowingSibling;
    let mut top = 0;
    for pattern in LabelPattern::PREFERENCE {
        let count = counts.get(&pattern).copied().unwrap_or(0);
        if count > top {
            best = pattern;
            top = count;
        }
    }
    best
}
