use crate::dom::page::{Node, Page};
use crate::extract::common::{Resolved, ident, is_control_tag, label_by_text, label_text};
use crate::locator::locator_config::MarkerConfig;
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession, priority};

const VALUE_TAGS: [&str; 8] = ["span", "div", "p", "dd", "strong", "b", "small", "output"];

/// Read-only "label: value" pairs, anchored on the label text.
///
/// The xpath picks the label's next sibling, so the value itself can change
/// between runs. Table headers and labels bound to form controls are not
/// display fields.
pub fn extract_display_fields(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let markers = &config.markers;
    let mut out = Vec::new();

    for label in page.elements() {
        if !is_display_label(&label, markers) {
            continue;
        }

        let Some(value) = label.next_element() else {
            continue;
        };
        if !is_value_element(&value, markers) {
            continue;
        }

        let text = label_text(&label, markers);
        if text.is_empty() {
            continue;
        }

        let xpath = format!(
            "{}/following-sibling::{}[1]",
            label_by_text(&label, &text),
            value.tag()
        );
        let Some(found) = Resolved::suffixed(ident(config, &text, false), xpath, priority::LABEL) else {
            continue;
        };

        if let Some(candidate) = session.propose(found.name, found.xpath, found.priority, Extractor::Display) {
            out.push(candidate);
        }
    }

    out
}

fn is_display_label(node: &Node<'_>, markers: &MarkerConfig) -> bool {
    let label_like = matches!(node.tag(), "label" | "dt")
        || (matches!(node.tag(), "span" | "div" | "strong" | "b")
            && node.classes().any(|c| c == "label" || c.ends_with("-label")));
    if !label_like {
        return false;
    }

    if node.attr("for").is_some() {
        return false;
    }

    if node.descendants().any(|d| is_control_tag(&d, markers)) {
        return false;
    }

    !node
        .ancestors()
        .any(|a| matches!(a.tag(), "th" | "thead"))
}

fn is_value_element(node: &Node<'_>, markers: &MarkerConfig) -> bool {
    VALUE_TAGS.contains(&node.tag())
        && !node.has_class("label")
        && !node
            .descendants()
            .any(|d| is_control_tag(&d, markers) || matches!(d.tag(), "button" | "label"))
}
