use crate::dom::page::{Node, Page};
use crate::extract::common::ident;
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession, priority};
use crate::locator::naming::with_suffix;
use crate::locator::xpath::literal;

const FIRST_ROW: &str = "(//tbody)[1]/tr[1]";

/// Tooltip-carrying links and buttons in the first row of the first table body.
///
/// Row actions (edit, delete, view) repeat per row; the first row is enough to
/// drive them and keeps the locator stable as data changes.
pub fn extract_row_actions(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let markers = &config.markers;

    let Some(tbody) = page.by_tag("tbody").into_iter().next() else {
        return Vec::new();
    };
    let Some(row) = tbody.children().find(|c| c.tag() == "tr") else {
        return Vec::new();
    };

    let mut out = Vec::new();

    for action in row.descendants().filter(|d| matches!(d.tag(), "a" | "button")) {
        let Some((attr, tooltip)) = tooltip_of(&action, &markers.tooltip_attributes) else {
            continue;
        };

        let suffix = if action.tag() == "button" { "_BTN" } else { "_LINK" };
        let base = ident(config, tooltip, false);
        if base.is_empty() {
            continue;
        }

        let xpath = format!(
            "{}//{}[@{}={}]",
            FIRST_ROW,
            action.tag(),
            attr,
            literal(tooltip)
        );
        let name = with_suffix(&base, suffix);
        if let Some(candidate) =
            session.propose(name, xpath, priority::ID_WITH_PLACEHOLDER, Extractor::RowAction)
        {
            out.push(candidate);
        }
    }

    out
}

fn tooltip_of<'a>(node: &Node<'a>, attributes: &'a [String]) -> Option<(&'a str, &'a str)> {
    attributes
        .iter()
        .find_map(|attr| node.attr_trimmed(attr).map(|value| (attr.as_str(), value)))
}
