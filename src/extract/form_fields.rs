use tracing::debug;

use crate::dom::page::{Node, Page};
use crate::extract::common::{is_field_control, is_live_text_input, resolve_ladder};
use crate::locator::locator_config::MarkerConfig;
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession};

/// Text inputs, selects, textareas, custom selects and date pickers.
///
/// Every such control on the page is scanned; a form-group container only
/// supplies label text when the control has no closer label.
///
/// Checkbox, radio and file inputs belong to their own extractors. When a
/// custom select wraps a live text input carrying the same id, the input is
/// the locator and the wrapper is skipped.
pub fn extract_form_fields(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let markers = &config.markers;
    let mut out = Vec::new();

    for node in page.elements() {
        if !is_field_control(&node, markers) {
            continue;
        }

        if inside_date_picker(&node, markers) {
            continue;
        }

        if let Some(wrapper) = enclosing_custom_select(&node, markers) {
            let shares_id = node.id().is_some() && node.id() == wrapper.id();
            if !(shares_id && is_live_text_input(&node)) {
                continue;
            }
        }

        if node.tag_in(&markers.custom_select_tags) && wraps_live_input(&node) {
            debug!(
                id = node.id().unwrap_or_default(),
                "custom select defers to its inner text input"
            );
            continue;
        }

        let Some(found) = resolve_ladder(page, &node, session) else {
            debug!(tag = node.tag(), "form control has no usable name");
            continue;
        };

        if let Some(candidate) =
            session.propose(found.name, found.xpath, found.priority, Extractor::FormField)
        {
            out.push(candidate);
        }
    }

    out
}

fn inside_date_picker(node: &Node<'_>, markers: &MarkerConfig) -> bool {
    node.ancestors().any(|a| a.tag_in(&markers.date_picker_tags))
}

fn enclosing_custom_select<'a>(node: &Node<'a>, markers: &MarkerConfig) -> Option<Node<'a>> {
    node.closest(|a| a.tag_in(&markers.custom_select_tags))
}

fn wraps_live_input(wrapper: &Node<'_>) -> bool {
    let Some(id) = wrapper.id() else {
        return false;
    };
    wrapper
        .find_all("input")
        .iter()
        .any(|input| input.id() == Some(id) && is_live_text_input(input))
}
