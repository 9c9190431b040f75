use crate::checkbox::checkbox_model::LabelPattern;
use crate::dom::page::{Node, Page};

/// Find the `<label>` belonging to a checkbox.
///
/// Tried in order: `label[for=id]`, an enclosing label, the first following
/// sibling label, the first preceding sibling label. Sibling scans stop at
/// another checkbox so neighbouring boxes don't steal each other's labels.
pub fn associate_label<'a>(page: &'a Page, checkbox: &Node<'a>) -> Option<(LabelPattern, Node<'a>)> {
    if let Some(id) = checkbox.id() {
        let linked = page
            .by_tag("label")
            .into_iter()
            .find(|l| l.attr_trimmed("for") == Some(id));
        if let Some(label) = linked {
            return Some((LabelPattern::LinkedByFor, label));
        }
    }

    if let Some(label) = checkbox.closest(|a| a.tag() == "label") {
        return Some((LabelPattern::Parent, label));
    }

    if let Some(label) = sibling_label(checkbox, Node::next_element) {
        return Some((LabelPattern::FollowingSibling, label));
    }

    if let Some(label) = sibling_label(checkbox, Node::prev_element) {
        return Some((LabelPattern::PrecedingSibling, label));
    }

    None
}

fn sibling_label<'a>(
    start: &Node<'a>,
    step: fn(&Node<'a>) -> Option<Node<'a>>,
) -> Option<Node<'a>> {
    let mut current = step(start);
    while let Some(node) = current {
        if node.tag() == "label" {
            return Some(node);
        }
        if node.is_checkbox() {
            return None;
        }
        current = step(&node);
    }
    None
}
