use crate::dom::page::{Node, Page};
use crate::locator::locator_config::{LocatorConfig, MarkerConfig};
use crate::locator::locator_model::{ParseSession, priority};
use crate::locator::naming::{make_identifier_in, with_suffix};
use crate::locator::suffix::suffix_for;
use crate::locator::xpath::{TextMatch, by_attr, by_text, class_predicate, literal, nth};

/// Name, xpath and priority chosen for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub xpath: String,
    pub priority: u8,
}

impl Resolved {
    /// Build from a base identifier, appending the tag suffix of `xpath`.
    /// `None` when the identifier is empty.
    pub fn suffixed(base: String, xpath: String, priority: u8) -> Option<Self> {
        if base.is_empty() {
            return None;
        }
        let name = with_suffix(&base, suffix_for(&xpath));
        Some(Self {
            name,
            xpath,
            priority,
        })
    }
}

pub fn ident(config: &LocatorConfig, raw: &str, technical: bool) -> String {
    make_identifier_in(raw, technical, &config.locale_script)
}

// ============================================================================
// Text-anchored locators
// ============================================================================

/// Xpath selecting `target` out of `pool` by visible text.
///
/// `step` must select exactly the elements of `pool`, in document order.
/// Elements are counted with the same predicate the xpath carries; when it
/// selects more than one, the result is positional.
pub fn text_anchored<'a>(
    step: &str,
    pool: &[Node<'a>],
    target: &Node<'a>,
    text: &TextMatch,
) -> (String, u8) {
    let expr = format!("{}[{}]", step, text.predicate());
    let same: Vec<&Node<'a>> = pool.iter().filter(|n| text.matches(&n.text())).collect();
    if same.len() == 1 {
        (expr, priority::ID_WITH_PLACEHOLDER)
    } else {
        let rank = same.iter().position(|n| n.same(target)).map_or(1, |p| p + 1);
        (nth(&expr, rank), priority::LABEL)
    }
}

// ============================================================================
// Element predicates
// ============================================================================

const NON_FIELD_INPUT_TYPES: [&str; 8] = [
    "checkbox", "radio", "file", "hidden", "submit", "button", "reset", "image",
];

pub fn is_control_tag(node: &Node, markers: &MarkerConfig) -> bool {
    matches!(node.tag(), "input" | "select" | "textarea")
        || node.tag_in(&markers.custom_select_tags)
        || node.tag_in(&markers.date_picker_tags)
}

/// Text-like form controls: excludes checkbox, radio, file and button inputs.
pub fn is_field_control(node: &Node, markers: &MarkerConfig) -> bool {
    if node.tag() == "input" {
        let kind = node.input_type();
        return !kind
            .as_deref()
            .is_some_and(|t| NON_FIELD_INPUT_TYPES.contains(&t));
    }
    is_control_tag(node, markers)
}

/// An editable text input: not readonly, text-like type.
pub fn is_live_text_input(node: &Node) -> bool {
    node.tag() == "input"
        && node.attr("readonly").is_none()
        && matches!(node.input_type().as_deref(), None | Some("text") | Some("search"))
}

pub fn is_icon(node: &Node, markers: &MarkerConfig) -> bool {
    node.tag_in(&markers.icon_tags)
        || node.classes().any(|c| {
            markers
                .icon_class_fragments
                .iter()
                .any(|fragment| c.contains(fragment.as_str()))
        })
}

pub fn is_heading(node: &Node) -> bool {
    matches!(node.tag(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn is_label_like(node: &Node) -> bool {
    node.tag() == "label" || node.tag().ends_with("-label")
}

/// True when `node` is a container listed in `markers` either by class or by tag.
pub fn is_marked(node: &Node, names: &[String]) -> bool {
    node.has_any_class(names) || node.tag_in(names)
}

/// Predicate selecting a marked container in an xpath step, e.g.
/// `div[contains(@class,'form-group')]` or `nz-form-item`.
pub fn marked_step(node: &Node, names: &[String]) -> String {
    match node.matching_class(names) {
        Some(class) => format!("{}[{}]", node.tag(), class_predicate(class)),
        None => node.tag().to_string(),
    }
}

/// Text of a label, leaving out any control values nested in it.
pub fn label_text(label: &Node, markers: &MarkerConfig) -> String {
    label.text_excluding(|n| is_control_tag(&n, markers) || n.tag() == "option")
}

/// Step selecting `label` by the `text` read with [`label_text`].
pub fn label_by_text(label: &Node, text: &str) -> String {
    match TextMatch::new(text, &label.text()) {
        Some(text) => format!("//{}[{}]", label.tag(), text.predicate()),
        None => by_text(label.tag(), text),
    }
}

// ============================================================================
// Label association for text-like controls
// ============================================================================

/// Label text found for a control plus the xpath reaching the control from it.
#[derive(Debug, Clone)]
pub struct LabelAnchor {
    pub text: String,
    pub xpath: String,
}

/// Find the label describing `control`: `label[for=id]`, a wrapping label,
/// the form-group container's label, then a label directly before it.
pub fn label_anchor(page: &Page, control: &Node, markers: &MarkerConfig) -> Option<LabelAnchor> {
    let tag = control.tag();

    if let Some(id) = control.id() {
        let linked = page
            .by_tag("label")
            .into_iter()
            .find(|l| l.attr_trimmed("for") == Some(id));
        if let Some(label) = linked {
            let text = label_text(&label, markers);
            if !text.is_empty() {
                let xpath = format!("//{}[@id={}/@for]", tag, label_by_text(&label, &text));
                return Some(LabelAnchor { text, xpath });
            }
        }
    }

    if let Some(label) = control.closest(|a| a.tag() == "label") {
        let text = label_text(&label, markers);
        if !text.is_empty() {
            let xpath = format!(
                "//label[contains(normalize-space(),{})]//{}",
                literal(&text),
                tag
            );
            return Some(LabelAnchor { text, xpath });
        }
    }

    if let Some(group) = control.closest(|a| is_marked(a, &markers.form_group_classes)) {
        let label = group
            .descendants()
            .find(|d| is_label_like(d) && !d.contains(control) && !label_text(d, markers).is_empty());
        if let Some(label) = label {
            let text = label_text(&label, markers);
            let xpath = format!(
                "{}/ancestor::{}[1]//{}",
                label_by_text(&label, &text),
                marked_step(&group, &markers.form_group_classes),
                tag
            );
            return Some(LabelAnchor { text, xpath });
        }
    }

    if let Some(prev) = control.prev_element().filter(|p| p.tag() == "label") {
        let text = label_text(&prev, markers);
        if !text.is_empty() {
            let xpath = format!("{}/following-sibling::{}[1]", label_by_text(&prev, &text), tag);
            return Some(LabelAnchor { text, xpath });
        }
    }

    None
}

// ============================================================================
// Resolution ladder
// ============================================================================

/// Walk the id → name → id+placeholder → binding → label → fallback-id ladder
/// for one control. The first rung that yields a non-empty name wins and its
/// position is the priority.
pub fn resolve_ladder(page: &Page, node: &Node, session: &ParseSession<'_>) -> Option<Resolved> {
    let config = session.config;
    let markers = &config.markers;
    let tag = node.tag();
    let id = node.id();

    if let Some(id) = id {
        if session.ids.is_descriptive(id) && page.is_unique(tag, "id", id) {
            let found = Resolved::suffixed(
                ident(config, id, true),
                by_attr(tag, "id", id),
                priority::UNIQUE_ID,
            );
            if found.is_some() {
                return found;
            }
        }
    }

    if let Some(name) = node.attr_trimmed("name") {
        if page.is_unique(tag, "name", name) {
            let found = Resolved::suffixed(
                ident(config, name, true),
                by_attr(tag, "name", name),
                priority::UNIQUE_NAME,
            );
            if found.is_some() {
                return found;
            }
        }
    }

    if let (Some(id), Some(placeholder)) = (id, node.attr_trimmed("placeholder")) {
        let both = page
            .elements()
            .filter(|n| {
                n.tag() == tag && n.id() == Some(id) && n.attr_trimmed("placeholder") == Some(placeholder)
            })
            .count();
        if !page.is_unique(tag, "id", id) && both == 1 {
            let mut base = ident(config, placeholder, false);
            if base.is_empty() {
                base = ident(config, id, true);
            }
            let xpath = format!(
                "//{}[@id={} and @placeholder={}]",
                tag,
                literal(id),
                literal(placeholder)
            );
            let found = Resolved::suffixed(base, xpath, priority::ID_WITH_PLACEHOLDER);
            if found.is_some() {
                return found;
            }
        }
    }

    for attr in &markers.binding_attributes {
        if let Some(binding) = node.attr_trimmed(attr) {
            let found = Resolved::suffixed(
                ident(config, binding, true),
                by_attr(tag, attr, binding),
                priority::BINDING,
            );
            if found.is_some() {
                return found;
            }
        }
    }

    if let Some(anchor) = label_anchor(page, node, markers) {
        let found = Resolved::suffixed(ident(config, &anchor.text, false), anchor.xpath, priority::LABEL);
        if found.is_some() {
            return found;
        }
    }

    if let Some(id) = id {
        if page.is_unique(tag, "id", id) {
            return Resolved::suffixed(
                ident(config, id, true),
                by_attr(tag, "id", id),
                priority::FALLBACK_ID,
            );
        }
    }

    None
}
