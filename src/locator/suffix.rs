use crate::locator::xpath::{TargetStep, target_step};

/// Suffixes in rule order; the index doubles as tie-break rank.
pub const SUFFIX_ORDER: [&str; 16] = [
    "_BTN",
    "_CHECKBOX",
    "_RADIO",
    "_FILE",
    "_INPUT",
    "_SELECT",
    "_DATE",
    "_TEXTAREA",
    "_LINK",
    "_TABLE",
    "_THEAD",
    "_TBODY",
    "_LABEL",
    "_SPAN",
    "_DIV",
    "_TEXT",
];

/// Tag fragments of date widgets (`nz-date-picker`, `p-calendar`,
/// `mat-date-range-input`, `mat-datepicker`).
const DATE_MARKERS: [&str; 5] = [
    "date-picker",
    "datepicker",
    "range-picker",
    "date-range",
    "calendar",
];

/// Semantic suffix for the element an xpath targets; empty when unknown.
///
/// Rules run most specific first: a checkbox `<input>` is `_CHECKBOX`, never
/// the generic `_INPUT`.
pub fn suffix_for(xpath: &str) -> &'static str {
    let step = target_step(xpath);
    let tag = step.tag.as_str();

    if is_button(&step) {
        return "_BTN";
    }

    if tag == "input" {
        return if has_type(&step, "checkbox") {
            "_CHECKBOX"
        } else if has_type(&step, "radio") {
            "_RADIO"
        } else if has_type(&step, "file") {
            "_FILE"
        } else {
            "_INPUT"
        };
    }

    if tag.contains("select") || tag.contains("dropdown") {
        return "_SELECT";
    }

    if DATE_MARKERS.iter().any(|marker| tag.contains(marker)) {
        return "_DATE";
    }

    match tag {
        "textarea" => "_TEXTAREA",
        "a" => "_LINK",
        "table" => "_TABLE",
        "thead" => "_THEAD",
        "tbody" => "_TBODY",
        "label" => "_LABEL",
        "span" => "_SPAN",
        "div" => "_DIV",
        "p" => "_TEXT",
        _ => "",
    }
}

/// Position of `suffix` in `SUFFIX_ORDER`; unknown suffixes rank last.
pub fn suffix_rank(suffix: &str) -> usize {
    SUFFIX_ORDER
        .iter()
        .position(|s| *s == suffix)
        .unwrap_or(SUFFIX_ORDER.len())
}

fn is_button(step: &TargetStep) -> bool {
    if step.tag == "button" {
        return true;
    }
    if step.tag == "input"
        && ["submit", "button", "reset"]
            .iter()
            .any(|t| has_type(step, t))
    {
        return true;
    }
    step.predicates.contains("@role='button'") || step.predicates.contains("@role=\"button\"")
}

fn has_type(step: &TargetStep, value: &str) -> bool {
    step.predicates.contains(&format!("@type='{}'", value))
        || step.predicates.contains(&format!("@type=\"{}\"", value))
}
