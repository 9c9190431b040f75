use std::sync::LazyLock;

use regex::Regex;

use crate::locator::locator_config::ScriptRange;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("static regex"));
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-]+").expect("static regex"));
static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("static regex"));

/// Turn a label, id or title into an uppercase symbolic name.
///
/// `technical` marks code-like sources (id, name, binding attributes); those
/// are always uppercased. Human text is uppercased only when it contains a
/// Latin letter, so a label written purely in the locale script keeps its form.
/// An empty result means the text carried nothing usable.
pub fn make_identifier(raw: &str, technical: bool) -> String {
    make_identifier_in(raw, technical, &ScriptRange::default())
}

/// `make_identifier` with an explicit locale script.
pub fn make_identifier_in(raw: &str, technical: bool, script: &ScriptRange) -> String {
    let split = CAMEL_BOUNDARY.replace_all(raw, "${1}_${2}");

    let trimmed = split.trim_end_matches(|c: char| c == ':' || c == '*' || c.is_whitespace());

    let spaced: String = trimmed
        .chars()
        .map(|c| if matches!(c, '/' | '(' | ')') { ' ' } else { c })
        .collect();

    let cased = if technical || spaced.chars().any(|c| c.is_ascii_alphabetic()) {
        spaced.to_uppercase()
    } else {
        spaced
    };

    let kept: String = cased
        .chars()
        .filter(|&c| {
            c.is_ascii_alphanumeric()
                || script.contains(c)
                || c.is_whitespace()
                || c == '-'
                || c == '_'
        })
        .collect();

    let joined = SEPARATOR_RUN.replace_all(&kept, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&joined, "_");
    collapsed.trim_matches('_').to_string()
}

/// Append `suffix` unless the name already ends with it.
pub fn with_suffix(name: &str, suffix: &str) -> String {
    if suffix.is_empty() || name.ends_with(suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}
