use regex::Regex;

// ============================================================================
// String literals
// ============================================================================

/// Quote `value` as an XPath 1.0 string literal.
///
/// XPath 1.0 has no escape sequences, so text holding both quote kinds is
/// spliced together with `concat()`.
pub fn literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }

    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{}'", part))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}

/// `//tag[@attr='value']`
pub fn by_attr(tag: &str, attr: &str, value: &str) -> String {
    format!("//{}[@{}={}]", tag, attr, literal(value))
}

/// `//tag[normalize-space()='text']`
pub fn by_text(tag: &str, text: &str) -> String {
    format!("//{}[normalize-space()={}]", tag, literal(text))
}

/// How an element is matched by its visible text.
///
/// `normalize-space()` reads icon glyph text too (`<mat-icon>save</mat-icon>`),
/// so once icons are stripped the predicate falls back to a substring test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    Contains(String),
}

impl TextMatch {
    /// `text` is the icon-free text, `raw` the full normalized text.
    /// `None` when `text` no longer occurs in `raw` and no predicate can
    /// select the element.
    pub fn new(text: &str, raw: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else if text == raw {
            Some(Self::Exact(text.to_string()))
        } else if raw.contains(text) {
            Some(Self::Contains(text.to_string()))
        } else {
            None
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Exact(text) | Self::Contains(text) => text,
        }
    }

    pub fn predicate(&self) -> String {
        match self {
            Self::Exact(text) => format!("normalize-space()={}", literal(text)),
            Self::Contains(text) => format!("contains(normalize-space(),{})", literal(text)),
        }
    }

    /// Whether the predicate selects an element whose normalized text is `raw`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Exact(text) => raw == text,
            Self::Contains(text) => raw.contains(text.as_str()),
        }
    }
}

/// `contains(@class,'token')`
pub fn class_predicate(class: &str) -> String {
    format!("contains(@class,{})", literal(class))
}

/// `(expr)[n]`, 1-based.
pub fn nth(expr: &str, index: usize) -> String {
    format!("({})[{}]", expr, index)
}

// ============================================================================
// Generated-id heuristics
// ============================================================================

/// Recognises ids that look machine-generated (`menu-3`, `item_12`,
/// `sidebar-sub-menu-4`) rather than chosen by a person.
#[derive(Debug)]
pub struct IdHeuristics {
    generated: Option<Regex>,
}

impl IdHeuristics {
    pub fn new(prefixes: &[String]) -> Result<Self, regex::Error> {
        if prefixes.is_empty() {
            return Ok(Self { generated: None });
        }
        let alternation = prefixes
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let generated = Regex::new(&format!(r"(?i)^(?:{})[-_]?\d+$", alternation))?;
        Ok(Self {
            generated: Some(generated),
        })
    }

    pub fn is_descriptive(&self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() || id.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        !self
            .generated
            .as_ref()
            .is_some_and(|re| re.is_match(id))
    }
}

// ============================================================================
// Step inspection
// ============================================================================

/// The final location step of an xpath split into its node test and the
/// predicate text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStep {
    pub tag: String,
    pub predicates: String,
}

/// Find the element an xpath ultimately selects.
///
/// `(//table)[2]/tbody` → `tbody`; `//label[...]/following-sibling::input[@type='checkbox'][1]`
/// → `input` with its predicates. Slashes inside predicates, parentheses and
/// string literals are not step boundaries.
pub fn target_step(xpath: &str) -> TargetStep {
    let step = last_step(xpath.trim());
    let step = step.trim();

    // `(inner)[n]` wraps a whole path; its target is the inner path's target.
    if let Some(inner) = strip_positional_group(step) {
        let mut target = target_step(inner);
        let tail = &step[inner.len() + 2..];
        target.predicates.push_str(tail);
        return target;
    }

    let without_axis = match step.find("::") {
        Some(pos) if !step[..pos].contains('[') => &step[pos + 2..],
        _ => step,
    };

    let split_at = without_axis.find('[').unwrap_or(without_axis.len());
    TargetStep {
        tag: without_axis[..split_at].trim().to_ascii_lowercase(),
        predicates: without_axis[split_at..].to_string(),
    }
}

fn last_step(xpath: &str) -> &str {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in xpath.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '[' | '(' => depth += 1,
                ']' | ')' => depth -= 1,
                '/' if depth == 0 => start = i + 1,
                _ => {}
            },
        }
    }

    &xpath[start..]
}

/// For `(inner)[n]` return `inner`.
fn strip_positional_group(step: &str) -> Option<&str> {
    if !step.starts_with('(') {
        return None;
    }

    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    for (i, c) in step.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return if c == ')' { Some(&step[1..i]) } else { None };
                    }
                }
                _ => {}
            },
        }
    }
    None
}
