use scraper::{ElementRef, Html};

// ============================================================================
// Parsed document
// ============================================================================

/// A parsed HTML document.
///
/// Parsing is tolerant: fragments, unclosed tags and stray markup all produce
/// a tree. Extractors only see the `Page` / `Node` surface below.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Every element in document order.
    pub fn elements(&self) -> impl Iterator<Item = Node<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(Node)
    }

    pub fn by_tag(&self, tag: &str) -> Vec<Node<'_>> {
        self.elements().filter(|n| n.tag() == tag).collect()
    }

    /// Number of `<tag>` elements whose `attr` equals `value` exactly.
    pub fn count_with(&self, tag: &str, attr: &str, value: &str) -> usize {
        self.elements()
            .filter(|n| n.tag() == tag && n.attr(attr) == Some(value))
            .count()
    }

    pub fn is_unique(&self, tag: &str, attr: &str, value: &str) -> bool {
        self.count_with(tag, attr, value) == 1
    }
}

// ============================================================================
// Element handle
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn tag(&self) -> &'a str {
        self.0.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Attribute value with surrounding whitespace removed; blank counts as absent.
    pub fn attr_trimmed(&self, name: &str) -> Option<&'a str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn id(&self) -> Option<&'a str> {
        self.attr_trimmed("id")
    }

    pub fn classes(&self) -> impl Iterator<Item = &'a str> {
        self.0.value().classes()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn has_any_class(&self, classes: &[String]) -> bool {
        self.classes().any(|c| classes.iter().any(|wanted| wanted == c))
    }

    /// First class from `classes` this element carries, in table order.
    pub fn matching_class<'c>(&self, classes: &'c [String]) -> Option<&'c str> {
        classes
            .iter()
            .find(|wanted| self.has_class(wanted))
            .map(String::as_str)
    }

    pub fn tag_in(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| t == self.tag())
    }

    /// Text content, whitespace-normalized the way XPath `normalize-space()` does.
    pub fn text(&self) -> String {
        let raw: String = self.0.text().collect();
        normalize_space(&raw)
    }

    /// Text content ignoring any text that sits under an element matching `skip`.
    pub fn text_excluding(&self, skip: impl Fn(Node<'a>) -> bool) -> String {
        let own_id = (*self.0).id();
        let mut raw = String::new();

        for node in self.0.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .ancestors()
                .take_while(|a| a.id() != own_id)
                .filter_map(ElementRef::wrap)
                .any(|el| skip(Node(el)));
            if !hidden {
                raw.push_str(text);
            }
        }

        normalize_space(&raw)
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.0.parent().and_then(ElementRef::wrap).map(Node)
    }

    /// Element ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'a>> {
        self.0.ancestors().filter_map(ElementRef::wrap).map(Node)
    }

    pub fn closest(&self, pred: impl Fn(&Node<'a>) -> bool) -> Option<Node<'a>> {
        self.ancestors().find(|a| pred(a))
    }

    pub fn next_element(&self) -> Option<Node<'a>> {
        self.0.next_siblings().find_map(ElementRef::wrap).map(Node)
    }

    pub fn prev_element(&self) -> Option<Node<'a>> {
        self.0.prev_siblings().find_map(ElementRef::wrap).map(Node)
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> {
        self.0.children().filter_map(ElementRef::wrap).map(Node)
    }

    /// Element descendants in document order, excluding `self`.
    pub fn descendants(&self) -> impl Iterator<Item = Node<'a>> {
        self.0.descendants().skip(1).filter_map(ElementRef::wrap).map(Node)
    }

    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        self.descendants().filter(|n| n.tag() == tag).collect()
    }

    pub fn find(&self, tag: &str) -> Option<Node<'a>> {
        self.descendants().find(|n| n.tag() == tag)
    }

    pub fn same(&self, other: &Node<'a>) -> bool {
        (*self.0).id() == (*other.0).id()
    }

    /// True when `other` is a strict descendant of `self`.
    pub fn contains(&self, other: &Node<'a>) -> bool {
        other.ancestors().any(|a| a.same(self))
    }

    pub fn input_type(&self) -> Option<String> {
        self.attr_trimmed("type").map(str::to_ascii_lowercase)
    }

    pub fn is_checkbox(&self) -> bool {
        self.tag() == "input" && self.input_type().as_deref() == Some("checkbox")
    }
}

/// Collapse runs of XML whitespace into single spaces and trim.
///
/// Only space, tab, CR and LF count, so `&nbsp;` survives exactly as it
/// would inside a browser's `normalize-space()`.
pub fn normalize_space(raw: &str) -> String {
    raw.split([' ', '\t', '\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
