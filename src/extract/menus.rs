use crate::dom::page::{Node, Page};
use crate::extract::common::{ident, is_icon, text_anchored};
use crate::locator::locator_config::MarkerConfig;
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession, priority};
use crate::locator::naming::with_suffix;
use crate::locator::xpath::{TextMatch, by_attr, class_predicate, literal};

const MENU_SUFFIX: &str = "_MENU";

// ============================================================================
// Sidebar / navigation links
// ============================================================================

/// `<a>` elements following sidebar or nav conventions, always suffixed `_MENU`.
///
/// Name source: descriptive id, unique title, link text (the nested
/// hide-menu span when there is one), then a generated id.
pub fn extract_menu_links(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let markers = &config.markers;

    let links: Vec<Node<'_>> = page
        .by_tag("a")
        .into_iter()
        .filter(|a| is_menu_link(a, markers))
        .collect();
    let anchors = page.by_tag("a");

    let mut out = Vec::new();

    for link in &links {
        let id = link.id();
        let title = link.attr_trimmed("title");

        let resolved = if let Some(id) = id.filter(|id| {
            session.ids.is_descriptive(id) && page.is_unique("a", "id", id)
        }) {
            Some((ident(config, id, true), by_attr("a", "id", id), priority::UNIQUE_ID))
        } else if let Some(title) = title.filter(|t| page.is_unique("a", "title", t)) {
            Some((ident(config, title, false), by_attr("a", "title", title), priority::UNIQUE_NAME))
        } else if let Some(span) = hide_menu_span(link, markers) {
            let text = span.text();
            let xpath = format!(
                "//a[.//span[{}][normalize-space()={}]]",
                class_predicate(&markers.hide_menu_class),
                literal(&text)
            );
            Some((ident(config, &text, false), xpath, priority::ID_WITH_PLACEHOLDER))
        } else if let Some(text) = link_text(link, markers) {
            let (xpath, strength) = text_anchored("//a", &anchors, link, &text);
            Some((ident(config, text.text(), false), xpath, strength))
        } else {
            id.filter(|id| page.is_unique("a", "id", id))
                .map(|id| (ident(config, id, true), by_attr("a", "id", id), priority::FALLBACK_ID))
        };

        let Some((base, xpath, strength)) = resolved else {
            continue;
        };
        if base.is_empty() {
            continue;
        }

        let name = with_suffix(&base, MENU_SUFFIX);
        if let Some(candidate) = session.propose(name, xpath, strength, Extractor::MenuLink) {
            out.push(candidate);
        }
    }

    out
}

fn is_menu_link(link: &Node<'_>, markers: &MarkerConfig) -> bool {
    if inside_library_menu(link, markers) {
        return false;
    }
    link.has_any_class(&markers.menu_link_classes)
        || link
            .ancestors()
            .any(|a| a.tag() == "nav" || a.has_any_class(&markers.menu_container_classes))
}

fn inside_library_menu(node: &Node<'_>, markers: &MarkerConfig) -> bool {
    node.ancestors().any(|a| {
        a.has_class(&markers.library_menu_item_class)
            || a.has_class(&markers.library_submenu_title_class)
    })
}

fn hide_menu_span<'a>(link: &Node<'a>, markers: &MarkerConfig) -> Option<Node<'a>> {
    link.descendants()
        .find(|d| d.tag() == "span" && d.has_class(&markers.hide_menu_class) && !d.text().is_empty())
}

/// Visible link text with icon glyphs left out, matched against the full text.
fn link_text(link: &Node<'_>, markers: &MarkerConfig) -> Option<TextMatch> {
    TextMatch::new(&link.text_excluding(|n| is_icon(&n, markers)), &link.text())
}

// ============================================================================
// Component-library menu items and submenu titles
// ============================================================================

/// Library menu items (`li` carrying the item class, optionally with a router
/// link) and submenu titles, always suffixed `_MENU`.
pub fn extract_library_menu_items(
    page: &Page,
    session: &mut ParseSession<'_>,
) -> Vec<LocatorCandidate> {
    let config = session.config;
    let markers = &config.markers;
    let item_class = markers.library_menu_item_class.as_str();
    let title_class = markers.library_submenu_title_class.as_str();

    let mut out = Vec::new();

    for node in page.elements() {
        let resolved = if node.tag() == "li" && node.has_class(item_class) {
            menu_item(page, &node, session, item_class)
        } else if node.has_class(title_class) {
            submenu_title(page, &node, session, title_class)
        } else {
            None
        };

        let Some((base, xpath, strength)) = resolved else {
            continue;
        };
        if base.is_empty() {
            continue;
        }

        let name = with_suffix(&base, MENU_SUFFIX);
        if let Some(candidate) = session.propose(name, xpath, strength, Extractor::LibraryMenu) {
            out.push(candidate);
        }
    }

    out
}

fn menu_item(
    page: &Page,
    item: &Node<'_>,
    session: &ParseSession<'_>,
    item_class: &str,
) -> Option<(String, String, u8)> {
    let config = session.config;
    let markers = &config.markers;
    let text = item.text_excluding(|n| is_icon(&n, markers));

    let router = markers
        .router_link_attributes
        .iter()
        .find_map(|attr| item.attr_trimmed(attr).map(|value| (attr.as_str(), value)));

    if let Some((attr, value)) = router {
        let same = page
            .by_tag("li")
            .iter()
            .filter(|li| li.has_class(item_class) && li.attr_trimmed(attr) == Some(value))
            .count();
        if same == 1 {
            let base = if text.is_empty() {
                ident(config, value, true)
            } else {
                ident(config, &text, false)
            };
            let xpath = format!(
                "//li[{}][@{}={}]",
                class_predicate(item_class),
                attr,
                literal(value)
            );
            return Some((base, xpath, priority::UNIQUE_NAME));
        }
    }

    let text = TextMatch::new(&text, &item.text())?;
    let items: Vec<Node<'_>> = page
        .elements()
        .filter(|n| n.tag() == "li" && class_attr_contains(n, item_class))
        .collect();
    let (xpath, strength) = text_anchored(
        &format!("//li[{}]", class_predicate(item_class)),
        &items,
        item,
        &text,
    );
    Some((ident(config, text.text(), false), xpath, strength))
}

fn submenu_title(
    page: &Page,
    title: &Node<'_>,
    session: &ParseSession<'_>,
    title_class: &str,
) -> Option<(String, String, u8)> {
    let config = session.config;
    let visible = title.text_excluding(|n| is_icon(&n, &config.markers));
    let text = TextMatch::new(&visible, &title.text())?;
    let titles: Vec<Node<'_>> = page
        .elements()
        .filter(|n| n.tag() == title.tag() && class_attr_contains(n, title_class))
        .collect();
    let (xpath, strength) = text_anchored(
        &format!("//{}[{}]", title.tag(), class_predicate(title_class)),
        &titles,
        title,
        &text,
    );
    Some((ident(config, text.text(), false), xpath, strength))
}

/// Mirrors `contains(@class,'..')`, which also matches longer class names.
fn class_attr_contains(node: &Node<'_>, class: &str) -> bool {
    node.attr("class").is_some_and(|c| c.contains(class))
}
