use tracing::debug;

use crate::dom::page::{Node, Page};
use crate::extract::common::{ident, is_heading};
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession};
use crate::locator::naming::with_suffix;
use crate::locator::xpath::{IdHeuristics, by_attr, class_predicate, nth};

// Table rungs: id, class, generated id, position.
const TABLE_BY_ID: u8 = 1;
const TABLE_BY_CLASS: u8 = 2;
const TABLE_BY_GENERATED_ID: u8 = 3;
const TABLE_BY_POSITION: u8 = 4;

/// Every `<table>`, plus `_THEAD` / `_TBODY` children when present.
///
/// The base name comes from the nearest heading between the previous table
/// and this one, else a descriptive id, else `TABLE_<n>`.
pub fn extract_tables(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let ids = session.ids;
    let tables = page.by_tag("table");
    let mut out = Vec::new();

    let mut heading: Option<String> = None;
    let mut index = 0;

    for node in page.elements() {
        if is_heading(&node) {
            let text = node.text();
            if !text.is_empty() {
                heading = Some(text);
            }
            continue;
        }
        if node.tag() != "table" {
            continue;
        }

        index += 1;
        let preceding = heading.take();

        let from_heading = preceding
            .map(|h| ident(config, &h, false))
            .filter(|b| !b.is_empty());
        let from_id = node
            .id()
            .filter(|id| ids.is_descriptive(id))
            .map(|id| ident(config, id, true))
            .filter(|b| !b.is_empty());
        let name = match from_heading.or(from_id) {
            Some(base) => with_suffix(&base, "_TABLE"),
            None => format!("TABLE_{}", index),
        };

        let (xpath, strength) = locate_table(
            page,
            &tables,
            &node,
            index,
            ids,
            &config.markers.generic_table_classes,
        );

        let Some(table) = session.propose(name.clone(), xpath.clone(), strength, Extractor::Table) else {
            debug!(%name, "table name already taken");
            continue;
        };
        out.push(table);

        for section in ["thead", "tbody"] {
            if own_section(&node, section).is_none() {
                continue;
            }
            let child_name = format!("{}_{}", name, section.to_ascii_uppercase());
            let child_xpath = format!("{}/{}", xpath, section);
            if let Some(child) = session.propose(child_name, child_xpath, strength, Extractor::Table) {
                out.push(child);
            }
        }
    }

    out
}

fn locate_table(
    page: &Page,
    tables: &[Node<'_>],
    table: &Node<'_>,
    index: usize,
    ids: &IdHeuristics,
    generic_classes: &[String],
) -> (String, u8) {
    let unique_id = table.id().filter(|id| page.is_unique("table", "id", id));

    if let Some(id) = unique_id.filter(|id| ids.is_descriptive(id)) {
        return (by_attr("table", "id", id), TABLE_BY_ID);
    }

    let significant = table.classes().find(|class| {
        !generic_classes.iter().any(|g| g.as_str() == *class)
            && ids.is_descriptive(class)
            && tables
                .iter()
                .filter(|t| t.attr("class").is_some_and(|c| c.contains(class)))
                .count()
                == 1
    });
    if let Some(class) = significant {
        return (format!("//table[{}]", class_predicate(class)), TABLE_BY_CLASS);
    }

    if let Some(id) = unique_id {
        return (by_attr("table", "id", id), TABLE_BY_GENERATED_ID);
    }

    (nth("//table", index), TABLE_BY_POSITION)
}

/// Direct `<thead>` / `<tbody>` child of this table.
fn own_section<'a>(table: &Node<'a>, tag: &str) -> Option<Node<'a>> {
    table.children().find(|c| c.tag() == tag)
}
