use tracing::debug;

use crate::dom::page::{Node, Page};
use crate::extract::common::{Resolved, ident, is_marked, marked_step};
use crate::locator::locator_config::MarkerConfig;
use crate::locator::locator_model::{Extractor, LocatorCandidate, ParseSession, priority};
use crate::locator::xpath::{by_text, literal, nth};

const FILE_INPUT: &str = "//input[@type='file']";
const INSTRUCTION_TAGS: [&str; 11] = [
    "label", "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "small", "strong",
];

/// File inputs inside upload sections, named after the section's instruction text.
pub fn extract_upload_fields(page: &Page, session: &mut ParseSession<'_>) -> Vec<LocatorCandidate> {
    let config = session.config;
    let markers = &config.markers;
    let all_file_inputs: Vec<Node<'_>> = page
        .by_tag("input")
        .into_iter()
        .filter(|n| n.input_type().as_deref() == Some("file"))
        .collect();

    let mut out = Vec::new();

    for (index, input) in all_file_inputs.iter().enumerate() {
        let Some(section) = upload_section(input, markers) else {
            continue;
        };

        let instruction = instruction_for(&section, input);
        let base = instruction
            .map(|(_, text)| ident(config, &text, false))
            .filter(|b| !b.is_empty())
            .or_else(|| input.id().map(|id| ident(config, id, true)))
            .unwrap_or_default();

        let (xpath, strength) = if let Some(id) = input.id().filter(|id| page.is_unique("input", "id", id)) {
            (
                format!("//input[@type='file' and @id={}]", literal(id)),
                priority::UNIQUE_ID,
            )
        } else if let Some(name) = input
            .attr_trimmed("name")
            .filter(|name| page.is_unique("input", "name", name))
        {
            (
                format!("//input[@type='file' and @name={}]", literal(name)),
                priority::UNIQUE_NAME,
            )
        } else if let Some((tag, text)) = instruction_for(&section, input) {
            (
                format!(
                    "//{}[.{}]{}",
                    marked_step(&section, &markers.upload_section_classes),
                    by_text(&tag, &text),
                    FILE_INPUT
                ),
                priority::LABEL,
            )
        } else {
            (nth(FILE_INPUT, index + 1), priority::FALLBACK_ID)
        };

        let Some(found) = Resolved::suffixed(base, xpath, strength) else {
            debug!(index, "upload input has no usable name");
            continue;
        };

        if let Some(candidate) = session.propose(found.name, found.xpath, found.priority, Extractor::Upload) {
            out.push(candidate);
        }
    }

    out
}

fn upload_section<'a>(input: &Node<'a>, markers: &MarkerConfig) -> Option<Node<'a>> {
    input.closest(|a| is_marked(a, &markers.upload_section_classes))
}

/// First text-bearing element in the section that isn't the input's own wrapper.
fn instruction_for<'a>(section: &Node<'a>, input: &Node<'a>) -> Option<(String, String)> {
    section
        .descendants()
        .filter(|d| INSTRUCTION_TAGS.contains(&d.tag()) && !d.contains(input))
        .map(|d| (d.tag().to_string(), d.text()))
        .find(|(_, text)| !text.is_empty())
}
