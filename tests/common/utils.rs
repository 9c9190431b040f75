use html_locators::dom::page::Page;
use html_locators::locator::locator_config::LocatorConfig;
use html_locators::locator::locator_model::{LocatorCandidate, ParseSession};
use html_locators::locator::xpath::IdHeuristics;

pub fn fixture_path(name: &str) -> std::path::PathBuf {
    let base = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    base.join("tests").join("fixtures").join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

/// Run one extractor over `html` with the built-in configuration.
pub fn extract_with(
    html: &str,
    extract: fn(&Page, &mut ParseSession<'_>) -> Vec<LocatorCandidate>,
) -> Vec<LocatorCandidate> {
    let config = LocatorConfig::default();
    let ids = IdHeuristics::new(&config.generated_id_prefixes).unwrap();
    let page = Page::parse(html);
    let mut session = ParseSession::new(&config, &ids);
    extract(&page, &mut session)
}

pub fn find<'a>(locators: &'a [LocatorCandidate], name: &str) -> &'a LocatorCandidate {
    locators
        .iter()
        .find(|l| l.variable_name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = locators.iter().map(|l| l.variable_name.as_str()).collect();
            panic!("no locator named {} in {:?}", name, names)
        })
}

pub fn names(locators: &[LocatorCandidate]) -> Vec<&str> {
    locators.iter().map(|l| l.variable_name.as_str()).collect()
}

/// Unique path under the system temp dir for one test's output.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("html-locators-{}-{}", std::process::id(), name))
}
