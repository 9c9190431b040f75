use crate::locator::locator_model::LocatorCandidate;

// ============================================================================
// Robot Framework variable block
// ============================================================================

pub const SECTION_HEADER: &str = "*** Variables ***";
pub const VARIABLE_PREFIX: &str = "LOCATOR_";

/// Minimum gap between the variable token and its value; Robot needs two spaces.
const COLUMN_GAP: usize = 4;

/// `${LOCATOR_<name>}`
pub fn variable_token(name: &str) -> String {
    format!("${{{}{}}}", VARIABLE_PREFIX, name)
}

/// Format locators as a variables section.
///
/// Produces output like:
/// ```text
/// *** Variables ***
/// # Source: login.html
/// # Total locators: 2
/// ${LOCATOR_USERNAME_INPUT}    //input[@id='username']
/// ${LOCATOR_LOGIN}             //button[@id='login']
/// ```
pub fn render_variables(locators: &[LocatorCandidate], source: &str) -> String {
    let mut out = String::new();

    out.push_str(SECTION_HEADER);
    out.push('\n');
    out.push_str(&format!("# Source: {}\n", source));
    out.push_str(&format!("# Total locators: {}\n", locators.len()));

    let tokens: Vec<String> = locators
        .iter()
        .map(|l| variable_token(&l.variable_name))
        .collect();
    let width = tokens.iter().map(|t| t.chars().count()).max().unwrap_or(0);

    for (token, locator) in tokens.iter().zip(locators) {
        let padding = width - token.chars().count() + COLUMN_GAP;
        out.push_str(token);
        out.push_str(&" ".repeat(padding));
        out.push_str(&locator.xpath);
        out.push('\n');
    }

    out
}
