use serde::{Deserialize, Serialize};

use crate::dom::page::normalize_space;
use crate::locator::xpath::literal;

/// Token substituted with a checkbox's label text at use time.
pub const PLACEHOLDER: &str = "::labelcheckbox::";

/// The placeholder as it appears inside templates, quoted as an XPath literal.
const QUOTED_PLACEHOLDER: &str = "'::labelcheckbox::'";

/// Checkbox markup convention detected on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxFramework {
    Standard,
    AntDesign,
    Material,
    PrimeNg,
}

impl CheckboxFramework {
    pub fn tag(&self) -> &'static str {
        match self {
            CheckboxFramework::Standard => "standard",
            CheckboxFramework::AntDesign => "ant_design",
            CheckboxFramework::Material => "material",
            CheckboxFramework::PrimeNg => "prime_ng",
        }
    }
}

/// How a plain HTML checkbox is tied to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPattern {
    /// `<label><input type="checkbox"> Text</label>`
    Parent,
    /// `<input type="checkbox"><label>Text</label>`
    FollowingSibling,
    /// `<label>Text</label><input type="checkbox">`
    PrecedingSibling,
    /// `<label for="x">Text</label> ... <input id="x">`
    LinkedByFor,
}

impl LabelPattern {
    /// Tie-break order when counting patterns.
    pub const PREFERENCE: [LabelPattern; 4] = [
        LabelPattern::Parent,
        LabelPattern::FollowingSibling,
        LabelPattern::PrecedingSibling,
        LabelPattern::LinkedByFor,
    ];

    /// Xpath reaching the checkbox from a label whose text is `text_literal`
    /// (an already quoted XPath string expression).
    pub fn xpath(&self, text_literal: &str) -> String {
        match self {
            LabelPattern::Parent => format!(
                "//label[normalize-space()={}]//input[@type='checkbox']",
                text_literal
            ),
            LabelPattern::FollowingSibling => format!(
                "//label[normalize-space()={}]/preceding-sibling::input[@type='checkbox'][1]",
                text_literal
            ),
            LabelPattern::PrecedingSibling => format!(
                "//label[normalize-space()={}]/following-sibling::input[@type='checkbox'][1]",
                text_literal
            ),
            LabelPattern::LinkedByFor => format!(
                "//input[@type='checkbox'][@id=//label[normalize-space()={}]/@for]",
                text_literal
            ),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LabelPattern::Parent => "Label wraps the checkbox",
            LabelPattern::FollowingSibling => "Label follows the checkbox",
            LabelPattern::PrecedingSibling => "Label precedes the checkbox",
            LabelPattern::LinkedByFor => "Label linked to the checkbox by for/id",
        }
    }
}

/// Parametrized checkbox xpath for the dominant convention on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxPatternResult {
    pub pattern: String,
    pub description: String,
    pub framework_tag: String,
    pub framework: CheckboxFramework,
    pub label_pattern: Option<LabelPattern>,
}

impl CheckboxPatternResult {
    pub fn standard(label_pattern: LabelPattern) -> Self {
        Self {
            pattern: label_pattern.xpath(QUOTED_PLACEHOLDER),
            description: format!("Standard HTML: {}", label_pattern.describe().to_lowercase()),
            framework_tag: CheckboxFramework::Standard.tag().to_string(),
            framework: CheckboxFramework::Standard,
            label_pattern: Some(label_pattern),
        }
    }

    /// Returned when the page has no checkboxes at all.
    pub fn no_checkboxes() -> Self {
        Self::standard(LabelPattern::PrecedingSibling)
    }

    pub fn library(framework: CheckboxFramework) -> Self {
        let (pattern, description) = match framework {
            CheckboxFramework::AntDesign => (
                format!(
                    "//label[contains(@class,'ant-checkbox-wrapper')][normalize-space()={}]//input[@type='checkbox']",
                    QUOTED_PLACEHOLDER
                ),
                "Ant Design checkbox wrapper label",
            ),
            CheckboxFramework::Material => (
                format!(
                    "//mat-checkbox[normalize-space()={}]//input[@type='checkbox']",
                    QUOTED_PLACEHOLDER
                ),
                "Angular Material mat-checkbox",
            ),
            CheckboxFramework::PrimeNg => (
                format!(
                    "//p-checkbox[.//label[normalize-space()={}]]//input[@type='checkbox']",
                    QUOTED_PLACEHOLDER
                ),
                "PrimeNG p-checkbox with label",
            ),
            CheckboxFramework::Standard => return Self::standard(LabelPattern::FollowingSibling),
        };

        Self {
            pattern,
            description: description.to_string(),
            framework_tag: framework.tag().to_string(),
            framework,
            label_pattern: None,
        }
    }

    /// Fill the placeholder with `label`, quoting it safely for XPath.
    pub fn render(&self, label: &str) -> String {
        self.pattern
            .replace(QUOTED_PLACEHOLDER, &literal(&normalize_space(label)))
    }
}
