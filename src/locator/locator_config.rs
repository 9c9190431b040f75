use serde::{Deserialize, Serialize};

use crate::checkbox::checkbox_model::CheckboxFramework;

// ============================================================================
// Engine configuration
// ============================================================================

/// Tunables for locator extraction.
///
/// The marker tables describe the widget libraries a project uses. Defaults
/// cover Bootstrap-style admin templates, Angular with ng-zorro (Ant Design),
/// Angular Material and PrimeNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    #[serde(default)]
    pub locale_script: ScriptRange,

    #[serde(default = "default_generated_id_prefixes")]
    pub generated_id_prefixes: Vec<String>,

    #[serde(default)]
    pub markers: MarkerConfig,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            locale_script: ScriptRange::default(),
            generated_id_prefixes: default_generated_id_prefixes(),
            markers: MarkerConfig::default(),
        }
    }
}

/// Inclusive range of non-Latin code points kept in identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
    pub start: char,
    pub end: char,
}

impl ScriptRange {
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }
}

impl Default for ScriptRange {
    /// Thai block.
    fn default() -> Self {
        Self {
            start: '\u{0E00}',
            end: '\u{0E7F}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_form_group_classes")]
    pub form_group_classes: Vec<String>,

    #[serde(default = "default_upload_section_classes")]
    pub upload_section_classes: Vec<String>,

    #[serde(default = "default_custom_select_tags")]
    pub custom_select_tags: Vec<String>,

    #[serde(default = "default_date_picker_tags")]
    pub date_picker_tags: Vec<String>,

    #[serde(default = "default_binding_attributes")]
    pub binding_attributes: Vec<String>,

    #[serde(default = "default_menu_link_classes")]
    pub menu_link_classes: Vec<String>,

    #[serde(default = "default_menu_container_classes")]
    pub menu_container_classes: Vec<String>,

    #[serde(default = "default_hide_menu_class")]
    pub hide_menu_class: String,

    #[serde(default = "default_library_menu_item_class")]
    pub library_menu_item_class: String,

    #[serde(default = "default_library_submenu_title_class")]
    pub library_submenu_title_class: String,

    #[serde(default = "default_router_link_attributes")]
    pub router_link_attributes: Vec<String>,

    #[serde(default = "default_tooltip_attributes")]
    pub tooltip_attributes: Vec<String>,

    #[serde(default = "default_icon_tags")]
    pub icon_tags: Vec<String>,

    #[serde(default = "default_icon_class_fragments")]
    pub icon_class_fragments: Vec<String>,

    #[serde(default = "default_generic_table_classes")]
    pub generic_table_classes: Vec<String>,

    /// Order is the tie-break preference when two frameworks score equally.
    #[serde(default = "default_checkbox_frameworks")]
    pub checkbox_frameworks: Vec<FrameworkMarkers>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            form_group_classes: default_form_group_classes(),
            upload_section_classes: default_upload_section_classes(),
            custom_select_tags: default_custom_select_tags(),
            date_picker_tags: default_date_picker_tags(),
            binding_attributes: default_binding_attributes(),
            menu_link_classes: default_menu_link_classes(),
            menu_container_classes: default_menu_container_classes(),
            hide_menu_class: default_hide_menu_class(),
            library_menu_item_class: default_library_menu_item_class(),
            library_submenu_title_class: default_library_submenu_title_class(),
            router_link_attributes: default_router_link_attributes(),
            tooltip_attributes: default_tooltip_attributes(),
            icon_tags: default_icon_tags(),
            icon_class_fragments: default_icon_class_fragments(),
            generic_table_classes: default_generic_table_classes(),
            checkbox_frameworks: default_checkbox_frameworks(),
        }
    }
}

/// Ancestor markers identifying one component library's checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkMarkers {
    pub framework: CheckboxFramework,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

// Serde default helpers
fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_generated_id_prefixes() -> Vec<String> {
    strings(&[
        "sidebar-sub-menu",
        "sub-menu",
        "submenu",
        "menu",
        "item",
        "nav",
        "tab",
        "row",
        "col",
        "cell",
        "btn",
        "button",
        "input",
        "field",
        "el",
        "elem",
        "element",
        "node",
        "link",
        "option",
        "panel",
        "section",
        "cdk-overlay",
        "mat-input",
        "mat-select",
        "mat-checkbox",
        "nz-select",
        "id",
    ])
}

fn default_form_group_classes() -> Vec<String> {
    strings(&["form-group", "ant-form-item", "mat-form-field", "form-field", "field"])
}

fn default_upload_section_classes() -> Vec<String> {
    strings(&["upload-section", "file-upload", "ant-upload", "upload-area"])
}

fn default_custom_select_tags() -> Vec<String> {
    strings(&["nz-select", "ng-select", "mat-select", "p-dropdown"])
}

fn default_date_picker_tags() -> Vec<String> {
    strings(&["nz-date-picker", "nz-range-picker", "p-calendar", "mat-date-range-input"])
}

fn default_binding_attributes() -> Vec<String> {
    strings(&["formcontrolname", "ng-model", "v-model"])
}

fn default_menu_link_classes() -> Vec<String> {
    strings(&["sidebar-link", "nav-link", "menu-link"])
}

fn default_menu_container_classes() -> Vec<String> {
    strings(&["sidebar-nav", "left-sidebar", "sidebar", "sidebar-menu"])
}

fn default_hide_menu_class() -> String {
    "hide-menu".to_string()
}

fn default_library_menu_item_class() -> String {
    "ant-menu-item".to_string()
}

fn default_library_submenu_title_class() -> String {
    "ant-menu-submenu-title".to_string()
}

fn default_router_link_attributes() -> Vec<String> {
    strings(&["routerlink", "ng-reflect-router-link"])
}

fn default_tooltip_attributes() -> Vec<String> {
    strings(&[
        "title",
        "nztooltiptitle",
        "mattooltip",
        "ptooltip",
        "data-bs-original-title",
        "data-original-title",
    ])
}

fn default_icon_tags() -> Vec<String> {
    strings(&["i", "svg", "mat-icon", "nz-icon"])
}

fn default_icon_class_fragments() -> Vec<String> {
    strings(&["anticon", "material-icons", "fa-", "bi-", "icon"])
}

fn default_generic_table_classes() -> Vec<String> {
    strings(&[
        "table",
        "table-striped",
        "table-bordered",
        "table-hover",
        "table-sm",
        "table-responsive",
        "table-condensed",
        "dataTable",
        "no-footer",
        "mat-table",
        "mat-mdc-table",
        "cdk-table",
    ])
}

fn default_checkbox_frameworks() -> Vec<FrameworkMarkers> {
    vec![
        FrameworkMarkers {
            framework: CheckboxFramework::AntDesign,
            tags: strings(&["nz-checkbox"]),
            classes: strings(&["ant-checkbox-wrapper", "ant-checkbox"]),
        },
        FrameworkMarkers {
            framework: CheckboxFramework::Material,
            tags: strings(&["mat-checkbox"]),
            classes: strings(&["mat-checkbox", "mat-mdc-checkbox"]),
        },
        FrameworkMarkers {
            framework: CheckboxFramework::PrimeNg,
            tags: strings(&["p-checkbox"]),
            classes: strings(&["p-checkbox"]),
        },
    ]
}
