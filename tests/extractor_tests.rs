use html_locators::dom::page::Page;
use html_locators::extract::buttons::extract_buttons;
use html_locators::extract::checkboxes::extract_checkboxes;
use html_locators::extract::common::{label_by_text, label_text};
use html_locators::extract::display::extract_display_fields;
use html_locators::extract::form_fields::extract_form_fields;
use html_locators::extract::menus::{extract_library_menu_items, extract_menu_links};
use html_locators::extract::row_actions::extract_row_actions;
use html_locators::extract::tables::extract_tables;
use html_locators::extract::upload::extract_upload_fields;
use html_locators::locator::locator_config::MarkerConfig;
use html_locators::locator::locator_model::Extractor;

use crate::common::utils::{extract_with, find, names};

mod common;

// ============================================================================
// Form fields
// ============================================================================

#[test]
fn unique_descriptive_id_beats_name() {
    let found = extract_with(r#"<input id="username" name="username">"#, extract_form_fields);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].variable_name, "USERNAME_INPUT");
    assert_eq!(found[0].xpath, "//input[@id='username']");
    assert_eq!(found[0].priority, 1);
    assert_eq!(found[0].source, Extractor::FormField);
}

#[test]
fn generated_id_falls_back_to_unique_name() {
    let found = extract_with(r#"<input id="field-1" name="email">"#, extract_form_fields);
    let email = find(&found, "EMAIL_INPUT");
    assert_eq!(email.xpath, "//input[@name='email']");
    assert_eq!(email.priority, 2);
}

#[test]
fn shared_id_is_disambiguated_by_placeholder() {
    let html = r#"
        <input id="search" placeholder="Search users">
        <input id="search" placeholder="Search orders">
    "#;
    let found = extract_with(html, extract_form_fields);

    let users = find(&found, "SEARCH_USERS_INPUT");
    assert_eq!(users.xpath, "//input[@id='search' and @placeholder='Search users']");
    assert_eq!(users.priority, 3);
    assert!(found.iter().any(|l| l.variable_name == "SEARCH_ORDERS_INPUT"));
}

#[test]
fn binding_attribute_names_the_field() {
    let found = extract_with(r#"<input formControlName="firstName">"#, extract_form_fields);
    let first = find(&found, "FIRST_NAME_INPUT");
    assert_eq!(first.xpath, "//input[@formcontrolname='firstName']");
    assert_eq!(first.priority, 4);
}

#[test]
fn label_linked_by_for_anchors_the_xpath() {
    let html = r#"<label for="input-7">Email address</label><input id="input-7" type="email">"#;
    let found = extract_with(html, extract_form_fields);
    let email = find(&found, "EMAIL_ADDRESS_INPUT");
    assert_eq!(
        email.xpath,
        "//input[@id=//label[normalize-space()='Email address']/@for]"
    );
    assert_eq!(email.priority, 5);
}

#[test]
fn wrapping_label_anchors_the_xpath() {
    let found = extract_with(r#"<label>Phone <input type="text"></label>"#, extract_form_fields);
    let phone = find(&found, "PHONE_INPUT");
    assert_eq!(phone.xpath, "//label[contains(normalize-space(),'Phone')]//input");
    assert_eq!(phone.priority, 5);
}

#[test]
fn form_group_label_reaches_nested_control() {
    let html = r#"
        <div class="form-group">
          <label>Address</label>
          <div class="control"><textarea></textarea></div>
        </div>
    "#;
    let found = extract_with(html, extract_form_fields);
    let address = find(&found, "ADDRESS_TEXTAREA");
    assert_eq!(
        address.xpath,
        "//label[normalize-space()='Address']/ancestor::div[contains(@class,'form-group')][1]//textarea"
    );
}

#[test]
fn preceding_label_anchors_sibling_control() {
    let found = extract_with(r#"<label>City</label><select><option>A</option></select>"#, extract_form_fields);
    let city = find(&found, "CITY_SELECT");
    assert_eq!(city.xpath, "//label[normalize-space()='City']/following-sibling::select[1]");
}

#[test]
fn generated_unique_id_is_last_resort() {
    let found = extract_with(r#"<input id="input-3">"#, extract_form_fields);
    let field = find(&found, "INPUT_3_INPUT");
    assert_eq!(field.xpath, "//input[@id='input-3']");
    assert_eq!(field.priority, 6);
}

#[test]
fn unnamed_and_non_field_inputs_are_skipped() {
    let html = r#"
        <input>
        <input type="hidden" name="csrf">
        <input type="checkbox" id="agree">
        <input type="radio" name="plan">
        <input type="file" id="avatar">
        <input type="submit" id="go">
    "#;
    let found = extract_with(html, extract_form_fields);
    assert!(found.is_empty(), "unexpected fields: {:?}", names(&found));
}

#[test]
fn custom_select_wrapping_live_input_yields_only_the_input() {
    let html = r#"<nz-select id="country"><input id="country" type="text"></nz-select>"#;
    let found = extract_with(html, extract_form_fields);
    assert_eq!(names(&found), vec!["COUNTRY_INPUT"]);
    assert_eq!(found[0].xpath, "//input[@id='country']");
}

#[test]
fn custom_select_without_live_input_is_a_select() {
    let html = r#"<nz-select formControlName="tier"><input readonly id="tier-search"></nz-select>"#;
    let found = extract_with(html, extract_form_fields);
    assert_eq!(names(&found), vec!["TIER_SELECT"]);
    assert_eq!(found[0].xpath, "//nz-select[@formcontrolname='tier']");
}

#[test]
fn date_picker_inner_input_is_ignored() {
    let html = r#"<nz-date-picker formControlName="startDate"><input placeholder="Select date"></nz-date-picker>"#;
    let found = extract_with(html, extract_form_fields);
    assert_eq!(names(&found), vec!["START_DATE"]);
    assert_eq!(found[0].xpath, "//nz-date-picker[@formcontrolname='startDate']");
}

#[test]
fn repeated_name_within_form_fields_is_skipped() {
    let html = r#"
        <label>Note <input type="text"></label>
        <label>Note <input type="text"></label>
    "#;
    let found = extract_with(html, extract_form_fields);
    assert_eq!(names(&found), vec!["NOTE_INPUT"]);
}

// ============================================================================
// Upload fields
// ============================================================================

#[test]
fn upload_named_from_instruction_text() {
    let html = r#"<div class="upload-section"><p>Upload ID card</p><input type="file" id="file-1"></div>"#;
    let found = extract_with(html, extract_upload_fields);
    let upload = find(&found, "UPLOAD_ID_CARD_FILE");
    assert_eq!(upload.xpath, "//input[@type='file' and @id='file-1']");
    assert_eq!(upload.priority, 1);
    assert_eq!(upload.source, Extractor::Upload);
}

#[test]
fn upload_without_id_is_anchored_on_section_text() {
    let html = r#"<div class="upload-section"><p>Attach resume</p><input type="file"></div>"#;
    let found = extract_with(html, extract_upload_fields);
    let upload = find(&found, "ATTACH_RESUME_FILE");
    assert_eq!(
        upload.xpath,
        "//div[contains(@class,'upload-section')][.//p[normalize-space()='Attach resume']]//input[@type='file']"
    );
    assert_eq!(upload.priority, 5);
}

#[test]
fn upload_without_text_uses_id() {
    let html = r#"<div class="file-upload"><input type="file" id="contract"></div>"#;
    let found = extract_with(html, extract_upload_fields);
    assert_eq!(names(&found), vec!["CONTRACT_FILE"]);
}

#[test]
fn file_input_outside_upload_section_is_ignored() {
    let found = extract_with(r#"<div><input type="file" id="doc"></div>"#, extract_upload_fields);
    assert!(found.is_empty());
}

// ============================================================================
// Display fields
// ============================================================================

#[test]
fn label_value_pair_anchors_on_label() {
    let html = r#"<div><span class="label">Status</span><span>Active</span></div>"#;
    let found = extract_with(html, extract_display_fields);
    let status = find(&found, "STATUS_SPAN");
    assert_eq!(
        status.xpath,
        "//span[normalize-space()='Status']/following-sibling::span[1]"
    );
    assert_eq!(status.priority, 5);
}

#[test]
fn definition_list_pairs_are_display_fields() {
    let found = extract_with("<dl><dt>Created</dt><dd>2024-01-01</dd></dl>", extract_display_fields);
    let created = find(&found, "CREATED");
    assert_eq!(created.xpath, "//dt[normalize-space()='Created']/following-sibling::dd[1]");
}

#[test]
fn display_excludes_table_headers_and_form_labels() {
    let html = r#"
        <table><thead><tr><th><span class="label">Name</span><span>x</span></th></tr></thead></table>
        <label for="email">Email</label><span>hint</span>
        <label>City</label><select></select>
    "#;
    let found = extract_with(html, extract_display_fields);
    assert!(found.is_empty(), "unexpected display fields: {:?}", names(&found));
}

#[test]
fn label_wrapping_a_select_is_matched_without_option_text() {
    let page = Page::parse(r#"<label>Unit <select><option>kg</option></select></label>"#);
    let label = page.by_tag("label")[0];
    let text = label_text(&label, &MarkerConfig::default());
    assert_eq!(text, "Unit");
    assert_eq!(
        label_by_text(&label, &text),
        "//label[contains(normalize-space(),'Unit')]"
    );
}

// ============================================================================
// Buttons
// ============================================================================

#[test]
fn generated_button_id_still_gives_best_xpath() {
    let found = extract_with(r#"<button id="btn1">Save</button>"#, extract_buttons);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].variable_name, "SAVE");
    assert_eq!(found[0].xpath, "//button[@id='btn1']");
    assert_eq!(found[0].priority, 1);
}

#[test]
fn descriptive_button_id_names_the_button() {
    let found = extract_with(r#"<button id="submitOrder">Go</button>"#, extract_buttons);
    assert_eq!(names(&found), vec!["SUBMIT_ORDER"]);
}

#[test]
fn title_names_icon_button() {
    let html = r#"<button title="Delete item"><i class="fa fa-trash"></i></button>"#;
    let found = extract_with(html, extract_buttons);
    let delete = find(&found, "DELETE_ITEM");
    assert_eq!(delete.xpath, "//button[@title='Delete item']");
    assert_eq!(delete.priority, 2);
}

#[test]
fn icon_only_buttons_are_skipped() {
    let html = r#"<button>+</button><button><i class="fa fa-times"></i></button><button><mat-icon>close</mat-icon></button>"#;
    let found = extract_with(html, extract_buttons);
    assert!(found.is_empty(), "unexpected buttons: {:?}", names(&found));
}

#[test]
fn icon_text_is_stripped_before_naming() {
    let found = extract_with("<button><mat-icon>add</mat-icon> Create</button>", extract_buttons);
    let create = find(&found, "CREATE");
    assert_eq!(create.xpath, "//button[contains(normalize-space(),'Create')]");
    assert_eq!(create.priority, 3);
}

#[test]
fn repeated_text_is_positional_and_collapsed() {
    let found = extract_with("<button>Edit</button><button>Edit</button>", extract_buttons);
    assert_eq!(names(&found), vec!["EDIT"]);
    assert_eq!(found[0].xpath, "(//button[normalize-space()='Edit'])[1]");
    assert_eq!(found[0].priority, 5);
}

#[test]
fn same_name_keeps_best_priority() {
    let html = r#"<button>Close</button><button title="Close">X</button>"#;
    let found = extract_with(html, extract_buttons);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].xpath, "//button[@title='Close']");
    assert_eq!(found[0].priority, 2);
}

#[test]
fn button_with_id_but_no_visible_text_is_icon_only() {
    let html = r#"<button id="closeDialog"><i class="fa fa-x"></i></button><button id="openMenu">+</button>"#;
    let found = extract_with(html, extract_buttons);
    assert!(found.is_empty(), "unexpected buttons: {:?}", names(&found));
}

#[test]
fn icon_stripped_text_counts_every_button_it_matches() {
    let html = "<button><mat-icon>save</mat-icon> Save</button><button>Save draft</button>";
    let found = extract_with(html, extract_buttons);

    let save = find(&found, "SAVE");
    assert_eq!(save.xpath, "(//button[contains(normalize-space(),'Save')])[1]");
    assert_eq!(save.priority, 5, "contains() also selects 'Save draft'");

    let draft = find(&found, "SAVE_DRAFT");
    assert_eq!(draft.xpath, "//button[normalize-space()='Save draft']");
    assert_eq!(draft.priority, 3);
}

#[test]
fn icon_stripped_text_ranks_within_matching_buttons() {
    let html = "<button>Save draft</button><button>Cancel</button><button><mat-icon>save</mat-icon> Save</button>";
    let found = extract_with(html, extract_buttons);
    assert_eq!(
        find(&found, "SAVE").xpath,
        "(//button[contains(normalize-space(),'Save')])[2]"
    );
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn heading_and_numbered_fallback_names() {
    let html = r#"
        <h2>Users</h2>
        <table><tr><td>a</td></tr></table>
        <table><tr><td>b</td></tr></table>
    "#;
    let found = extract_with(html, extract_tables);

    let users = find(&found, "USERS_TABLE");
    assert_eq!(users.xpath, "(//table)[1]");
    let second = find(&found, "TABLE_2");
    assert_eq!(second.xpath, "(//table)[2]");

    // The parser adds the implied <tbody>.
    let body = find(&found, "USERS_TABLE_TBODY");
    assert_eq!(body.xpath, "(//table)[1]/tbody");
}

#[test]
fn descriptive_id_names_and_locates_table() {
    let html = r#"
        <table id="orders">
          <thead><tr><th>No</th></tr></thead>
          <tbody><tr><td>1</td></tr></tbody>
        </table>
    "#;
    let found = extract_with(html, extract_tables);
    assert_eq!(
        names(&found),
        vec!["ORDERS_TABLE", "ORDERS_TABLE_THEAD", "ORDERS_TABLE_TBODY"]
    );
    assert_eq!(find(&found, "ORDERS_TABLE").xpath, "//table[@id='orders']");
    assert_eq!(find(&found, "ORDERS_TABLE_THEAD").xpath, "//table[@id='orders']/thead");
    assert!(found.iter().all(|t| t.priority == 1));
}

#[test]
fn significant_class_locates_table() {
    let html = r#"<table class="table table-striped invoice-list"><tr><td>1</td></tr></table>"#;
    let found = extract_with(html, extract_tables);
    let table = find(&found, "TABLE_1");
    assert_eq!(table.xpath, "//table[contains(@class,'invoice-list')]");
    assert_eq!(table.priority, 2);
}

#[test]
fn heading_belongs_to_one_table_only() {
    let html = r#"
        <h3>Recent orders</h3>
        <table id="tab-1"><tr><td>1</td></tr></table>
        <table><tr><td>2</td></tr></table>
    "#;
    let found = extract_with(html, extract_tables);
    let recent = find(&found, "RECENT_ORDERS_TABLE");
    assert_eq!(recent.xpath, "//table[@id='tab-1']");
    assert_eq!(recent.priority, 3);
    assert!(found.iter().any(|t| t.variable_name == "TABLE_2"));
}

// ============================================================================
// Row actions
// ============================================================================

#[test]
fn first_row_tooltip_actions() {
    let html = r#"
        <table><tbody>
          <tr><td>
            <button title="Edit"><i class="fa fa-pen"></i></button>
            <a href="/u/1" title="View">view</a>
            <button>Plain</button>
          </td></tr>
          <tr><td><button title="Delete">x</button></td></tr>
        </tbody></table>
    "#;
    let found = extract_with(html, extract_row_actions);
    assert_eq!(names(&found), vec!["EDIT_BTN", "VIEW_LINK"]);
    assert_eq!(found[0].xpath, "(//tbody)[1]/tr[1]//button[@title='Edit']");
    assert_eq!(found[1].xpath, "(//tbody)[1]/tr[1]//a[@title='View']");
    assert!(found.iter().all(|a| a.priority == 3));
}

#[test]
fn library_tooltip_attribute_counts() {
    let html = r#"<table><tr><td><button nzTooltipTitle="Approve"></button></td></tr></table>"#;
    let found = extract_with(html, extract_row_actions);
    let approve = find(&found, "APPROVE_BTN");
    assert_eq!(approve.xpath, "(//tbody)[1]/tr[1]//button[@nztooltiptitle='Approve']");
}

#[test]
fn no_table_body_means_no_row_actions() {
    assert!(extract_with("<div><button title='Edit'></button></div>", extract_row_actions).is_empty());
}

// ============================================================================
// Menus
// ============================================================================

#[test]
fn descriptive_link_id_names_menu() {
    let found = extract_with(
        r#"<nav><a id="dashboard-link" href="/">Dashboard</a></nav>"#,
        extract_menu_links,
    );
    let link = find(&found, "DASHBOARD_LINK_MENU");
    assert_eq!(link.xpath, "//a[@id='dashboard-link']");
    assert_eq!(link.priority, 1);
}

#[test]
fn hide_menu_span_beats_generated_id() {
    let html = r#"
        <ul class="sidebar-nav"><li>
          <a class="sidebar-link" id="menu-3" href="/r"><i class="ti ti-chart"></i><span class="hide-menu">Reports</span></a>
        </li></ul>
    "#;
    let found = extract_with(html, extract_menu_links);
    let reports = find(&found, "REPORTS_MENU");
    assert_eq!(
        reports.xpath,
        "//a[.//span[contains(@class,'hide-menu')][normalize-space()='Reports']]"
    );
    assert_eq!(reports.priority, 3);
}

#[test]
fn unique_title_names_icon_link() {
    let found = extract_with(
        r##"<a class="nav-link" title="Settings" href="#"><i class="bi-gear"></i></a>"##,
        extract_menu_links,
    );
    let settings = find(&found, "SETTINGS_MENU");
    assert_eq!(settings.xpath, "//a[@title='Settings']");
    assert_eq!(settings.priority, 2);
}

#[test]
fn repeated_link_text_keeps_first() {
    let html = r#"<nav><a href="/a">Home</a><a href="/b">Home</a></nav>"#;
    let found = extract_with(html, extract_menu_links);
    assert_eq!(names(&found), vec!["HOME_MENU"]);
    assert_eq!(found[0].xpath, "(//a[normalize-space()='Home'])[1]");
    assert_eq!(found[0].priority, 5);
}

#[test]
fn plain_links_are_not_menus() {
    assert!(extract_with(r#"<p><a href="/x">Plain</a></p>"#, extract_menu_links).is_empty());
}

#[test]
fn library_menu_items_and_submenu_titles() {
    let html = r#"
        <ul class="ant-menu">
          <li class="ant-menu-item" routerLink="/users">Users</li>
          <li class="ant-menu-item">Audit Log</li>
          <li class="ant-menu-submenu"><div class="ant-menu-submenu-title"><span>Settings</span></div></li>
        </ul>
    "#;
    let found = extract_with(html, extract_library_menu_items);
    assert_eq!(names(&found), vec!["USERS_MENU", "AUDIT_LOG_MENU", "SETTINGS_MENU"]);
    assert_eq!(
        find(&found, "USERS_MENU").xpath,
        "//li[contains(@class,'ant-menu-item')][@routerlink='/users']"
    );
    assert_eq!(find(&found, "USERS_MENU").priority, 2);
    assert_eq!(
        find(&found, "AUDIT_LOG_MENU").xpath,
        "//li[contains(@class,'ant-menu-item')][normalize-space()='Audit Log']"
    );
    assert_eq!(
        find(&found, "SETTINGS_MENU").xpath,
        "//div[contains(@class,'ant-menu-submenu-title')][normalize-space()='Settings']"
    );
}

#[test]
fn links_inside_library_items_are_left_to_library_extractor() {
    let html = r#"<nav><ul><li class="ant-menu-item"><a href="/x">Inbox</a></li></ul></nav>"#;
    assert!(extract_with(html, extract_menu_links).is_empty());
}

#[test]
fn link_with_text_bearing_icon_uses_contains() {
    let html = r#"<nav><a href="/u"><mat-icon>people</mat-icon> Users</a></nav>"#;
    let found = extract_with(html, extract_menu_links);
    let users = find(&found, "USERS_MENU");
    assert_eq!(users.xpath, "//a[contains(normalize-space(),'Users')]");
    assert_eq!(users.priority, 3);
}

#[test]
fn link_text_is_counted_against_the_emitted_predicate() {
    let html = r#"
        <nav>
          <a href="/u"><mat-icon>people</mat-icon> Users</a>
          <a href="/g">Users and groups</a>
        </nav>
    "#;
    let found = extract_with(html, extract_menu_links);
    assert_eq!(
        find(&found, "USERS_MENU").xpath,
        "(//a[contains(normalize-space(),'Users')])[1]"
    );
    assert_eq!(find(&found, "USERS_MENU").priority, 5);
    assert_eq!(
        find(&found, "USERS_AND_GROUPS_MENU").xpath,
        "//a[normalize-space()='Users and groups']"
    );
}

#[test]
fn link_text_counts_anchors_outside_the_menu() {
    let html = r#"<nav><a href="/help">Help</a></nav><footer><a href="/faq">Help</a></footer>"#;
    let found = extract_with(html, extract_menu_links);
    assert_eq!(names(&found), vec!["HELP_MENU"]);
    assert_eq!(found[0].xpath, "(//a[normalize-space()='Help'])[1]");
    assert_eq!(found[0].priority, 5);
}

#[test]
fn library_items_with_text_bearing_icons_use_contains() {
    let html = r#"
        <ul class="ant-menu">
          <li class="ant-menu-item"><i nz-icon>x</i> Orders</li>
          <li class="ant-menu-submenu">
            <div class="ant-menu-submenu-title"><span class="anticon">setting</span><span>Settings</span></div>
          </li>
        </ul>
    "#;
    let found = extract_with(html, extract_library_menu_items);
    assert_eq!(
        find(&found, "ORDERS_MENU").xpath,
        "//li[contains(@class,'ant-menu-item')][contains(normalize-space(),'Orders')]"
    );
    assert_eq!(
        find(&found, "SETTINGS_MENU").xpath,
        "//div[contains(@class,'ant-menu-submenu-title')][contains(normalize-space(),'Settings')]"
    );
}

#[test]
fn repeated_library_item_text_is_positional() {
    let html = r#"
        <ul class="ant-menu"><li class="ant-menu-item">Inbox</li></ul>
        <ul class="ant-menu"><li class="ant-menu-item">Inbox</li></ul>
    "#;
    let found = extract_with(html, extract_library_menu_items);
    assert_eq!(names(&found), vec!["INBOX_MENU"]);
    assert_eq!(
        found[0].xpath,
        "(//li[contains(@class,'ant-menu-item')][normalize-space()='Inbox'])[1]"
    );
    assert_eq!(found[0].priority, 5);
}

// ============================================================================
// Checkboxes
// ============================================================================

#[test]
fn checkbox_linked_by_for() {
    let html = r#"<input type="checkbox" id="c1"><label for="c1">Accept</label>"#;
    let found = extract_with(html, extract_checkboxes);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].variable_name, "ACCEPT_CHECKBOX");
    assert_eq!(
        found[0].xpath,
        "//input[@type='checkbox'][@id=//label[normalize-space()='Accept']/@for]"
    );
    assert_eq!(found[0].priority, 2);
}

#[test]
fn checkbox_inside_label() {
    let found = extract_with(
        r#"<label><input type="checkbox"> Remember me</label>"#,
        extract_checkboxes,
    );
    let remember = find(&found, "REMEMBER_ME_CHECKBOX");
    assert_eq!(
        remember.xpath,
        "//label[normalize-space()='Remember me']//input[@type='checkbox']"
    );
    assert_eq!(remember.priority, 3);
}

#[test]
fn checkbox_followed_by_label() {
    let found = extract_with(
        r#"<div><input type="checkbox"><label>Newsletter</label></div>"#,
        extract_checkboxes,
    );
    let newsletter = find(&found, "NEWSLETTER_CHECKBOX");
    assert_eq!(
        newsletter.xpath,
        "//label[normalize-space()='Newsletter']/preceding-sibling::input[@type='checkbox'][1]"
    );
    assert_eq!(newsletter.priority, 5);
}

#[test]
fn checkbox_preceded_by_label() {
    let found = extract_with(
        r#"<div><label>Urgent</label><input type="checkbox"></div>"#,
        extract_checkboxes,
    );
    let urgent = find(&found, "URGENT_CHECKBOX");
    assert_eq!(
        urgent.xpath,
        "//label[normalize-space()='Urgent']/following-sibling::input[@type='checkbox'][1]"
    );
}

#[test]
fn unlabeled_checkbox_needs_descriptive_id() {
    let html = r#"<input type="checkbox" id="agree"><input type="checkbox" id="item-4"><input type="checkbox">"#;
    let found = extract_with(html, extract_checkboxes);
    assert_eq!(names(&found), vec!["AGREE_CHECKBOX"]);
    assert_eq!(found[0].xpath, "//input[@type='checkbox' and @id='agree']");
    assert_eq!(found[0].priority, 1);
}

#[test]
fn label_with_apostrophe_is_quoted_safely() {
    let found = extract_with(
        r#"<label><input type="checkbox"> Don't ask again</label>"#,
        extract_checkboxes,
    );
    let box_ = find(&found, "DONT_ASK_AGAIN_CHECKBOX");
    assert_eq!(
        box_.xpath,
        "//label[normalize-space()=\"Don't ask again\"]//input[@type='checkbox']"
    );
}
