pub mod buttons;
pub mod checkboxes;
pub mod common;
pub mod display;
pub mod form_fields;
pub mod menus;
pub mod row_actions;
pub mod tables;
pub mod upload;
