pub mod json;
pub mod variables;
