pub mod analyzer;
pub mod association;
pub mod checkbox_model;
