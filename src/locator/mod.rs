pub mod aggregator;
pub mod locator_config;
pub mod locator_model;
pub mod naming;
pub mod suffix;
pub mod xpath;
