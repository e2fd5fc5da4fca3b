//! Input/Output operations
//!
//! This module handles logging setup, result files and the construction of
//! property bundles from configuration data.

mod output;
mod property_loader;

pub use output::{setup_output, write_yaml_report};
pub use property_loader::build_grouped_property;
