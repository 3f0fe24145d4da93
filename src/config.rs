//! Configuration file parsing and validation

pub mod cellmark_toml;

pub use cellmark_toml::{CellmarkMeta, Config, FormatterDefinition, ValidatorDefinition};

/// Default configuration file name
pub const CONFIG_FILE: &str = "cellmark.toml";
