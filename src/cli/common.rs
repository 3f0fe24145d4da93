//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration and
//! building the formatter and validator registries.

use crate::config::Config;
use crate::error::{ConfigError, RuleError};
use crate::format::FormatterRegistry;
use crate::validate::ValidatorRegistry;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load the configuration file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file does not exist or cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_path = Path::new(path);
    if !config_path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found. Run 'cellmark init' to create it.", path),
        )));
    }

    Config::load(config_path)
}

/// Build the formatter registry for a loaded configuration
pub(crate) fn build_formatters(config: &Config) -> Result<FormatterRegistry, RuleError> {
    FormatterRegistry::from_config(config)
}

/// Build the validator registry (built-ins plus configured validators)
pub(crate) fn build_validators(config: &Config) -> Result<ValidatorRegistry, RuleError> {
    ValidatorRegistry::from_config(config)
}

/// Exit code for a configuration error
pub(crate) fn config_exit_code(e: &ConfigError) -> i32 {
    match e {
        ConfigError::Parse(_) | ConfigError::Validation(_) => EXIT_PARSE_ERROR,
        ConfigError::Io(_) => EXIT_ERROR,
    }
}
