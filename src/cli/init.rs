//! Initialize a cellmark configuration
//!
//! Writes a starter configuration file with one formatter of each kind.

use std::fs;
use std::path::Path;

/// Default content for cellmark.toml
pub(crate) const DEFAULT_CELLMARK_TOML: &str = r#"[cellmark]
version = "1"

# Token replaced by the value in rule templates
# placeholder = "{value}"

# Prefix of CSS classes produced by color formatters
# color_class_prefix = "cell-color-"

# Rules are tried in order; the first matching pattern wins.

[formatters.country]
kind = "image"
description = "Flag next to the country code"
include_value = true
rules = [
  { image = "flags/it.png", pattern = "^IT" },
  { image = "flags/fr.png", pattern = "^FR", template = "France ({value})" },
]

[formatters.status]
kind = "color"
description = "Row background by status"
rules = [
  { color = "F4CCCC", pattern = "^KO" },
  { color = "D9EAD3", pattern = "^OK" },
]

[formatters.priority]
kind = "match"
rules = [
  { result = "urgent", pattern = "^P1$" },
  { result = "normal", pattern = "^P[23]$" },
]

[formatters.shift]
kind = "time"
format = "hh:mm"

[formatters.amount]
kind = "template"
template = "{value} EUR"

[formatters.active]
kind = "checkbox"

# Built-in validators: codice-fiscale, alpha-space, phone-number
# [validators.zip-code]
# description = "Five digit postal code"
# patterns = ["^[0-9]{5}$"]
# message = "Invalid postal code."
# mask = "[0-9]"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Target exists and --force was not given
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(String),
}

/// What init did with the target file
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
}

/// Run the init command
///
/// # Arguments
/// * `path` - Configuration file to write
/// * `force` - If true, overwrite an existing file
pub fn run_init(path: &str, force: bool) -> Result<InitOutcome, InitError> {
    let target = Path::new(path);
    let existed = target.exists();

    if existed && !force {
        return Err(InitError::AlreadyExists(path.to_string()));
    }

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, DEFAULT_CELLMARK_TOML)?;

    Ok(if existed {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    })
}
