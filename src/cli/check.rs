//! Check command implementation
//!
//! This module implements the `cellmark check` command, which:
//! - Loads the configuration file
//! - Compiles every formatter rule and validator pattern
//! - Reports the outcome (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, config_exit_code};
use crate::error::{ConfigError, RuleError};
use crate::output::{HumanFormatter, JsonlFormatter};
use termcolor::StandardStream;

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

impl CheckError {
    fn exit_code(&self) -> i32 {
        match self {
            CheckError::Config(e) => config_exit_code(e),
            CheckError::Rule(RuleError::InvalidPattern { .. }) => EXIT_PARSE_ERROR,
            CheckError::Rule(_) => EXIT_ERROR,
        }
    }
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Configuration is valid
/// - 2: Error (configuration file missing or unreadable)
/// - 3: Parse error (invalid TOML or failed validation)
pub fn run_check(config_path: &str, format: OutputFormat, color: ColorChoice) -> i32 {
    let result = run_check_inner(config_path);
    let jsonl = JsonlFormatter::new();

    match (result, format) {
        (Ok((formatters, validators)), OutputFormat::Human) => {
            let mut stdout = StandardStream::stdout(color.into());
            let message = format!(
                "{} is valid: {} formatters, {} validators",
                config_path, formatters, validators
            );
            match HumanFormatter::new().write_pass(&mut stdout, &message) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        (Ok((formatters, validators)), OutputFormat::Jsonl) => {
            print!(
                "{}",
                jsonl.format_check(config_path, formatters, validators, None)
            );
            EXIT_SUCCESS
        }
        (Err(e), OutputFormat::Human) => {
            let mut stderr = StandardStream::stderr(color.into());
            if HumanFormatter::new()
                .write_fail(&mut stderr, &e.to_string())
                .is_err()
            {
                eprintln!("Error: {}", e);
            }
            e.exit_code()
        }
        (Err(e), OutputFormat::Jsonl) => {
            print!(
                "{}",
                jsonl.format_check(config_path, 0, 0, Some(&e.to_string()))
            );
            e.exit_code()
        }
    }
}

/// Internal implementation of check command
///
/// Returns the number of formatters and validators.
fn run_check_inner(config_path: &str) -> Result<(usize, usize), CheckError> {
    let config = super::common::load_config(config_path)?;
    let formatters = super::common::build_formatters(&config)?;
    let validators = super::common::build_validators(&config)?;
    Ok((formatters.len(), validators.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> String {
        let path = dir.path().join("cellmark.toml");
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_inner_counts() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[cellmark]\nversion = \"1\"\n\n[formatters.a]\nkind = \"checkbox\"\n",
        );
        assert_eq!(run_check_inner(&path).unwrap(), (1, 3));
    }

    #[test]
    fn test_exit_codes() {
        let dir = TempDir::new().unwrap();

        let path = write_config(&dir, "[cellmark]\nversion = \"1\"\n");
        assert_eq!(run_check(&path, OutputFormat::Jsonl, ColorChoice::Never), EXIT_SUCCESS);

        let path = write_config(&dir, "[cellmark]\nversion = \"9\"\n");
        assert_eq!(
            run_check(&path, OutputFormat::Jsonl, ColorChoice::Never),
            EXIT_PARSE_ERROR
        );

        let missing = dir.path().join("missing.toml");
        assert_eq!(
            run_check(missing.to_str().unwrap(), OutputFormat::Jsonl, ColorChoice::Never),
            EXIT_ERROR
        );
    }
}
