//! Match command implementation
//!
//! Classifies a single value against the ordered rules of a rule-driven
//! formatter and prints the winning rule's result.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::Config;
use crate::error::RuleError;
use crate::output::JsonlFormatter;
use crate::rules::match_value;
use crate::types::Identifier;

/// Error type specific to match command
#[derive(Debug, thiserror::Error)]
enum ClassifyError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::error::ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

/// Run the match command
///
/// # Returns
///
/// Exit code:
/// - 0: A rule matched
/// - 1: No rule matched
/// - 2: Error
pub fn run_match(config_path: &str, formatter: &str, value: &str, format: OutputFormat) -> i32 {
    let config = match super::common::load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", ClassifyError::from(e));
            return EXIT_ERROR;
        }
    };

    match classify(&config, formatter, value, format) {
        Ok((output, matched)) => {
            print!("{}", output);
            if matched { EXIT_SUCCESS } else { EXIT_FAILURE }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Returns the rendered output and whether a rule matched
fn classify(
    config: &Config,
    formatter: &str,
    value: &str,
    format: OutputFormat,
) -> Result<(String, bool), ClassifyError> {
    let definition = Identifier::new(formatter)
        .and_then(|id| config.formatters.get(&id))
        .ok_or_else(|| RuleError::NotFound(format!("formatter '{}'", formatter)))?;

    if !definition.kind().uses_rules() {
        return Err(RuleError::InvalidDefinition(format!(
            "formatter '{}' is a {} formatter and has no rules",
            formatter,
            definition.kind()
        ))
        .into());
    }

    let outcome = match_value(value, definition.rules())?;
    let output = match format {
        OutputFormat::Human => {
            if outcome.is_match() {
                format!("{}\n", outcome.result_or_empty())
            } else {
                String::new()
            }
        }
        OutputFormat::Jsonl => JsonlFormatter::new().format_match(value, &outcome),
    };

    Ok((output, outcome.is_match()))
}
