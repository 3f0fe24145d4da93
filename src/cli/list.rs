//! List command implementation
//!
//! This module implements the `cellmark list` command, which lists the
//! configured formatters (id, kind, rule count, description) followed by the
//! available validators, in human-readable or JSONL format.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::output::{
    SummaryHumanFormatter, SummaryJsonlFormatter, formatter_summaries, validator_summaries,
};

/// Error type specific to list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::error::ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] crate::error::RuleError),
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
pub fn run_list(config_path: &str, format: OutputFormat) -> i32 {
    match run_list_inner(config_path, format) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of list command
fn run_list_inner(config_path: &str, format: OutputFormat) -> Result<String, ListError> {
    let config = super::common::load_config(config_path)?;
    let formatters = formatter_summaries(&super::common::build_formatters(&config)?);
    let validators = validator_summaries(&super::common::build_validators(&config)?);

    Ok(match format {
        OutputFormat::Human => SummaryHumanFormatter::new().format(&formatters, &validators),
        OutputFormat::Jsonl => SummaryJsonlFormatter::new().format(&formatters, &validators),
    })
}
