//! Validate command implementation
//!
//! Checks each value against a field validator and reports the verdicts.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use crate::error::CellmarkError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::validate::{FieldValidator, ValidatorRegistry};
use termcolor::StandardStream;

/// Run the validate command
///
/// Without a configuration file only the built-in validators are available.
///
/// # Returns
///
/// Exit code:
/// - 0: All values are valid
/// - 1: At least one value is invalid
/// - 2: Error
pub fn run_validate(
    config_path: &str,
    validator: &str,
    values: &[String],
    format: OutputFormat,
    color: ColorChoice,
) -> i32 {
    match run_validate_inner(config_path, validator, values, format, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_validate_inner(
    config_path: &str,
    validator: &str,
    values: &[String],
    format: OutputFormat,
    color: ColorChoice,
) -> Result<bool, CellmarkError> {
    let registry = if std::path::Path::new(config_path).exists() {
        let config = super::common::load_config(config_path)?;
        super::common::build_validators(&config)?
    } else {
        ValidatorRegistry::with_builtins()?
    };
    let validator = registry.require(validator)?;

    match format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(color.into());
            let human = HumanFormatter::new();
            for value in values {
                match validator.validate(value) {
                    Ok(()) => human.write_pass(&mut stdout, value)?,
                    Err(e) => human.write_fail(&mut stdout, &format!("{}: {}", value, e.message))?,
                }
            }
        }
        OutputFormat::Jsonl => print!("{}", format_jsonl(validator, values)),
    }

    Ok(values.iter().all(|v| validator.is_valid(v)))
}

fn format_jsonl(validator: &FieldValidator, values: &[String]) -> String {
    let jsonl = JsonlFormatter::new();
    values
        .iter()
        .map(|value| {
            let error = validator.validate(value).err();
            jsonl.format_validation(
                validator.id().as_str(),
                value,
                error.as_ref().map(|e| e.message.as_str()),
            )
        })
        .collect()
}
