//! Render command implementation
//!
//! Renders values given on the command line, or one value per stdin line
//! when none are given, with a configured formatter.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::engine::BatchRenderer;
use crate::error::CellmarkError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::{self, BufRead};

/// Run the render command
///
/// The configuration is loaded and the formatter resolved before stdin is
/// read, so configuration errors are reported without waiting for input.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error (configuration, unknown formatter, unreadable input)
pub fn run_render(
    config_path: &str,
    formatter: &str,
    values: &[String],
    format: OutputFormat,
    css: bool,
) -> i32 {
    let result = load_renderer(config_path, formatter).and_then(|renderer| {
        let values = if values.is_empty() {
            read_lines(io::stdin().lock())?
        } else {
            values.to_vec()
        };
        render_output(&renderer, formatter, &values, format, css)
    });

    match result {
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

/// Loads the configuration and checks that `formatter` exists
fn load_renderer(config_path: &str, formatter: &str) -> Result<BatchRenderer, CellmarkError> {
    let config = super::common::load_config(config_path)?;
    let registry = super::common::build_formatters(&config)?;
    registry.require(formatter)?;
    Ok(BatchRenderer::new(registry))
}

fn render_output(
    renderer: &BatchRenderer,
    formatter: &str,
    values: &[String],
    format: OutputFormat,
    css: bool,
) -> Result<String, CellmarkError> {
    let result = renderer.render(formatter, values)?;

    Ok(match format {
        OutputFormat::Human => HumanFormatter::new().format_batch(&result, css),
        OutputFormat::Jsonl => JsonlFormatter::new().format_batch(&result, css),
    })
}

/// Reads one value per line, dropping line terminators
fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
