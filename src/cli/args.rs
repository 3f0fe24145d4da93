//! CLI argument parsing using clap

use crate::config::CONFIG_FILE;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for cellmark commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Cellmark CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "cellmark")]
#[command(about = "Pattern-based value classification and display formatting")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: String,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available cellmark subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a starter configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Load and validate the configuration
    Check {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// List configured formatters and available validators
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Render values with a formatter (reads stdin lines when no values are given)
    Render {
        /// Formatter to use
        formatter: String,

        /// Values to render
        values: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Append the stylesheet required by the rendered markup
        #[arg(long)]
        css: bool,
    },

    /// Print the result of the first rule matching a value
    Match {
        /// Rule-driven formatter whose rules are used
        formatter: String,

        /// Value to classify
        value: String,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Check values against a field validator
    Validate {
        /// Validator to use
        validator: String,

        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let cli = Cli::parse_from(["cellmark", "check"]);
        assert_eq!(cli.config, "cellmark.toml");
        assert_eq!(cli.color, ColorChoice::Auto);
        match cli.command {
            Command::Check { format } => assert_eq!(format, OutputFormat::Human),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["cellmark", "list", "--config", "other.toml", "-f", "jsonl"]);
        assert_eq!(cli.config, "other.toml");
        match cli.command {
            Command::List { format } => assert_eq!(format, OutputFormat::Jsonl),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_init_with_force() {
        let cli = Cli::parse_from(["cellmark", "init", "--force"]);
        match cli.command {
            Command::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::parse_from(["cellmark", "render", "country", "ITA", "FRA", "--css"]);
        match cli.command {
            Command::Render {
                formatter,
                values,
                format,
                css,
            } => {
                assert_eq!(formatter, "country");
                assert_eq!(values, vec!["ITA", "FRA"]);
                assert_eq!(format, OutputFormat::Human);
                assert!(css);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_render_without_values() {
        let cli = Cli::parse_from(["cellmark", "render", "country"]);
        match cli.command {
            Command::Render { values, .. } => assert!(values.is_empty()),
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_match_args() {
        let cli = Cli::parse_from(["cellmark", "match", "priority", "P1"]);
        match cli.command {
            Command::Match {
                formatter, value, ..
            } => {
                assert_eq!(formatter, "priority");
                assert_eq!(value, "P1");
            }
            _ => panic!("Expected Match command"),
        }
    }

    #[test]
    fn test_validate_requires_values() {
        assert!(Cli::try_parse_from(["cellmark", "validate", "zip"]).is_err());
        let cli = Cli::parse_from(["cellmark", "validate", "zip", "00184"]);
        match cli.command {
            Command::Validate {
                validator, values, ..
            } => {
                assert_eq!(validator, "zip");
                assert_eq!(values, vec!["00184"]);
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_color_never() {
        let cli = Cli::parse_from(["cellmark", "--color", "never", "check"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(
            termcolor::ColorChoice::from(cli.color),
            termcolor::ColorChoice::Never
        );
    }
}
