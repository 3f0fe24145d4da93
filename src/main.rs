//! Cellmark CLI entry point

use cellmark::cli::common::EXIT_ERROR;
use cellmark::cli::init::InitOutcome;
use cellmark::cli::{Command, args::Cli};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_str();

    let exit_code = match cli.command {
        Command::Init { force } => match cellmark::cli::init::run_init(config, force) {
            Ok(InitOutcome::Created) => {
                println!("Created {}.", config);
                0
            }
            Ok(InitOutcome::Overwritten) => {
                println!("Overwrote {}.", config);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
        Command::Check { format } => cellmark::cli::check::run_check(config, format, cli.color),
        Command::List { format } => cellmark::cli::list::run_list(config, format),
        Command::Render {
            formatter,
            values,
            format,
            css,
        } => cellmark::cli::render::run_render(config, &formatter, &values, format, css),
        Command::Match {
            formatter,
            value,
            format,
        } => cellmark::cli::classify::run_match(config, &formatter, &value, format),
        Command::Validate {
            validator,
            values,
            format,
        } => cellmark::cli::validate::run_validate(config, &validator, &values, format, cli.color),
    };

    process::exit(exit_code);
}
