//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub mod classify;
pub mod common;
pub mod init;
pub mod list;
pub mod render;
pub mod validate;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
