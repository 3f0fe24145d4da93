#![forbid(unsafe_code)]

//! Cellmark: pattern-based value classification and display formatting
//!
//! Cellmark takes a cell value as a string, classifies it against ordered
//! regular-expression rules, and produces presentational markup, CSS classes,
//! normalized times, or validation verdicts for a host renderer.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod output;
pub mod rules;
pub mod types;
pub mod validate;

// Re-export error types for convenient access
pub use error::{CellmarkError, ConfigError, RuleError, ValidationError};

// Re-export core domain types for convenient access
pub use types::{FormatterKind, HexColor, Identifier, Placeholder};
