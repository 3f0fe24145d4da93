//! Error types for Cellmark
//!
//! This module defines the error types used throughout Cellmark, following
//! a hierarchical structure with specific error variants for different
//! error categories.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A rule pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}' in rule {index}: {message}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        message: String,
    },

    /// Invalid formatter or validator definition
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    /// Formatter or validator not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A value rejected by a field validator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{validator}: {message}")]
pub struct ValidationError {
    /// Id of the validator that rejected the value
    pub validator: String,
    /// Human-readable rejection message
    pub message: String,
}

/// Top-level error type for Cellmark
#[derive(Debug, thiserror::Error)]
pub enum CellmarkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Validation error
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
