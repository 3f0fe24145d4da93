#![forbid(unsafe_code)]

//! Formatter and validator summaries
//!
//! This module provides formatters for displaying the formatters and
//! validators known to a configuration, as printed by `cellmark list`. It
//! supports both human-readable and JSONL output formats.

use crate::format::FormatterRegistry;
use crate::validate::ValidatorRegistry;
use serde::Serialize;

/// Summary of a configured formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterSummary {
    pub id: String,
    pub kind: String,
    pub description: String,
    pub rules: usize,
}

/// Summary of an available validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorSummary {
    pub id: String,
    pub description: String,
    pub message: String,
    pub masked: bool,
}

pub fn formatter_summaries(registry: &FormatterRegistry) -> Vec<FormatterSummary> {
    registry
        .iter()
        .map(|f| FormatterSummary {
            id: f.id().to_string(),
            kind: f.kind().to_string(),
            description: f.description().to_string(),
            rules: f.rule_count(),
        })
        .collect()
}

pub fn validator_summaries(registry: &ValidatorRegistry) -> Vec<ValidatorSummary> {
    registry
        .iter()
        .map(|v| ValidatorSummary {
            id: v.id().to_string(),
            description: v.description().to_string(),
            message: v.message().to_string(),
            masked: v.has_mask(),
        })
        .collect()
}

/// Human-readable formatter for summaries
pub struct SummaryHumanFormatter;

impl SummaryHumanFormatter {
    pub fn new() -> Self {
        SummaryHumanFormatter
    }

    pub fn format(&self, formatters: &[FormatterSummary], validators: &[ValidatorSummary]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Formatters ({}):\n", formatters.len()));
        for f in formatters {
            output.push_str(&format!("  {} [{}]", f.id, f.kind));
            if f.rules > 0 {
                let noun = if f.rules == 1 { "rule" } else { "rules" };
                output.push_str(&format!(" {} {}", f.rules, noun));
            }
            output.push('\n');
            if !f.description.is_empty() {
                output.push_str(&format!("    {}\n", f.description));
            }
        }

        output.push('\n');
        output.push_str(&format!("Validators ({}):\n", validators.len()));
        for v in validators {
            output.push_str(&format!("  {}", v.id));
            if v.masked {
                output.push_str(" (masked)");
            }
            output.push('\n');
            if !v.description.is_empty() {
                output.push_str(&format!("    {}\n", v.description));
            }
        }

        output
    }
}

impl Default for SummaryHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct FormatterRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    id: &'a str,
    kind: &'a str,
    description: &'a str,
    rules: usize,
}

#[derive(Debug, Serialize)]
struct ValidatorRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    id: &'a str,
    description: &'a str,
    message: &'a str,
    masked: bool,
}

/// JSONL formatter for summaries
pub struct SummaryJsonlFormatter;

impl SummaryJsonlFormatter {
    pub fn new() -> Self {
        SummaryJsonlFormatter
    }

    /// One `formatter` record per formatter, then one `validator` record per validator
    pub fn format(&self, formatters: &[FormatterSummary], validators: &[ValidatorSummary]) -> String {
        let mut output = String::new();

        for f in formatters {
            let record = FormatterRecord {
                record_type: "formatter",
                id: &f.id,
                kind: &f.kind,
                description: &f.description,
                rules: f.rules,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        for v in validators {
            let record = ValidatorRecord {
                record_type: "validator",
                id: &v.id,
                description: &v.description,
                message: &v.message,
                masked: v.masked,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

impl Default for SummaryJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
