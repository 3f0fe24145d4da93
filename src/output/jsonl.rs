#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Every command emits one JSON object per line. Each record carries a
//! `type` field naming what it describes.

use crate::engine::BatchResult;
use crate::format::StyleRule;
use crate::rules::MatchOutcome;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// One `value` record per rendered row
    ///
    /// With `include_css`, one `style` record per style rule follows the rows.
    pub fn format_batch(&self, result: &BatchResult, include_css: bool) -> String {
        let mut output = String::new();

        for row in &result.rows {
            push_record(
                &mut output,
                &ValueRecord {
                    record_type: "value",
                    value: &row.value,
                    markup: &row.markup,
                },
            );
        }

        let styles: &[StyleRule] = if include_css {
            result.stylesheet.rules()
        } else {
            &[]
        };
        for rule in styles {
            push_record(
                &mut output,
                &StyleRecord {
                    record_type: "style",
                    class_name: &rule.class_name,
                    selector: &rule.selector,
                    declaration: &rule.declaration,
                },
            );
        }

        output
    }

    pub fn format_match(&self, value: &str, outcome: &MatchOutcome<'_>) -> String {
        let (index, result) = match outcome {
            MatchOutcome::Matched(m) => (Some(m.index), m.result),
            MatchOutcome::NoMatch => (None, None),
        };
        let mut output = String::new();
        push_record(
            &mut output,
            &MatchRecord {
                record_type: "match",
                value,
                matched: outcome.is_match(),
                index,
                result,
            },
        );
        output
    }

    /// One `validation` record; `message` is present only for rejected values
    pub fn format_validation(&self, validator: &str, value: &str, error: Option<&str>) -> String {
        let mut output = String::new();
        push_record(
            &mut output,
            &ValidationRecord {
                record_type: "validation",
                validator,
                value,
                valid: error.is_none(),
                message: error,
            },
        );
        output
    }

    pub fn format_check(
        &self,
        config: &str,
        formatters: usize,
        validators: usize,
        error: Option<&str>,
    ) -> String {
        let mut output = String::new();
        push_record(
            &mut output,
            &StatusRecord {
                record_type: "status",
                config,
                valid: error.is_none(),
                formatters,
                validators,
                error,
            },
        );
        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

#[derive(Debug, Serialize)]
struct ValueRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    value: &'a str,
    markup: &'a str,
}

#[derive(Debug, Serialize)]
struct StyleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    class_name: &'a str,
    selector: &'a str,
    declaration: &'a str,
}

#[derive(Debug, Serialize)]
struct MatchRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    value: &'a str,
    matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ValidationRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    validator: &'a str,
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct StatusRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    config: &'a str,
    valid: bool,
    formatters: usize,
    validators: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}
