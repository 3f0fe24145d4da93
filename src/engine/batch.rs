#![forbid(unsafe_code)]

//! Parallel batch rendering
//!
//! Renders many values with a single formatter using rayon. Output order
//! always matches input order, and style rules are collected into one
//! stylesheet in that same order.

use crate::error::RuleError;
use crate::format::{FormatterRegistry, StyleRule, StyleSheet, ValueFormatter};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

/// A single rendered value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedValue {
    pub value: String,
    pub markup: String,
}

/// Result of rendering a batch of values
#[derive(Debug)]
pub struct BatchResult {
    /// Rendered values, in input order
    pub rows: Vec<RenderedValue>,
    /// Style rules required by the rendered markup
    pub stylesheet: StyleSheet,
}

/// Renders batches of values against formatters from a shared registry
pub struct BatchRenderer {
    registry: Arc<FormatterRegistry>,
}

impl BatchRenderer {
    pub fn new(registry: FormatterRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    /// Render every value with the formatter named `formatter_id`
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if no formatter has that id.
    pub fn render(&self, formatter_id: &str, values: &[String]) -> Result<BatchResult, RuleError> {
        let formatter = self.registry.require(formatter_id)?;
        Ok(render_with(formatter, values))
    }
}

/// Render every value with `formatter`
pub fn render_with(formatter: &dyn ValueFormatter, values: &[String]) -> BatchResult {
    let rendered: Vec<(RenderedValue, Option<StyleRule>)> = values
        .par_iter()
        .map(|value| {
            let row = RenderedValue {
                value: value.clone(),
                markup: formatter.render(value),
            };
            (row, formatter.style_rule(value))
        })
        .collect();

    let mut stylesheet = StyleSheet::new();
    let mut rows = Vec::with_capacity(rendered.len());
    for (row, style) in rendered {
        if let Some(style) = style {
            stylesheet.insert(style);
        }
        rows.push(row);
    }

    log::debug!(
        "rendered {} values with '{}' ({} style rules)",
        rows.len(),
        formatter.id(),
        stylesheet.len()
    );

    BatchResult { rows, stylesheet }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn renderer() -> BatchRenderer {
        let config = Config::parse(
            r#"
[cellmark]
version = "1"

[formatters.status]
kind = "color"
rules = [
  { color = "F00", pattern = "^KO" },
  { color = "0F0", pattern = "^OK" },
]

[formatters.shift]
kind = "time"
format = "hh.mm"
"#,
        )
        .unwrap();
        BatchRenderer::new(FormatterRegistry::from_config(&config).unwrap())
    }

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_preserves_order() {
        let input: Vec<String> = (0..500).map(|i| format!("{:02}:{:02}:00", i % 24, i % 60)).collect();
        let result = renderer().render("shift", &input).unwrap();
        assert_eq!(result.rows.len(), 500);
        for (row, value) in result.rows.iter().zip(&input) {
            assert_eq!(&row.value, value);
            assert_eq!(row.markup, value[..5].replace(':', "."));
        }
        assert!(result.stylesheet.is_empty());
    }

    #[test]
    fn test_collects_stylesheet_in_order() {
        let input = values(&["OK", "KO", "OK", "pending", "KO"]);
        let result = renderer().render("status", &input).unwrap();
        let markup: Vec<&str> = result.rows.iter().map(|r| r.markup.as_str()).collect();
        assert_eq!(
            markup,
            vec!["cell-color-0F0", "cell-color-F00", "cell-color-0F0", "", "cell-color-F00"]
        );
        let selectors: Vec<&str> = result
            .stylesheet
            .rules()
            .iter()
            .map(|r| r.selector.as_str())
            .collect();
        assert_eq!(selectors, vec![".cell-color-0F0", ".cell-color-F00"]);
    }

    #[test]
    fn test_unknown_formatter() {
        let result = renderer().render("missing", &values(&["x"]));
        assert!(matches!(result, Err(RuleError::NotFound(_))));
    }

    #[test]
    fn test_empty_batch() {
        let result = renderer().render("status", &[]).unwrap();
        assert!(result.rows.is_empty());
    }
}
