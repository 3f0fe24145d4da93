#![forbid(unsafe_code)]

//! Image-annotated formatting
//!
//! A value is classified against an ordered rule set; the winning rule may
//! select an image to render next to (or instead of) the value, and may
//! supply a custom template for the displayed text.

use crate::error::RuleError;
use crate::format::formatter::ValueFormatter;
use crate::format::template::apply_template_with;
use crate::rules::{MatchOutcome, RuleDefinition, RuleSet, match_value};
use crate::types::{FormatterKind, Identifier, Placeholder};
use serde::Serialize;

/// Style applied to an image shown without its value
pub const CENTERED_IMAGE_STYLE: &str = "display:block;margin-left:auto;margin-right:auto";

/// Markup produced for a single value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResult {
    pub markup: String,

    /// Image selected by the winning rule, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Formats `value` against raw rule definitions
///
/// # Errors
///
/// Returns `RuleError::InvalidPattern` if a pattern reached before a match
/// does not compile.
pub fn format_with_image(
    value: &str,
    rules: &[RuleDefinition],
    include_value: bool,
) -> Result<FormattedResult, RuleError> {
    let outcome = match_value(value, rules)?;
    Ok(compose(value, outcome, include_value, &Placeholder::default()))
}

fn compose(
    value: &str,
    outcome: MatchOutcome<'_>,
    include_value: bool,
    placeholder: &Placeholder,
) -> FormattedResult {
    let display = match outcome.template() {
        Some(template) => apply_template_with(value, template, placeholder),
        None => value.to_string(),
    };

    let Some(image) = outcome.result() else {
        return FormattedResult {
            markup: display,
            image: None,
        };
    };

    let style = if include_value { "" } else { CENTERED_IMAGE_STYLE };
    let alt = escape_attr(value);
    let mut markup = format!(
        "<img style=\"{}\" src=\"{}\" alt=\"{}\" title=\"{}\">",
        style,
        escape_attr(image),
        alt,
        alt
    );
    if include_value {
        markup.push_str("&nbsp;");
        markup.push_str(&display);
    }

    FormattedResult {
        markup,
        image: Some(image.to_string()),
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Precompiled image formatter over a validated rule set
#[derive(Debug)]
pub struct ImageFormatter {
    id: Identifier,
    description: String,
    rules: RuleSet,
    include_value: bool,
    placeholder: Placeholder,
}

impl ImageFormatter {
    pub fn new(id: Identifier, rules: RuleSet, include_value: bool) -> Self {
        Self {
            id,
            description: String::new(),
            rules,
            include_value,
            placeholder: Placeholder::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn include_value(&self) -> bool {
        self.include_value
    }

    pub fn format(&self, value: &str) -> FormattedResult {
        compose(
            value,
            self.rules.find(value),
            self.include_value,
            &self.placeholder,
        )
    }
}

impl ValueFormatter for ImageFormatter {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> FormatterKind {
        FormatterKind::Image
    }

    fn render(&self, value: &str) -> String {
        self.format(value).markup
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
