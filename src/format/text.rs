#![forbid(unsafe_code)]

//! Small text and markup helpers

use crate::format::template::apply_template_with;
use crate::types::Placeholder;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\s)([a-z])").expect("word start pattern is valid"));

/// Placeholder used in confirmation question templates
pub const CAPTION_PLACEHOLDER: &str = "{caption}";

/// Uppercases an ASCII lowercase letter at the start of the text or after whitespace
pub fn capitalize_words(text: &str) -> String {
    WORD_START
        .replace_all(text, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
        })
        .into_owned()
}

/// Markup for a check mark cell
pub fn checkbox_markup(checked: bool) -> String {
    if checked {
        "<div class=\"cell-check cell-check-on\"></div>".to_string()
    } else {
        "<div class=\"cell-check\"></div>".to_string()
    }
}

/// Interprets a cell value as a boolean flag
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Builds a confirmation question from a template and an optional caption
///
/// The first `{caption}` is replaced when a caption is given; otherwise the
/// template is returned as-is.
pub fn question_text(template: &str, caption: Option<&str>) -> String {
    match caption {
        Some(caption) if template.contains(CAPTION_PLACEHOLDER) => {
            apply_template_with(caption, template, &Placeholder::new(CAPTION_PLACEHOLDER))
        }
        _ => template.to_string(),
    }
}
