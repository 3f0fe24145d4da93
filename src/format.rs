#![forbid(unsafe_code)]

//! Value formatters: templates, image annotation, colors, times and text helpers

pub mod color;
mod formatter;
pub mod image;
mod registry;
pub mod template;
pub mod text;
pub mod time;

pub use color::{ColorFormatter, StyleRule, StyleSheet, color_style_rule};
pub use formatter::{
    CheckboxFormatter, MatchFormatter, TemplateFormatter, TimeFormatter, ValueFormatter,
};
pub use image::{FormattedResult, ImageFormatter, format_with_image};
pub use registry::FormatterRegistry;
pub use template::{apply_template, apply_template_with};
pub use time::format_time;
