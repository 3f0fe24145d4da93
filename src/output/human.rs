#![forbid(unsafe_code)]

//! Human-readable output with colored status marks

use crate::engine::BatchResult;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human output formatter writing to any color-capable sink
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Writes a green check mark followed by `message`
    pub fn write_pass(&self, out: &mut dyn WriteColor, message: &str) -> io::Result<()> {
        self.write_mark(out, "✓", Color::Green, message)
    }

    /// Writes a red cross followed by `message`
    pub fn write_fail(&self, out: &mut dyn WriteColor, message: &str) -> io::Result<()> {
        self.write_mark(out, "✗", Color::Red, message)
    }

    fn write_mark(
        &self,
        out: &mut dyn WriteColor,
        mark: &str,
        color: Color,
        message: &str,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{}", mark)?;
        out.reset()?;
        writeln!(out, " {}", message)
    }

    /// One markup line per value, optionally followed by the stylesheet
    pub fn format_batch(&self, result: &BatchResult, include_css: bool) -> String {
        let mut output = String::new();
        for row in &result.rows {
            output.push_str(&row.markup);
            output.push('\n');
        }
        if include_css && !result.stylesheet.is_empty() {
            output.push('\n');
            output.push_str(&result.stylesheet.to_css());
        }
        output
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RenderedValue;
    use crate::format::{StyleRule, StyleSheet};
    use termcolor::Buffer;

    #[test]
    fn test_write_marks_without_color() {
        let formatter = HumanFormatter::new();
        let mut buffer = Buffer::no_color();
        formatter.write_pass(&mut buffer, "config is valid").unwrap();
        formatter.write_fail(&mut buffer, "bad pattern").unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(text, "✓ config is valid\n✗ bad pattern\n");
    }

    #[test]
    fn test_write_marks_with_ansi() {
        let mut buffer = Buffer::ansi();
        HumanFormatter::new().write_pass(&mut buffer, "ok").unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.ends_with(" ok\n"));
    }

    #[test]
    fn test_format_batch() {
        let mut stylesheet = StyleSheet::new();
        stylesheet.insert(StyleRule::background("c-", "F00"));
        let result = BatchResult {
            rows: vec![RenderedValue {
                value: "KO".to_string(),
                markup: "c-F00".to_string(),
            }],
            stylesheet,
        };
        let formatter = HumanFormatter::new();
        assert_eq!(formatter.format_batch(&result, false), "c-F00\n");
        assert_eq!(
            formatter.format_batch(&result, true),
            "c-F00\n\n.c-F00 { background-color: #F00; }\n"
        );
    }
}
