#![forbid(unsafe_code)]

//! Single-placeholder template substitution

use crate::types::Placeholder;

/// Substitutes `value` for the first `{value}` in `template`
///
/// An empty template yields `value` unchanged. Repeated placeholders after
/// the first are left as-is.
pub fn apply_template(value: &str, template: &str) -> String {
    apply_template_with(value, template, &Placeholder::default())
}

/// Same as [`apply_template`] with an explicit placeholder token
pub fn apply_template_with(value: &str, template: &str, placeholder: &Placeholder) -> String {
    if template.is_empty() {
        return value.to_string();
    }
    template.replacen(placeholder.as_str(), value, 1)
}
