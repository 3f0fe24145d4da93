#![forbid(unsafe_code)]

//! Time display normalization

/// Formats an `hh:mm:ss` time according to `format`
///
/// Only two aspects of `format` are honored: the separator (`:` wins over
/// `.`) and whether seconds are shown (presence of `s`). Without seconds the
/// first five characters are kept.
pub fn format_time(time: &str, format: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    let normalized = if format.contains(':') {
        time.replace('.', ":")
    } else if format.contains('.') {
        time.replace(':', ".")
    } else {
        time.to_string()
    };

    if format.contains('s') {
        normalized
    } else {
        normalized.chars().take(5).collect()
    }
}
