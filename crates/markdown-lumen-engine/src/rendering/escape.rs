use std::borrow::Cow;

/// HTML-escapes `&`, `<`, `>` and `"` in author text.
///
/// Runs after diagram extraction, so placeholder tokens pass through intact.
pub fn escape_html(text: &str) -> String {
    match html_escape::encode_double_quoted_attribute(text) {
        Cow::Borrowed(unchanged) => unchanged.to_string(),
        Cow::Owned(escaped) => escaped,
    }
}
