use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// Paragraphs are the default block: any blank-line separated segment that
/// does not already start with block-level markup.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>";

    fn boundary_re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\n[ \t]*\n").expect("Invalid paragraph boundary regex"))
    }

    /// Splits on blank lines, yielding trimmed non-empty segments in order.
    pub fn segments(text: &str) -> impl Iterator<Item = &str> {
        Self::boundary_re()
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn wrap(markup: &str) -> String {
        format!("{}{markup}{}", Self::OPEN, Self::CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines() {
        let segs: Vec<_> = Paragraph::segments("Line one\n\nLine two").collect();
        assert_eq!(segs, vec!["Line one", "Line two"]);
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        let segs: Vec<_> = Paragraph::segments("a\n  \t\nb\n\n\n\nc").collect();
        assert_eq!(segs, vec!["a", "b", "c"]);
    }

    #[test]
    fn single_newline_stays_in_segment() {
        let segs: Vec<_> = Paragraph::segments("a\nb").collect();
        assert_eq!(segs, vec!["a\nb"]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert_eq!(Paragraph::segments("").count(), 0);
        assert_eq!(Paragraph::segments("\n\n \n").count(), 0);
    }
}
