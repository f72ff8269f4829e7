use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule: a line that is exactly `---`.
pub struct Rule;

impl Rule {
    pub const MARKUP: &'static str = "<hr>";

    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"(?m)^---$").expect("Invalid rule regex"))
    }

    pub fn apply(text: &str) -> String {
        Self::re().replace_all(text, Self::MARKUP).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_line_becomes_hr() {
        assert_eq!(Rule::apply("a\n---\nb"), "a\n<hr>\nb");
    }

    #[test]
    fn only_exact_lines_are_rules() {
        assert_eq!(Rule::apply("----"), "----");
        assert_eq!(Rule::apply("--- x"), "--- x");
        assert_eq!(Rule::apply("a ---"), "a ---");
    }
}
