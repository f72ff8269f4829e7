use std::sync::OnceLock;

use regex::{Captures, Regex};

/// ATX-style headings, levels 1 to 3 only.
///
/// The marker run must be followed by a space, so `####` lines and `#tag`
/// are left alone.
pub struct Heading;

impl Heading {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"(?m)^(#{1,3}) (.*)$").expect("Invalid heading regex"))
    }

    /// Rewrites every heading line as `<hN>text</hN>`.
    pub fn apply(text: &str) -> String {
        Self::re()
            .replace_all(text, |caps: &Captures<'_>| {
                let level = caps[1].len();
                format!("<h{level}>{}</h{level}>", caps[2].trim())
            })
            .into_owned()
    }
}
