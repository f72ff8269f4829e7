use std::sync::OnceLock;

use regex::Regex;

use crate::rendering::blocks::types::ListItem;

/// List items and list grouping.
///
/// `* ` and `- ` lines become `<li>`, `N. ` lines become
/// `<li class="ordered">`. Afterwards every run of adjacent item lines is
/// wrapped in a single `<ul>`, whatever the kinds in the run.
pub struct List;

impl List {
    pub const OPEN: &'static str = "<ul>";
    pub const CLOSE: &'static str = "</ul>";

    fn unordered_re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^[ \t]*[*-] (.*)$").expect("Invalid list item regex"))
    }

    fn ordered_re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^[ \t]*\d+\. (.*)$").expect("Invalid ordered list item regex")
        })
    }

    /// Recognizes one list line.
    pub fn item(line: &str) -> Option<ListItem> {
        if let Some(caps) = Self::unordered_re().captures(line) {
            return Some(ListItem {
                ordered: false,
                text: caps[1].to_string(),
            });
        }
        Self::ordered_re().captures(line).map(|caps| ListItem {
            ordered: true,
            text: caps[1].to_string(),
        })
    }

    /// Converts item lines and groups adjacent items into lists.
    pub fn apply(text: &str) -> String {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| match Self::item(line) {
                Some(item) => item.to_markup(),
                None => line.to_string(),
            })
            .collect();
        Self::wrap_runs(&lines)
    }

    fn is_item_markup(line: &str) -> bool {
        let t = line.trim();
        t.starts_with("<li") && t.ends_with("</li>")
    }

    /// Wraps each maximal run of item lines in one list container.
    fn wrap_runs(lines: &[String]) -> String {
        let mut out: Vec<&str> = Vec::with_capacity(lines.len());
        let mut in_list = false;

        for line in lines {
            let is_item = Self::is_item_markup(line);
            if is_item && !in_list {
                out.push(Self::OPEN);
            } else if !is_item && in_list {
                out.push(Self::CLOSE);
            }
            in_list = is_item;
            out.push(line);
        }
        if in_list {
            out.push(Self::CLOSE);
        }

        out.join("\n")
    }
}

impl ListItem {
    pub fn to_markup(&self) -> String {
        if self.ordered {
            format!("<li class=\"ordered\">{}</li>", self.text)
        } else {
            format!("<li>{}</li>", self.text)
        }
    }
}
