use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Ordinary fenced code blocks.
///
/// Diagram fences never reach this stage; they are replaced during
/// extraction. The body runs to the next fence, so an unterminated fence
/// stays literal text.
pub struct CodeFence;

impl CodeFence {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"(?s)```[ \t]*([A-Za-z0-9_+#.-]*)[^\n`]*\n(.*?)```")
                .expect("Invalid code fence regex")
        })
    }

    /// Rewrites every fence as `<pre><code>..</code></pre>`, tagging the
    /// language from the info string when there is one.
    pub fn apply(text: &str) -> String {
        Self::re()
            .replace_all(text, |caps: &Captures<'_>| {
                let body = caps[2].strip_suffix('\n').unwrap_or(&caps[2]);
                match &caps[1] {
                    "" => format!("<pre><code>{body}</code></pre>"),
                    lang => format!("<pre><code class=\"language-{lang}\">{body}</code></pre>"),
                }
            })
            .into_owned()
    }
}
