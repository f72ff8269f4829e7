//! # Diagram Blocks
//!
//! Fenced diagram blocks are pulled out of the document before any other
//! transformation so that their bodies are never treated as ordinary code.
//!
//! ## Modules
//!
//! - **`model`**: `GraphModel` (insertion-ordered nodes, declaration-ordered edges)
//! - **`parser`**: flowchart line patterns to `GraphModel`
//! - **`layout`**: fixed 3-column grid placement
//! - **`render`**: SVG card with a source disclosure, or a source-only fallback
//!
//! ## Placeholders
//!
//! [`extract_diagrams`] replaces every diagram with a placeholder token and
//! keeps the rendered markup aside, so the block and inline stages cannot
//! rewrite it. [`Extraction::restore`] puts the markup back.

pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

pub use layout::{LayoutPosition, layout};
pub use model::{Edge, GraphModel};
pub use parser::parse;
pub use render::{DiagramKind, DiagramView, render_diagram};

use crate::rendering::RenderOptions;

/// Delimiter line shared by diagram and code fences.
pub const FENCE: &str = "```";

/// Brackets placeholder tokens. Stripped from input before extraction.
pub(crate) const PLACEHOLDER_MARK: char = '\u{1A}';

/// Text with diagrams swapped for placeholders, plus their rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    /// Rendered markup, indexed by diagram ordinal.
    pub diagrams: Vec<String>,
}

impl Extraction {
    /// Replaces every placeholder in `text` with its rendered diagram.
    pub fn restore(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (index, markup) in self.diagrams.iter().enumerate() {
            out = out.replace(&placeholder(index), markup);
        }
        out
    }

    /// Returns the rendered markup if `segment` is exactly one placeholder.
    pub fn placeholder_markup(&self, segment: &str) -> Option<&str> {
        let index = placeholder_index(segment.trim())?;
        self.diagrams.get(index).map(String::as_str)
    }
}

pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_MARK}diagram:{index}{PLACEHOLDER_MARK}")
}

fn placeholder_index(token: &str) -> Option<usize> {
    token
        .strip_prefix(PLACEHOLDER_MARK)?
        .strip_suffix(PLACEHOLDER_MARK)?
        .strip_prefix("diagram:")?
        .parse()
        .ok()
}

/// Replaces every diagram fence with its rendered markup.
pub fn extract(text: &str, options: &RenderOptions) -> String {
    let extraction = extract_diagrams(text, options);
    extraction.restore(&extraction.text)
}

/// Finds diagram fences and renders each one, leaving placeholders behind.
///
/// A fence is `` ```<language>\n<body>\n``` ``, matched leftmost-first and
/// non-greedy: the body ends at the first following newline-plus-fence.
/// An opening fence with no closing fence is left untouched.
pub fn extract_diagrams(text: &str, options: &RenderOptions) -> Extraction {
    let language = options.diagram_language.trim();
    if language.is_empty() {
        return Extraction {
            text: text.to_string(),
            diagrams: vec![],
        };
    }

    let open = format!("{FENCE}{language}\n");
    let close = format!("\n{FENCE}");

    let mut out = String::with_capacity(text.len());
    let mut diagrams = vec![];
    let mut rest = text;

    while let Some(start) = rest.find(&open) {
        let body_start = start + open.len();
        let Some(body_len) = rest[body_start..].find(&close) else {
            break;
        };
        let body = &rest[body_start..body_start + body_len];

        out.push_str(&rest[..start]);
        out.push_str(&placeholder(diagrams.len()));
        diagrams.push(render_block(diagrams.len(), body, options));

        rest = &rest[body_start + body_len + close.len()..];
    }
    out.push_str(rest);

    Extraction {
        text: out,
        diagrams,
    }
}

/// Renders one diagram body. `index` becomes part of the element id.
fn render_block(index: usize, source: &str, options: &RenderOptions) -> String {
    let id = format!("diagram-{index}");
    let kind = DiagramKind::detect(source);
    let graph = match kind {
        DiagramKind::Flowchart => parse(source),
        DiagramKind::Unsupported => GraphModel::default(),
    };
    let positions = layout(graph.node_order());

    log::debug!(
        "diagram {index}: {kind:?}, {} nodes, {} edges",
        graph.nodes().len(),
        graph.edges().len()
    );

    render_diagram(&DiagramView {
        id: &id,
        source,
        kind,
        graph: &graph,
        layout: &positions,
        escape_source: options.escape_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn text_without_diagrams_is_unchanged() {
        let text = "# Title\n\n```rust\nfn main() {}\n```\n";
        assert_eq!(extract(text, &options()), text);
        assert!(extract_diagrams(text, &options()).diagrams.is_empty());
    }

    #[test]
    fn diagram_is_replaced_in_place() {
        let text = "before\n```mermaid\nflowchart\nA[Start]\n```\nafter";
        let e = extract_diagrams(text, &options());
        assert_eq!(e.diagrams.len(), 1);
        assert_eq!(e.text, format!("before\n{}\nafter", placeholder(0)));

        let restored = extract(text, &options());
        assert!(restored.starts_with("before\n<div class=\"diagram diagram-flowchart\""));
        assert!(restored.ends_with("</div>\nafter"));
    }

    #[test]
    fn each_diagram_gets_its_own_index() {
        let text = "```mermaid\nflowchart\nA[One]\n```\n\n```mermaid\npie\n```";
        let e = extract_diagrams(text, &options());
        assert_eq!(e.diagrams.len(), 2);
        assert!(e.diagrams[0].contains("id=\"diagram-0\""));
        assert!(e.diagrams[1].contains("id=\"diagram-1\""));
        assert!(e.diagrams[1].contains("diagram-unsupported"));
    }

    #[test]
    fn match_is_non_greedy() {
        let text = "```mermaid\nflowchart\nA[One]\n```\nmiddle\n```mermaid\nflowchart\nB[Two]\n```";
        let e = extract_diagrams(text, &options());
        assert_eq!(e.diagrams.len(), 2);
        assert!(e.text.contains("\nmiddle\n"));
        assert!(e.diagrams[0].contains("One"));
        assert!(!e.diagrams[0].contains("Two"));
    }

    #[test]
    fn unterminated_fence_is_left_alone() {
        let text = "```mermaid\nflowchart\nA[Start]";
        assert_eq!(extract(text, &options()), text);
    }

    #[test]
    fn empty_body_is_still_a_diagram() {
        let e = extract_diagrams("```mermaid\n\n```", &options());
        assert_eq!(e.diagrams.len(), 1);
        assert!(e.diagrams[0].contains("diagram-unsupported"));
    }

    #[test]
    fn other_fences_are_not_diagrams() {
        let text = "```mermaid-like\nflowchart\n```\n```js\nflowchart\n```";
        assert_eq!(extract(text, &options()), text);
    }

    #[test]
    fn language_tag_is_configurable() {
        let opts = RenderOptions {
            diagram_language: "flow".to_string(),
            ..RenderOptions::default()
        };
        let e = extract_diagrams("```flow\nflowchart\nA[x]\n```", &opts);
        assert_eq!(e.diagrams.len(), 1);
        let e = extract_diagrams("```mermaid\nflowchart\nA[x]\n```", &opts);
        assert!(e.diagrams.is_empty());
    }

    #[test]
    fn placeholder_markup_only_matches_whole_tokens() {
        let e = extract_diagrams("```mermaid\npie\n```", &options());
        assert!(e.placeholder_markup(&placeholder(0)).is_some());
        assert!(e.placeholder_markup(&format!("  {}\n", placeholder(0))).is_some());
        assert!(e.placeholder_markup(&format!("x {}", placeholder(0))).is_none());
        assert!(e.placeholder_markup(&placeholder(1)).is_none());
    }
}
