use crate::rendering::span::Span;

use super::kinds::Link;

/// An inline span recognized by one of the inline stages.
///
/// Spans point into the text the stage was given; text between nodes is
/// copied through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// `**inner**`
    Strong { full: Span, inner: Span },
    /// `*inner*`
    Emphasis { full: Span, inner: Span },
    /// `` `inner` ``. Only the delimiters are replaced; the content is kept.
    CodeSpan { full: Span, inner: Span },
    /// `[text](href)`
    Link { full: Span, text: Span, href: Span },
}

impl InlineNode {
    /// Full span including delimiters.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::CodeSpan { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }

    /// Appends the markup for this node to `out`.
    pub fn render_into(&self, s: &str, out: &mut String) {
        match self {
            InlineNode::Strong { inner, .. } => wrap(out, "strong", inner.slice(s)),
            InlineNode::Emphasis { inner, .. } => wrap(out, "em", inner.slice(s)),
            InlineNode::CodeSpan { inner, .. } => wrap(out, "code", inner.slice(s)),
            InlineNode::Link { text, href, .. } => {
                out.push_str("<a href=\"");
                out.push_str(href.slice(s));
                out.push_str("\" target=\"");
                out.push_str(Link::TARGET);
                out.push_str("\" rel=\"");
                out.push_str(Link::REL);
                out.push_str("\">");
                out.push_str(text.slice(s));
                out.push_str("</a>");
            }
        }
    }
}

fn wrap(out: &mut String, tag: &str, inner: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
