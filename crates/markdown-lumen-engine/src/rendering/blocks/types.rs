use super::kinds::Paragraph;

/// One blank-line separated unit of transformed output, in document order.
///
/// Block classification happens after every text stage has run, so the
/// payloads are already markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Starts with `<h1>`..`<h6>`.
    Heading { level: u8, markup: String },
    /// Any segment not starting with a block-level tag; wrapped in `<p>`.
    Paragraph { markup: String },
    /// A list container holding one or more adjacent list items.
    List { markup: String },
    /// Starts with `<pre>`.
    CodeBlock { markup: String },
    /// Starts with an author-written `<div>`.
    Container { markup: String },
    /// A rendered diagram, restored from its placeholder.
    DiagramPlaceholder { rendered_markup: String },
    /// Starts with `<hr>`.
    Rule { markup: String },
}

impl Block {
    /// Final markup for this block.
    pub fn to_markup(&self) -> String {
        match self {
            Block::Paragraph { markup } => Paragraph::wrap(markup),
            Block::Heading { markup, .. }
            | Block::List { markup }
            | Block::CodeBlock { markup }
            | Block::Container { markup }
            | Block::Rule { markup } => markup.clone(),
            Block::DiagramPlaceholder { rendered_markup } => rendered_markup.clone(),
        }
    }
}

/// One list line after the list stage, before runs are grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// `N. ` rather than `* ` / `- `.
    pub ordered: bool,
    pub text: String,
}
