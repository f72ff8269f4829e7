//! # Rendering Pipeline
//!
//! Turns a document into markup with an ordered list of pure text stages.
//!
//! ## Pipeline
//!
//! 1. **Normalize**: `\r\n` becomes `\n`; placeholder marks are removed from input
//! 2. **Extract**: diagram fences become placeholders (see [`crate::diagram`])
//! 3. **Escape**: optional, see [`RenderOptions::escape_html`]
//! 4. **Stages**: [`STAGES`], each a `&str -> String` function, in order
//! 5. **Classify**: blank-line separated segments become [`Block`]s
//! 6. **Restore**: placeholders are replaced with rendered diagrams
//!
//! ## Modules
//!
//! - **`blocks`**: line-oriented stages and block classification
//! - **`inline`**: single-line span stages (strong, emphasis, code, links)
//! - **`escape`**: HTML escaping of author text
//! - **`span`**: byte ranges used by the inline scanner
//!
//! Every function here is total: malformed input degrades to literal text.

pub mod blocks;
pub mod escape;
pub mod inline;
pub mod span;

#[cfg(test)]
mod tests;

use crate::diagram::{self, PLACEHOLDER_MARK};

pub use blocks::{Block, ListItem, classify, split_blocks};

use blocks::{CodeFence, Heading, List, Rule};

/// Options for one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape author text and diagram source before the stages run.
    ///
    /// Off by default: raw HTML in the document passes through unchanged.
    pub escape_html: bool,
    /// Info string that marks a fence as a diagram.
    pub diagram_language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_html: false,
            diagram_language: "mermaid".to_string(),
        }
    }
}

/// A pure text transformation.
pub type Stage = fn(&str) -> String;

/// Transformer stages in the order they run.
pub const STAGES: [(&str, Stage); 8] = [
    ("headings", Heading::apply),
    ("strong", inline::strong),
    ("emphasis", inline::emphasis),
    ("code_spans", inline::code_spans),
    ("code_fences", CodeFence::apply),
    ("lists", List::apply),
    ("links", inline::links),
    ("rules", Rule::apply),
];

/// Runs every stage in [`STAGES`] over `text`.
pub fn transform(text: &str) -> String {
    STAGES
        .iter()
        .fold(text.to_string(), |acc, (name, stage)| {
            let next = stage(&acc);
            if next != acc {
                log::trace!("stage {name} rewrote {} -> {} bytes", acc.len(), next.len());
            }
            next
        })
}

/// Renders `raw` with [`RenderOptions::default`].
pub fn render(raw: &str) -> String {
    render_with(raw, &RenderOptions::default())
}

/// Renders `raw` to markup. Never fails.
pub fn render_with(raw: &str, options: &RenderOptions) -> String {
    let normalized: String = raw
        .replace("\r\n", "\n")
        .chars()
        .filter(|&c| c != PLACEHOLDER_MARK)
        .collect();

    let extraction = diagram::extract_diagrams(&normalized, options);
    log::debug!("extracted {} diagram(s)", extraction.diagrams.len());

    let text = if options.escape_html {
        escape::escape_html(&extraction.text)
    } else {
        extraction.text.clone()
    };

    let transformed = transform(&text);
    let blocks = split_blocks(&transformed, &extraction);
    log::debug!("classified {} block(s)", blocks.len());

    let markup = blocks
        .iter()
        .map(Block::to_markup)
        .collect::<Vec<_>>()
        .join("\n");

    // Placeholders inside a larger segment were not classified on their own.
    extraction.restore(&markup)
}
