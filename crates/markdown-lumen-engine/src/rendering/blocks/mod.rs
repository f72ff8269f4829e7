//! # Block Stages
//!
//! Line-oriented stages and the final block classification.
//!
//! ## Modules
//!
//! - **`kinds`**: one type per block construct owning its syntax
//!   (`Heading`, `CodeFence`, `List`, `Rule`, `Paragraph`)
//! - **`types`**: `Block` and `ListItem`
//!
//! ## Classification
//!
//! After all text stages have run, [`split_blocks`] cuts the text on blank
//! lines. A segment that already starts with block-level markup passes
//! through as-is; a diagram placeholder becomes the rendered diagram; every
//! other segment becomes a paragraph.

pub mod kinds;
pub mod types;

pub use kinds::{CodeFence, Heading, List, Paragraph, Rule};
pub use types::{Block, ListItem};

use crate::diagram::Extraction;

/// Classifies the blank-line separated segments of `text`, in order.
pub fn split_blocks(text: &str, extraction: &Extraction) -> Vec<Block> {
    Paragraph::segments(text)
        .map(|segment| classify(segment, extraction))
        .collect()
}

/// Classifies one trimmed segment.
pub fn classify(segment: &str, extraction: &Extraction) -> Block {
    if let Some(rendered) = extraction.placeholder_markup(segment) {
        return Block::DiagramPlaceholder {
            rendered_markup: rendered.to_string(),
        };
    }

    let markup = segment.to_string();
    let Some(tag) = opening_tag(segment) else {
        return Block::Paragraph { markup };
    };

    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Block::Heading {
            level: tag.as_bytes()[1] - b'0',
            markup,
        },
        "ul" | "ol" | "li" => Block::List { markup },
        "pre" => Block::CodeBlock { markup },
        "div" => Block::Container { markup },
        "hr" => Block::Rule { markup },
        _ => Block::Paragraph { markup },
    }
}

/// Lowercased name of the tag `segment` opens with, if any.
fn opening_tag(segment: &str) -> Option<String> {
    let rest = segment.strip_prefix('<')?;
    let len = rest
        .bytes()
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    if len == 0 {
        return None;
    }
    match rest.as_bytes().get(len) {
        None | Some(b'>') | Some(b'/') => {}
        Some(b) if b.is_ascii_whitespace() => {}
        Some(_) => return None,
    }
    Some(rest[..len].to_ascii_lowercase())
}
