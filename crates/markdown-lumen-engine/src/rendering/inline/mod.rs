//! # Inline Stages
//!
//! Cursor-based rewriting of inline spans. Each public stage function
//! handles exactly one construct and leaves everything else in place:
//!
//! - [`strong`]: `**text**` to `<strong>`
//! - [`emphasis`]: `*text*` to `<em>`
//! - [`code_spans`]: `` `text` `` to `<code>`
//! - [`links`]: `[text](url)` to an anchor opening in a new context
//!
//! ## Rules shared by all stages
//!
//! - Spans never cross a line break.
//! - An opening delimiter must be followed by non-whitespace and a closing
//!   delimiter preceded by non-whitespace, so `2 * 3 * 4` and list markers
//!   stay literal.
//! - Unclosed delimiters are copied through as text.
//!
//! Stages run in sequence, so later stages see markup produced by earlier
//! ones (for example a `**` inside backticks is already `<strong>` by the
//! time code spans are scanned).

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{code_spans, emphasis, links, strong};
pub use types::InlineNode;
