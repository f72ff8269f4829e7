//! # Inline Kinds
//!
//! Inline span types that own their delimiters. The parser refers to these
//! constants and never hardcodes `**`, `` ` `` or `](`.
//!
//! - **`Strong`**: `DELIM = b"**"`
//! - **`Emphasis`**: `STAR = b'*'`
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`Link`**: `OPEN = b'['`, `MIDDLE = b"]("`, `CLOSE = b')'`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
