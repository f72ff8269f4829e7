/// Code span inline type with owned delimiter constant.
///
/// Only a run of exactly one backtick opens or closes a span, so fence
/// lines (three backticks) are never read as inline code.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
