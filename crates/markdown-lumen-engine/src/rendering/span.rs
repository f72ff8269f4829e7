/// A byte range `[start, end)` into the text being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Slices `s` with this span.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
