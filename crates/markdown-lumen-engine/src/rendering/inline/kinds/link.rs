/// Link inline type, `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const MIDDLE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
    /// Links always open in a new browsing context.
    pub const TARGET: &'static str = "_blank";
    /// No opener handle and no referrer for the linked page.
    pub const REL: &'static str = "noopener noreferrer";
}
