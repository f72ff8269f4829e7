/// Strong emphasis, `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// Emphasis, `*text*`. A star touching another star is not a delimiter.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
}
