pub struct Strong;

impl Strong {
    pub const MARKER: &'static [u8; 2] = b"**";
    pub const ESCAPED_DELIM: &'static [u8; 2] = b"\\*";
    pub const OPEN_TAG: &'static str = "<strong>";
    pub const CLOSE_TAG: &'static str = "</strong>";
}
