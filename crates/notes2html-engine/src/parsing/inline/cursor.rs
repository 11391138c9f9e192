/// A byte cursor for inline scanning.
///
/// Only ASCII markers are ever matched, so every position the scanner stops
/// at is a valid `char` boundary of `s`.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances past the current character.
    pub fn bump(&mut self) {
        if let Some(c) = self.s.get(self.i..).and_then(|rest| rest.chars().next()) {
            self.i += c.len_utf8();
        }
    }

    /// Advances by `n` bytes; callers only skip ASCII markers.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
