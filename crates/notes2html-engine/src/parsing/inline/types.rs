/// A byte range `[start, end)` into the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` with this span.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

/// A parsed inline node with byte spans into the scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text outside any construct.
    Text(Span),
    /// A backslash-escaped delimiter, rendered as a literal `*`.
    EscapedDelimiter(Span),
    /// A `**strong**` span.
    Strong {
        /// Full span including both markers.
        full: Span,
        /// Content between the markers; never empty.
        inner: Span,
    },
}
