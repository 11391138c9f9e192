/// A fatal failure while parsing a single note.
///
/// Every variant embeds the literal text of the offending line so callers can
/// report it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Leading space count is not 0, 4 or 8 (or 8 in narrative mode).
    #[error("Unsupported number of spaces [{count}] in line [{line}]")]
    UnsupportedIndentation { count: usize, line: String },

    /// A heading was closed without any content line below it.
    #[error("Failed to parse, found title[{heading}] with no text")]
    EmptySection { heading: String },

    /// A content line appeared before the first heading.
    #[error("Failed to parse, found text[{line}] before any title")]
    ContentBeforeHeading { line: String },
}
