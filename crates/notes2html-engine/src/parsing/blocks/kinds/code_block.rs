/// Code block syntax: a content line starting with a single `*` opens a
/// verbatim block that runs until a line ending with `*`.
pub struct CodeBlock;

impl CodeBlock {
    /// The single-character delimiter.
    pub const DELIM: char = '*';
    /// A doubled delimiter starts strong emphasis, never code.
    pub const STRONG: &'static str = "**";
    /// An escaped delimiter is literal text.
    pub const ESCAPED: &'static str = "\\*";

    /// Whether level-stripped content opens a code block.
    pub fn opens(content: &str) -> bool {
        content.starts_with(Self::DELIM) && !content.starts_with(Self::STRONG)
    }

    /// Whether a line ends with an unescaped delimiter.
    pub fn closes(line: &str) -> bool {
        line.ends_with(Self::DELIM) && !line.ends_with(Self::ESCAPED)
    }

    /// Splits an opening line into its first code line and whether the block
    /// also closes on this line.
    ///
    /// Callers must check [`CodeBlock::opens`] first.
    pub fn open(content: &str) -> (&str, bool) {
        let rest = &content[Self::DELIM.len_utf8()..];
        if Self::closes(rest) {
            (Self::strip_close(rest), true)
        } else {
            (rest, false)
        }
    }

    /// Removes the closing delimiter, keeping the rest of the line verbatim.
    pub fn strip_close(line: &str) -> &str {
        line.strip_suffix(Self::DELIM).unwrap_or(line)
    }
}
