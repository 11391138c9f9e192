//! # Inline Parsing
//!
//! Per-line escaping and strong emphasis.
//!
//! A content line goes through three steps, in this order:
//!
//! 1. HTML-escape reserved characters (`&`, `<`, `>`, `"`, `'`)
//! 2. Scan for `**strong**` spans with [`parse_inline`]
//! 3. Render, turning each `\*` into a literal `*`
//!
//! Unescaping last means an escaped delimiter can never become an emphasis
//! boundary. None of the reserved characters are markers, so escaping first
//! does not change what the scanner sees.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, EscapedDelimiter, Strong)
//! - **`kinds`**: `Strong` marker constants
//! - **`cursor`**: `Cursor` for byte scanning
//! - **`parser`**: `parse_inline()` with `try_parse_strong`

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineNode, Span};

use kinds::Strong;

/// HTML-escapes reserved characters, leaving everything else untouched.
pub fn escape_html(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Escapes one content line and applies strong emphasis.
pub fn render_inline(line: &str) -> String {
    let escaped = escape_html(line);
    let mut out = String::with_capacity(escaped.len());

    for node in parse_inline(&escaped) {
        match node {
            InlineNode::Text(span) => out.push_str(span.slice(&escaped)),
            InlineNode::EscapedDelimiter(_) => out.push('*'),
            InlineNode::Strong { inner, .. } => {
                out.push_str(Strong::OPEN_TAG);
                out.push_str(&unescape_delimiters(inner.slice(&escaped)));
                out.push_str(Strong::CLOSE_TAG);
            }
        }
    }
    out
}

fn unescape_delimiters(s: &str) -> String {
    s.replace("\\*", "*")
}
