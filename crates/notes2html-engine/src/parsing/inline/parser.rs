use super::{
    cursor::Cursor,
    kinds::Strong,
    types::{InlineNode, Span},
};

/// Parses one content line into a sequence of [`InlineNode`]s.
///
/// Escaped delimiters are consumed before anything else, so `\*` can never
/// act as half of a `**` marker. Strong spans pair the leftmost `**` with the
/// next unescaped `**`, provided the content between them is non-empty;
/// an unmatched marker is left as text.
///
/// The returned nodes cover the entire input in order.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.starts_with(Strong::ESCAPED_DELIM) {
            let start = cur.pos();
            flush_text(&mut out, text_start, start);
            cur.bump_n(Strong::ESCAPED_DELIM.len());
            out.push(InlineNode::EscapedDelimiter(Span {
                start,
                end: cur.pos(),
            }));
            text_start = cur.pos();
            continue;
        }
        if let Some(node) = try_parse_strong(&mut cur) {
            let full = span_of(&node);
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn span_of(n: &InlineNode) -> Span {
    match n {
        InlineNode::Text(sp) => *sp,
        InlineNode::EscapedDelimiter(sp) => *sp,
        InlineNode::Strong { full, .. } => *full,
    }
}

/// Attempts to parse a strong span starting at the current position.
///
/// Returns `None` if not at `**`, if the span is never closed, or if it is
/// empty. On failure, cursor position is restored.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::MARKER) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Strong::MARKER.len());
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.starts_with(Strong::ESCAPED_DELIM) {
            cur.bump_n(Strong::ESCAPED_DELIM.len());
            continue;
        }
        if cur.starts_with(Strong::MARKER) {
            break;
        }
        cur.bump();
    }
    let inner = Span {
        start: inner_start,
        end: cur.pos(),
    };

    if !cur.starts_with(Strong::MARKER) || inner.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump_n(Strong::MARKER.len());

    Some(InlineNode::Strong {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![InlineNode::Text(sp(0, 11))]);
    }

    #[test]
    fn parse_empty_line() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_strong_between_text() {
        let nodes = parse_inline("a **b** c");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(sp(0, 2)),
                InlineNode::Strong {
                    full: sp(2, 7),
                    inner: sp(4, 5),
                },
                InlineNode::Text(sp(7, 9)),
            ]
        );
    }

    #[test]
    fn parse_multiple_strong_spans_left_to_right() {
        let nodes = parse_inline("**a** **b**");
        let strong: Vec<_> = nodes
            .iter()
            .filter(|n| matches!(n, InlineNode::Strong { .. }))
            .collect();
        assert_eq!(strong.len(), 2);
    }

    #[test]
    fn unmatched_marker_is_text() {
        assert_eq!(parse_inline("a ** b"), vec![InlineNode::Text(sp(0, 6))]);
    }

    #[test]
    fn empty_strong_is_text() {
        assert_eq!(parse_inline("****"), vec![InlineNode::Text(sp(0, 4))]);
    }

    #[test]
    fn single_delimiter_is_text() {
        assert_eq!(parse_inline("a*b"), vec![InlineNode::Text(sp(0, 3))]);
    }

    #[test]
    fn escaped_delimiters_are_never_markers() {
        let nodes = parse_inline("\\*\\*x\\*\\*");
        assert_eq!(
            nodes,
            vec![
                InlineNode::EscapedDelimiter(sp(0, 2)),
                InlineNode::EscapedDelimiter(sp(2, 4)),
                InlineNode::Text(sp(4, 5)),
                InlineNode::EscapedDelimiter(sp(5, 7)),
                InlineNode::EscapedDelimiter(sp(7, 9)),
            ]
        );
    }

    #[test]
    fn escaped_delimiter_inside_strong_stays_inside() {
        let nodes = parse_inline("**a\\*b**");
        assert_eq!(
            nodes,
            vec![InlineNode::Strong {
                full: sp(0, 8),
                inner: sp(2, 6),
            }]
        );
    }

    #[test]
    fn nodes_cover_entire_input() {
        let s = "x **é** \\* ** y";
        let nodes = parse_inline(s);
        let mut pos = 0;
        for n in &nodes {
            let span = span_of(n);
            assert_eq!(span.start, pos);
            pos = span.end;
        }
        assert_eq!(pos, s.len());
    }
}
