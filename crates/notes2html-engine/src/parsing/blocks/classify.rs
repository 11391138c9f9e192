use crate::error::ParseError;

/// Indentation tier of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// No leading spaces: a section heading.
    First,
    /// Four leading spaces: a list item or paragraph.
    Second,
    /// Eight leading spaces: a nested list item.
    Third,
}

impl Level {
    /// Maps an exact leading-space count to a level.
    pub fn from_indent(count: usize) -> Option<Self> {
        match count {
            0 => Some(Level::First),
            4 => Some(Level::Second),
            8 => Some(Level::Third),
            _ => None,
        }
    }
}

/// Tab substitutions, longest run first.
///
/// This is a fixed table, not a tab width: one tab is a single space but two
/// tabs are five and three tabs are nine.
const TAB_SUBSTITUTIONS: [(&str, &str); 3] = [
    ("\t\t\t", "         "),
    ("\t\t", "     "),
    ("\t", " "),
];

/// Strips the line terminator and applies [`TAB_SUBSTITUTIONS`] in order.
pub fn normalize_tabs(raw: &str) -> String {
    let mut line = raw.trim_end_matches(['\r', '\n']).to_string();
    for (tabs, spaces) in TAB_SUBSTITUTIONS {
        if line.contains(tabs) {
            line = line.replace(tabs, spaces);
        }
    }
    line
}

/// Classification of a single note line containing only local facts.
///
/// Each line is classified independently; the section builder decides what
/// the facts mean given its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line after tab normalization, without its terminator.
    pub text: String,
    /// Whether the line is empty or whitespace only.
    pub is_blank: bool,
    /// Count of leading space characters.
    pub indent: usize,
}

impl LineClass {
    /// Resolves the indentation tier, failing on any count other than 0, 4 or 8.
    pub fn level(&self) -> Result<Level, ParseError> {
        Level::from_indent(self.indent).ok_or_else(|| self.unsupported_indentation())
    }

    /// Text after the leading indentation.
    pub fn content(&self) -> &str {
        &self.text[self.indent..]
    }

    pub fn unsupported_indentation(&self) -> ParseError {
        ParseError::UnsupportedIndentation {
            count: self.indent,
            line: self.text.clone(),
        }
    }
}

/// Classifies individual note lines for the section builder.
pub struct NoteLineClassifier;

impl NoteLineClassifier {
    /// Classifies a raw line into a [`LineClass`].
    pub fn classify(&self, raw: &str) -> LineClass {
        let text = normalize_tabs(raw);
        let is_blank = text.trim().is_empty();
        let indent = text.bytes().take_while(|b| *b == b' ').count();

        LineClass {
            text,
            is_blank,
            indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\tx", " x")]
    #[case("\t\tx", "     x")]
    #[case("\t\t\tx", "         x")]
    #[case("\t\t\t\tx", "          x")]
    #[case("a\tb", "a b")]
    #[case("plain\r\n", "plain")]
    fn tabs_follow_substitution_table(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_tabs(raw), expected);
    }

    #[rstest]
    #[case("heading", Level::First)]
    #[case("    item", Level::Second)]
    #[case("        nested", Level::Third)]
    #[case("\t\t   nested", Level::Third)]
    #[case("\t   item", Level::Second)]
    fn supported_indentation_maps_to_level(#[case] raw: &str, #[case] expected: Level) {
        let lc = NoteLineClassifier.classify(raw);
        assert_eq!(lc.level().unwrap(), expected);
    }

    #[rstest]
    #[case(" bravo", 1)]
    #[case("  bravo", 2)]
    #[case("\t\tbravo", 5)]
    #[case("            bravo", 12)]
    fn unsupported_indentation_reports_count_and_line(#[case] raw: &str, #[case] count: usize) {
        let lc = NoteLineClassifier.classify(raw);
        let err = lc.level().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedIndentation {
                count,
                line: lc.text.clone(),
            }
        );
    }

    #[test]
    fn content_strips_indentation() {
        let lc = NoteLineClassifier.classify("    charlie  delta");
        assert_eq!(lc.content(), "charlie  delta");
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert!(NoteLineClassifier.classify("").is_blank);
        assert!(NoteLineClassifier.classify("      ").is_blank);
        assert!(NoteLineClassifier.classify("\t").is_blank);
        assert!(!NoteLineClassifier.classify("    x").is_blank);
    }
}
