use std::sync::OnceLock;

use regex::Regex;

/// Content rendering strategy selected by the title line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Nested bullet lists.
    #[default]
    List,
    /// Paragraphs and block code.
    Narrative,
}

/// The note title and the mode it selects.
///
/// `text` is the raw captured text; escaping happens at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    pub text: String,
    pub mode: Mode,
}

/// Marker appended directly after the closing `*` to select narrative mode.
pub const NARRATIVE_MARKER: &str = "narrative";

/// Extracts the title from the first line of a note.
///
/// Anything that does not look like `*text*` (optionally followed by
/// `narrative`) yields an empty title in list mode rather than an error.
pub fn extract_title<S: AsRef<str>>(lines: &[S]) -> Title {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    let title_regex = TITLE_REGEX.get_or_init(|| {
        Regex::new(&format!(r"^\*(.*?)\*({NARRATIVE_MARKER})?")).expect("Invalid title regex")
    });

    let Some(first) = lines.first() else {
        return Title::default();
    };

    match title_regex.captures(first.as_ref()) {
        Some(caps) => Title {
            text: caps[1].to_string(),
            mode: if caps.get(2).is_some() {
                Mode::Narrative
            } else {
                Mode::List
            },
        },
        None => Title::default(),
    }
}
