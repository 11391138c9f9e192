pub mod blocks;
pub mod inline;
pub mod title;

use crate::error::ParseError;
use crate::render::{RenderOptions, render_document};

use blocks::{Document, NoteLineClassifier, SectionBuilder};
use title::extract_title;

/// Parses a whole note into its structured form.
///
/// The first line is always consumed as the title line, whether or not it
/// matches the title syntax.
pub fn parse_document<S: AsRef<str>>(lines: &[S]) -> Result<Document, ParseError> {
    let title = extract_title(lines);
    let classifier = NoteLineClassifier;
    let mut builder = SectionBuilder::new(title.mode);

    for line in lines.iter().skip(1) {
        let lc = classifier.classify(line.as_ref());
        builder.push(&lc)?;
    }

    Ok(Document {
        title,
        sections: builder.finish()?,
    })
}

/// Converts note lines to a complete HTML page with default render options.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<String, ParseError> {
    parse_with(lines, &RenderOptions::default())
}

pub fn parse_with<S: AsRef<str>>(
    lines: &[S],
    options: &RenderOptions,
) -> Result<String, ParseError> {
    let doc = parse_document(lines)?;
    Ok(render_document(&doc, options))
}

/// Converts the full text of a note file.
pub fn parse_note(text: &str, options: &RenderOptions) -> Result<String, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    parse_with(&lines, options)
}
