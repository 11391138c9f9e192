use crate::parsing::title::Title;

/// One rendered unit of section content.
///
/// Text payloads are already HTML-safe: inline markup has been applied to
/// items and paragraphs, code lines and image names are escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A list-mode bullet.
    Item(String),
    /// A run of consecutive third-level bullets sharing one sub-list.
    NestedList(Vec<String>),
    /// A narrative-mode paragraph.
    Paragraph(String),
    /// A verbatim code block, one entry per source line.
    Code(Vec<String>),
    /// An image reference, by file name.
    Image(String),
}

/// A heading and the content collected beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Escaped heading text, also used as the anchor name.
    pub heading: String,
    /// Never empty for a section produced by the builder.
    pub blocks: Vec<Block>,
}

/// A fully parsed note.
///
/// The table of contents is derived from `sections`, one entry per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: Title,
    pub sections: Vec<Section>,
}

impl Document {
    /// Headings in table-of-contents order.
    pub fn toc(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.heading.as_str())
    }
}
