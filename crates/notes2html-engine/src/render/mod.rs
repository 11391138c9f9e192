//! Document assembly: pure templating over a parsed [`Document`].

pub mod templates;

use crate::parsing::blocks::{Block, Document, Section};
use crate::parsing::inline::escape_html;
use crate::parsing::title::Mode;

/// Site-level settings that do not depend on note content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Base URL for stylesheets, scripts and images, without a trailing slash.
    pub assets_url: String,
    /// Analytics tracking id; the snippet is omitted when `None`.
    pub analytics_id: Option<String>,
}

impl RenderOptions {
    pub const DEFAULT_ASSETS_URL: &'static str = "/assets";
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            assets_url: Self::DEFAULT_ASSETS_URL.to_string(),
            analytics_id: None,
        }
    }
}

/// Renders the complete HTML page for a document.
pub fn render_document(doc: &Document, options: &RenderOptions) -> String {
    let assets = options.assets_url.trim_end_matches('/');
    let title = escape_html(&doc.title.text);
    let mut out = String::new();

    out.push_str(templates::DOCTYPE);
    out.push_str(&templates::title(&title));
    out.push_str(templates::META);
    out.push_str(&templates::stylesheet(assets));
    out.push_str(&templates::favicon(assets));
    out.push_str(&templates::highlighter_script(assets));
    out.push_str(templates::HEAD_END);

    out.push_str(&render_toc(doc, &title));
    for section in &doc.sections {
        out.push_str(&render_section(section, doc.title.mode, assets));
    }

    out.push_str(templates::HIGHLIGHTER_RUN);
    if let Some(id) = &options.analytics_id {
        out.push_str(&templates::analytics(&escape_html(id)));
    }
    out.push_str(templates::BODY_END);
    out
}

fn render_toc(doc: &Document, title: &str) -> String {
    let mut out = String::from(templates::BOX_OPEN);
    out.push_str(&templates::legend(&format!("{title} ToC")));
    out.push_str(templates::LIST_OPEN);
    for heading in doc.toc() {
        out.push_str(&templates::toc_entry(heading));
    }
    out.push_str(templates::LIST_CLOSE);
    out.push_str(templates::BOX_CLOSE);
    out
}

fn render_section(section: &Section, mode: Mode, assets: &str) -> String {
    let mut out = String::from(templates::BOX_OPEN);
    out.push_str(&templates::anchor(&section.heading));
    out.push_str(&templates::legend(&section.heading));

    match mode {
        Mode::List => {
            out.push_str(templates::LIST_OPEN);
            for block in &section.blocks {
                out.push_str(&render_list_block(block, assets));
            }
            out.push_str(templates::LIST_CLOSE);
        }
        Mode::Narrative => {
            for block in &section.blocks {
                out.push_str(&render_narrative_block(block, assets));
            }
        }
    }

    out.push_str(templates::BOX_CLOSE);
    out
}

fn render_list_block(block: &Block, assets: &str) -> String {
    match block {
        Block::Item(html) => templates::item(html),
        Block::Image(file) => templates::item(&templates::image(assets, file)),
        Block::NestedList(items) => {
            let mut out = String::from(templates::NESTED_LIST_OPEN);
            for html in items {
                out.push_str(&templates::nested_item(html));
            }
            out.push_str(templates::NESTED_LIST_CLOSE);
            out
        }
        Block::Code(lines) => templates::code(lines),
        Block::Paragraph(html) => templates::paragraph(html),
    }
}

fn render_narrative_block(block: &Block, assets: &str) -> String {
    match block {
        Block::Image(file) => format!(
            "{}{}\n",
            templates::BLOCK_INDENT,
            templates::image(assets, file)
        ),
        other => render_list_block(other, assets),
    }
}
