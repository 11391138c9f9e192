use crate::error::ParseError;
use crate::parsing::inline::{escape_html, render_inline};
use crate::parsing::title::Mode;

use super::{
    classify::{Level, LineClass},
    kinds::{CodeBlock, ImageRef},
    types::{Block, Section},
};

/// Where the builder is between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Before the first heading.
    Start,
    /// Just saw a heading.
    FirstLevel,
    /// Last content was an item, paragraph, image or closed code block.
    SecondLevel,
    /// Inside a nested sub-list.
    ThirdLevel,
    /// Inside an open code block; lines are taken verbatim.
    Code,
}

/// The section currently accumulating content.
#[derive(Debug)]
struct OpenSection {
    heading: String,
    blocks: Vec<Block>,
}

/// Single-pass state machine turning classified lines into sections.
pub struct SectionBuilder {
    mode: Mode,
    state: LineState,
    current: Option<OpenSection>,
    code: Vec<String>,
    out: Vec<Section>,
}

impl SectionBuilder {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            state: LineState::Start,
            current: None,
            code: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) -> Result<(), ParseError> {
        if self.state == LineState::Code {
            self.consume_code_line(c);
            return Ok(());
        }

        if c.is_blank {
            return Ok(());
        }

        match self.level_for(c)? {
            Level::First => self.open_section(c),
            level => self.push_content(level, c),
        }
    }

    pub fn finish(mut self) -> Result<Vec<Section>, ParseError> {
        // EOF flush; the empty line after a final newline is not code
        if self.state == LineState::Code {
            while self.code.last().is_some_and(|line| line.is_empty()) {
                self.code.pop();
            }
            self.close_code();
        }
        self.flush_section()?;
        Ok(self.out)
    }

    /// Narrative notes have no third level; it fails like any other
    /// unsupported indentation.
    fn level_for(&self, c: &LineClass) -> Result<Level, ParseError> {
        match c.level()? {
            Level::Third if self.mode == Mode::Narrative => Err(c.unsupported_indentation()),
            level => Ok(level),
        }
    }

    fn open_section(&mut self, c: &LineClass) -> Result<(), ParseError> {
        self.flush_section()?;
        self.current = Some(OpenSection {
            heading: escape_html(c.content()),
            blocks: vec![],
        });
        self.state = LineState::FirstLevel;
        Ok(())
    }

    fn flush_section(&mut self) -> Result<(), ParseError> {
        let Some(section) = self.current.take() else {
            return Ok(());
        };
        if section.blocks.is_empty() {
            return Err(ParseError::EmptySection {
                heading: section.heading,
            });
        }
        self.out.push(Section {
            heading: section.heading,
            blocks: section.blocks,
        });
        Ok(())
    }

    fn push_content(&mut self, level: Level, c: &LineClass) -> Result<(), ParseError> {
        if self.current.is_none() {
            return Err(ParseError::ContentBeforeHeading {
                line: c.text.clone(),
            });
        }

        let content = c.content();
        if CodeBlock::opens(content) {
            self.open_code(content);
            return Ok(());
        }

        match level {
            Level::Third => self.push_nested(render_inline(content)),
            _ => {
                let block = match (ImageRef::parse(content), self.mode) {
                    (Some(image), _) => Block::Image(escape_html(image.file)),
                    (None, Mode::List) => Block::Item(render_inline(content)),
                    (None, Mode::Narrative) => Block::Paragraph(render_inline(content)),
                };
                self.push_block(block);
                self.state = LineState::SecondLevel;
            }
        }
        Ok(())
    }

    /// Consecutive nested items share the sub-list opened by the first one.
    fn push_nested(&mut self, item: String) {
        if self.state == LineState::ThirdLevel
            && let Some(Block::NestedList(items)) = self.blocks_mut().and_then(|b| b.last_mut())
        {
            items.push(item);
        } else {
            self.push_block(Block::NestedList(vec![item]));
        }
        self.state = LineState::ThirdLevel;
    }

    fn open_code(&mut self, content: &str) {
        let (first, closed) = CodeBlock::open(content);
        self.code = vec![escape_html(first)];
        if closed {
            self.close_code();
        } else {
            self.state = LineState::Code;
        }
    }

    fn consume_code_line(&mut self, c: &LineClass) {
        if CodeBlock::closes(&c.text) {
            self.code.push(escape_html(CodeBlock::strip_close(&c.text)));
            self.close_code();
        } else {
            self.code.push(escape_html(&c.text));
        }
    }

    /// A closed code block always leaves the builder at the second level.
    fn close_code(&mut self) {
        let lines = std::mem::take(&mut self.code);
        self.push_block(Block::Code(lines));
        self.state = LineState::SecondLevel;
    }

    fn push_block(&mut self, block: Block) {
        if let Some(blocks) = self.blocks_mut() {
            blocks.push(block);
        }
    }

    fn blocks_mut(&mut self) -> Option<&mut Vec<Block>> {
        self.current.as_mut().map(|s| &mut s.blocks)
    }
}
