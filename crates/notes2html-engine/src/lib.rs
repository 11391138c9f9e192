pub mod batch;
pub mod error;
pub mod io;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use batch::{BatchError, BatchOptions, BatchReport, NoteFailure, convert_note, convert_tree};
pub use error::ParseError;
pub use io::*;
pub use parsing::{parse, parse_document, parse_note, parse_with};
pub use render::{RenderOptions, render_document};
