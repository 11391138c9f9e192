//! # Block Parsing
//!
//! Two-phase parsing of the note body (every line after the title).
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is tab-normalized and
//!    reduced to a `LineClass` (text, blank status, leading-space count)
//!
//! 2. **Section Construction** (`builder`): a `SectionBuilder` state machine
//!    resolves levels, tracks open code blocks and nested sub-lists, and
//!    emits `Section`s as headings close
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `Section`, `Document`
//! - **`kinds`**: syntax owners (`CodeBlock` delimiters, `ImageRef`)
//! - **`classify`**: `NoteLineClassifier`, `Level`, the tab substitution table
//! - **`builder`**: `SectionBuilder`
//!
//! ## Key Invariants
//!
//! - Indentation outside code blocks is exactly 0, 4 or 8 spaces
//! - Code blocks are raw zones: no classification or emphasis inside
//! - Every emitted section has at least one block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::SectionBuilder;
pub use classify::{Level, LineClass, NoteLineClassifier};
pub use types::{Block, Document, Section};
