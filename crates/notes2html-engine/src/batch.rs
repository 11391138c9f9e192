//! Directory-to-directory conversion.
//!
//! Every note under the source root is converted independently; one bad note
//! is logged and reported but never stops the others.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use relative_path::RelativePath;

use crate::error::ParseError;
use crate::io::{self, IoError};
use crate::parsing::parse_note;
use crate::render::RenderOptions;

/// Extension of note files picked up when none is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub extension: String,
    pub render: RenderOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            render: RenderOptions::default(),
        }
    }
}

/// Failure converting one note.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug)]
pub struct NoteFailure {
    pub path: PathBuf,
    pub error: BatchError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Written output files, in discovery order.
    pub converted: Vec<PathBuf>,
    pub failures: Vec<NoteFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts a single note and returns the written output path.
pub fn convert_note(
    note_path: &RelativePath,
    source_root: &Path,
    dest_root: &Path,
    options: &RenderOptions,
) -> Result<PathBuf, BatchError> {
    let text = io::read_note(note_path, source_root)?;
    let html = parse_note(&text, options)?;
    let written = io::write_html(&io::html_path_for(note_path), dest_root, &html)?;
    Ok(written)
}

/// Converts every note under `source_root` into `dest_root`.
///
/// Only an invalid source directory is fatal; per-note failures end up in
/// the report.
pub fn convert_tree(
    source_root: &Path,
    dest_root: &Path,
    options: &BatchOptions,
) -> Result<BatchReport, IoError> {
    let start = Instant::now();
    let files = io::scan_note_files(source_root, &options.extension)?;
    log::debug!(
        "found {} note(s) under {}",
        files.len(),
        source_root.display()
    );

    let results: Vec<Result<PathBuf, NoteFailure>> = files
        .par_iter()
        .map(|path| {
            convert_one(path, source_root, dest_root, &options.render).map_err(|error| {
                log::warn!("failed to convert {}: {error}", path.display());
                NoteFailure {
                    path: path.clone(),
                    error,
                }
            })
        })
        .collect();

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(written) => report.converted.push(written),
            Err(failure) => report.failures.push(failure),
        }
    }

    log::info!(
        "converted {}/{} note(s) in {:?}",
        report.converted.len(),
        files.len(),
        start.elapsed()
    );
    Ok(report)
}

fn convert_one(
    path: &Path,
    source_root: &Path,
    dest_root: &Path,
    options: &RenderOptions,
) -> Result<PathBuf, BatchError> {
    let relative = io::relative_to(path, source_root)?;
    log::debug!("converting {relative}");
    convert_note(&relative, source_root, dest_root, options)
}
