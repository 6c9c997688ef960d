mod classify;
mod grouping;
mod simple;
mod types;

pub use classify::{classify_grouped, is_comment_or_blank, matches_simple};
pub use grouping::regroup;
pub use simple::sort_lines;
pub use types::{DeclarationKind, Entry};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SortError;

/// Which sorting pass to run on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Kind-aware grouping with comment attachment.
    #[default]
    Grouping,
    /// Legacy single-block sort.
    Simple,
}

/// Whether a pass rewrote the file or left it byte-for-byte untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    Rewritten,
    Unchanged,
}

/// Sorts the import declarations of a single file, in place. The whole file
/// is read, transformed in memory, and written back only once the full
/// result exists; a file with no declarations is never written at all.
#[derive(Debug)]
pub struct FileSorter {
    path: PathBuf,
}

impl FileSorter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSorter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Grouping mode: regroup declarations by kind, sort within each group,
    /// carry leading comment blocks along, blank line between groups.
    pub fn sort_and_format_imports(&self) -> Result<SortOutcome, SortError> {
        let content = self.read()?;
        let lines: Vec<&str> = content.lines().collect();
        self.finish(grouping::regroup(&lines))
    }

    /// Simple mode: one alphabetical block of all matched lines, then the
    /// rest of the file.
    pub fn sort_imports(&self) -> Result<SortOutcome, SortError> {
        let content = self.read()?;
        let lines: Vec<&str> = content.lines().collect();
        self.finish(simple::sort_lines(&lines))
    }

    pub fn sort_with(&self, mode: SortMode) -> Result<SortOutcome, SortError> {
        match mode {
            SortMode::Grouping => self.sort_and_format_imports(),
            SortMode::Simple => self.sort_imports(),
        }
    }

    fn finish(&self, rendered: Option<String>) -> Result<SortOutcome, SortError> {
        match rendered {
            Some(output) => {
                self.write(&output)?;
                debug!(path = %self.path.display(), "imports sorted");
                Ok(SortOutcome::Rewritten)
            }
            None => {
                debug!(path = %self.path.display(), "no declarations, left untouched");
                Ok(SortOutcome::Unchanged)
            }
        }
    }

    fn read(&self) -> Result<String, SortError> {
        fs::read_to_string(&self.path).map_err(|e| SortError::from_io(&self.path, e))
    }

    fn write(&self, content: &str) -> Result<(), SortError> {
        fs::write(&self.path, content).map_err(|e| SortError::from_io(&self.path, e))
    }
}
