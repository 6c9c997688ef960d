use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::SortError;
use crate::sorter::{FileSorter, SortMode};

/// Recursively collect the Ruby source files under `root`.
pub fn ruby_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "rb"))
        .collect()
}

/// Sort every `.rb` file under `root`, one at a time, and return how many
/// were processed. Fails fast: the first file error aborts the batch and
/// propagates; files already rewritten stay rewritten.
pub fn sort_directory(root: &Path, mode: SortMode) -> Result<usize, SortError> {
    if !root.is_dir() {
        return Err(SortError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut count = 0;
    for file in ruby_files(root) {
        FileSorter::new(&file).sort_with(mode)?;
        count += 1;
        debug!(file = %file.display(), "processed");
    }
    Ok(count)
}
