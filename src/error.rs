use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while sorting one file. A line that matches
/// no declaration pattern is never an error; it is ordinary remainder.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("{path} is not valid UTF-8")]
    Decode { path: PathBuf },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    /// Classify a read/write failure for the given path.
    pub(crate) fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => SortError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => SortError::Decode {
                path: path.to_path_buf(),
            },
            _ => SortError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
