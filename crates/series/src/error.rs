//! Result and Error types for xdmfgen-series

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, series::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `xdmfgen-series` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("directory {0:?} not found")]
    DirectoryNotFound(PathBuf),

    #[error("no .bin files found in {0:?}")]
    NoFilesFound(PathBuf),

    #[error("no step index found in file name \"{0}\"")]
    MalformedFilename(String),

    #[error("ambiguous step index in file name \"{name}\" ({runs} digit runs, expected 1)")]
    AmbiguousIndex { name: String, runs: usize },

    #[error("step index in file name \"{0}\" is out of range")]
    IndexOutOfRange(String),

    #[error("unexpected size of {path:?} (expected {expected} bytes, found {found} bytes)")]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        found: u64,
    },

    #[error("grid of {0:?} points is too large to address")]
    InvalidDimension([usize; 3]),
}
