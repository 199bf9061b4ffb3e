//! Result and Error types for xdmfgen-cli

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, cli::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `xdmfgen-cli` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to parse configuration file {path:?}")]
    InvalidConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("number of points along {axis} must be positive (found {value})")]
    InvalidDimension { axis: char, value: usize },

    #[error("spacing along {axis} must be finite and nonzero (found {value})")]
    InvalidSpacing { axis: char, value: f64 },

    #[error("origin along {axis} must be finite (found {value})")]
    InvalidOrigin { axis: char, value: f64 },

    #[error("save interval must be finite and not negative (found {0})")]
    InvalidSaveInterval(f64),

    #[error(transparent)]
    Series(#[from] xdmfgen_series::Error),

    #[error(transparent)]
    Xdmf(#[from] xdmfgen_xdmf::Error),
}
