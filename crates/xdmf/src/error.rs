//! Result and Error types for xdmfgen-xdmf

/// Type alias for `Result<T, xdmf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `xdmfgen-xdmf` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to write xml event")]
    XmlError(#[from] quick_xml::Error),

    #[error("generated document is not valid utf-8")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("frame path {0:?} is not valid utf-8")]
    InvalidPath(std::path::PathBuf),

    #[error("a temporal collection needs at least one frame")]
    EmptySeries,

    #[error("unknown {kind} \"{value}\" (expected one of {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
