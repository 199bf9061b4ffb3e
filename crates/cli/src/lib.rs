//! Command line generator of XDMF manifests
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod args;
mod config;
mod error;
mod generate;

#[doc(inline)]
pub use args::Cli;

#[doc(inline)]
pub use config::{load_overlay, resolve, Config, ConfigOverlay};

#[doc(inline)]
pub use generate::{generate, relative_path};

#[doc(inline)]
pub use error::{Error, Result};
