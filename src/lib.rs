//! `xdmfgen` is a small toolkit for describing raw binary simulation output as
//! XDMF time series
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use xdmfgen_utils as utils;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
#[doc(inline)]
pub use xdmfgen_cli as cli;

#[cfg(feature = "series")]
#[cfg_attr(docsrs, doc(cfg(feature = "series")))]
#[doc(inline)]
pub use xdmfgen_series as series;

#[cfg(feature = "xdmf")]
#[cfg_attr(docsrs, doc(cfg(feature = "xdmf")))]
#[doc(inline)]
pub use xdmfgen_xdmf as xdmf;
