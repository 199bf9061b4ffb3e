//! Discovery of raw binary time series written by simulations
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod index;
mod reader;
mod series;

#[doc(inline)]
pub use index::{extract_index, IndexPolicy};

#[doc(inline)]
pub use reader::read_series;

#[doc(inline)]
pub use series::{expected_byte_length, FileEntry, TimeSeries, ELEMENT_SIZE};

#[doc(inline)]
pub use error::{Error, Result};
