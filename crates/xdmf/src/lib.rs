//! XDMF output for time series on uniform grids
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod builder;
mod error;
mod grid;
mod writer;

#[doc(inline)]
pub use builder::XdmfWriterBuilder;

#[doc(inline)]
pub use grid::{AxisOrder, Endian, Frame, UniformGrid};

#[doc(inline)]
pub use writer::XdmfWriter;

#[doc(inline)]
pub use error::{Error, Result};
