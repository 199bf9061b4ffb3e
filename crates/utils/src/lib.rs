//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, fixed-precision float text and space separated value lists are
//! needed everywhere XDMF text content is generated.
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

// Modules
mod value_ext;

// Flatten
pub use value_ext::{join_values, FixedExt};
