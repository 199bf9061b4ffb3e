//! Grid geometry, frames and the layout options of a manifest

// standard library
use std::path::{Path, PathBuf};
use std::str::FromStr;

// crate modules
use crate::error::Error;

/// Shape and placement of the uniform grid shared by every frame
///
/// All triples are given in X, Y, Z order regardless of the [AxisOrder] used
/// when writing.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid {
    /// Number of points along each axis
    pub dimensions: [usize; 3],
    /// Coordinates of the first point
    pub origin: [f64; 3],
    /// Distance between points along each axis
    pub spacing: [f64; 3],
}

/// A single frame of the time series
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Name of the uniform grid, usually the file stem
    pub name: String,
    /// Simulation time of the frame
    pub time: f64,
    /// Path to the raw binary data, written as-is into the document
    pub path: PathBuf,
}

impl Frame {
    /// Convenience constructor
    pub fn new<P: AsRef<Path>>(name: impl Into<String>, time: f64, path: P) -> Self {
        Self {
            name: name.into(),
            time,
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Order of axis triples in the written document
///
/// One convention is applied to everything: the topology dimensions, the
/// geometry origin and spacing, and the dimensions of every binary data item.
///
/// - `Xyz` writes triples as given, X fastest-first in the attribute text
/// - `Zyx` reverses every triple, the usual C-order XDMF convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrder {
    #[default]
    Xyz,
    Zyx,
}

impl AxisOrder {
    /// Rearrange an X, Y, Z triple into this order
    ///
    /// ```rust
    /// # use xdmfgen_xdmf::AxisOrder;
    /// assert_eq!(AxisOrder::Xyz.arrange([1, 2, 3]), [1, 2, 3]);
    /// assert_eq!(AxisOrder::Zyx.arrange([1, 2, 3]), [3, 2, 1]);
    /// ```
    pub fn arrange<T: Copy>(&self, [x, y, z]: [T; 3]) -> [T; 3] {
        match self {
            Self::Xyz => [x, y, z],
            Self::Zyx => [z, y, x],
        }
    }
}

impl FromStr for AxisOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xyz" => Ok(Self::Xyz),
            "zyx" => Ok(Self::Zyx),
            _ => Err(Error::UnknownVariant {
                kind: "axis order",
                value: s.to_string(),
                expected: "xyz, zyx",
            }),
        }
    }
}

impl std::fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Xyz => write!(f, "xyz"),
            Self::Zyx => write!(f, "zyx"),
        }
    }
}

/// Byte order of the raw binary frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl Endian {
    /// Value of the `Endian` attribute on binary data items
    pub fn as_xdmf(&self) -> &'static str {
        match self {
            Self::Little => "Little",
            Self::Big => "Big",
        }
    }
}

impl FromStr for Endian {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "little" | "le" => Ok(Self::Little),
            "big" | "be" => Ok(Self::Big),
            _ => Err(Error::UnknownVariant {
                kind: "byte order",
                value: s.to_string(),
                expected: "little, big",
            }),
        }
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_xdmf().to_lowercase())
    }
}
