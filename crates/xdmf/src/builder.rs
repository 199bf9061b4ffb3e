//! Builder for configuring an XdmfWriter

// internal modules
use crate::grid::{AxisOrder, Endian};
use crate::writer::XdmfWriter;

// external crates
use log::warn;

/// Builder implementation for XdmfWriter configuration
///
/// The fields of [XdmfWriter] are left public for direct use but the module
/// also implements a builder.
///
/// Chained setter calls configure only what differs from the defaults, and
/// [build()](XdmfWriterBuilder::build) gives the final [XdmfWriter].
///
/// ```rust
/// # use xdmfgen_xdmf::{AxisOrder, Endian, XdmfWriter};
/// let writer = XdmfWriter::builder()
///     .field("phi")
///     .endian(Endian::Big)
///     .axis_order(AxisOrder::Zyx)
///     .time_precision(6)
///     .build();
///
/// assert_eq!(writer.field, "phi");
/// ```
#[derive(Debug)]
pub struct XdmfWriterBuilder {
    /// Name of the node attribute holding the frame data
    field: String,
    /// Byte order of the binary frames
    endian: Endian,
    /// Order of axis triples in the document
    axis_order: AxisOrder,
    /// Decimal places for time values
    time_precision: usize,
}

impl XdmfWriterBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [XdmfWriter] type
    pub fn build(self) -> XdmfWriter {
        XdmfWriter {
            field: self.field,
            endian: self.endian,
            axis_order: self.axis_order,
            time_precision: self.time_precision,
        }
    }

    /// Name of the node attribute holding the frame data
    ///
    /// This is the array name shown by the visualisation tool, `u` by default.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.field = name.into();
        self
    }

    /// Byte order of the binary frames
    ///
    /// Nothing is read from the frames so this can not be inferred. Little
    /// endian by default, which covers pretty much every modern machine.
    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Order of every axis triple in the document
    ///
    /// See [AxisOrder] for details. Defaults to X, Y, Z.
    pub fn axis_order(mut self, order: AxisOrder) -> Self {
        self.axis_order = order;
        self
    }

    /// Number of decimal places used for time values, 3 by default
    pub fn time_precision(mut self, precision: usize) -> Self {
        if precision > 12 {
            warn!("Warning: Time precision of {precision} decimals is unlikely to be meaningful");
        }
        self.time_precision = precision;
        self
    }
}

impl Default for XdmfWriterBuilder {
    fn default() -> Self {
        Self {
            field: "u".to_string(),
            endian: Endian::Little,
            axis_order: AxisOrder::Xyz,
            time_precision: 3,
        }
    }
}
