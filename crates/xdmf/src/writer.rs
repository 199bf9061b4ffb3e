//! XML writer for temporal collections of uniform grids

// standard library
use std::io::Write;

// crate modules
use crate::builder::XdmfWriterBuilder;
use crate::error::{Error, Result};
use crate::grid::{AxisOrder, Endian, Frame, UniformGrid};

// xdmfgen modules
use xdmfgen_utils::{f, join_values, FixedExt};

// external crates
use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// XInclude namespace declared on the root element
const XINCLUDE_NS: &str = "http://www.w3.org/2001/XInclude";

/// XPath to the shared topology referenced by every frame
const TOPOLOGY_REF: &str = "/Xdmf/Domain/Topology[1]";

/// XPath to the shared geometry referenced by every frame
const GEOMETRY_REF: &str = "/Xdmf/Domain/Geometry[1]";

/// Frames are always raw double precision values
const PRECISION: &str = "8";

/// Write a time series of uniform grids as an XDMF document
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented.
///
/// The document layout is fixed:
///
/// ```text
/// Xdmf
/// └── Domain
///     ├── Topology (3DCoRectMesh, shared)
///     ├── Geometry (ORIGIN_DXDYDZ, shared)
///     └── Grid (temporal collection)
///         ├── Time (list of every frame time)
///         ├── Grid (uniform, frame 0)
///         ├── Grid (uniform, frame 1)
///         └── ...
/// ```
///
/// Each uniform grid references the shared topology and geometry and holds a
/// single node-centred attribute pointing at the binary file of that frame.
#[derive(Debug)]
pub struct XdmfWriter {
    /// Name of the node attribute holding the frame data
    pub field: String,
    /// Byte order of the binary frames
    pub endian: Endian,
    /// Order of axis triples in the document
    pub axis_order: AxisOrder,
    /// Decimal places for time values
    pub time_precision: usize,
}

impl XdmfWriter {
    /// Start a new [XdmfWriterBuilder]
    pub fn builder() -> XdmfWriterBuilder {
        XdmfWriterBuilder::default()
    }

    /// Render the complete document into a string
    ///
    /// Nothing partial is ever returned, so this is the safest way to produce
    /// output destined for stdout.
    pub fn render(&self, grid: &UniformGrid, frames: &[Frame]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(grid, frames, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Write the complete document to any writer
    pub fn write<W: Write>(&self, grid: &UniformGrid, frames: &[Frame], inner: W) -> Result<()> {
        if frames.is_empty() {
            return Err(Error::EmptySeries);
        }

        debug!(
            "Writing {} frames on a {:?} grid ({} order)",
            frames.len(),
            grid.dimensions,
            self.axis_order
        );

        let dimensions = join_values(&self.axis_order.arrange(grid.dimensions));
        let mut writer = Writer::new_with_indent(inner, b' ', 4);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        writer.write_event(Event::DocType(BytesText::from_escaped(
            r#"Xdmf SYSTEM "Xdmf.dtd" []"#,
        )))?;
        start(
            &mut writer,
            "Xdmf",
            &[("xmlns:xi", XINCLUDE_NS), ("Version", "2.0")],
        )?;
        start(&mut writer, "Domain", &[])?;

        self.write_topology(&mut writer, &dimensions)?;
        self.write_geometry(&mut writer, grid)?;

        start(
            &mut writer,
            "Grid",
            &[
                ("Name", "TimeSeries"),
                ("GridType", "Collection"),
                ("CollectionType", "Temporal"),
            ],
        )?;
        self.write_times(&mut writer, frames)?;
        for frame in frames {
            self.write_frame(&mut writer, frame, &dimensions)?;
        }
        end(&mut writer, "Grid")?;

        end(&mut writer, "Domain")?;
        end(&mut writer, "Xdmf")?;

        writer.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// Shared 3D co-rectilinear topology
    fn write_topology<W: Write>(&self, writer: &mut Writer<W>, dimensions: &str) -> Result<()> {
        empty(
            writer,
            "Topology",
            &[
                ("name", "topo"),
                ("TopologyType", "3DCoRectMesh"),
                ("Dimensions", dimensions),
            ],
        )
    }

    /// Shared geometry as an origin and a constant spacing per axis
    fn write_geometry<W: Write>(&self, writer: &mut Writer<W>, grid: &UniformGrid) -> Result<()> {
        let origin = join_values(&self.axis_order.arrange(grid.origin));
        let spacing = join_values(&self.axis_order.arrange(grid.spacing));

        start(
            writer,
            "Geometry",
            &[("name", "geo"), ("Type", "ORIGIN_DXDYDZ")],
        )?;
        let attributes = [("Format", "XML"), ("Dimensions", "3")];
        text_element(writer, "DataItem", &attributes, &origin)?;
        text_element(writer, "DataItem", &attributes, &spacing)?;
        end(writer, "Geometry")
    }

    /// Explicit list of frame times for the temporal collection
    fn write_times<W: Write>(&self, writer: &mut Writer<W>, frames: &[Frame]) -> Result<()> {
        let times = frames
            .iter()
            .map(|frame| frame.time.fixed(self.time_precision))
            .collect::<Vec<String>>();
        let count = f!("{}", times.len());

        start(writer, "Time", &[("TimeType", "List")])?;
        text_element(
            writer,
            "DataItem",
            &[
                ("Format", "XML"),
                ("NumberType", "Float"),
                ("Dimensions", count.as_str()),
            ],
            &join_values(&times),
        )?;
        end(writer, "Time")
    }

    /// One uniform grid pointing at the binary file of a frame
    fn write_frame<W: Write>(
        &self,
        writer: &mut Writer<W>,
        frame: &Frame,
        dimensions: &str,
    ) -> Result<()> {
        // lossy text would point the manifest at a file that does not exist
        let path = frame
            .path
            .to_str()
            .ok_or_else(|| Error::InvalidPath(frame.path.clone()))?;

        start(
            writer,
            "Grid",
            &[("Name", frame.name.as_str()), ("GridType", "Uniform")],
        )?;
        empty(writer, "Topology", &[("Reference", TOPOLOGY_REF)])?;
        empty(writer, "Geometry", &[("Reference", GEOMETRY_REF)])?;

        start(
            writer,
            "Attribute",
            &[("Name", self.field.as_str()), ("Center", "Node")],
        )?;
        text_element(
            writer,
            "DataItem",
            &[
                ("Format", "Binary"),
                ("DataType", "Float"),
                ("Precision", PRECISION),
                ("Endian", self.endian.as_xdmf()),
                ("Dimensions", dimensions),
            ],
            path,
        )?;
        end(writer, "Attribute")?;

        end(writer, "Grid")
    }
}

impl Default for XdmfWriter {
    fn default() -> Self {
        XdmfWriterBuilder::default().build()
    }
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
    writer.write_event(Event::Start(element))?;
    Ok(())
}

fn empty<W: Write>(writer: &mut Writer<W>, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Element with escaped text content and nothing else
fn text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    start(writer, name, attributes)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, name)
}
