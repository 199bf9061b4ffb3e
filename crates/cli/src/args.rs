//! Command line arguments

// standard library
use std::path::PathBuf;

// crate modules
use crate::config::ConfigOverlay;

// xdmfgen modules
use xdmfgen_series::IndexPolicy;
use xdmfgen_xdmf::{AxisOrder, Endian};

// external crates
use clap::{ArgAction, Parser};

/// Generate an XDMF manifest for a directory of raw binary frames
///
/// Every `.bin` file in TARGET is treated as one frame of a time series on a
/// uniform grid of double precision values. The manifest is written to stdout
/// unless an output file is given.
///
/// Grid values not given here are taken from the JSON configuration file if
/// it exists, then from the defaults.
#[derive(Parser, Debug)]
#[command(name = "xdmfgen", version)]
pub struct Cli {
    /// Directory containing the binary frames [default: .]
    pub target: Option<PathBuf>,

    /// Number of points in x [default: 256]
    #[arg(long = "lx", visible_alias = "Lx", value_name = "N")]
    pub lx: Option<usize>,

    /// Number of points in y [default: 256]
    #[arg(long = "ly", visible_alias = "Ly", value_name = "N")]
    pub ly: Option<usize>,

    /// Number of points in z [default: 256]
    #[arg(long = "lz", visible_alias = "Lz", value_name = "N")]
    pub lz: Option<usize>,

    /// Origin in x [default: -128]
    #[arg(long, allow_negative_numbers = true, value_name = "X")]
    pub x0: Option<f64>,

    /// Origin in y [default: -128]
    #[arg(long, allow_negative_numbers = true, value_name = "Y")]
    pub y0: Option<f64>,

    /// Origin in z [default: -128]
    #[arg(long, allow_negative_numbers = true, value_name = "Z")]
    pub z0: Option<f64>,

    /// Grid spacing in x [default: 1]
    #[arg(long, allow_negative_numbers = true, value_name = "DX")]
    pub dx: Option<f64>,

    /// Grid spacing in y [default: 1]
    #[arg(long, allow_negative_numbers = true, value_name = "DY")]
    pub dy: Option<f64>,

    /// Grid spacing in z [default: 1]
    #[arg(long, allow_negative_numbers = true, value_name = "DZ")]
    pub dz: Option<f64>,

    /// Simulation time between frames [default: 1]
    #[arg(long = "dt", visible_alias = "saveat", value_name = "T")]
    pub save_interval: Option<f64>,

    /// JSON configuration file, skipped if missing
    #[arg(short, long, default_value = "input.json", value_name = "PATH")]
    pub config: PathBuf,

    /// Write the manifest to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the data array [default: u]
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,

    /// Byte order of the frames (little, big) [default: little]
    #[arg(long)]
    pub endian: Option<Endian>,

    /// Order of axis triples in the manifest (xyz, zyx) [default: xyz]
    #[arg(long)]
    pub axis_order: Option<AxisOrder>,

    /// Require exactly one number in every file name
    ///
    /// By default the last number in a file name is the step index, so
    /// `run2_u100.bin` is step 100. With this flag such names are rejected as
    /// ambiguous.
    #[arg(long)]
    pub strict_index: bool,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Values given explicitly on the command line
    pub fn overrides(&self) -> ConfigOverlay {
        ConfigOverlay {
            source_dir: self.target.clone(),
            lx: self.lx,
            ly: self.ly,
            lz: self.lz,
            x0: self.x0,
            y0: self.y0,
            z0: self.z0,
            dx: self.dx,
            dy: self.dy,
            dz: self.dz,
            save_interval: self.save_interval,
            field: self.field.clone(),
            endian: self.endian,
            axis_order: self.axis_order,
            index_policy: self.strict_index.then_some(IndexPolicy::Unique),
        }
    }
}
