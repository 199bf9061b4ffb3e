//! Configuration of the manifest generator
//!
//! Values come from three layers. Built in defaults sit at the bottom, then
//! anything found in a JSON file, then anything given explicitly on the
//! command line. Each layer above the defaults is a [ConfigOverlay] where
//! unset values fall through to the layer below.

// standard library
use std::fs;
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};

// xdmfgen modules
use xdmfgen_series::IndexPolicy;
use xdmfgen_utils::f;
use xdmfgen_xdmf::{AxisOrder, Endian, UniformGrid};

// external crates
use log::{debug, info};
use serde::Deserialize;

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory containing the binary frames
    pub source_dir: PathBuf,
    /// Number of points in x
    pub lx: usize,
    /// Number of points in y
    pub ly: usize,
    /// Number of points in z
    pub lz: usize,
    /// Origin in x
    pub x0: f64,
    /// Origin in y
    pub y0: f64,
    /// Origin in z
    pub z0: f64,
    /// Grid spacing in x
    pub dx: f64,
    /// Grid spacing in y
    pub dy: f64,
    /// Grid spacing in z
    pub dz: f64,
    /// Simulation time between saved frames
    pub save_interval: f64,
    /// Name of the data array in the visualisation tool
    pub field: String,
    /// Byte order of the binary frames
    pub endian: Endian,
    /// Order of axis triples in the document
    pub axis_order: AxisOrder,
    /// Rule for extracting step indices from file names
    pub index_policy: IndexPolicy,
}

impl Config {
    /// Number of points along X, Y, Z
    pub fn dimensions(&self) -> [usize; 3] {
        [self.lx, self.ly, self.lz]
    }

    /// Shape and placement of the grid shared by every frame
    pub fn grid(&self) -> UniformGrid {
        UniformGrid {
            dimensions: self.dimensions(),
            origin: [self.x0, self.y0, self.z0],
            spacing: [self.dx, self.dy, self.dz],
        }
    }

    /// Check every value is usable before touching the file system
    pub fn validate(&self) -> Result<()> {
        let axes = ['x', 'y', 'z'];
        let grid = self.grid();

        for (axis, value) in axes.into_iter().zip(grid.dimensions) {
            if value == 0 {
                return Err(Error::InvalidDimension { axis, value });
            }
        }

        for (axis, value) in axes.into_iter().zip(grid.origin) {
            if !value.is_finite() {
                return Err(Error::InvalidOrigin { axis, value });
            }
        }

        for (axis, value) in axes.into_iter().zip(grid.spacing) {
            if !value.is_finite() || value == 0.0 {
                return Err(Error::InvalidSpacing { axis, value });
            }
        }

        if !self.save_interval.is_finite() || self.save_interval < 0.0 {
            return Err(Error::InvalidSaveInterval(self.save_interval));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            lx: 256,
            ly: 256,
            lz: 256,
            x0: -128.0,
            y0: -128.0,
            z0: -128.0,
            dx: 1.0,
            dy: 1.0,
            dz: 1.0,
            save_interval: 1.0,
            field: "u".to_string(),
            endian: Endian::Little,
            axis_order: AxisOrder::Xyz,
            index_policy: IndexPolicy::Last,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Config {{")?;
        writeln!(f, "    source: {:?}", self.source_dir)?;
        writeln!(f, "    points: {} x {} x {}", self.lx, self.ly, self.lz)?;
        writeln!(f, "    origin: ({}, {}, {})", self.x0, self.y0, self.z0)?;
        writeln!(f, "    spacing: ({}, {}, {})", self.dx, self.dy, self.dz)?;
        writeln!(f, "    save interval: {}", self.save_interval)?;
        writeln!(
            f,
            "    field: {} ({} endian, {} order, {:?} index)",
            self.field, self.endian, self.axis_order, self.index_policy
        )?;
        write!(f, "}}")
    }
}

/// Partial configuration, where `None` means "not provided"
///
/// This is what a JSON configuration file deserialises into, and what the
/// command line flags are collected into. Only the grid, time and source keys
/// are read from JSON. Unknown keys are ignored since the file is usually the
/// input deck of the simulation itself.
///
/// Each key has a single meaning, so a file giving two spellings of the same
/// key, such as both `Lx` and `lx`, is rejected as a duplicate field rather
/// than silently preferring one of them.
///
/// ```rust
/// # use xdmfgen_cli::ConfigOverlay;
/// let overlay: ConfigOverlay = serde_json::from_str(r#"{"Lx": 128, "saveat": 0.5}"#).unwrap();
/// assert_eq!(overlay.lx, Some(128));
/// assert_eq!(overlay.save_interval, Some(0.5));
/// assert_eq!(overlay.ly, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    #[serde(rename = "sourceDir", alias = "results", alias = "target")]
    pub source_dir: Option<PathBuf>,
    #[serde(rename = "Lx", alias = "lx")]
    pub lx: Option<usize>,
    #[serde(rename = "Ly", alias = "ly")]
    pub ly: Option<usize>,
    #[serde(rename = "Lz", alias = "lz")]
    pub lz: Option<usize>,
    pub x0: Option<f64>,
    pub y0: Option<f64>,
    pub z0: Option<f64>,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub dz: Option<f64>,
    #[serde(rename = "saveInterval", alias = "saveat", alias = "dt")]
    pub save_interval: Option<f64>,
    pub field: Option<String>,
    #[serde(skip)]
    pub endian: Option<Endian>,
    #[serde(skip)]
    pub axis_order: Option<AxisOrder>,
    #[serde(skip)]
    pub index_policy: Option<IndexPolicy>,
}

impl ConfigOverlay {
    /// Fill anything unset in `self` from `fallback`
    pub fn or(self, fallback: ConfigOverlay) -> ConfigOverlay {
        ConfigOverlay {
            source_dir: self.source_dir.or(fallback.source_dir),
            lx: self.lx.or(fallback.lx),
            ly: self.ly.or(fallback.ly),
            lz: self.lz.or(fallback.lz),
            x0: self.x0.or(fallback.x0),
            y0: self.y0.or(fallback.y0),
            z0: self.z0.or(fallback.z0),
            dx: self.dx.or(fallback.dx),
            dy: self.dy.or(fallback.dy),
            dz: self.dz.or(fallback.dz),
            save_interval: self.save_interval.or(fallback.save_interval),
            field: self.field.or(fallback.field),
            endian: self.endian.or(fallback.endian),
            axis_order: self.axis_order.or(fallback.axis_order),
            index_policy: self.index_policy.or(fallback.index_policy),
        }
    }

    /// Overwrite the values of `config` with everything set here
    pub fn apply(self, config: Config) -> Config {
        Config {
            source_dir: self.source_dir.unwrap_or(config.source_dir),
            lx: self.lx.unwrap_or(config.lx),
            ly: self.ly.unwrap_or(config.ly),
            lz: self.lz.unwrap_or(config.lz),
            x0: self.x0.unwrap_or(config.x0),
            y0: self.y0.unwrap_or(config.y0),
            z0: self.z0.unwrap_or(config.z0),
            dx: self.dx.unwrap_or(config.dx),
            dy: self.dy.unwrap_or(config.dy),
            dz: self.dz.unwrap_or(config.dz),
            save_interval: self.save_interval.unwrap_or(config.save_interval),
            field: self.field.unwrap_or(config.field),
            endian: self.endian.unwrap_or(config.endian),
            axis_order: self.axis_order.unwrap_or(config.axis_order),
            index_policy: self.index_policy.unwrap_or(config.index_policy),
        }
    }
}

impl std::fmt::Display for ConfigOverlay {
    /// Only the values that are set, under their JSON key names
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = [
            ("sourceDir", self.source_dir.as_ref().map(|p| f!("{p:?}"))),
            ("Lx", self.lx.map(|v| v.to_string())),
            ("Ly", self.ly.map(|v| v.to_string())),
            ("Lz", self.lz.map(|v| v.to_string())),
            ("x0", self.x0.map(|v| v.to_string())),
            ("y0", self.y0.map(|v| v.to_string())),
            ("z0", self.z0.map(|v| v.to_string())),
            ("dx", self.dx.map(|v| v.to_string())),
            ("dy", self.dy.map(|v| v.to_string())),
            ("dz", self.dz.map(|v| v.to_string())),
            ("saveInterval", self.save_interval.map(|v| v.to_string())),
            ("field", self.field.clone()),
            ("endian", self.endian.map(|v| v.to_string())),
            ("axisOrder", self.axis_order.map(|v| v.to_string())),
            ("indexPolicy", self.index_policy.map(|v| f!("{v:?}"))),
        ];

        let set = values
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| f!("{key}={v}")))
            .collect::<Vec<String>>();

        match set.is_empty() {
            true => write!(f, "nothing set"),
            false => write!(f, "{}", set.join(" ")),
        }
    }
}

/// Read a JSON configuration file if there is one
///
/// Returns `Ok(None)` when nothing exists at `path`, so a default path can
/// always be tried. A file that exists but can not be parsed is an error.
pub fn load_overlay<P: AsRef<Path>>(path: P) -> Result<Option<ConfigOverlay>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No configuration file at {path:?}, skipping");
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let overlay = serde_json::from_str(&content).map_err(|source| Error::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Using configuration file {path:?}");
    Ok(Some(overlay))
}

/// Resolve the final configuration from every layer
///
/// Explicit values win over file values, which win over the defaults.
///
/// ```rust
/// # use xdmfgen_cli::{resolve, Config, ConfigOverlay};
/// let file = ConfigOverlay { lx: Some(128), ly: Some(64), ..Default::default() };
/// let explicit = ConfigOverlay { lx: Some(256), ..Default::default() };
///
/// let config = resolve(Config::default(), Some(file), explicit);
/// assert_eq!(config.dimensions(), [256, 64, 256]);
/// ```
pub fn resolve(
    defaults: Config,
    file_overlay: Option<ConfigOverlay>,
    explicit: ConfigOverlay,
) -> Config {
    if let Some(file) = &file_overlay {
        debug!("File values: {file}");
    }
    debug!("Explicit values: {explicit}");

    explicit
        .or(file_overlay.unwrap_or_default())
        .apply(defaults)
}
