//! The full pipeline from configuration to manifest text

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::config::Config;
use crate::error::Result;

// xdmfgen modules
use xdmfgen_series::{expected_byte_length, read_series, TimeSeries};
use xdmfgen_xdmf::{Frame, XdmfWriter};

// external crates
use log::info;

/// Generate the complete XDMF manifest for a resolved [Config]
///
/// Every check runs before anything is rendered, and the document is returned
/// whole, so a failure never leaves a partial manifest behind.
///
/// Frame paths are written relative to `working_dir` when they live under it.
/// Relative source directories are already relative to the working directory
/// and are written as given.
pub fn generate(config: &Config, working_dir: Option<&Path>) -> Result<String> {
    config.validate()?;
    let expected = expected_byte_length(config.dimensions())?;

    let series = read_series(&config.source_dir, config.index_policy)?;
    series.validate_size(expected)?;

    let frames = series_frames(&series, config.save_interval, working_dir);
    let writer = XdmfWriter::builder()
        .field(config.field.as_str())
        .endian(config.endian)
        .axis_order(config.axis_order)
        .build();

    let document = writer.render(&config.grid(), &frames)?;
    info!("Generated manifest for {} frames", frames.len());
    Ok(document)
}

/// One frame per file, timed by position in the series
fn series_frames(series: &TimeSeries, save_interval: f64, working_dir: Option<&Path>) -> Vec<Frame> {
    series
        .iter()
        .zip(series.times(save_interval))
        .map(|(entry, time)| {
            Frame::new(entry.stem(), time, relative_path(&entry.path, working_dir))
        })
        .collect()
}

/// Strip `base` from absolute paths underneath it
///
/// ```rust
/// # use std::path::{Path, PathBuf};
/// # use xdmfgen_cli::relative_path;
/// let base = Some(Path::new("/home/user/sim"));
/// assert_eq!(relative_path(Path::new("/home/user/sim/out/u0.bin"), base), PathBuf::from("out/u0.bin"));
/// assert_eq!(relative_path(Path::new("/scratch/u0.bin"), base), PathBuf::from("/scratch/u0.bin"));
/// assert_eq!(relative_path(Path::new("out/u0.bin"), base), PathBuf::from("out/u0.bin"));
/// ```
pub fn relative_path(path: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) if path.is_absolute() => path
            .strip_prefix(base)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}
