//! Discovery of binary frames in a results directory

// standard library
use std::fs;
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::index::{extract_index, IndexPolicy};
use crate::series::{FileEntry, TimeSeries};

// external crates
use log::{debug, info, trace, warn};

/// Extension of the raw binary frames, matched exactly
const FRAME_EXTENSION: &str = "bin";

/// Discover every binary frame in `directory`
///
/// Regular files with a `bin` extension are collected, their step index
/// extracted according to `policy`, and the result sorted into a
/// [TimeSeries]. Only file metadata is read, never the content.
///
/// ```rust, no_run
/// # use xdmfgen_series::{read_series, IndexPolicy};
/// let series = read_series("./results", IndexPolicy::Last).unwrap();
/// println!("{series}");
/// ```
///
/// Fails if the directory does not exist, contains no frames, or any frame
/// has a name without a usable step index.
///
/// A `bin` entry whose metadata can not be read, such as a dangling symlink,
/// is skipped with a warning.
pub fn read_series<P: AsRef<Path>>(directory: P, policy: IndexPolicy) -> Result<TimeSeries> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(Error::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(directory)? {
        let path = dir_entry?.path();

        if path.extension().and_then(|e| e.to_str()) != Some(FRAME_EXTENSION) {
            trace!("Skipping {path:?}");
            continue;
        }

        // follows symlinks, a link to a frame is still a frame
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Warning: Skipping unreadable {path:?} ({e})");
                continue;
            }
        };
        if !metadata.is_file() {
            trace!("Skipping non-file {path:?}");
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::MalformedFilename(path.to_string_lossy().into_owned()))?;
        let index = extract_index(stem, policy)?;

        debug!("Found {path:?} (step {index}, {} bytes)", metadata.len());
        entries.push(FileEntry {
            path,
            index,
            size: metadata.len(),
        });
    }

    if entries.is_empty() {
        return Err(Error::NoFilesFound(directory.to_path_buf()));
    }

    let series = TimeSeries::new(directory, entries);
    for index in series.duplicate_indices() {
        warn!("Warning: Duplicate step index {index} in {directory:?}");
    }

    info!("Found {series}");
    Ok(series)
}
