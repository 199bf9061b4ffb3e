//! Ordered series of binary frames and their size checks

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};

/// Size in bytes of every element in a frame (`f64`)
pub const ELEMENT_SIZE: u64 = std::mem::size_of::<f64>() as u64;

/// Expected byte length of one frame for a grid of `dimensions` points
///
/// Frames are raw arrays of double precision values with no header, so this
/// is simply the number of points multiplied by [ELEMENT_SIZE].
///
/// ```rust
/// # use xdmfgen_series::expected_byte_length;
/// assert_eq!(expected_byte_length([2, 2, 2]).unwrap(), 64);
/// assert!(expected_byte_length([usize::MAX, 2, 2]).is_err());
/// ```
pub fn expected_byte_length(dimensions: [usize; 3]) -> Result<u64> {
    dimensions
        .iter()
        .try_fold(ELEMENT_SIZE, |acc, &n| acc.checked_mul(n as u64))
        .ok_or(Error::InvalidDimension(dimensions))
}

/// One binary frame found in the target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as discovered, i.e. the target directory joined with the file name
    pub path: PathBuf,
    /// Step index extracted from the file name
    pub index: u64,
    /// Size of the file in bytes
    pub size: u64,
}

impl FileEntry {
    /// File name without the extension, used to name the grid of this frame
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name including the extension
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Ordered collection of frames making up a simulation time series
///
/// Entries are always sorted by step index, with ties broken on the file name
/// so that the order never depends on the directory listing.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    /// Directory the frames were discovered in
    pub directory: PathBuf,
    entries: Vec<FileEntry>,
}

impl TimeSeries {
    /// Build a series from unordered entries
    pub fn new<P: AsRef<Path>>(directory: P, mut entries: Vec<FileEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.index
                .cmp(&b.index)
                .then_with(|| a.file_name().cmp(&b.file_name()))
        });

        Self {
            directory: directory.as_ref().to_path_buf(),
            entries,
        }
    }

    /// Frames in ascending step order
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Iterate over frames in ascending step order
    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no frames at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step indices shared by more than one file
    pub fn duplicate_indices(&self) -> Vec<u64> {
        let mut duplicates: Vec<u64> = self
            .entries
            .windows(2)
            .filter(|w| w[0].index == w[1].index)
            .map(|w| w[0].index)
            .collect();
        duplicates.dedup();
        duplicates
    }

    /// Time value for every frame, spaced by a constant save interval
    ///
    /// The time of a frame is its position in the series, not its step index,
    /// so gaps in the step numbering do not leave gaps in time.
    pub fn times(&self, save_interval: f64) -> Vec<f64> {
        (0..self.entries.len())
            .map(|i| i as f64 * save_interval)
            .collect()
    }

    /// Check the first frame against the expected byte length
    ///
    /// Only the first file is checked. This is a cheap sanity check that the
    /// grid dimensions are right, not an audit of the whole series.
    pub fn validate_size(&self, expected: u64) -> Result<()> {
        let first = self
            .entries
            .first()
            .ok_or_else(|| Error::NoFilesFound(self.directory.clone()))?;

        if first.size != expected {
            return Err(Error::SizeMismatch {
                path: first.path.clone(),
                expected,
                found: first.size,
            });
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "{} frames in {:?} (steps {} to {})",
                self.len(),
                self.directory,
                first.index,
                last.index
            ),
            _ => write!(f, "no frames in {:?}", self.directory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, index: u64, size: u64) -> FileEntry {
        FileEntry {
            path: PathBuf::from("results").join(name),
            index,
            size,
        }
    }

    #[test]
    fn numeric_not_lexical_order() {
        let series = TimeSeries::new(
            "results",
            vec![
                entry("run_10.bin", 10, 64),
                entry("run_0.bin", 0, 64),
                entry("run_2.bin", 2, 64),
            ],
        );

        let names: Vec<String> = series.iter().map(|e| e.stem()).collect();
        assert_eq!(names, vec!["run_0", "run_2", "run_10"]);
    }

    #[test]
    fn ties_broken_by_name() {
        let series = TimeSeries::new(
            "results",
            vec![entry("b_1.bin", 1, 64), entry("a_1.bin", 1, 64)],
        );

        assert_eq!(series.entries()[0].file_name(), "a_1.bin");
        assert_eq!(series.duplicate_indices(), vec![1]);
    }

    #[test]
    fn times_from_position() {
        let series = TimeSeries::new(
            "results",
            vec![
                entry("u0.bin", 0, 64),
                entry("u100.bin", 100, 64),
                entry("u300.bin", 300, 64),
            ],
        );
        assert_eq!(series.times(0.5), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn first_file_size_only() {
        let series = TimeSeries::new(
            "results",
            vec![entry("u0.bin", 0, 64), entry("u1.bin", 1, 12)],
        );
        assert!(series.validate_size(64).is_ok());

        let err = series.validate_size(72).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 72,
                found: 64,
                ..
            }
        ));
    }

    #[test]
    fn empty_series() {
        let series = TimeSeries::new("results", Vec::new());
        assert!(series.is_empty());
        assert!(matches!(
            series.validate_size(64),
            Err(Error::NoFilesFound(_))
        ));
        assert_eq!(series.to_string(), "no frames in \"results\"");
    }
}
