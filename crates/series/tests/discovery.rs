//! Integration tests for frame discovery on a real directory

use std::fs;
use std::path::Path;

use rstest::{fixture, rstest};
use tempfile::TempDir;
use xdmfgen_series::{expected_byte_length, read_series, Error, IndexPolicy};

fn write_frame(dir: &Path, name: &str, bytes: usize) {
    fs::write(dir.join(name), vec![0u8; bytes]).unwrap();
}

#[fixture]
fn results() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in ["run_10.bin", "run_0.bin", "run_2.bin"] {
        write_frame(dir.path(), name, 64);
    }
    dir
}

#[rstest]
fn ordered_by_numeric_index(results: TempDir) {
    let series = read_series(results.path(), IndexPolicy::Last).unwrap();
    let indices: Vec<u64> = series.iter().map(|e| e.index).collect();
    let names: Vec<String> = series.iter().map(|e| e.stem()).collect();

    assert_eq!(indices, vec![0, 2, 10]);
    assert_eq!(names, vec!["run_0", "run_2", "run_10"]);
}

#[rstest]
fn ignores_other_files(results: TempDir) {
    write_frame(results.path(), "input.json", 10);
    write_frame(results.path(), "notes_99.txt", 10);
    write_frame(results.path(), "upper_5.BIN", 64);
    fs::create_dir(results.path().join("nested_7.bin")).unwrap();

    let series = read_series(results.path(), IndexPolicy::Last).unwrap();
    assert_eq!(series.len(), 3);
}

#[cfg(unix)]
#[rstest]
fn skips_dangling_links(results: TempDir) {
    std::os::unix::fs::symlink("nowhere", results.path().join("dangling_5.bin")).unwrap();
    std::os::unix::fs::symlink("run_0.bin", results.path().join("linked_7.bin")).unwrap();

    let series = read_series(results.path(), IndexPolicy::Last).unwrap();
    let indices: Vec<u64> = series.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 2, 7, 10]);
}

#[rstest]
fn repeated_reads_are_identical(results: TempDir) {
    let a = read_series(results.path(), IndexPolicy::Last).unwrap();
    let b = read_series(results.path(), IndexPolicy::Last).unwrap();
    assert_eq!(a.entries(), b.entries());
}

#[rstest]
#[case(64, true)]
#[case(63, false)]
#[case(65, false)]
fn first_frame_size(#[case] bytes: usize, #[case] valid: bool) {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "u0.bin", bytes);

    let series = read_series(dir.path(), IndexPolicy::Last).unwrap();
    let result = series.validate_size(expected_byte_length([2, 2, 2]).unwrap());

    match valid {
        true => assert!(result.is_ok()),
        false => assert!(matches!(result, Err(Error::SizeMismatch { expected: 64, .. }))),
    }
}

#[test]
fn missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");
    assert!(matches!(
        read_series(&missing, IndexPolicy::Last),
        Err(Error::DirectoryNotFound(_))
    ));
}

#[test]
fn file_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "u0.bin", 8);
    assert!(matches!(
        read_series(dir.path().join("u0.bin"), IndexPolicy::Last),
        Err(Error::DirectoryNotFound(_))
    ));
}

#[test]
fn empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "readme.txt", 8);
    assert!(matches!(
        read_series(dir.path(), IndexPolicy::Last),
        Err(Error::NoFilesFound(_))
    ));
}

#[rstest]
#[case(IndexPolicy::Last, true)]
#[case(IndexPolicy::Unique, false)]
fn index_policy(#[case] policy: IndexPolicy, #[case] valid: bool) {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "run2_step10.bin", 8);

    let result = read_series(dir.path(), policy);
    match valid {
        true => assert_eq!(result.unwrap().entries()[0].index, 10),
        false => assert!(matches!(result, Err(Error::AmbiguousIndex { .. }))),
    }
}

#[test]
fn name_without_index() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "u0.bin", 8);
    write_frame(dir.path(), "final.bin", 8);
    assert!(matches!(
        read_series(dir.path(), IndexPolicy::Last),
        Err(Error::MalformedFilename(_))
    ));
}
