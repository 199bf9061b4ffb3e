//! Integration tests for the complete manifest generation pipeline

use std::fs;
use std::path::Path;

use clap::Parser;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use xdmfgen_cli::{generate, load_overlay, resolve, Cli, Config, Error};
use xdmfgen_series::Error as SeriesError;
use xdmfgen_xdmf::{AxisOrder, Error as XdmfError};

fn write_frame(dir: &Path, name: &str, bytes: usize) {
    fs::write(dir.join(name), vec![0u8; bytes]).unwrap();
}

/// Small 2x2x2 configuration pointing at `dir`
fn config(dir: &Path) -> Config {
    Config {
        source_dir: dir.to_path_buf(),
        lx: 2,
        ly: 2,
        lz: 2,
        save_interval: 0.5,
        ..Default::default()
    }
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
fn grids_in_numeric_order(results: TempDir) {
    let xml = generate(&config(results.path()), None).unwrap();

    assert_eq!(xml.matches("GridType=\"Uniform\"").count(), 3);

    let positions: Vec<usize> = ["Name=\"run_0\"", "Name=\"run_2\"", "Name=\"run_10\""]
        .iter()
        .map(|name| xml.find(name).unwrap())
        .collect();
    assert!(positions[0] < positions[1]);
    assert!(positions[1] < positions[2]);
}

#[rstest]
fn time_values_from_save_interval(results: TempDir) {
    let xml = generate(&config(results.path()), None).unwrap();
    assert!(xml.contains("NumberType=\"Float\" Dimensions=\"3\">0.000 0.500 1.000</DataItem>"));
}

#[rstest]
fn output_is_idempotent(results: TempDir) {
    let a = generate(&config(results.path()), None).unwrap();
    let b = generate(&config(results.path()), None).unwrap();
    assert_eq!(a, b);
}

#[rstest]
fn paths_relative_to_working_dir(results: TempDir) {
    let base = results.path().parent().unwrap();
    let dir_name = results.path().file_name().unwrap().to_string_lossy();

    let xml = generate(&config(results.path()), Some(base)).unwrap();
    let expected = Path::new(dir_name.as_ref()).join("run_0.bin");
    assert!(xml.contains(&format!(">{}</DataItem>", expected.display())));
}

#[rstest]
fn grid_header(results: TempDir) {
    let config = Config {
        ly: 4,
        dy: 0.5,
        axis_order: AxisOrder::Zyx,
        ..config(results.path())
    };
    for name in ["run_0.bin", "run_2.bin", "run_10.bin"] {
        write_frame(results.path(), name, 128);
    }

    let xml = generate(&config, None).unwrap();
    assert!(xml.contains("TopologyType=\"3DCoRectMesh\" Dimensions=\"2 4 2\""));
    assert!(xml.contains(">1 0.5 1</DataItem>"));
    assert!(xml.contains(">-128 -128 -128</DataItem>"));
}

#[rstest]
#[case(64, true)]
#[case(63, false)]
#[case(65, false)]
fn size_validation(#[case] bytes: usize, #[case] valid: bool) {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "u0.bin", bytes);

    let result = generate(&config(dir.path()), None);
    match valid {
        true => assert!(result.is_ok()),
        false => assert!(matches!(
            result,
            Err(Error::Series(SeriesError::SizeMismatch { expected: 64, .. }))
        )),
    }
}

#[test]
fn missing_directory_short_circuits() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate(&config(&dir.path().join("missing")), None);
    assert!(matches!(
        result,
        Err(Error::Series(SeriesError::DirectoryNotFound(_)))
    ));
}

#[test]
fn empty_directory_short_circuits() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate(&config(dir.path()), None);
    assert!(matches!(
        result,
        Err(Error::Series(SeriesError::NoFilesFound(_)))
    ));
}

// other platforms refuse to create such a directory
#[cfg(target_os = "linux")]
#[test]
fn non_utf8_directory_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join(OsStr::from_bytes(b"bad\xffdir"));
    fs::create_dir(&results).unwrap();
    write_frame(&results, "u0.bin", 64);

    assert!(matches!(
        generate(&config(&results), None),
        Err(Error::Xdmf(XdmfError::InvalidPath(_)))
    ));
}

#[test]
fn invalid_grid_checked_first() {
    // the directory does not exist either, but the grid is checked before it
    let config = Config {
        dx: 0.0,
        ..config(Path::new("/definitely/not/here"))
    };
    assert!(matches!(
        generate(&config, None),
        Err(Error::InvalidSpacing { axis: 'x', .. })
    ));
}

#[rstest]
fn strict_index_policy(results: TempDir) {
    write_frame(results.path(), "run2_step40.bin", 64);

    let cli = Cli::try_parse_from(["xdmfgen", "--strict-index"]).unwrap();
    let config = resolve(config(results.path()), None, cli.overrides());
    assert!(matches!(
        generate(&config, None),
        Err(Error::Series(SeriesError::AmbiguousIndex { .. }))
    ));
}

#[rstest]
#[case(&["xdmfgen", "--Lx", "256"], 256)]
#[case(&["xdmfgen", "--lx", "64"], 64)]
#[case(&["xdmfgen"], 128)]
fn json_overlay_beneath_flags(#[case] args: &[&str], #[case] lx: usize) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    fs::write(&path, r#"{"Lx": 128, "Ly": 32, "dt": 0.1}"#).unwrap();

    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    let overlay = load_overlay(&path).unwrap();
    let config = resolve(Config::default(), overlay, cli.overrides());

    assert_eq!(config.lx, lx);
    assert_eq!(config.ly, 32);
    assert_eq!(config.lz, 256);
    assert_eq!(config.save_interval, 0.1);
}

#[test]
fn json_source_directory() {
    let results = tempfile::tempdir().unwrap();
    write_frame(results.path(), "u0.bin", 8);
    write_frame(results.path(), "u1.bin", 8);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    let json = serde_json::json!({
        "results": results.path(),
        "Lx": 1, "Ly": 1, "Lz": 1,
        "saveat": 2.0
    });
    fs::write(&path, json.to_string()).unwrap();

    let config = resolve(
        Config::default(),
        load_overlay(&path).unwrap(),
        Cli::try_parse_from(["xdmfgen"]).unwrap().overrides(),
    );
    let xml = generate(&config, None).unwrap();
    assert!(xml.contains(">0.000 2.000</DataItem>"));
}
