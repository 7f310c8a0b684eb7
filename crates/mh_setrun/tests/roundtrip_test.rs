// crates/mh_setrun/tests/roundtrip_test.rs

//! `.data` 目录与 JSON 输入的写出 / 读回

use std::fs;
use std::path::PathBuf;

use mh_setrun::io::names;
use mh_setrun::sources::TopoSource;
use mh_setrun::{scenario, Environment, RunConfig, RunSpec, SetrunError};
use tempfile::TempDir;

#[test]
fn test_write_then_read_dir() {
    let config = scenario::lake_3088().unwrap();
    let dir = TempDir::new().unwrap();

    let written = config.write_dir(dir.path()).unwrap();
    assert_eq!(written.len(), names::ALL.len());
    for name in names::ALL {
        assert!(dir.path().join(name).is_file(), "missing {name}");
    }

    let back = RunConfig::read_dir(dir.path()).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_write_creates_nested_dir() {
    let config = scenario::lake_3088().unwrap();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("_output").join("run1");

    config.write_dir(&out).unwrap();
    let claw = fs::read_to_string(out.join(names::CLAW)).unwrap();
    assert!(claw.starts_with("###"));
    assert!(claw.contains("=: num_cells"));
}

#[test]
fn test_unwritable_destination_is_serialization_error() {
    let config = scenario::lake_3088().unwrap();
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let err = config.write_dir(&blocker).unwrap_err();
    assert!(matches!(err, SetrunError::Serialization { .. }));
    assert!(!err.is_configuration());
}

#[test]
fn test_corrupted_field_reports_line() {
    let config = scenario::lake_3088().unwrap();
    let dir = TempDir::new().unwrap();
    config.write_dir(dir.path()).unwrap();

    let path = dir.path().join(names::AMR);
    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, text.replace("=: regrid_interval", "=: regrid_buffer")).unwrap();

    match RunConfig::read_dir(dir.path()) {
        Err(SetrunError::Parse { file, line, .. }) => {
            assert_eq!(file, names::AMR);
            assert!(line > 1);
        }
        other => panic!("expected parse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_oversized_count_is_parse_error() {
    let config = scenario::lake_3088().unwrap();
    let dir = TempDir::new().unwrap();
    config.write_dir(dir.path()).unwrap();

    let path = dir.path().join(names::GAUGES);
    let text = fs::read_to_string(&path).unwrap();
    let edited = text.replacen("622 ", &format!("{} ", u64::MAX), 1);
    assert_ne!(edited, text);
    fs::write(&path, edited).unwrap();

    match RunConfig::read_dir(dir.path()) {
        Err(SetrunError::Parse { file, .. }) => assert_eq!(file, names::GAUGES),
        other => panic!("expected parse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_quoted_paths_read_back() {
    let mut builder = scenario::lake_3088_base().unwrap();
    builder
        .add_topo(TopoSource {
            topo_type: 3,
            min_level: 1,
            max_level: 6,
            t_start: 0.0,
            t_end: 1e10,
            path: PathBuf::from("o'brien =: lake \"west\".tt3"),
        })
        .unwrap();
    let config = builder.build().unwrap();
    let dir = TempDir::new().unwrap();
    config.write_dir(dir.path()).unwrap();

    let topo = fs::read_to_string(dir.path().join(names::TOPO)).unwrap();
    assert!(topo.contains("'o''brien =: lake \"west\".tt3'"));

    let back = RunConfig::read_dir(dir.path()).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_path_with_newline_rejected() {
    let mut builder = scenario::lake_3088_base().unwrap();
    let err = builder
        .add_topo(TopoSource {
            topo_type: 3,
            min_level: 1,
            max_level: 6,
            t_start: 0.0,
            t_end: 1e10,
            path: PathBuf::from("lake\n.tt3"),
        })
        .unwrap_err();
    assert!(err.to_string().contains("控制字符"), "{err}");
}

#[test]
fn test_edited_region_is_revalidated() {
    let config = scenario::lake_3088().unwrap();
    let dir = TempDir::new().unwrap();
    config.write_dir(dir.path()).unwrap();

    let path = dir.path().join(names::REGIONS);
    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, text.replacen("\n5 5 ", "\n5 9 ", 1)).unwrap();

    let err = RunConfig::read_dir(dir.path()).unwrap_err();
    let report = err.report().unwrap();
    assert_eq!(report.errors[0].key(), Some("regions[0].levels"));
}

#[test]
fn test_json_file_input() {
    let config = scenario::lake_3088().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lake.json");
    fs::write(&path, RunSpec::from_config(&config).to_json_string().unwrap()).unwrap();

    let env = Environment::new(dir.path());
    let back = RunSpec::from_file(&path).unwrap().assemble(&env).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_missing_json_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = RunSpec::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SetrunError::Read { .. }));
}
