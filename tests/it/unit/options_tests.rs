//! Unit tests for options loading and persistence.

use gridboard::options::{GridOptions, default_options_path};
use gridboard::{GridError, PackPolicy, RowCeiling};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("options.json");

    let options = GridOptions::new(12, 6)
        .with_margin(4.0, 2.0)
        .with_packing(PackPolicy::with_row_ceiling(RowCeiling::PerItem { base: 100, per_item: 3 }));
    options.save(&path).unwrap();

    let loaded = GridOptions::load(&path).unwrap();
    assert_eq!(loaded, options);
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempdir().unwrap();
    let options = GridOptions::load_or_default(&dir.path().join("absent.json")).unwrap();
    assert_eq!(options, GridOptions::default());
}

#[test]
fn test_load_rejects_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.json");
    fs::write(&path, "{ columns: ").unwrap();

    let err = GridOptions::load(&path).unwrap_err();
    assert!(matches!(err, GridError::Json(_)));
}

#[test]
fn test_load_rejects_zero_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.json");
    fs::write(&path, r#"{"rows": 0}"#).unwrap();

    let err = GridOptions::load_or_default(&path).unwrap_err();
    assert!(matches!(err, GridError::InvalidOptions(_)));
}

#[test]
fn test_save_refuses_invalid_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.json");
    assert!(GridOptions::new(0, 4).save(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_fixed_ceiling_document() {
    let options = GridOptions::from_json(r#"{"packing": {"row_ceiling": {"fixed": 20}}}"#).unwrap();
    assert_eq!(options.packing.row_ceiling, RowCeiling::Fixed(20));
}

#[test]
fn test_default_path_location() {
    if let Some(path) = default_options_path() {
        assert!(path.ends_with("gridboard/options.json"));
    }
}
