use super::*;
use crate::constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use std::fs;

#[test]
fn loads_a_complete_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sunsetter.toml");
    fs::write(
        &path,
        "latitude = 51.5\n\
         longitude = -0.12\n\
         utc_offset_hours = 0.0\n\
         correct_for_system_tz = true\n",
    )
    .unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.latitude, Some(51.5));
    assert_eq!(config.longitude, Some(-0.12));
    assert_eq!(config.utc_offset_hours, Some(0.0));
    assert_eq!(config.correct_for_system_tz, Some(true));

    let tracker = config.tracker();
    assert_eq!(tracker.location().latitude(), 51.5);
    assert_eq!(tracker.timezone().utc_offset_hours(), 0.0);
    assert!(tracker.timezone().correct_for_system_tz());
}

#[test]
fn missing_file_is_replaced_with_a_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sunsetter.toml");

    let config = Config::load_from_path(&path).unwrap();
    assert!(path.exists(), "default config file should be written");
    assert_eq!(config.latitude, Some(DEFAULT_LATITUDE));
    assert_eq!(config.longitude, Some(DEFAULT_LONGITUDE));
    assert_eq!(config.correct_for_system_tz, Some(false));
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sunsetter.toml");
    fs::write(&path, "latitude = 10.0\n").unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.location().latitude(), 10.0);
    assert_eq!(config.location().longitude(), DEFAULT_LONGITUDE);
    assert!(!config.timezone_policy().correct_for_system_tz());
}

#[test]
fn out_of_range_latitude_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sunsetter.toml");
    fs::write(&path, "latitude = 95.0\n").unwrap();

    let err = Config::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("latitude"));
}

#[test]
fn out_of_range_offset_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sunsetter.toml");
    fs::write(&path, "utc_offset_hours = 26.0\n").unwrap();

    let err = Config::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("utc_offset_hours"));
}

#[test]
fn malformed_toml_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sunsetter.toml");
    fs::write(&path, "latitude = \"north\"\n").unwrap();

    assert!(Config::load_from_path(&path).is_err());
}
