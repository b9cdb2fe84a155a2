use std::fs;

use create_express_api::validation::{ensure_safe_target_dir, validate_project_name};
use tempfile::TempDir;

#[test]
fn test_valid_project_names() {
    assert_eq!(validate_project_name("my-api"), None);
    assert_eq!(validate_project_name("My.Api_2"), None);
    assert_eq!(validate_project_name("  padded  "), None);
}

#[test]
fn test_empty_project_name_is_rejected() {
    assert!(validate_project_name("").is_some());
    assert!(validate_project_name("   ").is_some());
}

#[test]
fn test_dot_names_are_rejected() {
    assert!(validate_project_name(".").is_some());
    assert!(validate_project_name("..").is_some());
}

#[test]
fn test_paths_are_rejected() {
    assert!(validate_project_name("nested/name").is_some());
    assert!(validate_project_name("nested\\name").is_some());
}

#[test]
fn test_invalid_characters_are_rejected() {
    assert!(validate_project_name("my api").is_some());
    assert!(validate_project_name("my:api").is_some());
    assert!(validate_project_name("caf\u{e9}").is_some());
}

#[test]
fn test_missing_target_dir_is_safe() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("brand-new");

    assert!(ensure_safe_target_dir(&target).is_ok());
    // The check itself must not create anything.
    assert!(!target.exists());
}

#[test]
fn test_empty_target_dir_is_safe() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("empty");
    fs::create_dir(&target).unwrap();

    assert!(ensure_safe_target_dir(&target).is_ok());
}

#[test]
fn test_non_empty_target_dir_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("occupied");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "data").unwrap();

    let err = ensure_safe_target_dir(&target).unwrap_err();
    assert!(err.to_string().contains("not empty"));
}

#[test]
fn test_non_directory_target_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("file");
    fs::write(&target, "data").unwrap();

    let err = ensure_safe_target_dir(&target).unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}
