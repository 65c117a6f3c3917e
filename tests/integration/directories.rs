//! Directory and temp-directory management

use craftbox::files::{create_directory, create_temp_directory, delete_dir_all, file_exists};
use craftbox::ErrorKind;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_create_directory_twice() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("output");

    assert!(!file_exists(&dir));
    create_directory(&dir).unwrap();
    create_directory(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn test_create_directory_does_not_create_parents() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("missing").join("child");

    let err = create_directory(&nested).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!temp_dir.path().join("missing").exists());
}

#[test]
fn test_temp_directories_never_repeat() {
    let temp_dir = TempDir::new().unwrap();
    let mut created = HashSet::new();

    for _ in 0..20 {
        let dir = create_temp_directory(temp_dir.path(), "batch_").unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir.parent().unwrap(), temp_dir.path());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        assert!(created.insert(dir), "temp directory path reused");
    }
}

#[test]
fn test_temp_directory_survives_until_deleted() {
    let temp_dir = TempDir::new().unwrap();
    let dir = create_temp_directory(temp_dir.path(), "keep").unwrap();
    fs::write(dir.join("marker"), "x").unwrap();

    assert!(dir.join("marker").exists());
    delete_dir_all(&dir).unwrap();
    assert!(!dir.exists());
}
