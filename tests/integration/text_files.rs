//! Small text file reading and saving

use super::test_utils::write_file;
use craftbox::files::{read_lines, read_lines_with_encoding, read_text, save_text};
use craftbox::{CraftboxError, ErrorKind};
use tempfile::TempDir;

#[test]
fn test_save_then_read_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out").join("state.json");

    save_text(&path, "{\n  \"ok\": true\n}\n").unwrap();

    assert_eq!(read_lines(&path).unwrap(), vec!["{", "  \"ok\": true", "}"]);
    assert_eq!(read_text(&path).unwrap(), "{\n\"ok\": true\n}\n");
}

#[test]
fn test_windows_1252_file() {
    let temp_dir = TempDir::new().unwrap();
    // "€5" in windows-1252
    let path = write_file(temp_dir.path(), "price.txt", &[0x80, b'5', b'\r', b'\n']);

    assert_eq!(
        read_lines_with_encoding(&path, "windows-1252").unwrap(),
        vec!["€5"]
    );
    assert!(matches!(
        read_lines(&path).unwrap_err(),
        CraftboxError::Decode { .. }
    ));
}

#[test]
fn test_unknown_encoding_checked_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_lines_with_encoding(temp_dir.path().join("absent"), "x-unknown").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
