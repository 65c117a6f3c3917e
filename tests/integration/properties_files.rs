//! Properties file round trips

use super::test_utils::write_file;
use craftbox::files::{
    read_properties, write_properties, write_properties_with_comment, Properties,
};
use craftbox::print::write_properties_listing;
use craftbox::ErrorKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_then_read_simple_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.properties");

    let mut props = Properties::new();
    props.insert("a".to_string(), "1".to_string());
    props.insert("b".to_string(), "2".to_string());

    write_properties(&props, &path).unwrap();
    assert_eq!(read_properties(&path).unwrap(), props);
}

#[test]
fn test_reads_hand_written_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "db.properties",
        b"# database settings\r\n\
          ! legacy comment\r\n\
          db.url = jdbc:postgresql://localhost:5432/app\r\n\
          db.user:admin\r\n\
          db.options = ssl=true; \\\r\n    timeout=30\r\n\
          greeting = ciao\\u0021\r\n",
    );

    let props = read_properties(&path).unwrap();
    assert_eq!(props.len(), 4);
    assert_eq!(props["db.url"], "jdbc:postgresql://localhost:5432/app");
    assert_eq!(props["db.user"], "admin");
    assert_eq!(props["db.options"], "ssl=true; timeout=30");
    assert_eq!(props["greeting"], "ciao!");
}

#[test]
fn test_comment_header_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("with-comment.properties");

    let mut props = Properties::new();
    props.insert("città".to_string(), "Milano".to_string());
    write_properties_with_comment(&props, &path, Some("generated")).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("#generated"));
    assert!(lines.next().unwrap().starts_with('#'));
    assert_eq!(lines.next(), Some("citt\\u00E0=Milano"));
    assert_eq!(read_properties(&path).unwrap(), props);
}

#[test]
fn test_write_does_not_create_parent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("x.properties");

    let err = write_properties(&Properties::new(), &path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_listing_output_of_read_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "p.properties", b"k2=v2\nk1=v1\n");

    let props = read_properties(&path).unwrap();
    let mut out = Vec::new();
    write_properties_listing(&mut out, &props).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "k1: v1\nk2: v2\n");
}
