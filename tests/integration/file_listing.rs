//! Recursive listing over realistic trees

use super::test_utils::write_file;
use craftbox::files::{list_files, list_files_by_extension, Walker, WalkerConfig};
use craftbox::ErrorKind;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn build_tree(root: &std::path::Path) -> Vec<PathBuf> {
    let mut files = vec![
        write_file(root, "README.md", b"# readme"),
        write_file(root, "src/main.txt", b"main"),
        write_file(root, "src/lib/util.txt", b"util"),
        write_file(root, "src/lib/util.txt.bak", b"old"),
        write_file(root, "docs/guide.TXT", b"upper"),
        write_file(root, "z/last.txt", b"z"),
    ];
    fs::create_dir_all(root.join("empty/deeper")).unwrap();
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}

#[test]
fn test_lists_exactly_the_regular_files_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let expected = build_tree(temp_dir.path());

    let listed = list_files(temp_dir.path()).unwrap();
    assert_eq!(listed, expected);

    let unique: HashSet<_> = listed.iter().collect();
    assert_eq!(unique.len(), listed.len());
}

#[test]
fn test_extension_listing_is_suffix_subset() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(temp_dir.path());

    let all = list_files(temp_dir.path()).unwrap();
    let txt = list_files_by_extension(temp_dir.path(), ".txt").unwrap();

    let expected: Vec<PathBuf> = all
        .iter()
        .filter(|p| p.file_name().unwrap().to_string_lossy().ends_with(".txt"))
        .cloned()
        .collect();
    assert_eq!(txt, expected);
    assert_eq!(txt.len(), 3);
    assert!(txt.iter().all(|p| all.contains(p)));
}

#[test]
fn test_listing_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    build_tree(temp_dir.path());

    let first = Walker::new(temp_dir.path()).walk().unwrap();
    let second = Walker::with_config(temp_dir.path(), WalkerConfig::default())
        .walk()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_directory_lists_nothing() {
    let temp_dir = TempDir::new().unwrap();
    assert!(list_files(temp_dir.path()).unwrap().is_empty());
}

#[test]
fn test_missing_root_fails_instead_of_empty() {
    let temp_dir = TempDir::new().unwrap();
    let err = list_files_by_extension(temp_dir.path().join("nowhere"), ".txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_aborts_listing() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    build_tree(temp_dir.path());
    let locked = temp_dir.path().join("locked");
    write_file(temp_dir.path(), "locked/secret.txt", b"s");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores permission bits; nothing to observe there
    let readable = fs::read_dir(&locked).is_ok();
    let result = list_files(temp_dir.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if !readable {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
