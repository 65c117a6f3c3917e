//! File digest verification against standard vectors

use super::test_utils::write_file;
use craftbox::digest::{calculate_digest, digest_bytes, DigestAlgorithm, Digester};
use craftbox::ErrorKind;
use sha2::{Digest, Sha256};
use tempfile::TempDir;

#[test]
fn test_sha256_of_abc_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "abc.txt", b"abc");

    let digest = calculate_digest(&path, "SHA-256").unwrap();
    assert_eq!(
        digest,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(digest.len(), 64);
}

#[test]
fn test_empty_file_vectors() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "empty", b"");

    assert_eq!(
        calculate_digest(&path, "SHA-256").unwrap(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        calculate_digest(&path, "MD5").unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    assert_eq!(
        calculate_digest(&path, "BLAKE3").unwrap(),
        blake3::hash(b"").to_hex().to_string()
    );
}

#[test]
fn test_sha1_and_sha3_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "abc.txt", b"abc");

    assert_eq!(
        calculate_digest(&path, "SHA-1").unwrap(),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    assert_eq!(
        calculate_digest(&path, "SHA3-256").unwrap(),
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
    );
}

#[test]
fn test_multi_chunk_file_matches_reference() {
    let temp_dir = TempDir::new().unwrap();
    let content: Vec<u8> = (0..100_000u32).flat_map(|i| i.to_le_bytes()).collect();
    let path = write_file(temp_dir.path(), "nested/big.bin", &content);

    let expected = hex::encode(Sha256::digest(&content));
    assert_eq!(calculate_digest(&path, "sha256").unwrap(), expected);
    assert_eq!(
        Digester::new(DigestAlgorithm::Sha256).digest_file(&path).unwrap(),
        expected
    );
}

#[test]
fn test_repeated_digests_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "same.txt", b"stable content");

    for algorithm in DigestAlgorithm::ALL {
        let first = calculate_digest(&path, algorithm.name()).unwrap();
        let second = calculate_digest(&path, algorithm.name()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, digest_bytes(b"stable content", algorithm));
    }
}

#[test]
fn test_directory_is_not_digestible() {
    let temp_dir = TempDir::new().unwrap();
    let err = calculate_digest(temp_dir.path(), "SHA-256").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}
