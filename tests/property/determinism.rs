//! Property-based tests for digest and listing determinism

use craftbox::digest::{digest_bytes, DigestAlgorithm, Digester};
use craftbox::files::{list_files, list_files_by_extension};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

fn algorithm() -> impl Strategy<Value = DigestAlgorithm> {
    proptest::sample::select(DigestAlgorithm::ALL.to_vec())
}

proptest! {
    /// Same content and algorithm always give the same fixed-length digest
    #[test]
    fn digest_is_deterministic(content in any::<Vec<u8>>(), algorithm in algorithm()) {
        let first = digest_bytes(&content, algorithm);
        let second = digest_bytes(&content, algorithm);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), algorithm.output_len() * 2);
    }

    /// Chunk size never changes the result
    #[test]
    fn chunk_size_is_irrelevant(
        content in proptest::collection::vec(any::<u8>(), 0..4096),
        buffer_size in 1usize..600,
        algorithm in algorithm(),
    ) {
        let digester = Digester::new(algorithm).with_buffer_size(buffer_size).unwrap();
        let streamed = digester.digest_reader(content.as_slice()).unwrap();
        prop_assert_eq!(streamed, digest_bytes(&content, algorithm));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Listing returns exactly the created files, sorted, and the extension
    /// listing is the suffix-matching subset of it
    #[test]
    fn listing_matches_created_tree(
        entries in proptest::collection::btree_set(
            ("[a-c]{1,2}", proptest::option::of("[a-c]{1,2}"), prop_oneof![Just(".txt"), Just(".md")]),
            0..12,
        )
    ) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let mut expected = BTreeSet::new();

        for (name, dir, ext) in &entries {
            let parent = match dir {
                Some(dir) => root.join(format!("d_{}", dir)),
                None => root.to_path_buf(),
            };
            fs::create_dir_all(&parent).unwrap();
            let path = parent.join(format!("{}{}", name, ext));
            fs::write(&path, name.as_bytes()).unwrap();
            expected.insert(path.into_os_string());
        }

        let listed = list_files(root).unwrap();
        let listed_strings: Vec<_> = listed.iter().map(|p| p.clone().into_os_string()).collect();
        let expected_sorted: Vec<_> = expected.into_iter().collect();
        prop_assert_eq!(&listed_strings, &expected_sorted);

        let md = list_files_by_extension(root, ".md").unwrap();
        let md_expected: Vec<_> = listed
            .iter()
            .filter(|p| p.to_string_lossy().ends_with(".md"))
            .cloned()
            .collect();
        prop_assert_eq!(md, md_expected);
    }
}
