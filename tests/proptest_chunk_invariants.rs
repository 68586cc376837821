//! Property-based invariant tests for the chunked reader.
//!
//! For any file contents, carry-over prefix and block size:
//!
//! 1. Concatenating the blocks reproduces `prepend ++ contents`
//! 2. Every block but the last is exactly `chunk_size` bytes
//! 3. The block count is `ceil((prepend + contents) / chunk_size)`
//! 4. Reading twice yields the same blocks

use std::fs;

use bytes::Bytes;
use proptest::prelude::*;
use tempfile::TempDir;
use tormeta::read_chunks;

// ── Helpers ──────────────────────────────────────────────────────────

fn blocks(contents: &[u8], chunk_size: usize, prepend: &[u8]) -> Vec<Bytes> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content");
    fs::write(&path, contents).unwrap();
    read_chunks(&path, chunk_size, prepend)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn arb_bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..=max)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Concatenation is lossless
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn concatenation_reproduces_input(
        contents in arb_bytes(300),
        prepend in arb_bytes(40),
        chunk_size in 1usize..=64,
    ) {
        let joined: Vec<u8> = blocks(&contents, chunk_size, &prepend).concat();
        let mut expected = prepend.clone();
        expected.extend_from_slice(&contents);
        prop_assert_eq!(joined, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Block sizes and count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn blocks_are_full_except_the_last(
        contents in arb_bytes(300),
        prepend in arb_bytes(40),
        chunk_size in 1usize..=64,
    ) {
        let blocks = blocks(&contents, chunk_size, &prepend);
        let total = prepend.len() + contents.len();

        prop_assert_eq!(blocks.len(), total.div_ceil(chunk_size));
        if let Some((last, full)) = blocks.split_last() {
            prop_assert!(full.iter().all(|block| block.len() == chunk_size));
            prop_assert!(!last.is_empty() && last.len() <= chunk_size);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rereading_is_deterministic(
        contents in arb_bytes(200),
        prepend in arb_bytes(20),
        chunk_size in 1usize..=32,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content");
        fs::write(&path, &contents).unwrap();

        let first: Vec<Bytes> = read_chunks(&path, chunk_size, &prepend)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        let second: Vec<Bytes> = read_chunks(&path, chunk_size, &prepend)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(first, second);
    }
}
