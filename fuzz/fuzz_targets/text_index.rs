// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the suffix array index.
//!
//! Every lookup must agree with a brute-force scan, and the suffix array must
//! be a sorted permutation of the text positions.

#![no_main]

use arbitrary::Arbitrary;
use fuzzyfind::testing::naive_occurrences;
use fuzzyfind::TextIndex;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct IndexInput {
    text_bytes: Vec<u8>,
    needle_bytes: Vec<u8>,
}

fuzz_target!(|input: IndexInput| {
    let text: Vec<char> = String::from_utf8_lossy(&input.text_bytes)
        .chars()
        .take(1024)
        .collect();
    let needle: Vec<char> = String::from_utf8_lossy(&input.needle_bytes)
        .chars()
        .take(16)
        .collect();

    let index = TextIndex::new(&text);
    let sa = index.suffix_array();

    let mut positions = sa.to_vec();
    positions.sort_unstable();
    assert!(positions.iter().copied().eq(0..text.len()));
    assert!(sa.windows(2).all(|w| text[w[0]..] < text[w[1]..]));

    assert_eq!(index.lookup(&needle), naive_occurrences(&text, &needle));
});
