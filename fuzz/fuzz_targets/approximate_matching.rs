// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded approximate matching.
//!
//! Runs both search paths on arbitrary input and checks what every result must
//! satisfy: spans inside the text, distances within the bound, sorted unique
//! accelerated output, and the same triples from both paths.

#![no_main]

use arbitrary::Arbitrary;
use fuzzyfind::{best_match, find_bounded, find_bounded_accelerated, Options, SearchError};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for approximate matching
#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern_bytes: Vec<u8>,
    text_bytes: Vec<u8>,
    /// Edit budget, capped below
    max_distance: u8,
    /// Custom costs, mapped into 1..=4
    costs: [u8; 3],
}

fuzz_target!(|input: MatchInput| {
    let pattern: String = String::from_utf8_lossy(&input.pattern_bytes)
        .chars()
        .take(32)
        .collect();
    let text: String = String::from_utf8_lossy(&input.text_bytes)
        .chars()
        .take(512)
        .collect();
    let k = usize::from(input.max_distance % 6);
    let [ins, del, sub] = input.costs.map(|c| usize::from(c % 4) + 1);
    let options = Options::default().with_costs(ins, del, sub);

    let text_len = text.chars().count();

    let direct = match find_bounded(&pattern, &text, k, &options) {
        Ok(found) => found,
        Err(SearchError::EmptyInput(_)) => {
            assert!(pattern.is_empty() || text.is_empty());
            return;
        }
    };
    let fast = find_bounded_accelerated(&pattern, &text, k, &options)
        .expect("non-empty input must not fail");

    for m in direct.iter().chain(&fast) {
        assert!(m.start <= m.end && m.end <= text_len, "{:?} outside text", m);
        assert!(m.dist <= k, "{:?} over budget {}", m, k);
        assert!(m.byte_range(&text).is_some());
    }

    assert!(direct.windows(2).all(|w| w[0].end < w[1].end));
    assert!(fast.windows(2).all(|w| w[0] < w[1]));

    let mut sorted = direct.clone();
    sorted.sort();
    assert_eq!(fast, sorted, "paths disagree for {:?} in {:?}", pattern, text);

    assert_eq!(best_match(&fast), best_match(&sorted));
});
