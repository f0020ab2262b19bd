//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::options::Options;

/// Split a string into the characters the matcher works on.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Every start offset of `needle` in `text`, by brute force.
///
/// The reference for [`crate::TextIndex::lookup`].
pub fn naive_occurrences(text: &[char], needle: &[char]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > text.len() {
        return Vec::new();
    }
    text.windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(i, _)| i)
        .collect()
}

/// Global edit distance turning `pattern` into `target` under `options`.
///
/// Two-row DP with no bound and no early exit. Costs follow the matcher:
/// consuming a pattern character costs `del_cost`, consuming a target character
/// costs `ins_cost`.
pub fn edit_distance(pattern: &[char], target: &[char], options: &Options) -> usize {
    let mut prev: Vec<usize> = (0..=target.len()).map(|j| j * options.ins_cost).collect();
    let mut curr = vec![0; target.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        curr[0] = (i + 1) * options.del_cost;
        for (j, &t) in target.iter().enumerate() {
            curr[j + 1] = (prev[j + 1] + options.del_cost)
                .min(prev[j] + options.mismatch_cost(p, t))
                .min(curr[j] + options.ins_cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[target.len()]
}

/// Deterministic pseudo-random DNA of length `len`.
///
/// Same `seed`, same sequence. Good enough for benches and long-text tests.
pub fn dna(len: usize, seed: u64) -> String {
    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            BASES[(state >> 62) as usize]
        })
        .collect()
}
