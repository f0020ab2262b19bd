//! Runtime contracts for the matcher and the index.
//!
//! Debug-mode assertions over properties the rest of the crate relies on. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the point the invariant breaks, not three calls later
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                | Property                                        |
//! |----------------------------------|-------------------------------------------------|
//! | `check_match_well_formed`        | `start ≤ end ≤ |text|`                          |
//! | `check_matches_sorted_unique`    | strictly increasing `(start, end, dist)`        |
//! | `check_suffix_array_sorted`      | `text[sa[i]..] < text[sa[i+1]..]`               |
//! | `check_suffix_array_complete`    | every position appears exactly once             |
//! | `check_partition_covers`         | fragments concatenate to the pattern            |
//! | `check_window_in_bounds`         | `window.start ≤ window.end ≤ |text|`            |
//!
//! # Usage
//!
//! ```ignore
//! use fuzzyfind::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_suffix_array_sorted(&text, index.suffix_array());
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::{Fragment, Match};
use std::ops::Range;

// ============================================================================
// MATCH CONTRACTS
// ============================================================================

/// Check that a match describes a real span of the text.
///
/// # Panics (debug builds only)
/// Panics if `start > end` or `end > text_len`.
#[inline]
pub fn check_match_well_formed(found: &Match, text_len: usize) {
    debug_assert!(
        found.start <= found.end,
        "Contract violation: Match.WellFormed - start {} > end {}",
        found.start,
        found.end
    );
    debug_assert!(
        found.end <= text_len,
        "Contract violation: Match.WellFormed - end {} > text length {}",
        found.end,
        text_len
    );
}

/// Check that a result list is strictly increasing, hence free of duplicates.
#[inline]
pub fn check_matches_sorted_unique(matches: &[Match]) {
    for (i, pair) in matches.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: Matches.SortedUnique - matches[{}] {:?} >= matches[{}] {:?}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }
}

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that the suffix array is sorted lexicographically.
///
/// Suffixes of one text are all distinct, so the order is strict.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(text: &[char], suffix_array: &[usize]) {
    for i in 1..suffix_array.len() {
        let prev_suffix = text.get(suffix_array[i - 1]..).unwrap_or(&[]);
        let curr_suffix = text.get(suffix_array[i]..).unwrap_or(&[]);

        debug_assert!(
            prev_suffix < curr_suffix,
            "Contract violation: SuffixArray.Sorted - \
             suffix_array[{}] ('{}') >= suffix_array[{}] ('{}')",
            i - 1,
            prev_suffix.iter().take(20).collect::<String>(),
            i,
            curr_suffix.iter().take(20).collect::<String>()
        );
    }
}

/// Check that the suffix array is a permutation of `0..text.len()`.
///
/// # Panics (debug builds only)
/// Panics if a position is missing, repeated, or out of range.
#[inline]
pub fn check_suffix_array_complete(text: &[char], suffix_array: &[usize]) {
    debug_assert_eq!(
        suffix_array.len(),
        text.len(),
        "Contract violation: SuffixArray.Complete - {} entries for {} positions",
        suffix_array.len(),
        text.len()
    );

    let mut seen = vec![false; text.len()];
    for (i, &pos) in suffix_array.iter().enumerate() {
        debug_assert!(
            pos < text.len(),
            "Contract violation: SuffixArray.Complete - suffix_array[{}] = {} out of range",
            i,
            pos
        );
        if let Some(slot) = seen.get_mut(pos) {
            debug_assert!(
                !*slot,
                "Contract violation: SuffixArray.Complete - position {} appears twice",
                pos
            );
            *slot = true;
        }
    }
}

// ============================================================================
// PIGEONHOLE CONTRACTS
// ============================================================================

/// Check that fragments tile the pattern: contiguous, in order, nothing left over.
#[inline]
pub fn check_partition_covers(pattern: &[char], fragments: &[Fragment<'_>]) {
    let mut expected_offset = 0;
    for (i, fragment) in fragments.iter().enumerate() {
        debug_assert_eq!(
            fragment.offset, expected_offset,
            "Contract violation: Partition.Covers - fragment {} starts at {}, expected {}",
            i, fragment.offset, expected_offset
        );
        debug_assert!(
            pattern.get(fragment.offset..fragment.offset + fragment.len()) == Some(fragment.chars),
            "Contract violation: Partition.Covers - fragment {} is not the pattern slice at {}",
            i,
            fragment.offset
        );
        expected_offset += fragment.len();
    }

    if !fragments.is_empty() {
        debug_assert_eq!(
            expected_offset,
            pattern.len(),
            "Contract violation: Partition.Covers - fragments cover {} of {} characters",
            expected_offset,
            pattern.len()
        );
    }
}

/// Check that a verification window lies inside the text.
#[inline]
pub fn check_window_in_bounds(window: &Range<usize>, text_len: usize) {
    debug_assert!(
        window.start <= window.end && window.end <= text_len,
        "Contract violation: Window.InBounds - {:?} outside 0..{}",
        window,
        text_len
    );
}
