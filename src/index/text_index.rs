// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring lookup over one text.
//!
//! Characters are ranked by scalar value into a dense alphabet, then SA-IS builds
//! the suffix array over the ranks. Because ranking preserves order, the suffix
//! array is also sorted by the characters themselves, and a lookup is two binary
//! searches for the block of suffixes that start with the needle.
//!
//! # Invariants
//!
//! 1. **SUFFIX_ARRAY_SORTED**: `text[sa[i]..] < text[sa[i+1]..]` for every i
//! 2. **SUFFIX_ARRAY_COMPLETE**: every character position appears exactly once
//!
//! Offsets are character offsets into the `&[char]` the index was built from.

use crate::contracts::{check_suffix_array_complete, check_suffix_array_sorted};
use crate::index::sais::suffix_array;
use std::cmp::Ordering;
use std::ops::Range;

/// Read-only suffix array over a borrowed text.
#[derive(Debug, Clone)]
pub struct TextIndex<'t> {
    text: &'t [char],
    suffix_array: Vec<usize>,
}

impl<'t> TextIndex<'t> {
    /// Build the index in O(n log σ) (ranking) + O(n) (SA-IS).
    pub fn new(text: &'t [char]) -> Self {
        let mut alphabet = text.to_vec();
        alphabet.sort_unstable();
        alphabet.dedup();

        // Rank 0 is reserved for the SA-IS sentinel
        let ranks: Vec<usize> = text
            .iter()
            .map(|c| match alphabet.binary_search(c) {
                Ok(rank) | Err(rank) => rank + 1,
            })
            .collect();

        let suffix_array = suffix_array(&ranks, alphabet.len() + 1);
        check_suffix_array_sorted(text, &suffix_array);
        check_suffix_array_complete(text, &suffix_array);

        Self { text, suffix_array }
    }

    pub fn text(&self) -> &'t [char] {
        self.text
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Block of the suffix array whose suffixes start with `needle`.
    ///
    /// Empty range when there is no occurrence. An empty needle matches nothing.
    pub fn range(&self, needle: &[char]) -> Range<usize> {
        if needle.is_empty() {
            return 0..0;
        }

        let lo = self
            .suffix_array
            .partition_point(|&pos| self.compare_prefix(pos, needle) == Ordering::Less);
        let hi = self
            .suffix_array
            .partition_point(|&pos| self.compare_prefix(pos, needle) != Ordering::Greater);
        lo..hi
    }

    /// Every start offset of `needle` in the text, ascending.
    pub fn lookup(&self, needle: &[char]) -> Vec<usize> {
        let mut hits = self.suffix_array[self.range(needle)].to_vec();
        hits.sort_unstable();
        hits
    }

    /// Number of occurrences of `needle`.
    pub fn count(&self, needle: &[char]) -> usize {
        self.range(needle).len()
    }

    /// Compare the suffix at `pos`, truncated to the needle's length, to the needle.
    ///
    /// `Equal` means the suffix starts with the needle.
    #[inline]
    fn compare_prefix(&self, pos: usize, needle: &[char]) -> Ordering {
        let suffix = &self.text[pos..];
        let k = suffix.len().min(needle.len());
        suffix[..k].cmp(needle)
    }
}
