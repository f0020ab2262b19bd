// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types every search path produces and consumes.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Match**: `start ≤ end`, both character offsets into the searched text.
//!   `dist` is the minimum cost of turning the pattern into `text[start..end]`
//!   under the cost model the search ran with.
//!
//! - **Fragment**: fragments of one partition are contiguous, non-empty, and
//!   concatenate back to the pattern. `offset` is where the fragment starts in
//!   the pattern, in characters.
//!
//! Offsets are **character offsets** (Unicode scalar values), not byte offsets.
//! Use [`Match::byte_range`] to slice the original `&str`.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One approximate occurrence of a pattern in a text.
///
/// Ordering is field-wise: `start`, then `end`, then `dist`. That is the order
/// the accelerated search returns results in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    /// First character of the occurrence (inclusive).
    pub start: usize,
    /// One past the last character of the occurrence (exclusive).
    pub end: usize,
    /// Edit cost of the best alignment ending at `end`.
    pub dist: usize,
}

impl Match {
    #[inline]
    pub fn new(start: usize, end: usize, dist: usize) -> Self {
        debug_assert!(start <= end, "match start {} > end {}", start, end);
        Self { start, end, dist }
    }

    /// Number of text characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Character range `[start, end)`.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Shift both offsets right by `by` characters.
    ///
    /// Used to translate window-relative matches back into text coordinates.
    #[inline]
    pub(crate) fn shifted(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
            dist: self.dist,
        }
    }

    /// Byte range of this match in `text`, for slicing the original string.
    ///
    /// Returns `None` if the match does not fit in `text` (wrong text, or the
    /// text was changed since the search).
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        let mut starts = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
        let start = starts.nth(self.start)?;
        let end = if self.is_empty() {
            start
        } else {
            starts.nth(self.len() - 1)?
        };
        Some(start..end)
    }
}

/// A contiguous piece of the pattern, as produced by [`crate::partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'p> {
    /// The fragment's characters.
    pub chars: &'p [char],
    /// Character offset of the fragment within the pattern.
    pub offset: usize,
}

impl Fragment<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
