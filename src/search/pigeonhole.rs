// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pigeonhole seeding: exact fragment hits first, edit distance only near them.
//!
//! If an occurrence has at most `k` edits and the pattern is cut into `k + 1`
//! pieces, some piece took no edit at all. So every occurrence contains an exact
//! copy of at least one fragment, and an exact index finds those cheaply.
//!
//! ```text
//! pattern   ACATCC, k = 2  →  AC | AT | CC
//!
//! text      G A T T A C A T A T A T G C A T C T
//!                   ^^^^ "AC" hit at 4, fragment offset 0
//!                   [-------------]  implied span 4..10
//!                           [-------]  ends it can explain 8..=12
//! ```
//!
//! Each hit implies where the whole pattern would sit, give or take `k` edits on
//! either side, so it pins the occurrence's end to `left + |p| ± k`. The direct
//! matcher then runs on a short window ending there. Its left edge sits
//! `2(|p| + k) + 1` before the earliest such end: no alignment within `k` can
//! reach past that, so every kept end gets the same distance and the same start
//! the full-text matrix would give it. Ends outside the hit's range are left to
//! the hits that explain them.
//!
//! # When we don't bother
//!
//! These queries fall back to the direct matcher (logged, not an error):
//! - fragments would be empty: `|pattern| / (k + 1) < 1`
//! - the pattern can't fit with room for edits: `|pattern| ≥ |text| − k`
//! - the options match characters the exact index can't see, or let an edit
//!   cost nothing (see [`Options::is_seedable`])
//!
//! Hits whose implied span overhangs either end of the text by more than `k`
//! are dropped.

use crate::contracts::{
    check_matches_sorted_unique, check_partition_covers, check_window_in_bounds,
};
use crate::error::{EmptyInput, Result, SearchError};
use crate::fuzzy::MatrixContext;
use crate::index::TextIndex;
use crate::options::Options;
use crate::search::dedup::MatchSet;
use crate::types::{Fragment, Match};
use std::fmt;
use std::ops::{Range, RangeInclusive};

/// Why the pigeonhole search handed a query to the direct matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// `k + 1` fragments would leave some of them empty.
    FragmentsTooShort,
    /// The pattern is too long for the text to hold it plus `k` edits.
    PatternTooLong,
    /// Custom equality or zero-cost edits; exact fragment hits prove nothing.
    NotSeedable,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::FragmentsTooShort => {
                write!(f, "pattern is too short to split for this edit distance")
            }
            Fallback::PatternTooLong => write!(f, "pattern is too long for the text"),
            Fallback::NotSeedable => write!(f, "options are not compatible with exact seeding"),
        }
    }
}

/// Decide whether partitioning is worthwhile. `None` means go ahead.
pub fn fallback_reason(
    pattern_len: usize,
    text_len: usize,
    max_distance: usize,
    options: &Options,
) -> Option<Fallback> {
    if !options.is_seedable() {
        Some(Fallback::NotSeedable)
    } else if pattern_len / max_distance.saturating_add(1) < 1 {
        Some(Fallback::FragmentsTooShort)
    } else if pattern_len >= text_len.saturating_sub(max_distance) {
        Some(Fallback::PatternTooLong)
    } else {
        None
    }
}

/// Split `pattern` into `pieces` contiguous fragments, as equal as possible.
///
/// The first `len % pieces` fragments get one extra character. Fragments are
/// empty only when `pieces > pattern.len()`.
///
/// ```
/// let pattern: Vec<char> = "GGGTTLTTSS".chars().collect();
/// let parts = fuzzyfind::partition(&pattern, 3);
/// let sizes: Vec<usize> = parts.iter().map(|f| f.len()).collect();
/// assert_eq!(sizes, vec![4, 3, 3]);
/// assert_eq!(parts[1].offset, 4);
/// ```
pub fn partition(pattern: &[char], pieces: usize) -> Vec<Fragment<'_>> {
    if pieces == 0 {
        return Vec::new();
    }

    let base = pattern.len() / pieces;
    let extra = pattern.len() % pieces;

    let mut offset = 0;
    let fragments: Vec<Fragment<'_>> = (0..pieces)
        .map(|i| {
            let size = base + usize::from(i < extra);
            let fragment = Fragment {
                chars: &pattern[offset..offset + size],
                offset,
            };
            offset += size;
            fragment
        })
        .collect();

    check_partition_covers(pattern, &fragments);
    fragments
}

/// An exact fragment hit, before it becomes a verification window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    /// Where the fragment occurs in the text.
    hit: usize,
    /// Where the fragment sits in the pattern.
    fragment_offset: usize,
}

/// Text to verify for one hit, and the occurrence ends the hit vouches for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Window {
    span: Range<usize>,
    ends: RangeInclusive<usize>,
}

impl Candidate {
    /// `None` when the implied span overhangs the text by more than `k`.
    fn window(&self, pattern_len: usize, text_len: usize, max_distance: usize) -> Option<Window> {
        // left + k, where left = hit - fragment_offset may be negative
        let shifted = (self.hit + max_distance).checked_sub(self.fragment_offset)?;
        let lowest_end = (shifted + pattern_len).saturating_sub(2 * max_distance);
        if lowest_end > text_len {
            return None;
        }
        let highest_end = (shifted + pattern_len).min(text_len);

        let lead = 2 * (pattern_len + max_distance) + 1;
        Some(Window {
            span: lowest_end.saturating_sub(lead)..highest_end,
            ends: lowest_end..=highest_end,
        })
    }
}

/// Occurrences of `pattern` in `text` within `max_distance`, found by pigeonhole
/// seeding and verified with the direct matcher.
///
/// Sorted by `start`, then `end`; each `(start, end, dist)` at most once.
///
/// ```
/// use fuzzyfind::{find_bounded_accelerated, Match, Options};
///
/// let matches =
///     find_bounded_accelerated("GATTACA", "GATTACAATCGGATTACAACTGA", 0, &Options::default())
///         .unwrap();
/// assert_eq!(matches, vec![Match::new(0, 7, 0), Match::new(11, 18, 0)]);
/// ```
pub fn find_bounded_accelerated(
    pattern: &str,
    text: &str,
    max_distance: usize,
    options: &Options,
) -> Result<Vec<Match>> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    pigeonhole_search(&pattern, &text, max_distance, options)
}

/// [`find_bounded_accelerated`] on pre-split characters.
pub fn pigeonhole_search(
    pattern: &[char],
    text: &[char],
    max_distance: usize,
    options: &Options,
) -> Result<Vec<Match>> {
    let mut context = MatrixContext::new();
    pigeonhole_search_with(&mut context, pattern, text, max_distance, options)
}

/// Pigeonhole search reusing the caller's matrix buffer.
pub(crate) fn pigeonhole_search_with(
    context: &mut MatrixContext,
    pattern: &[char],
    text: &[char],
    max_distance: usize,
    options: &Options,
) -> Result<Vec<Match>> {
    if let Some(which) = EmptyInput::check(pattern.len(), text.len()) {
        return Err(SearchError::EmptyInput(which));
    }

    if let Some(reason) = fallback_reason(pattern.len(), text.len(), max_distance, options) {
        log::debug!("{}, running the direct matcher instead", reason);
        let mut matches = context.find_chars(pattern, text, max_distance, options)?;
        matches.sort_unstable();
        return Ok(matches);
    }

    let fragments = partition(pattern, max_distance + 1);
    let index = TextIndex::new(text);

    let mut found = MatchSet::new();
    let mut windows = 0usize;

    for fragment in &fragments {
        for hit in index.lookup(fragment.chars) {
            let candidate = Candidate {
                hit,
                fragment_offset: fragment.offset,
            };
            let Some(window) = candidate.window(pattern.len(), text.len(), max_distance) else {
                log::trace!(
                    "hit at {} for fragment at {} falls off the text",
                    hit,
                    fragment.offset
                );
                continue;
            };
            check_window_in_bounds(&window.span, text.len());
            windows += 1;

            let span = window.span.clone();
            match context.find_chars(pattern, &text[span.clone()], max_distance, options) {
                Ok(matches) => found.extend(
                    matches
                        .into_iter()
                        .map(|m| m.shifted(span.start))
                        .filter(|m| window.ends.contains(&m.end)),
                ),
                Err(err) => {
                    log::warn!("skipping verification window {:?}: {}", span, err);
                }
            }
        }
    }

    log::debug!(
        "pigeonhole search: {} fragments, {} windows verified, {} distinct matches",
        fragments.len(),
        windows,
        found.len()
    );

    let matches = found.into_sorted();
    check_matches_sorted_unique(&matches);
    Ok(matches)
}
