// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deduplication of matches found through several seeds.
//!
//! The same occurrence usually shows up once per fragment that hit it exactly,
//! and overlapping verification windows find it again. A match should appear at
//! most once in the final result.
//!
//! `MatchSet` keys on the whole `(start, end, dist)` triple. Two windows that
//! disagree on the distance for the same span both survive; picking between them
//! is [`crate::best_match`]'s job, not ours.
//!
//! **Invariant**: each `(start, end, dist)` appears at most once in the output,
//! sorted by `start`, then `end`.

use crate::types::Match;
use std::collections::BTreeMap;

/// Counting set of matches, iterated in `Match` order.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    /// How many times each match was inserted.
    seen: BTreeMap<Match, usize>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting of `found`.
    pub fn insert(&mut self, found: Match) {
        *self.seen.entry(found).or_insert(0) += 1;
    }

    /// Record every match in `matches`.
    pub fn extend(&mut self, matches: impl IntoIterator<Item = Match>) {
        for found in matches {
            self.insert(found);
        }
    }

    /// Number of distinct matches.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, found: &Match) -> bool {
        self.seen.contains_key(found)
    }

    /// How many times `found` was inserted (0 if never).
    pub fn count(&self, found: &Match) -> usize {
        self.seen.get(found).copied().unwrap_or(0)
    }

    /// Distinct matches sorted by `start`, then `end`, then `dist`.
    pub fn into_sorted(self) -> Vec<Match> {
        self.seen.into_keys().collect()
    }
}

impl FromIterator<Match> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        let mut set = MatchSet::new();
        set.extend(iter);
        set
    }
}
