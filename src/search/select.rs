// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pick one match out of many.

use crate::error::SelectionError;
use crate::types::Match;
use std::cmp::{Ordering, Reverse};

/// The single best match: lowest distance, then earliest start, then longest span.
///
/// Ties that survive all three keep the candidate that came first.
///
/// ```
/// use fuzzyfind::{best_match, Match};
///
/// let candidates = [Match::new(0, 6, 1), Match::new(0, 7, 0)];
/// assert_eq!(best_match(&candidates), Ok(Match::new(0, 7, 0)));
/// ```
pub fn best_match(candidates: &[Match]) -> Result<Match, SelectionError> {
    candidates
        .iter()
        .copied()
        .reduce(|best, next| match preference(&next, &best) {
            Ordering::Less => next,
            _ => best,
        })
        .ok_or(SelectionError::EmptyCandidateSet)
}

/// `Less` means `a` is preferred over `b`.
fn preference(a: &Match, b: &Match) -> Ordering {
    let key = |m: &Match| (m.dist, m.start, Reverse(m.len()));
    key(a).cmp(&key(b))
}
