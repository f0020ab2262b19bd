// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The direct matcher: bounded semi-global edit distance plus traceback.
//!
//! Three pieces, used in this order:
//! - `matrix`: fill the DP table, bail out early when a row is over budget
//! - `traceback`: walk back from each qualifying end column to find its start
//! - `context`: keep one matrix buffer alive across many searches
//!
//! Fine on its own for short texts. For long texts the pigeonhole search in
//! [`crate::search`] narrows the work down to a few windows and calls back in here.

mod context;
mod matrix;
mod traceback;

pub use context::MatrixContext;
pub use matrix::{compute_distances, DistanceMatrix};
pub use traceback::{qualifying_columns, traceback};

use crate::error::Result;
use crate::options::Options;
use crate::types::Match;

/// Every occurrence of `pattern` in `text` within `max_distance` edits.
///
/// One match per qualifying end position, ordered by end. An empty vector means
/// nothing qualified; only empty inputs are errors.
///
/// ```
/// use fuzzyfind::{find_bounded, Match, Options};
///
/// let matches = find_bounded("perl", "pearl", 1, &Options::default()).unwrap();
/// assert_eq!(matches, vec![Match::new(0, 5, 1)]);
/// ```
pub fn find_bounded(
    pattern: &str,
    text: &str,
    max_distance: usize,
    options: &Options,
) -> Result<Vec<Match>> {
    MatrixContext::new().find(pattern, text, max_distance, options)
}
