// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One pattern against many texts.
//!
//! Each text is an independent search. With the `parallel` feature they run on
//! the rayon pool, each worker holding its own [`MatrixContext`] so the matrix
//! buffer is reused across the texts that worker picks up.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::fuzzy::MatrixContext;
use crate::options::Options;
use crate::search::strategy::{find_with, SearchConfig};
use crate::types::Match;

/// Search `pattern` in every text. Results line up with `texts` by position.
///
/// A failing text (say, an empty one) only fails its own slot.
///
/// ```
/// use fuzzyfind::{find_batch, Match, Options, SearchConfig};
///
/// let texts = ["The dog and the cat.", "The dog amd the cat.", ""];
/// let results = find_batch("and", &texts, 1, &Options::default(), &SearchConfig::default());
///
/// assert!(results[0].as_ref().unwrap().contains(&Match::new(8, 11, 0)));
/// assert!(results[1].as_ref().unwrap().contains(&Match::new(8, 11, 1)));
/// assert!(results[2].is_err());
/// ```
#[cfg(feature = "parallel")]
pub fn find_batch<T: AsRef<str> + Sync>(
    pattern: &str,
    texts: &[T],
    max_distance: usize,
    options: &Options,
    config: &SearchConfig,
) -> Vec<Result<Vec<Match>>> {
    let pattern: Vec<char> = pattern.chars().collect();
    log::debug!("batch search over {} texts", texts.len());

    texts
        .par_iter()
        .map_init(MatrixContext::new, |context, text| {
            let text: Vec<char> = text.as_ref().chars().collect();
            find_with(context, &pattern, &text, max_distance, options, config)
        })
        .collect()
}

/// Sequential version for builds without rayon.
#[cfg(not(feature = "parallel"))]
pub fn find_batch<T: AsRef<str> + Sync>(
    pattern: &str,
    texts: &[T],
    max_distance: usize,
    options: &Options,
    config: &SearchConfig,
) -> Vec<Result<Vec<Match>>> {
    let pattern: Vec<char> = pattern.chars().collect();
    log::debug!("batch search over {} texts", texts.len());

    let mut context = MatrixContext::new();
    texts
        .iter()
        .map(|text| {
            let text: Vec<char> = text.as_ref().chars().collect();
            find_with(&mut context, &pattern, &text, max_distance, options, config)
        })
        .collect()
}
