// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Choosing between the direct matcher and pigeonhole seeding.
//!
//! Both return the same kind of answer. The direct matcher is one DP over the
//! whole text; pigeonhole pays for a suffix array up front and then only runs DP
//! inside small windows. The index only pays off once the text is long and the
//! fragments are long enough to be selective, so `Auto` waits for both.

use crate::error::Result;
use crate::fuzzy::MatrixContext;
use crate::options::Options;
use crate::search::pigeonhole::pigeonhole_search_with;
use crate::types::Match;
use serde::{Deserialize, Serialize};

/// Which search path to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One DP over the whole text.
    Direct,
    /// Exact fragment seeding, DP only in verification windows.
    Pigeonhole,
    /// Pick per query from [`StrategyThresholds`].
    #[default]
    Auto,
}

/// Size thresholds `Auto` uses to pick pigeonhole seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyThresholds {
    /// Shorter patterns make short, unselective fragments
    pub min_pattern_len: usize,
    /// Shorter texts aren't worth indexing
    pub min_text_len: usize,
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            min_pattern_len: 12,
            min_text_len: 256,
        }
    }
}

/// Search path configuration.
///
/// ```
/// use fuzzyfind::{SearchConfig, Strategy};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.select(7, 23), Strategy::Direct);
/// assert_eq!(config.select(20, 10_000), Strategy::Pigeonhole);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub thresholds: StrategyThresholds,
}

impl SearchConfig {
    /// Always use `strategy`, ignoring thresholds unless it is `Auto`.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Resolve `Auto` for a query of these sizes (in characters).
    ///
    /// Never returns `Auto`.
    pub fn select(&self, pattern_len: usize, text_len: usize) -> Strategy {
        match self.strategy {
            Strategy::Auto => {
                if pattern_len >= self.thresholds.min_pattern_len
                    && text_len >= self.thresholds.min_text_len
                {
                    Strategy::Pigeonhole
                } else {
                    Strategy::Direct
                }
            }
            chosen => chosen,
        }
    }
}

/// Search with whichever path `config` picks.
///
/// Output is sorted by `start`, then `end`, whatever path ran.
pub fn find(
    pattern: &str,
    text: &str,
    max_distance: usize,
    options: &Options,
    config: &SearchConfig,
) -> Result<Vec<Match>> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let mut context = MatrixContext::new();
    find_with(&mut context, &pattern, &text, max_distance, options, config)
}

pub(crate) fn find_with(
    context: &mut MatrixContext,
    pattern: &[char],
    text: &[char],
    max_distance: usize,
    options: &Options,
    config: &SearchConfig,
) -> Result<Vec<Match>> {
    let strategy = config.select(pattern.len(), text.len());
    log::trace!(
        "{:?} search for {} chars in {} chars",
        strategy,
        pattern.len(),
        text.len()
    );

    match strategy {
        Strategy::Pigeonhole => pigeonhole_search_with(context, pattern, text, max_distance, options),
        Strategy::Direct | Strategy::Auto => {
            let mut matches = context.find_chars(pattern, text, max_distance, options)?;
            matches.sort_unstable();
            Ok(matches)
        }
    }
}
