//! Approximate string search with a bounded number of edits.
//!
//! Find every place a short pattern occurs in a longer text with at most `k`
//! insertions, deletions, or substitutions. Each occurrence comes back as a
//! [`Match`]: a half-open character range plus its edit cost.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ options.rs  │────▶│  fuzzy/matrix.rs │────▶│ fuzzy/traceback  │
//! │ (costs,     │     │ (DP with early   │     │ (one alignment   │
//! │  equality)  │     │  exit)           │     │  per end column) │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//!                              ▲                         │
//!                              │ MatrixContext           ▼
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ index/      │────▶│ search/pigeonhole│────▶│ search/dedup     │
//! │ (SA-IS,     │     │ (k+1 fragments,  │     │ search/select    │
//! │  lookup)    │     │  windows)        │     │                  │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! Two entry points return the same kind of answer:
//!
//! | Function                     | Cost                           | Good for                  |
//! |------------------------------|--------------------------------|---------------------------|
//! | [`find_bounded`]             | O(m·n) DP over the whole text  | short texts               |
//! | [`find_bounded_accelerated`] | suffix array + DP in windows   | long texts, longer patterns |
//!
//! [`find`] picks between them per query; [`find_batch`] runs one pattern over
//! many texts.
//!
//! # Offsets
//!
//! All offsets count Unicode scalar values, not bytes. Use
//! [`Match::byte_range`] to slice the original `&str`.
//!
//! # Usage
//!
//! ```
//! use fuzzyfind::{best_match, find_bounded, Match, Options};
//!
//! let matches = find_bounded("GATTACA", "CATTACATATATACA", 1, &Options::default()).unwrap();
//! assert_eq!(matches, vec![Match::new(0, 7, 1)]);
//!
//! let best = best_match(&matches).unwrap();
//! assert_eq!(best.dist, 1);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): [`find_batch`] runs on the rayon pool.
//! - `unicode-normalization` (default): [`Options::diacritic_insensitive`]
//!   folds accents through canonical decomposition.

// Module declarations
pub mod contracts;
mod error;
pub mod fuzzy;
pub mod index;
mod options;
pub mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use error::{EmptyInput, Result, SearchError, SelectionError};
pub use fuzzy::{
    compute_distances, find_bounded, qualifying_columns, traceback, DistanceMatrix, MatrixContext,
};
pub use index::{suffix_array, TextIndex};
pub use options::{CharEq, CostModel, Options, SubstitutionCost};
pub use search::{
    best_match, fallback_reason, find, find_batch, find_bounded_accelerated, partition,
    pigeonhole_search, Fallback, MatchSet, SearchConfig, Strategy, StrategyThresholds,
};
pub use types::{Fragment, Match};
