// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search paths built on the matrix engine.
//!
//! The direct matcher in [`crate::fuzzy`] answers every query on its own. This
//! module adds the pigeonhole path that narrows the text down first, the
//! selector that reduces a match list to one answer, and the glue that picks a
//! path per query or runs one pattern over many texts.

pub mod batch;
pub mod dedup;
pub mod pigeonhole;
pub mod select;
pub mod strategy;

pub use batch::find_batch;
pub use dedup::MatchSet;
pub use pigeonhole::{
    fallback_reason, find_bounded_accelerated, partition, pigeonhole_search, Fallback,
};
pub use select::best_match;
pub use strategy::{find, SearchConfig, Strategy, StrategyThresholds};
