// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only precondition violations are errors. "No alignment within the bound"
//! is a successful empty result, so callers can chain a search straight into
//! [`crate::best_match`] and handle the empty case once.

use thiserror::Error;

/// Which input of a search was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInput {
    Pattern,
    Text,
    Both,
}

impl EmptyInput {
    /// Classify a pair of inputs, or `None` if neither is empty.
    pub(crate) fn check(pattern_len: usize, text_len: usize) -> Option<Self> {
        match (pattern_len == 0, text_len == 0) {
            (true, true) => Some(EmptyInput::Both),
            (true, false) => Some(EmptyInput::Pattern),
            (false, true) => Some(EmptyInput::Text),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyInput::Pattern => write!(f, "pattern"),
            EmptyInput::Text => write!(f, "text"),
            EmptyInput::Both => write!(f, "pattern and text"),
        }
    }
}

/// Errors returned by the search entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern, the text, or both were empty.
    #[error("empty {0}")]
    EmptyInput(EmptyInput),
}

/// Errors returned by [`crate::best_match`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no candidate matches to select from")]
    EmptyCandidateSet,
}

/// Result alias for search operations.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;
