// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matrix reuse across many small searches.
//!
//! The accelerated search verifies one narrow window per seed hit, so it runs the
//! matrix engine hundreds of times per query. Allocating a fresh matrix for each
//! window dominated the profile; a context keeps one buffer and only grows it.
//!
//! A context promises capacity, not content. Every cell a search reads is
//! rewritten by [`compute_distances`] first, so leftovers from the previous window
//! are never observed.
//!
//! Not shareable between concurrent searches: give each worker its own.

use crate::error::{EmptyInput, Result, SearchError};
use crate::fuzzy::matrix::{compute_distances, DistanceMatrix};
use crate::fuzzy::traceback::{qualifying_columns, traceback};
use crate::options::Options;
use crate::types::Match;

/// Owns a reusable [`DistanceMatrix`] buffer.
#[derive(Debug, Default)]
pub struct MatrixContext {
    matrix: DistanceMatrix,
}

impl MatrixContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffer for a `pattern_len × text_len` search.
    pub fn with_capacity(pattern_len: usize, text_len: usize) -> Self {
        Self {
            matrix: DistanceMatrix::with_shape(pattern_len + 1, text_len + 1),
        }
    }

    /// Cells held by the buffer.
    pub fn capacity(&self) -> usize {
        self.matrix.capacity()
    }

    /// A matrix shaped `height × width` over the held storage.
    ///
    /// Reuses the storage when it is large enough, otherwise allocates exactly
    /// `height × width` cells and keeps them for later calls. Cell values are
    /// unspecified.
    pub fn acquire(&mut self, height: usize, width: usize) -> &mut DistanceMatrix {
        if self.matrix.reshape(height, width) {
            log::trace!("matrix context grew to {}x{}", height, width);
        }
        &mut self.matrix
    }

    /// All occurrences of `pattern` in `text` within `max_distance`, one per end
    /// position, ordered by end.
    pub fn find(
        &mut self,
        pattern: &str,
        text: &str,
        max_distance: usize,
        options: &Options,
    ) -> Result<Vec<Match>> {
        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();
        self.find_chars(&pattern, &text, max_distance, options)
    }

    /// [`find`](Self::find) on pre-split characters.
    pub fn find_chars(
        &mut self,
        pattern: &[char],
        text: &[char],
        max_distance: usize,
        options: &Options,
    ) -> Result<Vec<Match>> {
        if let Some(which) = EmptyInput::check(pattern.len(), text.len()) {
            return Err(SearchError::EmptyInput(which));
        }

        let matrix = self.acquire(pattern.len() + 1, text.len() + 1);
        let Some(matrix) = compute_distances(matrix, pattern, text, max_distance, options)? else {
            return Ok(Vec::new());
        };

        let ends = qualifying_columns(matrix, max_distance);
        Ok(traceback(matrix, pattern, text, &ends, options))
    }
}
