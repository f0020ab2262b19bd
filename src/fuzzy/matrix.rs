// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The edit-distance matrix, with a row-minimum early exit.
//!
//! Unlike whole-string Levenshtein, row 0 is all zeros: an alignment may start
//! at any text position for free. Cell `(i, j)` is the cheapest way to align
//! `pattern[..i]` with some text substring ending at `j`.
//!
//! ```text
//!          G  A  T  T  A  C  A        (text)
//!       0  0  0  0  0  0  0  0        row 0: start anywhere
//!    A  1  1  0  1  1  0  1  0
//!    C  2  2  1  1  2  1  0  1
//!    A  3  3  2  2  2  2  1  0   ←── last row: distance of the best
//!                                     occurrence ending at each column
//! ```
//!
//! Early exit: every path to the last row crosses every row, and costs never go
//! negative, so once a whole row is above `max_distance` nothing below can come
//! back under it. We stop right there.

use crate::error::{EmptyInput, Result, SearchError};
use crate::options::Options;

/// Row-major `(|pattern| + 1) × (|text| + 1)` grid of distances.
///
/// The backing storage can be larger than `height × width` when the matrix is
/// reused for a smaller problem; cells outside the current shape are garbage.
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    cells: Vec<usize>,
    height: usize,
    width: usize,
}

impl DistanceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate storage for exactly `height × width` cells.
    pub fn with_shape(height: usize, width: usize) -> Self {
        Self {
            cells: vec![0; height * width],
            height,
            width,
        }
    }

    /// Rows: `|pattern| + 1`.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Columns: `|text| + 1`.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells the backing storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.height && j < self.width);
        self.cells[i * self.width + j]
    }

    /// Row `i` of the current shape.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    /// Last row: best distance of an occurrence ending at each column.
    pub fn last_row(&self) -> &[usize] {
        self.row(self.height - 1)
    }

    /// Change the logical shape. Keeps the storage when it's big enough,
    /// otherwise replaces it with exactly `height × width` cells.
    ///
    /// Returns `true` if it had to allocate. Contents are unspecified either way.
    pub(crate) fn reshape(&mut self, height: usize, width: usize) -> bool {
        let needed = height * width;
        let grew = self.cells.len() < needed;
        if grew {
            self.cells = vec![0; needed];
        }
        self.height = height;
        self.width = width;
        grew
    }
}

/// Fill `matrix` with the semi-global edit distances of `pattern` against `text`.
///
/// Returns `Ok(None)` when some pattern row has no cell within `max_distance`,
/// meaning no occurrence can qualify. That's a normal outcome, not an error.
/// Returns `Ok(Some(matrix))` with every cell of the
/// `(|pattern| + 1) × (|text| + 1)` shape written.
///
/// The matrix is reshaped as needed; prior contents are ignored.
pub fn compute_distances<'m>(
    matrix: &'m mut DistanceMatrix,
    pattern: &[char],
    text: &[char],
    max_distance: usize,
    options: &Options,
) -> Result<Option<&'m DistanceMatrix>> {
    if let Some(which) = EmptyInput::check(pattern.len(), text.len()) {
        return Err(SearchError::EmptyInput(which));
    }

    let height = pattern.len() + 1;
    let width = text.len() + 1;
    matrix.reshape(height, width);

    // Row 0: an occurrence may begin anywhere in the text
    matrix.cells[..width].fill(0);

    for i in 1..height {
        let pattern_char = pattern[i - 1];
        let (above, rest) = matrix.cells.split_at_mut(i * width);
        let above = &above[(i - 1) * width..];
        let current = &mut rest[..width];

        // Column 0: the first i pattern characters deleted before the text starts
        current[0] = i * options.del_cost;

        let mut row_min = usize::MAX;
        for j in 1..width {
            let deletion = above[j] + options.del_cost;
            let diagonal = above[j - 1] + options.mismatch_cost(pattern_char, text[j - 1]);
            let insertion = current[j - 1] + options.ins_cost;

            let cell = deletion.min(diagonal).min(insertion);
            current[j] = cell;
            row_min = row_min.min(cell);
        }

        // Early-exit: nothing below this row can get back under the bound
        if row_min > max_distance {
            log::trace!(
                "row {} of {} has minimum {} > {}, abandoning",
                i,
                pattern.len(),
                row_min,
                max_distance
            );
            return Ok(None);
        }
    }

    Ok(Some(matrix))
}
