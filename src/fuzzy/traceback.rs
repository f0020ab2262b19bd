// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recover where each occurrence starts.
//!
//! The last matrix row gives the end and the distance for free. The start takes a
//! walk back up the matrix: from `(|pattern|, end)`, step to whichever predecessor
//! produced the cell, until we reach row 0. The column we land in is the start.
//!
//! Ties go **diagonal, then vertical, then horizontal**. Preferring the diagonal
//! keeps occurrences as close to the pattern's own length as the costs allow, and
//! a fixed order makes results reproducible.

use crate::contracts::check_match_well_formed;
use crate::fuzzy::matrix::DistanceMatrix;
use crate::options::Options;
use crate::types::Match;

/// One step of the backward walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Match or substitution: consume a pattern char and a text char.
    Diagonal,
    /// Pattern char with no text counterpart.
    Vertical,
    /// Text char with no pattern counterpart.
    Horizontal,
}

impl Step {
    #[inline]
    fn choose(diagonal: usize, vertical: usize, horizontal: usize) -> Self {
        if diagonal <= vertical && diagonal <= horizontal {
            Step::Diagonal
        } else if vertical <= horizontal {
            Step::Vertical
        } else {
            Step::Horizontal
        }
    }
}

/// Text columns whose last-row distance is within `max_distance`.
///
/// Column 0 is never an end column, even when `|pattern| * del_cost` fits the
/// budget. Its last-row cell is the whole pattern deleted before the text
/// begins, which would report an empty `Match { start: 0, end: 0, .. }`; that
/// says nothing about the text, so we skip it.
pub fn qualifying_columns(matrix: &DistanceMatrix, max_distance: usize) -> Vec<usize> {
    matrix
        .last_row()
        .iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &dist)| dist <= max_distance)
        .map(|(j, _)| j)
        .collect()
}

/// Walk back from every end column, producing one [`Match`] per column, in the
/// order given.
///
/// `matrix` must be the completed matrix for exactly this `pattern` and `text`.
/// Matches with the same `(start, end)` are not merged here.
pub fn traceback(
    matrix: &DistanceMatrix,
    pattern: &[char],
    text: &[char],
    end_columns: &[usize],
    options: &Options,
) -> Vec<Match> {
    debug_assert_eq!(matrix.height(), pattern.len() + 1);
    debug_assert_eq!(matrix.width(), text.len() + 1);

    let last = pattern.len();
    end_columns
        .iter()
        .map(|&end| {
            let start = trace_start(matrix, pattern, text, end, options);
            let found = Match::new(start, end, matrix.get(last, end));
            check_match_well_formed(&found, text.len());
            found
        })
        .collect()
}

/// Column where the alignment ending at `(|pattern|, end)` begins.
fn trace_start(
    matrix: &DistanceMatrix,
    pattern: &[char],
    text: &[char],
    end: usize,
    options: &Options,
) -> usize {
    let (mut i, mut j) = (pattern.len(), end);

    while i > 0 {
        let vertical = matrix.get(i - 1, j) + options.del_cost;
        let (diagonal, horizontal) = if j > 0 {
            (
                matrix.get(i - 1, j - 1) + options.mismatch_cost(pattern[i - 1], text[j - 1]),
                matrix.get(i, j - 1) + options.ins_cost,
            )
        } else {
            (usize::MAX, usize::MAX)
        };

        match Step::choose(diagonal, vertical, horizontal) {
            Step::Diagonal => {
                i -= 1;
                j -= 1;
            }
            Step::Vertical => i -= 1,
            Step::Horizontal => j -= 1,
        }
    }

    j
}
