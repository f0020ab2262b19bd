// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cost model: what each edit costs and when two characters count as equal.
//!
//! The matcher never looks at characters directly. It asks [`Options::mismatch_cost`],
//! so case folding, diacritic folding, or IUPAC ambiguity codes are all just a
//! different `equals` predicate. Nothing here is mutated during a search.
//!
//! If a search returns several equally good occurrences you don't want (say,
//! `perl` in `berd` at distance 2), make the unwanted edit more expensive rather
//! than filtering afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Character equality predicate.
pub type CharEq = Arc<dyn Fn(char, char) -> bool + Send + Sync>;

/// Per-pair substitution cost, consulted only when `equals` says the pair differs.
pub type SubstitutionCost = Arc<dyn Fn(char, char) -> usize + Send + Sync>;

/// The numeric part of [`Options`].
///
/// Plain data, so it can live in a caller's configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Cost of a text character the pattern doesn't have.
    pub ins: usize,
    /// Cost of a pattern character the text doesn't have.
    pub del: usize,
    /// Cost of aligning two unequal characters.
    pub sub: usize,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            ins: 1,
            del: 1,
            sub: 1,
        }
    }
}

/// Edit costs plus the character equality predicate.
#[derive(Clone)]
pub struct Options {
    pub ins_cost: usize,
    pub del_cost: usize,
    pub sub_cost: usize,
    equals: CharEq,
    substitution: Option<SubstitutionCost>,
    /// `equals` is still plain `==`
    exact_equality: bool,
}

impl Default for Options {
    /// All costs 1, characters equal iff they are the same scalar value.
    fn default() -> Self {
        Self::from_costs(CostModel::default())
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("ins_cost", &self.ins_cost)
            .field("del_cost", &self.del_cost)
            .field("sub_cost", &self.sub_cost)
            .field("substitution", &self.substitution.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

impl From<CostModel> for Options {
    fn from(costs: CostModel) -> Self {
        Self::from_costs(costs)
    }
}

impl Options {
    /// Options with the given costs and exact character equality.
    pub fn from_costs(costs: CostModel) -> Self {
        Self {
            ins_cost: costs.ins,
            del_cost: costs.del,
            sub_cost: costs.sub,
            equals: Arc::new(|a, b| a == b),
            substitution: None,
            exact_equality: true,
        }
    }

    pub fn costs(&self) -> CostModel {
        CostModel {
            ins: self.ins_cost,
            del: self.del_cost,
            sub: self.sub_cost,
        }
    }

    pub fn with_costs(mut self, ins: usize, del: usize, sub: usize) -> Self {
        self.ins_cost = ins;
        self.del_cost = del;
        self.sub_cost = sub;
        self
    }

    /// Replace the equality predicate.
    pub fn with_equals<F>(mut self, equals: F) -> Self
    where
        F: Fn(char, char) -> bool + Send + Sync + 'static,
    {
        self.equals = Arc::new(equals);
        self.exact_equality = false;
        self
    }

    /// Price substitutions per character pair instead of a flat `sub_cost`.
    ///
    /// The function sees `(pattern_char, text_char)` and need not be symmetric.
    pub fn with_substitution<F>(mut self, cost: F) -> Self
    where
        F: Fn(char, char) -> usize + Send + Sync + 'static,
    {
        self.substitution = Some(Arc::new(cost));
        self
    }

    /// Case-insensitive matching using Unicode lowercase mappings.
    pub fn case_insensitive() -> Self {
        Self::default().with_equals(|a, b| a == b || a.to_lowercase().eq(b.to_lowercase()))
    }

    /// Case- and diacritic-insensitive matching (`é` matches `e`, `Ṣ` matches `s`).
    ///
    /// Each character is reduced to the first scalar of its canonical
    /// decomposition before the case-insensitive comparison.
    pub fn diacritic_insensitive() -> Self {
        Self::default().with_equals(|a, b| a == b || fold_char(a).eq(fold_char(b)))
    }

    /// Nucleotide matching with IUPAC ambiguity codes.
    ///
    /// Two codes are equal when the base sets they stand for intersect, so `N`
    /// matches everything and `R` matches `A` or `G`. Case-insensitive; `U` is `T`.
    /// Characters outside the code table only match themselves.
    pub fn nucleotide() -> Self {
        Self::default().with_equals(|a, b| match (iupac_bases(a), iupac_bases(b)) {
            (Some(x), Some(y)) => x & y != 0,
            _ => a == b,
        })
    }

    /// Whether every edit costs at least 1 and equality is plain `==`.
    ///
    /// Exact seeding only finds what these options match when both hold. A
    /// per-pair substitution function could price a differing pair at 0, so it
    /// counts against this too.
    pub fn is_seedable(&self) -> bool {
        self.exact_equality
            && self.substitution.is_none()
            && self.ins_cost > 0
            && self.del_cost > 0
            && self.sub_cost > 0
    }

    #[inline]
    pub fn equals(&self, a: char, b: char) -> bool {
        (self.equals)(a, b)
    }

    /// Cost of aligning pattern char `p` against text char `t`: 0 when equal.
    #[inline]
    pub fn mismatch_cost(&self, p: char, t: char) -> usize {
        if self.equals(p, t) {
            0
        } else if let Some(substitution) = &self.substitution {
            substitution(p, t)
        } else {
            self.sub_cost
        }
    }
}

/// Base character, lowercased.
#[cfg(feature = "unicode-normalization")]
fn fold_char(c: char) -> impl Iterator<Item = char> {
    let mut base = c;
    let mut first = true;
    unicode_normalization::char::decompose_canonical(c, |d| {
        if first {
            base = d;
            first = false;
        }
    });
    base.to_lowercase()
}

/// Lightweight fold without the normalization tables: lowercase only.
#[cfg(not(feature = "unicode-normalization"))]
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase()
}

/// IUPAC nucleotide code → bitmask over {A, C, G, T}.
fn iupac_bases(c: char) -> Option<u8> {
    const A: u8 = 1;
    const C: u8 = 2;
    const G: u8 = 4;
    const T: u8 = 8;

    let bases = match c.to_ascii_uppercase() {
        'A' => A,
        'C' => C,
        'G' => G,
        'T' | 'U' => T,
        'R' => A | G,
        'Y' => C | T,
        'S' => C | G,
        'W' => A | T,
        'K' => G | T,
        'M' => A | C,
        'B' => C | G | T,
        'D' => A | G | T,
        'H' => A | C | T,
        'V' => A | C | G,
        'N' => A | C | G | T,
        _ => return None,
    };
    Some(bases)
}
