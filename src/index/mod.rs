// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-match index: where does this fragment occur, exactly?
//!
//! The pigeonhole search asks that question once per fragment. A suffix array
//! answers it in O(m log n) per fragment after one O(n) build, which beats
//! rescanning the text for every fragment once the text gets long.

mod sais;
mod text_index;

pub use sais::suffix_array;
pub use text_index::TextIndex;
