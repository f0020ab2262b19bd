//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction over an integer alphabet.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"  (as ranks: b=2 a=1 n=3)
//!
//! Step 1: Append sentinel (0) and classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │   ($ = sentinel, value 0)
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: Find LMS (Leftmost S-type) suffixes
//!         LMS = S-type preceded by L-type
//!         Positions: 1, 3, 6
//!
//! Step 3: Induced sorting
//!         - Place LMS suffixes at bucket tails
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!
//! Step 4: If LMS substrings not unique, recurse on reduced problem
//!
//! Step 5: Use sorted LMS order to induce final suffix array
//!
//! Output: [5, 3, 1, 0, 4, 2]
//! ```
//!
//! The text index ranks characters before calling in here, so any `char`
//! alphabet works, not just bytes.
//!
//! # Complexity
//!
//! - Time: O(n + σ)
//! - Space: O(n + σ)
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Sentinel value (must be smaller than all input symbols).
const SENTINEL: usize = 0;

/// Unfilled suffix array slot.
const EMPTY: usize = usize::MAX;

/// Build a suffix array using SA-IS in O(n) time.
///
/// # Arguments
/// * `ranks` - Input symbols, each in `1..alphabet_size` (0 is the sentinel)
/// * `alphabet_size` - One more than the largest symbol
///
/// # Returns
/// Suffix array: `sa[i]` = starting position of the i-th smallest suffix
pub fn suffix_array(ranks: &[usize], alphabet_size: usize) -> Vec<usize> {
    if ranks.is_empty() {
        return Vec::new();
    }
    debug_assert!(ranks.iter().all(|&r| r != SENTINEL && r < alphabet_size));

    let mut with_sentinel = Vec::with_capacity(ranks.len() + 1);
    with_sentinel.extend_from_slice(ranks);
    with_sentinel.push(SENTINEL);

    let sa = sais(&with_sentinel, alphabet_size.max(1));

    // The sentinel suffix always sorts first; drop it
    sa.into_iter().filter(|&pos| pos < ranks.len()).collect()
}

/// Core SA-IS. `text` must end with a unique smallest symbol.
fn sais(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => {
            return if text[0] < text[1] {
                vec![0, 1]
            } else {
                vec![1, 0]
            };
        }
        _ => {}
    }

    // Step 1: Classify suffixes
    let types = classify_suffixes(text);

    // Step 2: Find LMS positions
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        // No LMS means all L-type or all S-type
        // Just sort directly
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    // Step 3: Bucket sort setup
    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // Step 4: First induced sort to determine LMS order
    let mut sa = vec![EMPTY; n];
    induce(text, &types, &bucket_sizes, &lms_positions, &mut sa);

    // Step 5: Name LMS substrings
    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![0usize; n];

    for &pos in &sa {
        if pos == EMPTY || !is_lms(&types, pos) {
            continue;
        }

        // Check if different from previous LMS substring
        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }

        lms_names[pos] = name;
        prev_pos = Some(pos);
    }

    let unique_count = name + 1;

    // Step 6: Build reduced string from LMS names (in text order)
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();

    // Step 7: Recursively sort if not all unique
    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais(&reduced, unique_count)
    } else {
        // All unique: the names themselves give the order
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_by_key(|&i| reduced[i]);
        order
    };

    // Step 8: Final induced sort with correctly ordered LMS suffixes
    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    induce(text, &types, &bucket_sizes, &sorted_lms, &mut sa);

    sa
}

/// Place `lms` (in the given order) at bucket tails, then induce L and S types.
fn induce(
    text: &[usize],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
    sa: &mut [usize],
) {
    let n = text.len();
    sa.fill(EMPTY);

    // Place LMS suffixes
    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    // Induce L-type
    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    // Induce S-type
    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Classify each suffix as S-type or L-type.
fn classify_suffixes(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    // Last position is always S-type (sentinel)
    types[n - 1] = SuffixType::S;

    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }

    types
}

/// Check if position i is an LMS position.
#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

/// Compute bucket head positions.
fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        heads[i] = sum;
        sum += size;
    }
    heads
}

/// Compute bucket tail positions.
fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        sum += size;
        tails[i] = sum;
    }
    tails
}

/// Compare two LMS substrings for equality.
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        // Check bounds
        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }

        // Check symbol and type equality
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        // After first symbol, check if both reached next LMS
        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
