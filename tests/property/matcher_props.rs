//! Properties of the direct matcher and the pigeonhole path.

use super::common::{chars, edit_distance};
use super::oracles::{best_distance_per_end, levenshtein};
use fuzzyfind::{
    best_match, fallback_reason, find_bounded, find_bounded_accelerated, Match, Options,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short DNA strings: a small alphabet makes near-matches common.
fn dna_strategy(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[ACGT]{{{},{}}}", min, max)).unwrap()
}

/// Words with a few multi-byte characters thrown in.
fn mixed_strategy(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[abcé日]{{{},{}}}", min, max)).unwrap()
}

fn direct_sorted(pattern: &str, text: &str, k: usize) -> Vec<Match> {
    let mut found = find_bounded(pattern, text, k, &Options::default()).unwrap();
    found.sort();
    found
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: a pattern finds itself whole at distance 0, on both paths.
    #[test]
    fn prop_self_match(pattern in mixed_strategy(1, 20), k in 0usize..3) {
        let n = pattern.chars().count();
        let op = Options::default();
        prop_assert!(find_bounded(&pattern, &pattern, k, &op).unwrap().contains(&Match::new(0, n, 0)));
        prop_assert!(find_bounded_accelerated(&pattern, &pattern, k, &op)
            .unwrap()
            .contains(&Match::new(0, n, 0)));
    }

    /// Property: the direct matcher reports exactly the end positions (and
    /// distances) a brute-force scan over all spans finds.
    #[test]
    fn prop_direct_matches_brute_force(
        pattern in dna_strategy(1, 6),
        text in dna_strategy(1, 24),
        k in 0usize..3,
    ) {
        let p = chars(&pattern);
        let t = chars(&text);
        let expected = best_distance_per_end(&p, &t, k);
        let found = find_bounded(&pattern, &text, k, &Options::default()).unwrap();

        let got: Vec<(usize, usize)> = found.iter().map(|m| (m.end, m.dist)).collect();
        let want: Vec<(usize, usize)> = expected.into_iter().collect();
        prop_assert_eq!(got, want);
    }

    /// Property: every reported distance is the edit distance of the reported span.
    #[test]
    fn prop_distance_is_span_distance(
        pattern in mixed_strategy(1, 6),
        text in mixed_strategy(1, 30),
        k in 0usize..3,
    ) {
        let p = chars(&pattern);
        let t = chars(&text);
        for m in find_bounded_accelerated(&pattern, &text, k, &Options::default()).unwrap() {
            prop_assert!(m.start <= m.end && m.end <= t.len());
            prop_assert!(m.dist <= k);
            prop_assert_eq!(m.dist, levenshtein(&p, &t[m.range()]));
        }
    }

    /// Property: same with asymmetric costs, against the cost-aware oracle.
    #[test]
    fn prop_distance_respects_costs(
        pattern in dna_strategy(1, 6),
        text in dna_strategy(1, 24),
        ins in 1usize..4,
        del in 1usize..4,
        sub in 1usize..4,
    ) {
        let op = Options::default().with_costs(ins, del, sub);
        let p = chars(&pattern);
        let t = chars(&text);
        for m in find_bounded(&pattern, &text, 4, &op).unwrap() {
            prop_assert_eq!(m.dist, edit_distance(&p, &t[m.range()], &op));
        }
    }

    /// Property: raising k never loses a match.
    #[test]
    fn prop_monotone_in_k(
        pattern in dna_strategy(1, 8),
        text in dna_strategy(1, 40),
        k in 0usize..3,
    ) {
        let smaller = direct_sorted(&pattern, &text, k);
        let larger = direct_sorted(&pattern, &text, k + 1);
        for m in &smaller {
            prop_assert!(larger.contains(m), "{:?} lost at k={}", m, k + 1);
        }
    }

    /// Property: when seeding goes ahead, both paths report the same triples.
    #[test]
    fn prop_accelerated_equals_direct(
        pattern in dna_strategy(3, 12),
        text in dna_strategy(10, 120),
        k in 0usize..4,
    ) {
        let op = Options::default();
        let (p, t) = (pattern.chars().count(), text.chars().count());
        prop_assume!(fallback_reason(p, t, k, &op).is_none());

        let direct = direct_sorted(&pattern, &text, k);
        let fast = find_bounded_accelerated(&pattern, &text, k, &op).unwrap();
        prop_assert_eq!(fast, direct);
    }

    /// Property: fallbacks are the direct matcher in sorted order.
    #[test]
    fn prop_fallback_equals_direct(
        pattern in dna_strategy(1, 6),
        text in dna_strategy(1, 12),
        k in 0usize..4,
    ) {
        let op = Options::default();
        let (p, t) = (pattern.chars().count(), text.chars().count());
        prop_assume!(fallback_reason(p, t, k, &op).is_some());

        let direct = direct_sorted(&pattern, &text, k);
        let fast = find_bounded_accelerated(&pattern, &text, k, &op).unwrap();
        prop_assert_eq!(fast, direct);
    }

    /// Property: accelerated output is sorted with no duplicates.
    #[test]
    fn prop_accelerated_sorted_unique(
        pattern in dna_strategy(3, 10),
        text in dna_strategy(10, 120),
        k in 0usize..4,
    ) {
        let fast = find_bounded_accelerated(&pattern, &text, k, &Options::default()).unwrap();
        prop_assert!(fast.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: a planted exact copy is found by both paths, for any k.
    #[test]
    fn prop_planted_copy_found(
        pattern in dna_strategy(4, 12),
        prefix in dna_strategy(0, 60),
        suffix in dna_strategy(0, 60),
        k in 0usize..3,
    ) {
        let text = format!("{}{}{}", prefix, pattern, suffix);
        let start = prefix.chars().count();
        let planted = Match::new(start, start + pattern.chars().count(), 0);

        prop_assert!(direct_sorted(&pattern, &text, k).contains(&planted));
        prop_assert!(find_bounded_accelerated(&pattern, &text, k, &Options::default())
            .unwrap()
            .contains(&planted));
    }

    /// Property: best_match of a single selected match is that match.
    #[test]
    fn prop_best_match_idempotent(
        pattern in dna_strategy(2, 6),
        text in dna_strategy(6, 30),
    ) {
        let found = direct_sorted(&pattern, &text, 2);
        if let Ok(best) = best_match(&found) {
            prop_assert_eq!(best_match(&[best]), Ok(best));
            prop_assert_eq!(best_match(&found), Ok(best));
            prop_assert!(found.iter().all(|m| m.dist >= best.dist));
        }
    }
}
