//! Properties of the suffix array index and the pattern partition.

use super::common::{chars, naive_occurrences};
use super::oracles::naive_suffix_array;
use fuzzyfind::{partition, suffix_array, TextIndex};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[ab]{0,40}").unwrap(),
        prop::string::string_regex("[ACGT]{0,80}").unwrap(),
        prop::string::string_regex("[a-zé ]{0,60}").unwrap(),
        prop::string::string_regex("[తెలుగు ]{0,30}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the index's suffix array is the sorted list of all suffixes.
    #[test]
    fn prop_suffix_array_matches_naive_sort(text in text_strategy()) {
        let t = chars(&text);
        let index = TextIndex::new(&t);
        prop_assert_eq!(index.suffix_array(), &naive_suffix_array(&t)[..]);
    }

    /// Property: SA-IS over raw ranks agrees with a naive sort of the rank sequence.
    #[test]
    fn prop_suffix_array_over_ranks(ranks in prop::collection::vec(1usize..5, 0..60)) {
        let sa = suffix_array(&ranks, 5);
        let mut expected: Vec<usize> = (0..ranks.len()).collect();
        expected.sort_by(|&a, &b| ranks[a..].cmp(&ranks[b..]));
        prop_assert_eq!(sa, expected);
    }

    /// Property: lookup returns exactly the positions a brute-force scan finds.
    #[test]
    fn prop_lookup_matches_scan(text in text_strategy(), start in 0usize..40, len in 1usize..5) {
        let t = chars(&text);
        let index = TextIndex::new(&t);

        // Needle taken from the text when possible, so hits are common
        let needle: Vec<char> = if t.is_empty() {
            chars("ab")
        } else {
            let s = start % t.len();
            t[s..(s + len).min(t.len())].to_vec()
        };

        prop_assert_eq!(index.lookup(&needle), naive_occurrences(&t, &needle));
        prop_assert_eq!(index.count(&needle), naive_occurrences(&t, &needle).len());
    }

    /// Property: fragments tile the pattern, near-equal, remainder first.
    #[test]
    fn prop_partition_covers(pattern in "[a-z]{1,40}", pieces in 1usize..8) {
        let p = chars(&pattern);
        prop_assume!(pieces <= p.len());
        let fragments = partition(&p, pieces);

        prop_assert_eq!(fragments.len(), pieces);
        let joined: Vec<char> = fragments.iter().flat_map(|f| f.chars.iter().copied()).collect();
        prop_assert_eq!(&joined, &p);

        let sizes: Vec<usize> = fragments.iter().map(|f| f.len()).collect();
        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(sizes[0] - sizes[pieces - 1] <= 1);

        let mut offset = 0;
        for fragment in &fragments {
            prop_assert_eq!(fragment.offset, offset);
            offset += fragment.len();
        }
    }
}
