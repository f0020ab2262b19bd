//! Suffix array construction and exact lookup through the public API.

use super::common::{chars, dna, naive_occurrences};
use fuzzyfind::{suffix_array, TextIndex};

#[test]
fn banana_over_ranks() {
    // b=2, a=1, n=3
    let ranks = [2, 1, 3, 1, 3, 1];
    assert_eq!(suffix_array(&ranks, 4), vec![5, 3, 1, 0, 4, 2]);
}

#[test]
fn index_over_characters() {
    let text = chars("mississippi");
    let index = TextIndex::new(&text);
    assert_eq!(index.suffix_array(), &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    assert_eq!(index.lookup(&chars("ssi")), vec![2, 5]);
    assert_eq!(index.lookup(&chars("i")), vec![1, 4, 7, 10]);
    assert_eq!(index.count(&chars("issip")), 1);
}

#[test]
fn long_dna_lookup_agrees_with_scan() {
    let text = chars(&dna(5_000, 3));
    let index = TextIndex::new(&text);
    for start in (0..4_990).step_by(97) {
        let needle = &text[start..start + 6];
        let hits = index.lookup(needle);
        assert!(hits.contains(&start));
        assert_eq!(hits, naive_occurrences(&text, needle));
    }
}

#[test]
fn empty_text_index() {
    let text: Vec<char> = Vec::new();
    let index = TextIndex::new(&text);
    assert!(index.is_empty());
    assert!(index.lookup(&chars("a")).is_empty());
}
