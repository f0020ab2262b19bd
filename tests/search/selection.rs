//! Picking one answer out of a match list.

use super::common::{accelerated, direct, m, PROTEIN_PATTERN, PROTEIN_TEXT};
use fuzzyfind::{best_match, SelectionError};

#[test]
fn exact_copy_beats_near_copies() {
    let found = direct(PROTEIN_PATTERN, PROTEIN_TEXT, 1);
    assert_eq!(best_match(&found), Ok(m(99, 109, 0)));
}

#[test]
fn earliest_wins_among_equal_distances() {
    let found = accelerated("GATTACA", "GACTACAATCGGATTTCAACTGA", 1);
    assert_eq!(best_match(&found), Ok(m(0, 7, 1)));
}

#[test]
fn longest_wins_among_same_start() {
    // (0, 2, 2), (0, 3, 2), (0, 4, 2), (2, 6, 2)
    let found = direct("perl", "pesarl", 2);
    assert_eq!(best_match(&found), Ok(m(0, 4, 2)));
}

#[test]
fn both_paths_agree_on_best() {
    for (pattern, text, k) in [
        ("ACATCC", "GATTACATATATGCATCT", 2),
        ("ACATCC", "GATTACATATATACATCG", 1),
        ("GATTACA", "GATTACAATCGGATTACAACTGA", 0),
    ] {
        assert_eq!(
            best_match(&direct(pattern, text, k)),
            best_match(&accelerated(pattern, text, k)),
            "{} in {}",
            pattern,
            text
        );
    }
}

#[test]
fn nothing_found_is_an_error_to_select_from() {
    let found = direct("GATTACA", "CCCCCCCCCCCC", 1);
    assert!(found.is_empty());
    assert_eq!(best_match(&found), Err(SelectionError::EmptyCandidateSet));
    assert_eq!(
        SelectionError::EmptyCandidateSet.to_string(),
        "no candidate matches to select from"
    );
}
