//! Custom costs and character equality.

use super::common::{chars, edit_distance, m};
use fuzzyfind::{find_bounded, find_bounded_accelerated, CostModel, Options};

#[test]
fn case_insensitive_preset() {
    let op = Options::case_insensitive();
    assert_eq!(find_bounded("gattaca", "xxGATTACAxx", 0, &op).unwrap(), vec![m(2, 9, 0)]);
    assert!(find_bounded("gattaca", "xxGATTACAxx", 0, &Options::default())
        .unwrap()
        .is_empty());
}

#[test]
fn nucleotide_ambiguity_codes() {
    let op = Options::nucleotide();
    // N covers T, R covers A
    assert_eq!(find_bounded("GATTACA", "GANTRCA", 0, &op).unwrap(), vec![m(0, 7, 0)]);
    assert_eq!(
        find_bounded_accelerated("GATTACA", "CCCCCCGANTRCACCCCCCC", 0, &op).unwrap(),
        vec![m(6, 13, 0)]
    );
}

#[test]
fn expensive_deletion() {
    let op = Options::default().with_costs(1, 3, 1);
    assert!(find_bounded("perl", "prl", 2, &op).unwrap().is_empty());
    assert_eq!(find_bounded("perl", "prl", 3, &op).unwrap(), vec![m(0, 3, 3)]);
}

#[test]
fn free_insertions_skip_noise() {
    let op = Options::default().with_costs(0, 1, 1);
    assert_eq!(find_bounded("GATTACA", "GATXXTACA", 0, &op).unwrap(), vec![m(0, 9, 0)]);
}

#[test]
fn per_pair_substitution_cost() {
    let op = Options::default().with_substitution(|_, _| 2);
    // Substituting l for d now costs more than dropping the l
    assert_eq!(find_bounded("perl", "perd", 1, &op).unwrap(), vec![m(0, 3, 1)]);
}

#[test]
fn cost_model_from_json() {
    let costs: CostModel = serde_json::from_str(r#"{"del": 3}"#).unwrap();
    assert_eq!(costs, CostModel { ins: 1, del: 3, sub: 1 });

    let op = Options::from(costs);
    assert_eq!(find_bounded("perl", "prl", 3, &op).unwrap(), vec![m(0, 3, 3)]);
    assert_eq!(op.costs(), costs);
}

#[test]
fn distances_follow_the_cost_model() {
    let op = Options::default().with_costs(2, 1, 3);
    let text = "GATTACATATATGCATCTGACTACAATCGGATTTCAACTGA";
    let t = chars(text);
    let p = chars("ACATCC");

    let found = find_bounded("ACATCC", text, 4, &op).unwrap();
    assert!(!found.is_empty());
    for hit in found {
        assert_eq!(hit.dist, edit_distance(&p, &t[hit.range()], &op), "{:?}", hit);
    }
}
