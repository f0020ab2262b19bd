//! Matrix engine, traceback, and context reuse through the public API.

use super::common::{chars, m};
use fuzzyfind::{
    compute_distances, qualifying_columns, traceback, DistanceMatrix, MatrixContext, Options,
};

#[test]
fn last_row_holds_best_distance_per_end() {
    let pattern = chars("ACA");
    let text = chars("GATTACA");
    let mut matrix = DistanceMatrix::new();

    let filled = compute_distances(&mut matrix, &pattern, &text, 3, &Options::default())
        .unwrap()
        .expect("within bound");

    assert_eq!(filled.height(), 4);
    assert_eq!(filled.width(), 8);
    assert_eq!(filled.row(0), &[0; 8]);
    assert_eq!(filled.last_row(), &[3, 3, 2, 2, 2, 2, 1, 0]);
}

#[test]
fn early_exit_is_not_an_error() {
    let mut matrix = DistanceMatrix::new();
    let result = compute_distances(
        &mut matrix,
        &chars("GGGG"),
        &chars("TTTTTTTT"),
        1,
        &Options::default(),
    );
    assert!(matches!(result, Ok(None)));
}

#[test]
fn traceback_one_match_per_end_column() {
    let pattern = chars("GATTACA");
    let text = chars("GATTACA");
    let op = Options::default();
    let mut matrix = DistanceMatrix::new();
    let filled = compute_distances(&mut matrix, &pattern, &text, 1, &op)
        .unwrap()
        .unwrap();

    let ends = qualifying_columns(filled, 1);
    assert_eq!(ends, vec![6, 7]);
    assert_eq!(
        traceback(filled, &pattern, &text, &ends, &op),
        vec![m(0, 6, 1), m(0, 7, 0)]
    );
}

#[test]
fn context_grows_once_and_reuses() {
    let op = Options::default();
    let mut context = MatrixContext::new();
    assert_eq!(context.capacity(), 0);

    let big = context.find("ACATCC", "GATTACATATATGCATCT", 2, &op).unwrap();
    let grown = context.capacity();
    assert_eq!(grown, 7 * 19);

    // Smaller problems fit in the same buffer
    let small = context.find("perl", "perd", 1, &op).unwrap();
    assert_eq!(context.capacity(), grown);
    assert_eq!(small, vec![m(0, 3, 1), m(0, 4, 1)]);

    // Stale cells from the small search don't leak into a repeat of the big one
    assert_eq!(context.find("ACATCC", "GATTACATATATGCATCT", 2, &op).unwrap(), big);
}

#[test]
fn presized_context_does_not_grow() {
    let mut context = MatrixContext::with_capacity(10, 109);
    let before = context.capacity();
    let matrix = context.acquire(11, 110);
    assert_eq!(matrix.height(), 11);
    assert_eq!(context.capacity(), before);
}
