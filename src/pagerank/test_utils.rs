/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::algorithms::power_iteration::RankVector;
use crate::pagerank::error::PRResult;
use crate::pagerank::link_matrix::LinkMatrix;

/// Six-page micro-internet. Column j lists where a surfer on page j goes;
/// page 4 has no inbound links.
pub fn gen_micro_internet() -> PRResult<LinkMatrix> {
    let third = 1.0 / 3.0;
    LinkMatrix::from_rows(&[
        vec![0.0, 0.5, third, 0.0, 0.0, 0.0],
        vec![third, 0.0, 0.0, 0.0, 0.5, 0.0],
        vec![third, 0.5, 0.0, 1.0, 0.0, 0.5],
        vec![third, 0.0, third, 0.0, 0.5, 0.5],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, third, 0.0, 0.0, 0.0],
    ])
}

/// The micro-internet plus a seventh page that only links to itself and is
/// reachable from page 5: a rank sink.
pub fn gen_micro_internet_with_sink() -> PRResult<LinkMatrix> {
    let third = 1.0 / 3.0;
    LinkMatrix::from_rows(&[
        vec![0.0, 0.5, third, 0.0, 0.0, 0.0, 0.0],
        vec![third, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0],
        vec![third, 0.5, 0.0, 1.0, 0.0, third, 0.0],
        vec![third, 0.0, third, 0.0, 0.5, third, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, third, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, third, 1.0],
    ])
}

/// Stationary distribution of `gen_micro_internet`, scaled to 100.
pub fn micro_internet_stationary_ranks() -> RankVector {
    RankVector::from_vec(vec![16.0, 16.0 / 3.0, 40.0, 76.0 / 3.0, 0.0, 40.0 / 3.0])
}

pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    if (actual - expected).abs() > eps {
        panic!("{} != {} (eps = {})", actual, expected, eps);
    }
}

pub fn assert_vectors_close(actual: &RankVector, expected: &RankVector, eps: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if (a - e).abs() > eps {
            panic!(
                "Entry {}: {} != {} (eps = {})\nactual: {:?}\nexpected: {:?}",
                i,
                a,
                e,
                eps,
                actual.as_slice(),
                expected.as_slice()
            );
        }
    }
}
