/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::link_matrix::{GraphMatrix, LinkMatrix};
use rand::distributions::Cauchy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Added to every entry before normalising, so no column is all zeros.
const LINK_FLOOR: f64 = 1e-10;

/// Random column-stochastic "internet" of `n` pages. Page j links to page i
/// when a half-Cauchy draw exceeds |i - j| + 1, so links mostly stay between
/// nearby pages (clusters) and a few long-range links appear. Pages that
/// draw no links end up with a near-uniform column.
pub fn generate_internet_with_rng<R: Rng>(n: usize, rng: &mut R) -> PRResult<LinkMatrix> {
    if n == 0 {
        return Err(PRError::Empty);
    }
    let cauchy = Cauchy::new(0.0, 1.0);
    let mut matrix = GraphMatrix::from_fn(n, n, |i, j| {
        let distance = (i as f64 - j as f64).abs();
        let draw: f64 = rng.sample(&cauchy);
        let link = if (draw / 2.0).abs() > distance + 1.0 {
            1.0
        } else {
            0.0
        };
        link + LINK_FLOOR
    });
    for j in 0..n {
        let sum = matrix.column(j).sum();
        let mut column = matrix.column_mut(j);
        column /= sum;
    }
    LinkMatrix::new(matrix)
}

pub fn generate_internet(n: usize) -> PRResult<LinkMatrix> {
    generate_internet_with_rng(n, &mut rand::thread_rng())
}

/// Reproducible variant, for tests and the `--seed` flag.
pub fn generate_internet_with_seed(n: usize, seed: u64) -> PRResult<LinkMatrix> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_internet_with_rng(n, &mut rng)
}
