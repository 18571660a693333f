/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::algorithms::power_iteration::RankVector;
use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::link_matrix::{GraphMatrix, LinkMatrix, STOCHASTIC_EPS};
use nalgebra::Schur;
use ordered_float::OrderedFloat;

/// Iteration bound for the Schur and SVD decompositions. Shifted QR stalls
/// on periodic graphs, whose peripheral eigenvalues all share one modulus.
pub const MAX_DECOMPOSITION_ITERATIONS: usize = 100_000;

/// Perron root of a non-negative matrix: its spectral radius, which is
/// itself an eigenvalue. When every column sums to the same c, the all-ones
/// row is a left eigenvector for c and no column sum exceeds it, so the
/// root is c and no decomposition is needed.
pub fn spectral_radius(link_matrix: &LinkMatrix) -> PRResult<f64> {
    let sums = link_matrix.column_sums();
    let c = sums.iter().sum::<f64>() / sums.len() as f64;
    if sums.iter().all(|s| (s - c).abs() <= STOCHASTIC_EPS) {
        return Ok(c);
    }
    let schur = Schur::try_new(
        link_matrix.as_matrix().clone(),
        std::f64::EPSILON,
        MAX_DECOMPOSITION_ITERATIONS,
    )
    .ok_or_else(|| PRError::Eigen("Schur decomposition did not converge".to_owned()))?;
    // a complex or negative eigenvalue can win on rounding; its modulus is
    // still the root
    schur
        .complex_eigenvalues()
        .iter()
        .map(|e| e.re.hypot(e.im))
        .max_by_key(|m| OrderedFloat(*m))
        .ok_or(PRError::Empty)
}

/// Reference ranking: the eigenvector of the eigenvalue with the largest
/// modulus, scaled so its entries sum to `total_mass`. This is a slow
/// O(N^3) cross-check for the power iteration, not a production path.
pub fn dominant_eigenvector(link_matrix: &LinkMatrix, total_mass: f64) -> PRResult<RankVector> {
    let matrix = link_matrix.as_matrix();
    let n = link_matrix.num_pages();
    let lambda = spectral_radius(link_matrix)?;

    // the eigenvector spans the null space of (L - lambda * I), i.e. the right
    // singular vector belonging to the smallest singular value.
    let shifted: GraphMatrix = matrix - GraphMatrix::identity(n, n) * lambda;
    let svd = shifted
        .try_svd(false, true, std::f64::EPSILON, MAX_DECOMPOSITION_ITERATIONS)
        .ok_or_else(|| PRError::Eigen("SVD did not converge".to_owned()))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| PRError::Eigen("SVD returned no right singular vectors".to_owned()))?;
    let (k, _) = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by_key(|(_, s)| OrderedFloat(**s))
        .ok_or(PRError::Empty)?;
    let v: RankVector = v_t.row(k).transpose();

    let sum = v.sum();
    if sum.abs() < std::f64::EPSILON {
        return Err(PRError::Eigen(format!(
            "dominant eigenvector for eigenvalue {} sums to zero",
            lambda
        )));
    }
    Ok(v * (total_mass / sum))
}

/// Distance between two rankings after scaling each to unit mass, relative
/// to the norm of `expected`.
pub fn relative_error(actual: &RankVector, expected: &RankVector) -> f64 {
    let a = actual / actual.sum();
    let b = expected / expected.sum();
    (&a - &b).norm() / b.norm()
}
