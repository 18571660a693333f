/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::PRResult;
use crate::pagerank::link_matrix::{GraphMatrix, LinkMatrix};
use crate::pagerank::logging::discard_logger;
use nalgebra::DVector;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde_json::{json, Value};
use slog::Logger;

pub type RankVector = DVector<f64>;

pub const DEFAULT_DAMPING: f64 = 0.85;
/// Iteration stops once the Euclidean norm of the change is at most this.
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// Surfers are seeded as this much mass, split evenly across pages.
pub const DEFAULT_TOTAL_MASS: f64 = 100.0;

/// M = d * L + (1 - d) / N * J, where J is the all-ones matrix.
pub fn damped_transition_matrix(link_matrix: &LinkMatrix, d: f64) -> GraphMatrix {
    let jump = (1.0 - d) / link_matrix.num_pages() as f64;
    link_matrix.as_matrix().map(|x| d * x + jump)
}

/// Ranks `link_matrix` with damping `d`, using the default tolerance and
/// total mass. Fails if the matrix is empty or not square.
pub fn page_rank(link_matrix: &GraphMatrix, d: f64) -> PRResult<RankVector> {
    let link_matrix = LinkMatrix::new(link_matrix.clone())?;
    Ok(PowerIteration::new().with_damping(d).run(&link_matrix).ranks)
}

#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// rank mass per page, indexed like the link matrix
    pub ranks: RankVector,
    /// loop iterations after the priming update
    pub iterations: usize,
    /// norm of the last difference between iterates
    pub residual: f64,
}

impl PageRankResult {
    pub fn new(ranks: RankVector, iterations: usize, residual: f64) -> Self {
        Self {
            ranks,
            iterations,
            residual,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.ranks.sum()
    }

    /// Page indices, highest rank first. Ties keep index order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.ranks.len()).collect();
        indices.sort_by_key(|&i| std::cmp::Reverse(OrderedFloat(self.ranks[i])));
        indices
    }

    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.ranking()
            .into_iter()
            .take(n)
            .map(|i| (i, self.ranks[i]))
            .collect()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "ranks": self.ranks.iter().cloned().collect::<Vec<f64>>(),
            "iterations": self.iterations,
            "residual": self.residual,
            "total_mass": self.total_mass(),
            "ranking": self.ranking(),
        })
    }
}

/// Damped power-iteration solver.
///
/// The rank vector is seeded with `total_mass / N` per page and is never
/// renormalised: when the link matrix is column-stochastic, so is the damped
/// matrix, and the mass is preserved. Dangling pages are not patched up, so
/// with `damping = 1.0` an all-zero column leaks mass.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    pub damping: f64,
    pub tolerance: f64,
    pub total_mass: f64,
    /// split each matrix-vector product across rows
    pub parallel: bool,
    log: Logger,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            total_mass: DEFAULT_TOTAL_MASS,
            parallel: false,
            log: discard_logger(),
        }
    }
}

impl PowerIteration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_total_mass(mut self, total_mass: f64) -> Self {
        self.total_mass = total_mass;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_logger(mut self, log: Logger) -> Self {
        self.log = log;
        self
    }

    fn multiply(&self, m: &GraphMatrix, r: &RankVector) -> RankVector {
        if !self.parallel {
            return m * r;
        }
        let n = m.ncols();
        let data: Vec<f64> = (0..m.nrows())
            .into_par_iter()
            .map(|i| (0..n).map(|j| m[(i, j)] * r[j]).sum())
            .collect();
        RankVector::from_vec(data)
    }

    pub fn run(&self, link_matrix: &LinkMatrix) -> PageRankResult {
        let n = link_matrix.num_pages();
        if !(0.0..=1.0).contains(&self.damping) {
            warn!(self.log, "damping factor outside [0, 1], mass is not conserved";
                  "damping" => self.damping);
        }
        let m = damped_transition_matrix(link_matrix, self.damping);

        let mut last_r = RankVector::repeat(n, self.total_mass / n as f64);
        // one forced update, so the first check compares two distinct iterates
        let mut r = self.multiply(&m, &last_r);
        let mut residual = (&last_r - &r).norm();
        let mut iterations: usize = 0;
        while residual > self.tolerance {
            last_r = r;
            r = self.multiply(&m, &last_r);
            residual = (&last_r - &r).norm();
            iterations += 1;
            debug!(self.log, "power iteration step";
                   "iteration" => iterations, "residual" => residual);
        }
        info!(self.log, "power iteration converged";
              "pages" => n, "iterations" => iterations, "residual" => residual,
              "total_mass" => r.sum());
        PageRankResult::new(r, iterations, residual)
    }
}

/// Algorithms over anything that can hand out a link matrix.
pub trait PageRank {
    fn get_link_matrix(&self) -> &LinkMatrix;

    fn get_page_rank(&self, d: f64) -> PageRankResult {
        PowerIteration::new()
            .with_damping(d)
            .run(self.get_link_matrix())
    }
}

impl PageRank for LinkMatrix {
    fn get_link_matrix(&self) -> &LinkMatrix {
        self
    }
}
