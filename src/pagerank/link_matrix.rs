/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::{PRError, PRResult};
use nalgebra::DMatrix;

pub type GraphMatrix = DMatrix<f64>;

/// Column sums within this distance of 1.0 count as stochastic.
pub const STOCHASTIC_EPS: f64 = 1e-9;

/// An N x N link matrix. Entry (i, j) is the probability that a surfer on
/// page j moves to page i. The shape (square, N >= 1) is checked on
/// construction; column-stochasticity is only inspected, since dangling
/// pages (all-zero columns) are legal input.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkMatrix {
    matrix: GraphMatrix,
}
impl LinkMatrix {
    pub fn new(matrix: GraphMatrix) -> PRResult<Self> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(PRError::Dimension { rows, cols });
        }
        if rows == 0 {
            return Err(PRError::Empty);
        }
        Ok(Self { matrix })
    }

    /// builds a matrix from rows, as they would be written out by hand.
    pub fn from_rows(rows: &[Vec<f64>]) -> PRResult<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != num_cols) {
            return Err(PRError::Dimension {
                rows: num_rows,
                cols: bad.len(),
            });
        }
        let data: Vec<f64> = rows.iter().flatten().cloned().collect();
        Self::new(GraphMatrix::from_row_slice(num_rows, num_cols, &data))
    }

    pub fn num_pages(&self) -> usize {
        self.matrix.nrows()
    }
    pub fn as_matrix(&self) -> &GraphMatrix {
        &self.matrix
    }
    pub fn into_matrix(self) -> GraphMatrix {
        self.matrix
    }
    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.matrix.ncols())
            .map(|j| self.matrix.column(j).sum())
            .collect()
    }
    /// pages with no outgoing links. Under d = 1 these leak surfer mass.
    pub fn dangling_pages(&self) -> Vec<usize> {
        (0..self.matrix.ncols())
            .filter(|&j| self.matrix.column(j).iter().all(|x| *x == 0.0))
            .collect()
    }
    pub fn has_negative_entries(&self) -> bool {
        self.matrix.iter().any(|x| *x < 0.0)
    }
    pub fn is_column_stochastic(&self, eps: f64) -> bool {
        !self.has_negative_entries() && self.column_sums().iter().all(|s| (s - 1.0).abs() <= eps)
    }
}
