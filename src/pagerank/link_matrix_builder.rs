/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::link_matrix::{GraphMatrix, LinkMatrix};
use crate::pagerank::row::MatrixRow;
use std::collections::{BTreeMap, BTreeSet};

pub struct LinkMatrixBuilder {}

impl LinkMatrixBuilder {
    // builds a link matrix from (source, target) page pairs. Repeated links are
    // ignored; every page splits its outgoing probability equally among its
    // distinct targets. Pages that only appear as targets become dangling
    // (all-zero) columns.
    pub fn from_vector(data: &[(usize, usize)]) -> PRResult<LinkMatrix> {
        let num_pages = data
            .iter()
            .map(|(source, target)| source.max(target) + 1)
            .max()
            .ok_or(PRError::Empty)?;
        Self::from_vector_with_num_pages(data, num_pages)
    }

    pub fn from_vector_with_num_pages(
        data: &[(usize, usize)],
        num_pages: usize,
    ) -> PRResult<LinkMatrix> {
        let mut out_links: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
        for (source, target) in data {
            if *source >= num_pages || *target >= num_pages {
                return Err(format!(
                    "Link {} -> {} points outside of {} pages",
                    source, target, num_pages
                )
                .into());
            }
            out_links.entry(*source).or_default().insert(*target);
        }
        let mut matrix = GraphMatrix::zeros(num_pages, num_pages);
        for (source, targets) in out_links.iter() {
            let p = 1.0 / targets.len() as f64;
            for target in targets {
                matrix[(*target, *source)] = p;
            }
        }
        LinkMatrix::new(matrix)
    }

    /// stacks parsed matrix rows, in input order.
    pub fn from_matrix_rows(rows: &[MatrixRow]) -> PRResult<LinkMatrix> {
        let values: Vec<Vec<f64>> = rows.iter().map(|r| r.values.clone()).collect();
        LinkMatrix::from_rows(&values)
    }
}
