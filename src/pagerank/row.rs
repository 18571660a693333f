/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::id_types::GraphId;

/// A single link: page `source_id` links to page `target_id`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgeRow {
    pub graph_id: GraphId,
    pub source_id: usize,
    pub target_id: usize,
}
impl EdgeRow {
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.source_id, self.target_id)
    }
}

/// One row of a link matrix. Rows of a graph arrive in order.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixRow {
    pub graph_id: GraphId,
    pub values: Vec<f64>,
}

/// Used in lieu of a union type. All rows processed by a ranker
/// must implement this trait.
pub trait Row {
    /// this is the key used to group rows into graphs.
    fn get_graph_id(&self) -> GraphId;
    fn as_edge_row(&self) -> Option<EdgeRow>;
    fn as_matrix_row(&self) -> Option<MatrixRow>;
}
impl Row for EdgeRow {
    fn get_graph_id(&self) -> GraphId {
        self.graph_id
    }
    fn as_edge_row(&self) -> Option<EdgeRow> {
        Some(*self)
    }
    fn as_matrix_row(&self) -> Option<MatrixRow> {
        None
    }
}
impl Row for MatrixRow {
    fn get_graph_id(&self) -> GraphId {
        self.graph_id
    }
    fn as_edge_row(&self) -> Option<EdgeRow> {
        None
    }
    fn as_matrix_row(&self) -> Option<MatrixRow> {
        Some(self.clone())
    }
}
