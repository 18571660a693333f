/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_pagerank;
use lib_pagerank::pagerank::error::{PRError, PRResult};
use lib_pagerank::pagerank::id_types::GraphId;
use lib_pagerank::pagerank::link_matrix::{GraphMatrix, LinkMatrix, STOCHASTIC_EPS};
use lib_pagerank::pagerank::link_matrix_builder::LinkMatrixBuilder;
use lib_pagerank::pagerank::row::MatrixRow;
use lib_pagerank::pagerank::test_utils::{gen_micro_internet, gen_micro_internet_with_sink};

#[test]
fn test_micro_internets_are_column_stochastic() -> PRResult<()> {
    let l = gen_micro_internet()?;
    assert_eq!(l.num_pages(), 6);
    assert!(l.is_column_stochastic(STOCHASTIC_EPS));
    assert!(l.dangling_pages().is_empty());

    let l2 = gen_micro_internet_with_sink()?;
    assert_eq!(l2.num_pages(), 7);
    assert!(l2.is_column_stochastic(STOCHASTIC_EPS));
    assert_eq!(l2.as_matrix()[(6, 6)], 1.0);
    Ok(())
}

#[test]
fn test_from_rows_is_row_major() -> PRResult<()> {
    let l = LinkMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]])?;
    assert_eq!(l.as_matrix()[(0, 1)], 1.0);
    assert_eq!(l.as_matrix()[(1, 0)], 1.0);
    assert_eq!(l.column_sums(), vec![1.0, 1.0]);
    Ok(())
}

#[test]
fn test_shape_errors() {
    match LinkMatrix::from_rows(&[vec![0.5, 0.5], vec![0.5, 0.5], vec![0.0, 0.0]]) {
        Err(PRError::Dimension { rows: 3, cols: 2 }) => (),
        other => panic!("expected dimension error, got {:?}", other),
    }
    match LinkMatrix::from_rows(&[vec![0.5, 0.5], vec![0.5]]) {
        Err(PRError::Dimension { .. }) => (),
        other => panic!("expected dimension error, got {:?}", other),
    }
    assert!(LinkMatrix::from_rows(&[]).unwrap_err().is_dimension_error());
    assert!(LinkMatrix::new(GraphMatrix::zeros(0, 0)).is_err());
}

#[test]
fn test_non_stochastic_matrices_are_accepted_but_flagged() -> PRResult<()> {
    let dangling = LinkMatrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0]])?;
    assert!(!dangling.is_column_stochastic(STOCHASTIC_EPS));
    assert_eq!(dangling.dangling_pages(), vec![1]);

    let negative = LinkMatrix::from_rows(&[vec![1.5, 0.0], vec![-0.5, 1.0]])?;
    assert!(negative.has_negative_entries());
    assert!(!negative.is_column_stochastic(STOCHASTIC_EPS));
    Ok(())
}

#[test]
fn test_build_from_edges() -> PRResult<()> {
    let edges = vec![(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (0, 1)];
    let l = LinkMatrixBuilder::from_vector(&edges)?;
    let m = l.as_matrix();
    assert_eq!(l.num_pages(), 4);
    assert_eq!(m[(1, 0)], 0.5);
    assert_eq!(m[(2, 0)], 0.5);
    assert_eq!(m[(2, 1)], 1.0);
    assert_eq!(m[(0, 2)], 0.5);
    assert_eq!(m[(3, 2)], 0.5);
    assert_eq!(l.dangling_pages(), vec![3]);
    assert_eq!(l.column_sums(), vec![1.0, 1.0, 1.0, 0.0]);
    Ok(())
}

#[test]
fn test_build_from_edges_with_isolated_pages() -> PRResult<()> {
    let l = LinkMatrixBuilder::from_vector_with_num_pages(&[(0, 1), (1, 0)], 4)?;
    assert_eq!(l.num_pages(), 4);
    assert_eq!(l.dangling_pages(), vec![2, 3]);
    assert!(LinkMatrixBuilder::from_vector_with_num_pages(&[(0, 4)], 4).is_err());
    assert!(LinkMatrixBuilder::from_vector(&[]).is_err());
    Ok(())
}

#[test]
fn test_build_from_matrix_rows() -> PRResult<()> {
    let graph_id = GraphId::from(0);
    let rows = vec![
        MatrixRow {
            graph_id,
            values: vec![0.0, 1.0],
        },
        MatrixRow {
            graph_id,
            values: vec![1.0, 0.0],
        },
    ];
    let l = LinkMatrixBuilder::from_matrix_rows(&rows)?;
    assert!(l.is_column_stochastic(STOCHASTIC_EPS));
    assert!(LinkMatrixBuilder::from_matrix_rows(&rows[..1]).is_err());
    Ok(())
}
