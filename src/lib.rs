/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate rand;
#[macro_use]
extern crate slog;
extern crate slog_term;
extern crate thiserror;

pub mod pagerank;

pub use pagerank::algorithms::exact_eigen::{dominant_eigenvector, relative_error, spectral_radius};
pub use pagerank::algorithms::power_iteration::{
    damped_transition_matrix, page_rank, PageRank, PageRankResult, PowerIteration, RankVector,
};
pub use pagerank::error::{PRError, PRResult};
pub use pagerank::generator::{generate_internet, generate_internet_with_seed};
pub use pagerank::input::Input;
pub use pagerank::link_matrix::{GraphMatrix, LinkMatrix};
pub use pagerank::link_matrix_builder::LinkMatrixBuilder;
pub use pagerank::output::Output;
pub use pagerank::ranker::Ranker;
pub use pagerank::test_utils::*;
pub use pagerank::transformer_base::TransformerBase;
