/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod algorithms;
pub mod error;
pub mod generator;
pub mod id_types;
pub mod input;
pub mod line_processor;
pub mod link_matrix;
pub mod link_matrix_builder;
pub mod logging;
pub mod output;
pub mod ranker;
pub mod row;
pub mod test_utils;
pub mod transformer_base;
