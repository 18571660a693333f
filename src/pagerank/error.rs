/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// https://blog.burntsushi.net/rust-error-handling/

use thiserror::Error;

pub type PRResult<T> = std::result::Result<T, PRError>;

#[derive(Debug, Error)]
pub enum PRError {
    #[error("{0}")]
    Generic(String),

    #[error("Dimension error: expected a square matrix, got {rows}x{cols}")]
    Dimension { rows: usize, cols: usize },

    #[error("Dimension error: matrix has no pages")]
    Empty,

    #[error("Eigen decomposition failed: {0}")]
    Eigen(String),

    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("JSON error: {0}")]
    JSON(#[from] serde_json::Error),
}

impl PRError {
    pub fn new(msg: &str) -> Self {
        Self::Generic(msg.to_owned())
    }
    pub fn err_none() -> Self {
        Self::Generic("Unexpectedly empty Option encountered.".to_owned())
    }
    /// true for the shape errors raised before any iteration starts.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, PRError::Dimension { .. } | PRError::Empty)
    }
}

impl From<String> for PRError {
    fn from(str: String) -> Self {
        PRError::Generic(str)
    }
}

impl From<&str> for PRError {
    fn from(str: &str) -> Self {
        PRError::Generic(str.to_owned())
    }
}
