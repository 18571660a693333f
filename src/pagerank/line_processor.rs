/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::id_types::GraphId;
use crate::pagerank::row::{EdgeRow, MatrixRow, Row};
use fxhash::FxHashMap;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

pub trait LineProcessorBase: Send + Sync {
    fn process_line(&self, line: String) -> PRResult<Box<dyn Row>>;
    /// the graph key as it appeared in the input.
    fn get_original_id(&self, local_id: usize) -> PRResult<String>;
}

/// The two supported line layouts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// graph_key\tsource\ttarget
    Edges,
    /// graph_key\tv0 v1 ... v(N-1), one matrix row per line
    Matrix,
}
impl FromStr for InputFormat {
    type Err = PRError;
    fn from_str(s: &str) -> PRResult<Self> {
        match s {
            "edges" => Ok(InputFormat::Edges),
            "matrix" => Ok(InputFormat::Matrix),
            _ => Err(format!("Unknown input format: {} (expected edges or matrix)", s).into()),
        }
    }
}

/// Keeps track of graph keys seen so far. Can mutate ids and reverse_ids
/// maps, and hands out consecutive graph ids.
#[derive(Default)]
pub struct GraphKeys {
    ids: Arc<RwLock<FxHashMap<String, i64>>>,
    reverse_ids: Arc<RwLock<Vec<String>>>,
}
impl GraphKeys {
    pub fn new() -> Self {
        Self::default()
    }
    fn record_new_key_or_return_current_one(&self, key: &str) -> PRResult<GraphId> {
        let mut ids = self
            .ids
            .write()
            .map_err(|_| PRError::new("graph key map lock poisoned"))?;
        let mut reverse_ids = self
            .reverse_ids
            .write()
            .map_err(|_| PRError::new("graph key list lock poisoned"))?;
        let num_items = ids.len() as i64;
        let id = *ids.entry(key.to_owned()).or_insert_with(|| {
            reverse_ids.push(key.to_owned());
            num_items
        });
        Ok(GraphId::from(id))
    }
    fn get_original_id(&self, local_id: usize) -> PRResult<String> {
        self.reverse_ids
            .read()
            .map_err(|_| PRError::new("graph key list lock poisoned"))?
            .get(local_id)
            .cloned()
            .ok_or_else(PRError::err_none)
    }
}

// surrounding whitespace is not part of a graph key
fn split_key(line: &str) -> PRResult<(&str, &str)> {
    let mut parts = line.trim_end().splitn(2, '\t');
    let key = parts.next().ok_or_else(PRError::err_none)?.trim();
    let rest = parts
        .next()
        .ok_or_else(|| PRError::from(format!("Missing tab-separated fields in line: {}", line)))?;
    Ok((key, rest))
}

/// deals with lines of the form graph_key\tsource\ttarget.
#[derive(Default)]
pub struct EdgeLineProcessor {
    keys: GraphKeys,
}
impl EdgeLineProcessor {
    pub fn new() -> Self {
        Self::default()
    }
}
impl LineProcessorBase for EdgeLineProcessor {
    fn process_line(&self, line: String) -> PRResult<Box<dyn Row>> {
        let (key, rest) = split_key(&line)?;
        let vec: Vec<&str> = rest.split('\t').collect();
        if vec.len() != 2 {
            return Err(format!("Expected graph_key, source, target in line: {}", line).into());
        }
        let graph_id = self.keys.record_new_key_or_return_current_one(key)?;
        let source_id: usize = vec[0].trim().parse::<usize>()?;
        let target_id: usize = vec[1].trim().parse::<usize>()?;
        Ok(Box::new(EdgeRow {
            graph_id,
            source_id,
            target_id,
        }))
    }
    fn get_original_id(&self, local_id: usize) -> PRResult<String> {
        self.keys.get_original_id(local_id)
    }
}

/// deals with lines of the form graph_key\tv0 v1 ... (values separated by
/// whitespace or commas).
#[derive(Default)]
pub struct MatrixLineProcessor {
    keys: GraphKeys,
}
impl MatrixLineProcessor {
    pub fn new() -> Self {
        Self::default()
    }
}
impl LineProcessorBase for MatrixLineProcessor {
    fn process_line(&self, line: String) -> PRResult<Box<dyn Row>> {
        let (key, rest) = split_key(&line)?;
        let graph_id = self.keys.record_new_key_or_return_current_one(key)?;
        let values = rest
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()?;
        if values.is_empty() {
            return Err(PRError::Empty);
        }
        Ok(Box::new(MatrixRow { graph_id, values }))
    }
    fn get_original_id(&self, local_id: usize) -> PRResult<String> {
        self.keys.get_original_id(local_id)
    }
}

pub fn line_processor_for(format: InputFormat) -> Arc<dyn LineProcessorBase> {
    match format {
        InputFormat::Edges => Arc::new(EdgeLineProcessor::new()),
        InputFormat::Matrix => Arc::new(MatrixLineProcessor::new()),
    }
}
