/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate serde_json;

use clap::ArgMatches;

use crate::pagerank::algorithms::exact_eigen::{dominant_eigenvector, relative_error};
use crate::pagerank::algorithms::power_iteration::{
    damped_transition_matrix, PowerIteration, DEFAULT_DAMPING, DEFAULT_TOLERANCE,
    DEFAULT_TOTAL_MASS,
};
use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::generator::{generate_internet, generate_internet_with_seed};
use crate::pagerank::id_types::GraphId;
use crate::pagerank::input::Input;
use crate::pagerank::line_processor::{line_processor_for, InputFormat, LineProcessorBase};
use crate::pagerank::link_matrix::LinkMatrix;
use crate::pagerank::link_matrix_builder::LinkMatrixBuilder;
use crate::pagerank::logging::discard_logger;
use crate::pagerank::output::Output;
use crate::pagerank::row::{EdgeRow, MatrixRow, Row};
use crate::pagerank::transformer_base::TransformerBase;
use itertools::Itertools;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde_json::json;
use slog::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Number of top pages mentioned in the per-graph log line.
const LOGGED_TOP_PAGES: usize = 5;

/// Ranks every graph in a line-oriented input, one output line per graph:
/// `graph_key\t{json}`.
pub struct Ranker {
    pub solver: PowerIteration,
    pub format: InputFormat,
    /// also report the exact dominant eigenvector of the damped matrix
    pub compare_eigen: bool,
    /// rank a generated internet of this many pages instead of reading input
    pub generate: Option<usize>,
    pub seed: Option<u64>,
    line_processor: Arc<dyn LineProcessorBase>,
    // when set, graphs are ranked on this pool while the next one is read
    pool: Option<ThreadPool>,
    log: Logger,

    edge_rows: Vec<EdgeRow>,
    matrix_rows: Vec<MatrixRow>,
}

/// Ranks one link matrix and renders the result as JSON.
pub fn rank_link_matrix_json(
    solver: &PowerIteration,
    link_matrix: &LinkMatrix,
    compare_eigen: bool,
) -> PRResult<serde_json::Value> {
    let result = solver.run(link_matrix);
    let mut value = result.to_json();
    if compare_eigen {
        let damped = LinkMatrix::new(damped_transition_matrix(link_matrix, solver.damping))?;
        let eigen = dominant_eigenvector(&damped, solver.total_mass)?;
        value["eigen_ranks"] = json!(eigen.iter().cloned().collect::<Vec<f64>>());
        value["eigen_relative_error"] = json!(relative_error(&result.ranks, &eigen));
    }
    Ok(value)
}

fn rank_batch(
    solver: &PowerIteration,
    link_matrix: PRResult<LinkMatrix>,
    compare_eigen: bool,
    original_id: &str,
    log: &Logger,
) -> PRResult<String> {
    let link_matrix = link_matrix?;
    let dangling = link_matrix.dangling_pages();
    if !dangling.is_empty() && solver.damping >= 1.0 {
        warn!(log, "undamped graph has dangling pages, rank mass will leak";
              "graph" => original_id, "dangling" => dangling.len());
    }
    let value = rank_link_matrix_json(solver, &link_matrix, compare_eigen)?;
    if let Some(ranking) = value["ranking"].as_array() {
        let top = ranking
            .iter()
            .take(LOGGED_TOP_PAGES)
            .filter_map(|page| page.as_u64())
            .join(",");
        info!(log, "ranked graph"; "graph" => original_id,
              "pages" => link_matrix.num_pages(), "top" => top);
    }
    Ok(format!("{}\t{}", original_id, value))
}

impl TransformerBase for Ranker {
    fn get_line_processor(&self) -> Arc<dyn LineProcessorBase> {
        self.line_processor.clone()
    }
    fn process_row(&mut self, row: Box<dyn Row>) -> PRResult<()> {
        if let Some(edge_row) = row.as_edge_row() {
            self.edge_rows.push(edge_row);
        }
        if let Some(matrix_row) = row.as_matrix_row() {
            self.matrix_rows.push(matrix_row);
        }
        Ok(())
    }
    fn reset(&mut self) -> PRResult<()> {
        self.edge_rows.clear();
        self.matrix_rows.clear();
        Ok(())
    }
    fn process_batch(&self, graph_id: GraphId, output: &Sender<PRResult<String>>) -> PRResult<()> {
        let link_matrix = self.build_link_matrix();
        let original_id = self
            .line_processor
            .get_original_id(graph_id.value() as usize)?;
        match &self.pool {
            None => {
                let line = rank_batch(
                    &self.solver,
                    link_matrix,
                    self.compare_eigen,
                    &original_id,
                    &self.log,
                )?;
                output
                    .send(Ok(line))
                    .map_err(|_| PRError::new("Output writer hung up"))?;
            }
            Some(pool) => {
                let output_clone = output.clone();
                let solver = self.solver.clone();
                let compare_eigen = self.compare_eigen;
                let log = self.log.clone();
                pool.spawn(move || {
                    let line = rank_batch(&solver, link_matrix, compare_eigen, &original_id, &log);
                    // the writer only hangs up after an earlier failure, which it reports
                    let _ = output_clone.send(line);
                });
            }
        }
        Ok(())
    }
}

impl Ranker {
    pub fn new(
        solver: PowerIteration,
        format: InputFormat,
        compare_eigen: bool,
        parallel: bool,
        log: Logger,
    ) -> PRResult<Self> {
        let pool = if parallel {
            Some(
                ThreadPoolBuilder::new()
                    .build()
                    .map_err(|e| PRError::from(e.to_string()))?,
            )
        } else {
            None
        };
        Ok(Self {
            solver: solver.with_parallel(parallel).with_logger(log.clone()),
            format,
            compare_eigen,
            generate: None,
            seed: None,
            line_processor: line_processor_for(format),
            pool,
            log,
            edge_rows: Vec::new(),
            matrix_rows: Vec::new(),
        })
    }

    pub fn from_argmatches(matches: &ArgMatches, log: Logger) -> PRResult<Self> {
        let float_value = |name: &str, default: f64| -> PRResult<f64> {
            match matches.value_of(name) {
                Some(value) => Ok(value.parse::<f64>()?),
                None => Ok(default),
            }
        };
        let damping: f64 = float_value("damping", DEFAULT_DAMPING)?;
        let tolerance: f64 = float_value("tolerance", DEFAULT_TOLERANCE)?;
        let total_mass: f64 = float_value("total_mass", DEFAULT_TOTAL_MASS)?;
        let format: InputFormat = matches
            .value_of("format")
            .unwrap_or("edges")
            .parse::<InputFormat>()?;
        let generate: Option<usize> = matches
            .value_of("generate")
            .map(str::parse::<usize>)
            .transpose()?;
        let seed: Option<u64> = matches.value_of("seed").map(str::parse::<u64>).transpose()?;
        let solver = PowerIteration::new()
            .with_damping(damping)
            .with_tolerance(tolerance)
            .with_total_mass(total_mass);
        let mut ranker = Ranker::new(
            solver,
            format,
            matches.is_present("compare_eigen"),
            matches.is_present("parallel"),
            log,
        )?;
        ranker.generate = generate;
        ranker.seed = seed;
        Ok(ranker)
    }

    fn build_link_matrix(&self) -> PRResult<LinkMatrix> {
        match self.format {
            InputFormat::Edges => {
                let tuples: Vec<(usize, usize)> =
                    self.edge_rows.iter().map(|x| x.as_tuple()).collect();
                LinkMatrixBuilder::from_vector(&tuples)
            }
            InputFormat::Matrix => LinkMatrixBuilder::from_matrix_rows(&self.matrix_rows),
        }
    }

    /// Ranks a synthetic internet of `n` pages, printing `generated\t{json}`.
    pub fn rank_generated(&self, n: usize, mut output: Output) -> PRResult<()> {
        let link_matrix = match self.seed {
            Some(seed) => generate_internet_with_seed(n, seed),
            None => generate_internet(n),
        };
        let line = rank_batch(
            &self.solver,
            link_matrix,
            self.compare_eigen,
            "generated",
            &self.log,
        )?;
        output.print(line)
    }

    /// Either ranks a generated internet (when `generate` is set) or every
    /// graph in `input`.
    pub fn execute(&mut self, input: Input, output: Output) -> PRResult<()> {
        match self.generate {
            Some(n) => self.rank_generated(n, output),
            None => self.run(input, output),
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Ranker {
            solver: PowerIteration::new(),
            format: InputFormat::Edges,
            compare_eigen: false,
            generate: None,
            seed: None,
            line_processor: line_processor_for(InputFormat::Edges),
            pool: None,
            log: discard_logger(),
            edge_rows: Vec::new(),
            matrix_rows: Vec::new(),
        }
    }
}
