/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::id_types::GraphId;
use crate::pagerank::input::Input;
use crate::pagerank::line_processor::LineProcessorBase;
use crate::pagerank::output::Output;
use crate::pagerank::row::Row;
use std::io::prelude::*;
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;

pub trait TransformerBase {
    fn get_line_processor(&self) -> Arc<dyn LineProcessorBase>;
    // logic for taking row and storing into self via side-effect
    fn process_row(&mut self, row: Box<dyn Row>) -> PRResult<()>;
    // logic for processing batch of rows, once all rows are ready
    fn process_batch(&self, graph_id: GraphId, output: &Sender<PRResult<String>>) -> PRResult<()>;
    // reset transformer state after processing;
    fn reset(&mut self) -> PRResult<()>;

    // main loop, runs through lines ordered by graph_id, updates state accordingly
    // and runs process_batch when graph_id changes. A single writer thread owns
    // the output; it finishes once every sender (including ones handed to
    // worker threads) is dropped.
    fn run(&mut self, input: Input, mut output: Output) -> PRResult<()> {
        let line_processor = self.get_line_processor();
        let ret = crossbeam::scope(|scope| -> PRResult<()> {
            let (sender, receiver) = channel::<PRResult<String>>();
            let writer = scope.spawn(move |_| -> PRResult<()> {
                for line in receiver.iter() {
                    output.print(line?)?;
                }
                Ok(())
            });
            let mut current_graph_id: Option<GraphId> = None;
            for line in input.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let row: Box<dyn Row> = line_processor.process_line(line)?;
                let new_graph_id: GraphId = row.get_graph_id();
                if let Some(some_current_graph_id) = current_graph_id {
                    if new_graph_id != some_current_graph_id {
                        self.process_batch(some_current_graph_id, &sender)?;
                        self.reset()?;
                    }
                }
                current_graph_id = Some(new_graph_id);
                self.process_row(row)?;
            }
            let last_graph_id = current_graph_id.ok_or_else(|| PRError::from("No input rows!"))?;
            self.process_batch(last_graph_id, &sender)?;
            self.reset()?;
            drop(sender);
            writer
                .join()
                .map_err(|_| PRError::new("Output writer thread panicked"))?
        });
        ret.map_err(|_| PRError::new("Transformer thread panicked"))?
    }
}
