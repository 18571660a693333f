/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate lib_pagerank;

use std::io;

use clap::{App, Arg, ArgMatches};

use lib_pagerank::pagerank::error::PRResult;
use lib_pagerank::pagerank::input::Input;
use lib_pagerank::pagerank::logging::new_logger;
use lib_pagerank::pagerank::output::Output;
use lib_pagerank::pagerank::ranker::Ranker;

fn get_command_line_args() -> ArgMatches<'static> {
    let matches: ArgMatches = App::new("PageRank")
        .version("0.1.0")
        .about("Ranks pages of link graphs specified from stdin, using damped power iteration.")
        .arg(Arg::with_name("damping")
                 .short("d")
                 .long("damping")
                 .takes_value(true)
                 .help("Probability that the surfer follows a link rather than jumping to a \
                        random page (default = 0.85)."))
        .arg(Arg::with_name("tolerance")
                 .short("t")
                 .long("tolerance")
                 .takes_value(true)
                 .help("Iteration stops once the Euclidean norm of the change between \
                        successive rank vectors is at most this (default = 0.01)."))
        .arg(Arg::with_name("total_mass")
                 .long("total_mass")
                 .takes_value(true)
                 .help("Surfer mass split evenly across pages at the start (default = 100)."))
        .arg(Arg::with_name("format")
                 .short("f")
                 .long("format")
                 .takes_value(true)
                 .possible_values(&["edges", "matrix"])
                 .help("Input layout. edges: graph_key\tsource\ttarget, \
                        matrix: graph_key\tv0 v1 ... (one matrix row per line). \
                        Lines must be grouped by graph_key (default = edges)."))
        .arg(Arg::with_name("parallel")
                 .long("parallel")
                 .help("Rank graphs on a thread pool and split each matrix-vector \
                        product across rows. Output lines may come out of order."))
        .arg(Arg::with_name("compare_eigen")
                 .long("compare_eigen")
                 .help("Also report the exact dominant eigenvector of the damped matrix \
                        and its relative error against the power iteration."))
        .arg(Arg::with_name("generate")
                 .short("g")
                 .long("generate")
                 .takes_value(true)
                 .help("Ignore stdin and rank a randomly generated internet of this many pages."))
        .arg(Arg::with_name("seed")
                 .short("s")
                 .long("seed")
                 .takes_value(true)
                 .requires("generate")
                 .help("Seed for --generate."))
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .long("verbose")
                 .help("Log every iteration's residual to stderr."))
        .get_matches();
    matches
}

fn main() -> PRResult<()> {
    let matches: ArgMatches = get_command_line_args();
    let log = new_logger(matches.is_present("verbose"));
    let mut ranker = Ranker::from_argmatches(&matches, log)?;
    let stdio: io::Stdin = io::stdin();
    let input: Input = Input::console(&stdio);
    let mut dummy: Vec<u8> = Vec::new();
    let output: Output = Output::console(&mut dummy);
    ranker.execute(input, output)?;
    Ok(())
}
