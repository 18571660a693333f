/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use slog::{Drain, Level, LevelFilter, Logger};

/// Root logger writing to stderr, so stdout stays free for result lines.
pub fn new_logger(verbose: bool) -> Logger {
    let level = if verbose { Level::Debug } else { Level::Info };
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!())
}

/// Logger that drops everything.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}
