//! Logger setup for the terminal binary.
//!
//! The game owns the terminal's alternate screen, so log lines go to a file
//! in the data directory. `RUST_LOG` overrides the default `info` filter.

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Install the global logger, appending to `log_path` when it can be opened.
///
/// Without a usable file only warnings and errors are written, to stderr,
/// so the game screen is not flooded. Returns whether the file target is active.
pub fn init_logging(log_path: Option<&Path>) -> bool {
    let file = log_path.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    let to_file = file.is_some();
    let mut builder = match file {
        Some(file) => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
            builder.target(Target::Stderr);
            builder
        }
    };

    // A second initialization (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    to_file
}
