//! Logger setup.
//!
//! The terminal is in raw mode while playing, so records go to
//! ~/.flapper/flapper.log instead of stderr.

use std::fs::OpenOptions;
use std::io;

use env_logger::{Builder, Env, Target};

use crate::core::constants::LOG_FILE;
use crate::utils::persistence::data_path;

/// Initialize `env_logger` writing to the log file. Filter comes from
/// `RUST_LOG`, defaulting to `info`.
pub fn init() -> io::Result<()> {
    let path = data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
