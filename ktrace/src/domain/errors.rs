//! Structured error types for ktrace
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to spawn {}: {source}", tool.display())]
    Spawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exited with status {code}", tool.display())]
    CommandFailed { tool: PathBuf, code: i32 },

    #[error("{} terminated by a signal", tool.display())]
    CommandKilled { tool: PathBuf },

    #[error("{} produced non-UTF-8 output", tool.display())]
    BadOutput { tool: PathBuf },
}
