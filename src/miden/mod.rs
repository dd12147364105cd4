//! Boundary to the Miden VM.
//!
//! Miden consumes and produces stacks of Goldilocks elements written as
//! decimal strings in JSON files. [`stack`] maps those files onto element
//! vectors, and [`MidenDriver`] invokes the `miden` executable on them.

pub mod driver;
pub mod stack;

pub use driver::{MidenDriver, ProgramHash};
pub use stack::{InputFile, Output};

use std::process::ExitStatus;
use thiserror::Error;

/// Result type for Miden operations.
pub type MidenResult<T> = Result<T, MidenError>;

/// Errors raised at the Miden boundary.
#[derive(Debug, Error)]
pub enum MidenError {
    /// The executable could not be started.
    #[error("failed to spawn {binary}: {source}")]
    Spawn {
        /// Executable that was invoked.
        binary: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The executable ran but reported failure.
    #[error("miden exited with {status}: {stderr}")]
    Failed {
        /// Exit status of the process.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// No program hash line was found in the executable's output.
    #[error("program hash not found in miden output")]
    HashNotFound,

    /// The program hash is not valid hex.
    #[error("invalid program hash: {0}")]
    InvalidHash(#[from] hex::FromHexError),

    /// File system failure while preparing or reading files.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input or output file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
