// SPDX-License-Identifier: MIT
// Error taxonomy for context construction and the fill phases.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias for distance computations.
pub type Result<T> = std::result::Result<T, LevenError>;

#[derive(Error, Debug)]
pub enum LevenError {
    /// A sequence exceeds the maximum supported length.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The context is malformed for the requested compute mode.
    #[error("invalid context: {0}")]
    InvalidContext(&'static str),

    /// A table buffer could not be allocated.
    #[error("table allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// A worker thread could not be started. Already-launched workers have
    /// been cancelled and joined before this is returned.
    #[error("worker launch failed: {0}")]
    WorkerLaunch(std::io::Error),

    /// One or more workers panicked before reaching join.
    #[error("{0} worker(s) panicked during the fill phase")]
    WorkerPanic(usize),

    /// The row-rendezvous barrier could not be constructed.
    #[error("barrier failure: {0}")]
    Barrier(&'static str),
}
