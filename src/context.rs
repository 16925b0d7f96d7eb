// SPDX-License-Identifier: MIT
// Distance computation context: borrowed sequences, owned tables, degree.

use tracing::debug;

use crate::error::{LevenError, Result};
use crate::grid::Grid;
use crate::{last_match, sequential, wavefront};

/// Symbols the tables can be filled over: fixed-width, comparable, shareable
/// across worker threads.
pub trait Symbol: Copy + Eq + Send + Sync {}

impl Symbol for u8 {}
impl Symbol for u16 {}
impl Symbol for u32 {}
impl Symbol for u64 {}
impl Symbol for char {}

/// Longest supported sequence; distances must fit the `u32` table cells.
pub const MAX_SEQUENCE_LEN: usize = (u32::MAX - 1) as usize;

/// Owns the distance table (and, in multi-threaded mode, the last-match
/// table) for one computation over two borrowed sequences.
///
/// The *row sequence* spans a table row: its length plus one is the column
/// count. The *column sequence* runs down the table: its length plus one is
/// the row count. Both tables are released when the context is dropped. A
/// context is good for one `compute`; the table contents are stale afterwards.
pub struct LevenContext<'a, T> {
    row_seq: &'a [T],
    col_seq: &'a [T],
    dist: Grid<u32>,
    last_match: Option<Grid<usize>>,
    threads: usize,
}

impl<'a, T: Symbol> LevenContext<'a, T> {
    /// Builds a context for the two sequences. A `threads` hint of 0 resolves
    /// to the number of available CPUs; a hint of 1 selects the sequential
    /// fill and skips the last-match allocation entirely.
    pub fn new(row_seq: &'a [T], col_seq: &'a [T], threads: usize) -> Result<Self> {
        if row_seq.len() > MAX_SEQUENCE_LEN || col_seq.len() > MAX_SEQUENCE_LEN {
            return Err(LevenError::InvalidParameter(format!(
                "sequence length exceeds maximum of {MAX_SEQUENCE_LEN}"
            )));
        }

        let threads = if threads == 0 { num_cpus::get().max(1) } else { threads };
        let rows = col_seq.len() + 1;
        let cols = row_seq.len() + 1;
        let dist = Grid::new(rows, cols)?;
        let last_match = if threads > 1 { Some(Grid::new(rows, cols)?) } else { None };

        Ok(LevenContext { row_seq, col_seq, dist, last_match, threads })
    }

    /// The resolved parallelism degree. Unchanged by `compute`, even when the
    /// fill phase internally runs fewer workers than requested.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Computes the edit distance between the two sequences. On failure the
    /// table is in an unspecified partial state and must not be read.
    pub fn compute(&mut self) -> Result<u32> {
        if self.threads == 0 {
            return Err(LevenError::InvalidContext("zero parallelism degree"));
        }

        debug!(
            rows = self.col_seq.len() + 1,
            cols = self.row_seq.len() + 1,
            threads = self.threads,
            "computing distance"
        );

        if self.threads == 1 {
            return Ok(sequential::fill(self.row_seq, self.col_seq, &mut self.dist));
        }

        let Some(hints) = self.last_match.as_mut() else {
            return Err(LevenError::InvalidContext(
                "multi-threaded fill without a last-match table",
            ));
        };
        last_match::precompute(self.row_seq, self.col_seq, hints, self.threads)?;
        wavefront::fill(self.row_seq, self.col_seq, &mut self.dist, hints, self.threads)
    }
}
