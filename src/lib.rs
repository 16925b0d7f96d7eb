// SPDX-License-Identifier: MIT
// Levenshtein distance with an optional barrier-synchronized parallel fill.
//
// The sequential path is the textbook O(NM) table fill. The parallel path
// first precomputes per-row last-match hints, which remove the same-row left
// dependency of the recurrence, then fills the table row by row with a fixed
// set of workers over static column ranges, one barrier rendezvous per row.

mod context;
mod error;
mod grid;
mod last_match;
mod pool;
mod sequential;
mod wavefront;

pub use context::{LevenContext, Symbol, MAX_SEQUENCE_LEN};
pub use error::{LevenError, Result};

/// Edit distance between two sequences. `threads` of 0 picks a CPU-count
/// default, 1 runs sequentially in the calling thread.
pub fn distance<T: Symbol>(row_seq: &[T], col_seq: &[T], threads: usize) -> Result<u32> {
    let mut ctx = LevenContext::new(row_seq, col_seq, threads)?;
    ctx.compute()
}
