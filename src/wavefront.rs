// SPDX-License-Identifier: MIT
// Barrier-synchronized wavefront fill. The last-match hint replaces the
// same-row left dependency, so every cell of a row depends only on row i-1
// and a full row can be computed by independent workers.

use std::ops::Range;

use tracing::debug;

use crate::context::Symbol;
use crate::error::Result;
use crate::grid::{Grid, SharedGrid};
use crate::pool::{self, Rendezvous};

/// Static column partition: `cols` columns split into `workers` contiguous
/// chunks, the first `cols % workers` chunks one column larger. Computed once
/// per worker and reused for every row.
pub(crate) fn column_range(id: usize, workers: usize, cols: usize) -> Range<usize> {
    let base = cols / workers;
    let extra = cols % workers;
    if id < extra {
        let start = id * (base + 1);
        start..start + base + 1
    } else {
        let start = extra * (base + 1) + (id - extra) * base;
        start..start + base
    }
}

/// Fills the distance table with `workers` threads rendezvousing once per row
/// and returns the corner cell. The requested degree is truncated locally to
/// the column count; the caller's configuration is untouched.
pub(crate) fn fill<T: Symbol>(
    row_seq: &[T],
    col_seq: &[T],
    dist: &mut Grid<u32>,
    hints: &Grid<usize>,
    workers: usize,
) -> Result<u32> {
    let cols = row_seq.len() + 1;
    let rows = col_seq.len() + 1;
    // More workers than columns would leave some with empty ranges.
    let effective = workers.min(cols);
    debug!(rows, cols, workers = effective, "wavefront fill");

    let barrier = Rendezvous::new(effective)?;
    {
        let shared = SharedGrid::new(dist);
        let shared = &shared;
        let barrier = &barrier;
        pool::dispatch(effective, move |id| {
            let range = column_range(id, effective, cols);
            for i in 0..rows {
                fill_row(i, range.clone(), row_seq, col_seq, shared, hints);
                // No worker may start row i+1 until all have finished row i.
                barrier.wait();
            }
        })?;
    }

    Ok(dist.get(rows - 1, cols - 1))
}

// Each worker writes only its own column range of row i and reads row i-1,
// settled by the previous rendezvous; that is the SharedGrid contract.
fn fill_row<T: Symbol>(
    i: usize,
    range: Range<usize>,
    row_seq: &[T],
    col_seq: &[T],
    dist: &SharedGrid<u32>,
    hints: &Grid<usize>,
) {
    if i == 0 {
        for j in range {
            unsafe { dist.set(0, j, j as u32) };
        }
        return;
    }

    let col_sym = col_seq[i - 1];
    for j in range {
        let value = if j == 0 {
            i as u32
        } else if row_seq[j - 1] == col_sym {
            unsafe { dist.get(i - 1, j - 1).min(dist.get(i - 1, j) + 1) }
        } else {
            let (diag, up) = unsafe { (dist.get(i - 1, j - 1), dist.get(i - 1, j)) };
            let m = hints.get(i, j);
            let jump = if m == 0 {
                // No match anywhere in the row prefix: the cheapest run of
                // insertions starts from the row head, table[i][0] = i.
                (i + j) as u32
            } else {
                unsafe { dist.get(i - 1, m - 1) + (j - m) as u32 }
            };
            jump.min(diag.min(up) + 1)
        };
        unsafe { dist.set(i, j, value) };
    }
}
