// SPDX-License-Identifier: MIT
// Sequential baseline fill of the distance table, standard O(NM) recurrence.

use crate::context::Symbol;
use crate::grid::Grid;

/// Fills the whole table row-major in the calling thread and returns the
/// corner cell. Cells depend on the previous column of the same row, so the
/// inner loop must run left to right.
pub(crate) fn fill<T: Symbol>(row_seq: &[T], col_seq: &[T], dist: &mut Grid<u32>) -> u32 {
    let cols = row_seq.len() + 1;
    let rows = col_seq.len() + 1;

    for j in 0..cols {
        dist.set(0, j, j as u32);
    }

    for i in 1..rows {
        dist.set(i, 0, i as u32);
        let col_sym = col_seq[i - 1];
        for j in 1..cols {
            let cost = u32::from(row_seq[j - 1] != col_sym);
            let value = (dist.get(i - 1, j - 1) + cost)
                .min(dist.get(i, j - 1) + 1)
                .min(dist.get(i - 1, j) + 1);
            dist.set(i, j, value);
        }
    }

    dist.get(rows - 1, cols - 1)
}
