// SPDX-License-Identifier: MIT
// Last-match precomputation: per table row, the nearest prior column whose
// row-sequence symbol matches the row's column-sequence symbol.

use crate::context::Symbol;
use crate::error::Result;
use crate::grid::{Grid, SharedGrid};
use crate::pool;

/// Fills the last-match table with `workers` threads. Rows are independent,
/// so worker `k` takes rows `k, k + workers, k + 2 * workers, ...` and the
/// phase needs no synchronization beyond the final join.
pub(crate) fn precompute<T: Symbol>(
    row_seq: &[T],
    col_seq: &[T],
    table: &mut Grid<usize>,
    workers: usize,
) -> Result<()> {
    let rows = col_seq.len() + 1;
    let shared = SharedGrid::new(table);
    let shared = &shared;
    pool::dispatch(workers, move |id| {
        let mut i = id;
        while i < rows {
            fill_row(i, row_seq, col_seq, shared);
            i += workers;
        }
    })
}

// Workers own disjoint rows, which upholds the SharedGrid partition
// invariant for every access below.
fn fill_row<T: Symbol>(i: usize, row_seq: &[T], col_seq: &[T], table: &SharedGrid<usize>) {
    let cols = row_seq.len() + 1;
    if i == 0 {
        // No column symbol to match against.
        for j in 0..cols {
            unsafe { table.set(0, j, 0) };
        }
        return;
    }

    let col_sym = col_seq[i - 1];
    unsafe {
        table.set(i, 0, 0);
        for j in 1..cols {
            let hint = if row_seq[j - 1] == col_sym { j } else { table.get(i, j - 1) };
            table.set(i, j, hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(a: &str, b: &str, workers: usize) -> Grid<usize> {
        let mut table = Grid::new(b.len() + 1, a.len() + 1).unwrap();
        precompute(a.as_bytes(), b.as_bytes(), &mut table, workers).unwrap();
        table
    }

    fn row(table: &Grid<usize>, i: usize) -> Vec<usize> {
        (0..table.stride()).map(|j| table.get(i, j)).collect()
    }

    #[test]
    fn rows_record_nearest_prior_matching_column() {
        let table = hints("abba", "ab", 1);
        assert_eq!(row(&table, 0), vec![0, 0, 0, 0, 0]);
        // Row 1 matches 'a' at columns 1 and 4.
        assert_eq!(row(&table, 1), vec![0, 1, 1, 1, 4]);
        // Row 2 matches 'b' at columns 2 and 3.
        assert_eq!(row(&table, 2), vec![0, 0, 2, 3, 3]);
    }

    #[test]
    fn unmatched_rows_stay_zero() {
        let table = hints("abba", "z", 2);
        assert_eq!(row(&table, 1), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn result_does_not_depend_on_worker_count() {
        for workers in [1, 2, 5, 16] {
            let table = hints("mississippi", "sip", workers);
            assert_eq!(row(&table, 1), row(&hints("mississippi", "sip", 1), 1));
            assert_eq!(row(&table, 2), row(&hints("mississippi", "sip", 1), 2));
            assert_eq!(row(&table, 3), row(&hints("mississippi", "sip", 1), 3));
        }
    }
}
