// SPDX-License-Identifier: MIT
// Flat row-major 2-D grid over one contiguous allocation, plus the
// shared-mutable view handed to fill workers.

use std::cell::UnsafeCell;
use std::marker::PhantomData;

use crate::error::{LevenError, Result};

/// Dense `rows x cols` grid stored as a single `Vec`, indexed
/// `row * stride + column`. One allocation keeps row scans cache-friendly.
pub(crate) struct Grid<T> {
    cells: Vec<T>,
    stride: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Allocates the grid fallibly so an oversized request surfaces as
    /// `Allocation` instead of aborting.
    pub(crate) fn new(rows: usize, cols: usize) -> Result<Self> {
        // A wrapped length would pass the reserve and leave the shared view
        // indexing out of bounds.
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| LevenError::InvalidParameter("table dimensions overflow".into()))?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.resize(len, T::default());
        Ok(Grid { cells, stride: cols })
    }

    #[inline]
    pub(crate) fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(col < self.stride);
        row * self.stride + col
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.idx(row, col)]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.idx(row, col);
        self.cells[idx] = value;
    }
}

/// Shared-mutable view of a `Grid` for the duration of one parallel phase.
///
/// Soundness rests on the static partition invariant of the fill phases:
/// within a row, each worker writes only cells in its assigned column range
/// (or its round-robin row set in the last-match phase), and reads only the
/// previous row, which the barrier has already settled. Disjoint writes plus
/// the barrier's happens-before edge mean there is never a concurrent
/// read/write of the same cell.
pub(crate) struct SharedGrid<'a, T> {
    cells: *const UnsafeCell<T>,
    len: usize,
    stride: usize,
    _borrow: PhantomData<&'a mut [T]>,
}

unsafe impl<T: Send> Send for SharedGrid<'_, T> {}
unsafe impl<T: Send> Sync for SharedGrid<'_, T> {}

impl<'a, T: Copy + Default> SharedGrid<'a, T> {
    /// Takes exclusive hold of the grid; the borrow checker guarantees no
    /// other access to the underlying buffer while the view is alive.
    pub(crate) fn new(grid: &'a mut Grid<T>) -> Self {
        let len = grid.cells.len();
        let stride = grid.stride;
        // &mut [T] -> *const UnsafeCell<T>: layout-compatible, and the
        // exclusive borrow is held by `_borrow` for 'a.
        let cells = grid.cells.as_mut_ptr() as *const UnsafeCell<T>;
        SharedGrid { cells, len, stride, _borrow: PhantomData }
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        let idx = row * self.stride + col;
        debug_assert!(col < self.stride && idx < self.len);
        idx
    }

    /// # Safety
    /// `(row, col)` must be in bounds and must not be concurrently written.
    #[inline]
    pub(crate) unsafe fn get(&self, row: usize, col: usize) -> T {
        *(*self.cells.add(self.idx(row, col))).get()
    }

    /// # Safety
    /// `(row, col)` must be in bounds and owned by the calling worker under
    /// the partition invariant for the current row.
    #[inline]
    pub(crate) unsafe fn set(&self, row: usize, col: usize, value: T) {
        *(*self.cells.add(self.idx(row, col))).get() = value;
    }
}
