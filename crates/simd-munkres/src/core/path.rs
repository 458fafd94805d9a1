//! Augmenting path storage.

use crate::error::{AssignmentError, Result};

/// A (row, col) cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Preallocated buffer for one alternating prime/star path.
///
/// A path starts and ends on a prime and visits each row at most twice
/// (once for its star, once for its prime), so `2 * nrows + 1` cells
/// always suffice. The capacity is additionally capped at `nrows * ncols`.
#[derive(Debug, Clone)]
pub struct PathBuffer {
    cells: Box<[Location]>,
    len: usize,
}

impl PathBuffer {
    pub fn new(nrows: usize, ncols: usize) -> Self {
        let capacity = (2 * nrows + 1).min(nrows * ncols).max(1);
        Self {
            cells: vec![Location::default(); capacity].into_boxed_slice(),
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget the current path without releasing storage.
    #[inline]
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Append a cell.
    ///
    /// Overflow means the star/prime structure is corrupted.
    #[inline]
    pub fn push(&mut self, loc: Location) -> Result<()> {
        let capacity = self.cells.len();
        let slot = self.cells.get_mut(self.len).ok_or_else(|| {
            AssignmentError::Internal(format!(
                "augmenting path exceeded {} cells at {:?}",
                capacity, loc
            ))
        })?;
        *slot = loc;
        self.len += 1;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[Location] {
        &self.cells[..self.len]
    }
}
