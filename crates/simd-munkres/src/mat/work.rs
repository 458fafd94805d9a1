//! Column-major working cost matrix.

use std::ops::{Index, IndexMut};

/// Dense working matrix of `f32` costs in column-major order.
///
/// Element (row, col) lives at `col * nrows + row`, so walking down a
/// column is a unit-stride access.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkMatrix {
    data: Vec<f32>,
    nrows: usize,
    ncols: usize,
}

impl WorkMatrix {
    /// Create a matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from column-major data.
    pub fn from_col_major(data: Vec<f32>, nrows: usize, ncols: usize) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "data length {} != nrows {} * ncols {}",
            data.len(),
            nrows,
            ncols
        );
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Flat index of (row, col).
    #[inline(always)]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        col * self.nrows + row
    }

    /// Column `col` as a contiguous slice.
    #[inline]
    pub fn column(&self, col: usize) -> &[f32] {
        let start = col * self.nrows;
        &self.data[start..start + self.nrows]
    }

    /// Column `col` as a contiguous mutable slice.
    #[inline]
    pub fn column_mut(&mut self, col: usize) -> &mut [f32] {
        let start = col * self.nrows;
        &mut self.data[start..start + self.nrows]
    }

    /// Get the underlying data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Index<(usize, usize)> for WorkMatrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for WorkMatrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let idx = self.offset(row, col);
        &mut self.data[idx]
    }
}
