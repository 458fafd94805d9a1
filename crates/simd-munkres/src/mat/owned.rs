//! Owned cost matrix type.

use std::ops::Index;

use crate::error::{AssignmentError, Result};
use crate::types::CostScalar;

use super::CostRef;

/// Owned, row-major cost matrix.
///
/// Useful when costs arrive as nested rows rather than one flat buffer:
///
/// ```
/// use simd_munkres::CostMatrix;
///
/// let costs = CostMatrix::from_rows(&[vec![14, 15], vec![80, 36]]).unwrap();
/// assert_eq!(costs.nrows(), 2);
/// assert_eq!(costs[(1, 0)], 80);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<T: CostScalar> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: CostScalar> CostMatrix<T> {
    /// Create a matrix from row-major data, validating the shape.
    pub fn from_row_major(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Self> {
        CostRef::from_slice(&data, nrows, ncols)?;
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from nested rows.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(AssignmentError::DimensionMismatch(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                ncols
            )));
        }
        let data = rows.iter().flatten().copied().collect();
        Self::from_row_major(data, nrows, ncols)
    }

    /// Create a matrix from a function of (row, col).
    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let data = (0..nrows * ncols)
            .map(|idx| f(idx / ncols, idx % ncols))
            .collect();
        Self::from_row_major(data, nrows, ncols)
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

    /// Borrow as a view.
    pub fn as_ref(&self) -> CostRef<'_, T> {
        CostRef::from_parts(&self.data, self.nrows, self.ncols)
    }

    /// Get the underlying data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: CostScalar> Index<(usize, usize)> for CostMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.nrows,
            self.ncols
        );
        &self.data[i * self.ncols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = CostMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, AssignmentError::DimensionMismatch(_)));
    }

    #[test]
    fn test_from_rows_empty_rows_rejected() {
        let err = CostMatrix::<i32>::from_rows(&[vec![], vec![]]).unwrap_err();
        assert!(matches!(err, AssignmentError::InvalidShape { rows: 2, cols: 0, .. }));
    }

    #[test]
    fn test_from_rows_no_rows() {
        let m = CostMatrix::<f32>::from_rows(&[]).unwrap();
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 0);
    }

    #[test]
    fn test_from_fn() {
        let m = CostMatrix::from_fn(2, 3, |i, j| (i * 3 + j) as i64).unwrap();
        assert_eq!(m[(1, 2)], 5);
        assert_eq!(m.as_ref().get(1, 0), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let m = CostMatrix::from_rows(&[vec![1, 2]]).unwrap();
        let _ = m[(1, 0)];
    }
}
