//! Borrowed cost matrix view.

use crate::error::{AssignmentError, Result};
use crate::types::CostScalar;

/// Parameter name reported by validation errors.
pub(crate) const COSTS_PARAM: &str = "costs";

/// Validated, immutable view over row-major cost data.
///
/// Construction checks the shape once, so every `CostRef` handed to the
/// solver has `nrows <= ncols` and `data.len() == nrows * ncols`.
///
/// ```
/// use simd_munkres::CostRef;
///
/// let data = [4.0f64, 1.0, 3.0, 2.0, 0.0, 5.0];
/// let costs = CostRef::from_slice(&data, 2, 3).unwrap();
///
/// assert_eq!(costs.nrows(), 2);
/// assert_eq!(costs.ncols(), 3);
/// assert_eq!(costs.get(1, 2), 5.0);
/// ```
#[derive(Debug)]
pub struct CostRef<'a, T: CostScalar> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
}

impl<'a, T: CostScalar> Copy for CostRef<'a, T> {}

impl<'a, T: CostScalar> Clone for CostRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: CostScalar> CostRef<'a, T> {
    /// Create a view from row-major data.
    ///
    /// # Errors
    /// - [`AssignmentError::AbsentInput`] if `data` is empty but the shape is not
    /// - [`AssignmentError::DimensionMismatch`] if `data.len() != nrows * ncols`
    /// - [`AssignmentError::InvalidShape`] if `nrows > ncols`
    pub fn from_slice(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self> {
        let expected = nrows.checked_mul(ncols).ok_or_else(|| {
            AssignmentError::DimensionMismatch(format!(
                "{} rows * {} cols overflows usize",
                nrows, ncols
            ))
        })?;
        if data.is_empty() && expected > 0 {
            return Err(AssignmentError::AbsentInput {
                param: COSTS_PARAM,
            });
        }
        if data.len() != expected {
            return Err(AssignmentError::DimensionMismatch(format!(
                "data length {} != nrows {} * ncols {}",
                data.len(),
                nrows,
                ncols
            )));
        }
        if nrows > ncols {
            return Err(AssignmentError::InvalidShape {
                param: COSTS_PARAM,
                rows: nrows,
                cols: ncols,
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Build a view from parts already validated by the caller.
    pub(crate) fn from_parts(data: &'a [T], nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        debug_assert!(nrows <= ncols);
        Self { data, nrows, ncols }
    }

    /// Number of rows (agents).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (tasks).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get the cost at position (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.ncols + j]
    }

    /// Get row `i` as a contiguous slice.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Get the underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}
