//! Bulk scan kernels used by the assignment state machine.
//!
//! [`ScalarKernel`] is the reference: plain element-by-element loops.
//! [`LaneKernel`] processes fixed-width lane groups with `wide` vectors and
//! falls back to scalar code for the remainder. Both must return identical
//! results for every input.

mod lanes;
mod scalar;

pub use lanes::LaneKernel;
pub use scalar::ScalarKernel;

use crate::core::{Coverage, Location};
use crate::mat::{Mark, MaskMatrix, WorkMatrix};

/// Scan primitives over the working matrix, mask and coverage.
pub trait ScanKernel {
    /// Short name used in logs.
    const NAME: &'static str;

    /// First cell with cost `<= 0` whose row and column are both uncovered.
    ///
    /// Columns are visited in increasing order, rows in increasing order
    /// within a column.
    fn find_uncovered_zero(&self, costs: &WorkMatrix, cover: &Coverage) -> Option<Location>;

    /// Cover every column that holds a star and return the number of
    /// covered columns afterwards.
    fn cover_starred_columns(&self, mask: &MaskMatrix, cover: &mut Coverage) -> usize;

    /// Row of the first star in column `col`.
    fn find_star_in_column(&self, mask: &MaskMatrix, col: usize) -> Option<usize>;

    /// Reset every primed cell to [`Mark::None`].
    fn clear_primes(&self, mask: &mut MaskMatrix);

    /// Minimum cost over cells whose row and column are both uncovered.
    ///
    /// `None` when no such cell exists.
    fn min_uncovered(&self, costs: &WorkMatrix, cover: &Coverage) -> Option<f32>;

    /// Column of the first star in row `row`.
    ///
    /// Rows are strided by `nrows` in column-major storage, so there is no
    /// contiguous run to batch; every kernel shares this loop.
    #[inline]
    fn find_star_in_row(&self, mask: &MaskMatrix, row: usize) -> Option<usize> {
        find_in_row(mask, row, Mark::Starred)
    }

    /// Column of the first prime in row `row`.
    #[inline]
    fn find_prime_in_row(&self, mask: &MaskMatrix, row: usize) -> Option<usize> {
        find_in_row(mask, row, Mark::Primed)
    }
}

#[inline]
fn find_in_row(mask: &MaskMatrix, row: usize, mark: Mark) -> Option<usize> {
    let raw = mark.as_raw();
    let nrows = mask.nrows();
    mask.as_slice()
        .iter()
        .skip(row)
        .step_by(nrows.max(1))
        .position(|&m| m == raw)
}
