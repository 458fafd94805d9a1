//! Cost normalization: layout change, non-finite substitution, row reduction.

use crate::mat::{CostRef, WorkMatrix};
use crate::types::CostScalar;

/// Map a working-precision cost onto a finite value.
///
/// `-inf` becomes the most negative finite `f32` so it still dominates as
/// cheapest; `+inf` and NaN become the most positive finite `f32`.
#[inline(always)]
pub fn neutralize(value: f32) -> f32 {
    if value.is_nan() || value == f32::INFINITY {
        f32::MAX
    } else if value == f32::NEG_INFINITY {
        f32::MIN
    } else {
        value
    }
}

/// Whether the solver looks for the cheapest or the most valuable assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    /// Minimize the summed cost.
    #[default]
    Minimize,
    /// Maximize the summed value. Costs are negated before neutralization,
    /// so `+inf` becomes the most attractive entry and NaN the least.
    Maximize,
}

/// Copy caller costs into a reduced column-major working matrix.
pub fn normalize<T: CostScalar>(costs: CostRef<'_, T>, objective: Objective) -> WorkMatrix {
    let nrows = costs.nrows();
    let ncols = costs.ncols();
    let mut work = WorkMatrix::zeros(nrows, ncols);
    for row in 0..nrows {
        for (col, &value) in costs.row(row).iter().enumerate() {
            let value = match objective {
                Objective::Minimize => value.to_working(),
                Objective::Maximize => -value.to_working(),
            };
            work[(row, col)] = neutralize(value);
        }
    }
    reduce_rows(&mut work);
    work
}

/// Subtract each row's minimum from the row.
///
/// Differences saturate at `f32::MAX`, so a row holding both extremes
/// stays finite. A matrix whose rows already have minimum zero is left
/// unchanged.
pub fn reduce_rows(work: &mut WorkMatrix) {
    let nrows = work.nrows();
    let ncols = work.ncols();
    if ncols == 0 {
        return;
    }
    let mut row_min = vec![f32::MAX; nrows];
    for col in 0..ncols {
        for (min, &value) in row_min.iter_mut().zip(work.column(col)) {
            *min = min.min(value);
        }
    }
    for col in 0..ncols {
        for (value, &min) in work.column_mut(col).iter_mut().zip(&row_min) {
            *value = (*value - min).min(f32::MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutralize() {
        assert_eq!(neutralize(f32::INFINITY), f32::MAX);
        assert_eq!(neutralize(f32::NAN), f32::MAX);
        assert_eq!(neutralize(f32::NEG_INFINITY), f32::MIN);
        assert_eq!(neutralize(-3.5), -3.5);
    }

    #[test]
    fn test_normalize_reduces_rows() {
        let data = [14.0f64, 15.0, 80.0, 36.0];
        let costs = CostRef::from_slice(&data, 2, 2).unwrap();
        let work = normalize(costs, Objective::Minimize);
        assert_eq!(work[(0, 0)], 0.0);
        assert_eq!(work[(0, 1)], 1.0);
        assert_eq!(work[(1, 0)], 44.0);
        assert_eq!(work[(1, 1)], 0.0);
    }

    #[test]
    fn test_normalize_non_finite() {
        let data = [f64::NEG_INFINITY, 5.0, f64::NAN, 1.0, f64::INFINITY, 3.0];
        let costs = CostRef::from_slice(&data, 2, 3).unwrap();
        let work = normalize(costs, Objective::Minimize);

        // Row 0: [MIN, 5, MAX] - MIN, saturating.
        assert_eq!(work[(0, 0)], 0.0);
        assert_eq!(work[(0, 1)], 5.0 - f32::MIN);
        assert_eq!(work[(0, 2)], f32::MAX);

        // Row 1: [1, MAX, 3] - 1
        assert_eq!(work[(1, 0)], 0.0);
        assert_eq!(work[(1, 1)], f32::MAX - 1.0);
        assert_eq!(work[(1, 2)], 2.0);

        assert!(work.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_normalize_all_infinite_row() {
        let data = [f32::INFINITY, f32::INFINITY];
        let costs = CostRef::from_slice(&data, 1, 2).unwrap();
        let work = normalize(costs, Objective::Minimize);
        assert_eq!(work.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_normalize_out_of_range_f64() {
        let data = [1e300f64, 2.0];
        let costs = CostRef::from_slice(&data, 1, 2).unwrap();
        let work = normalize(costs, Objective::Minimize);
        assert_eq!(work[(0, 0)], f32::MAX - 2.0);
        assert_eq!(work[(0, 1)], 0.0);
    }

    #[test]
    fn test_normalize_maximize_negates() {
        let data = [14.0f64, 15.0, f64::INFINITY, 36.0];
        let costs = CostRef::from_slice(&data, 2, 2).unwrap();
        let work = normalize(costs, Objective::Maximize);
        assert_eq!(work[(0, 0)], 1.0);
        assert_eq!(work[(0, 1)], 0.0);
        // +inf is the best value: it becomes the row minimum
        assert_eq!(work[(1, 0)], 0.0);
        assert_eq!(work[(1, 1)], f32::MAX);
    }

    #[test]
    fn test_reduce_rows_idempotent() {
        let data = [3, 9, 4, 7, 2, 8, 6, 6, 5];
        let costs = CostRef::from_slice(&data, 3, 3).unwrap();
        let once = normalize(costs, Objective::Minimize);
        let mut twice = once.clone();
        reduce_rows(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_row_has_zero() {
        let data = [7.5f32, 2.25, 9.0, -4.0, -1.0, 0.5];
        let costs = CostRef::from_slice(&data, 2, 3).unwrap();
        let work = normalize(costs, Objective::Minimize);
        for row in 0..2 {
            assert!((0..3).any(|col| work[(row, col)] == 0.0));
            assert!((0..3).all(|col| work[(row, col)] >= 0.0));
        }
    }
}
