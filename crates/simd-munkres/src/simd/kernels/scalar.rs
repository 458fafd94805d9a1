use super::ScanKernel;
use crate::core::{Coverage, Location};
use crate::mat::{Mark, MaskMatrix, WorkMatrix};

/// Element-by-element scan kernel.
#[derive(Default, Clone, Copy, Debug)]
pub struct ScalarKernel;

impl ScanKernel for ScalarKernel {
    const NAME: &'static str = "scalar";

    fn find_uncovered_zero(&self, costs: &WorkMatrix, cover: &Coverage) -> Option<Location> {
        for col in 0..costs.ncols() {
            if cover.is_col_covered(col) {
                continue;
            }
            let hit = costs
                .column(col)
                .iter()
                .zip(cover.rows())
                .position(|(&cost, &covered)| cost <= 0.0 && !covered);
            if let Some(row) = hit {
                return Some(Location::new(row, col));
            }
        }
        None
    }

    fn cover_starred_columns(&self, mask: &MaskMatrix, cover: &mut Coverage) -> usize {
        let starred = Mark::Starred.as_raw();
        for col in 0..mask.ncols() {
            if mask.column(col).iter().any(|&m| m == starred) {
                cover.cover_col(col);
            }
        }
        cover.covered_cols()
    }

    fn find_star_in_column(&self, mask: &MaskMatrix, col: usize) -> Option<usize> {
        let starred = Mark::Starred.as_raw();
        mask.column(col).iter().position(|&m| m == starred)
    }

    fn clear_primes(&self, mask: &mut MaskMatrix) {
        let primed = Mark::Primed.as_raw();
        for m in mask.as_mut_slice() {
            if *m == primed {
                *m = Mark::None.as_raw();
            }
        }
    }

    fn min_uncovered(&self, costs: &WorkMatrix, cover: &Coverage) -> Option<f32> {
        let mut min: Option<f32> = None;
        for col in 0..costs.ncols() {
            if cover.is_col_covered(col) {
                continue;
            }
            for (&cost, &covered) in costs.column(col).iter().zip(cover.rows()) {
                if !covered {
                    min = Some(min.map_or(cost, |m| m.min(cost)));
                }
            }
        }
        min
    }
}
