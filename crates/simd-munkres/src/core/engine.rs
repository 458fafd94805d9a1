//! The Kuhn-Munkres state machine.

use log::{debug, trace};

use super::cover::Coverage;
use super::normalize::{normalize, Objective};
use super::path::{Location, PathBuffer};
use super::stats::SolveStats;
use crate::error::{AssignmentError, Result};
use crate::mat::{CostRef, Mark, MaskMatrix, WorkMatrix};
use crate::simd::ScanKernel;
use crate::types::CostScalar;

/// Next action of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Cover starred columns; stop once every row is assigned.
    CoverStarredColumns,
    /// Prime uncovered zeros until one opens an augmenting path.
    PrimeZeros,
    /// Flip stars and primes along the path starting at this prime.
    Augment(Location),
    /// Shift costs by the smallest uncovered value.
    ReduceCosts,
    Done,
}

/// Working state for one solve.
pub struct Engine<'k, K: ScanKernel> {
    kernel: &'k K,
    costs: WorkMatrix,
    mask: MaskMatrix,
    cover: Coverage,
    path: PathBuffer,
    stats: SolveStats,
}

impl<'k, K: ScanKernel> Engine<'k, K> {
    /// Normalize `costs` and allocate all working storage.
    pub fn new<T: CostScalar>(kernel: &'k K, costs: CostRef<'_, T>, objective: Objective) -> Self {
        let non_finite = costs
            .as_slice()
            .iter()
            .filter(|v| !v.is_finite_cost())
            .count();
        if non_finite > 0 {
            debug!("munkres: substituting {} non-finite costs", non_finite);
        }
        let mut engine = Self::from_work(kernel, normalize(costs, objective));
        engine.stats.non_finite_costs = non_finite;
        engine
    }

    /// Start from an already normalized working matrix.
    pub fn from_work(kernel: &'k K, costs: WorkMatrix) -> Self {
        let nrows = costs.nrows();
        let ncols = costs.ncols();
        Self {
            kernel,
            mask: MaskMatrix::new(nrows, ncols),
            cover: Coverage::new(nrows, ncols),
            path: PathBuffer::new(nrows, ncols),
            stats: SolveStats::default(),
            costs,
        }
    }

    /// Run to completion and return the column chosen for each row.
    pub fn run(mut self) -> Result<(Vec<usize>, SolveStats)> {
        debug!(
            "munkres: solving {}x{} with {} kernel",
            self.costs.nrows(),
            self.costs.ncols(),
            K::NAME
        );

        self.star_initial_zeros();

        let mut step = Step::CoverStarredColumns;
        loop {
            trace!("munkres: {:?}", step);
            step = match step {
                Step::CoverStarredColumns => self.cover_starred_columns(),
                Step::PrimeZeros => self.prime_zeros(),
                Step::Augment(start) => self.augment(start)?,
                Step::ReduceCosts => self.reduce_costs()?,
                Step::Done => break,
            };
        }

        let assignment = self.extract()?;
        debug!("munkres: finished, {:?}", self.stats);
        Ok((assignment, self.stats))
    }

    /// Greedily star independent zeros in row-major order.
    fn star_initial_zeros(&mut self) {
        for row in 0..self.costs.nrows() {
            for col in 0..self.costs.ncols() {
                if self.costs[(row, col)] <= 0.0 && !self.cover.is_col_covered(col) {
                    self.mask.set(row, col, Mark::Starred);
                    self.cover.cover_row(row);
                    self.cover.cover_col(col);
                    self.stats.initial_stars += 1;
                    break;
                }
            }
        }
        self.cover.clear();
    }

    fn cover_starred_columns(&mut self) -> Step {
        self.stats.cover_passes += 1;
        let covered = self.kernel.cover_starred_columns(&self.mask, &mut self.cover);
        if covered >= self.costs.nrows() {
            Step::Done
        } else {
            Step::PrimeZeros
        }
    }

    fn prime_zeros(&mut self) -> Step {
        loop {
            let Some(zero) = self.kernel.find_uncovered_zero(&self.costs, &self.cover) else {
                return Step::ReduceCosts;
            };
            self.mask.set(zero.row, zero.col, Mark::Primed);
            self.stats.primes += 1;

            match self.kernel.find_star_in_row(&self.mask, zero.row) {
                Some(star_col) => {
                    self.cover.cover_row(zero.row);
                    self.cover.uncover_col(star_col);
                }
                None => return Step::Augment(zero),
            }
        }
    }

    fn augment(&mut self, start: Location) -> Result<Step> {
        self.path.reset();
        self.path.push(start)?;

        let mut col = start.col;
        while let Some(star_row) = self.kernel.find_star_in_column(&self.mask, col) {
            self.path.push(Location::new(star_row, col))?;
            col = self
                .kernel
                .find_prime_in_row(&self.mask, star_row)
                .ok_or_else(|| {
                    AssignmentError::Internal(format!(
                        "row {} has a star on the path but no prime",
                        star_row
                    ))
                })?;
            self.path.push(Location::new(star_row, col))?;
        }

        for loc in self.path.as_slice() {
            let flipped = match self.mask.get(loc.row, loc.col) {
                Mark::Starred => Mark::None,
                Mark::Primed => Mark::Starred,
                Mark::None => {
                    return Err(AssignmentError::Internal(format!(
                        "unmarked cell {:?} on augmenting path",
                        loc
                    )))
                }
            };
            self.mask.set(loc.row, loc.col, flipped);
        }

        self.stats.augmentations += 1;
        self.stats.longest_path = self.stats.longest_path.max(self.path.len());
        self.cover.clear();
        self.kernel.clear_primes(&mut self.mask);
        Ok(Step::CoverStarredColumns)
    }

    fn reduce_costs(&mut self) -> Result<Step> {
        let min = self
            .kernel
            .min_uncovered(&self.costs, &self.cover)
            .ok_or_else(|| AssignmentError::Internal("no uncovered cell to reduce".into()))?;
        trace!("munkres: reducing uncovered costs by {}", min);
        self.stats.reductions += 1;

        let rows = self.cover.rows();
        for col in 0..self.costs.ncols() {
            let col_open = !self.cover.is_col_covered(col);
            for (cost, &row_covered) in self.costs.column_mut(col).iter_mut().zip(rows) {
                if row_covered {
                    *cost = (*cost + min).min(f32::MAX);
                }
                if col_open {
                    *cost -= min;
                }
            }
        }
        Ok(Step::PrimeZeros)
    }

    /// Read the starred column of every row.
    fn extract(&self) -> Result<Vec<usize>> {
        (0..self.costs.nrows())
            .map(|row| {
                self.kernel
                    .find_star_in_row(&self.mask, row)
                    .ok_or_else(|| {
                        AssignmentError::Internal(format!("row {} finished without a star", row))
                    })
            })
            .collect()
    }
}
