use crate::assignment::Assignment;
use crate::backend::ScanStrategy;
use crate::core::{Objective, SolveStats};
use crate::error::Result;
use crate::mat::{CostMatrix, CostRef};
use crate::simd::solve_dispatch;
use crate::types::CostScalar;

/// Solve an assignment problem given row-major costs.
///
/// # Arguments
/// - `costs`: cost matrix data in row-major order
/// - `rows`: number of rows (agents)
/// - `cols`: number of columns (tasks), at least `rows`
///
/// # Returns
/// For each row, the column assigned to it. Columns are distinct and the
/// summed cost is minimal.
///
/// # Errors
/// [`AssignmentError::AbsentInput`], [`AssignmentError::InvalidShape`] or
/// [`AssignmentError::DimensionMismatch`] for bad input, detected before any
/// work starts.
///
/// # Example
///
/// ```
/// use simd_munkres::find_assignments;
///
/// let costs = [14.0, 15.0, 80.0, 36.0]; // 2x2
/// assert_eq!(find_assignments(&costs, 2, 2).unwrap(), vec![0, 1]);
/// ```
///
/// [`AssignmentError::AbsentInput`]: crate::AssignmentError::AbsentInput
/// [`AssignmentError::InvalidShape`]: crate::AssignmentError::InvalidShape
/// [`AssignmentError::DimensionMismatch`]: crate::AssignmentError::DimensionMismatch
pub fn find_assignments<T: CostScalar>(costs: &[T], rows: usize, cols: usize) -> Result<Vec<usize>> {
    let costs = CostRef::from_slice(costs, rows, cols)?;
    Munkres::new().solve(costs).map(Assignment::into_vec)
}

/// Solve an assignment problem given nested rows.
///
/// ```
/// use simd_munkres::find_assignments_rows;
///
/// let costs = vec![
///     vec![71, 78, 13, 45],
///     vec![37, 7, 7, 3],
///     vec![83, 97, 72, 28],
/// ];
/// assert_eq!(find_assignments_rows(&costs).unwrap(), vec![2, 1, 3]);
/// ```
pub fn find_assignments_rows<T: CostScalar>(rows: &[Vec<T>]) -> Result<Vec<usize>> {
    let costs = CostMatrix::from_rows(rows)?;
    Munkres::new().solve(costs.as_ref()).map(Assignment::into_vec)
}

/// Builder for configuring the solver.
///
/// # Example
///
/// ```
/// use simd_munkres::{CostRef, Munkres, ScanStrategy};
///
/// let data = [80.0f32, 7.0, 93.0, 23.0, 38.0, 56.0, 79.0, 62.0, 89.0];
/// let costs = CostRef::from_slice(&data, 3, 3).unwrap();
///
/// let cheapest = Munkres::new()
///     .strategy(ScanStrategy::Scalar)
///     .solve(costs)
///     .unwrap();
/// assert_eq!(cheapest.columns(), &[1, 0, 2]);
/// assert_eq!(cheapest.total_cost(costs), 119.0);
///
/// let richest = Munkres::new().maximize().solve(costs).unwrap();
/// assert_eq!(richest.columns(), &[2, 1, 0]);
/// assert_eq!(richest.total_cost(costs), 210.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Munkres {
    strategy: ScanStrategy,
    objective: Objective,
}

impl Munkres {
    /// Create a solver using [`ScanStrategy::Auto`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the scan backend.
    pub fn strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Choose whether to minimize cost or maximize value.
    pub fn objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Shorthand for `objective(Objective::Maximize)`.
    pub fn maximize(self) -> Self {
        self.objective(Objective::Maximize)
    }

    /// The configured strategy.
    pub fn scan_strategy(&self) -> ScanStrategy {
        self.strategy
    }

    /// Solve for an optimal assignment under the configured objective.
    pub fn solve<T: CostScalar>(&self, costs: CostRef<'_, T>) -> Result<Assignment> {
        self.solve_with_stats(costs).map(|(assignment, _)| assignment)
    }

    /// Solve and also return step counters.
    pub fn solve_with_stats<T: CostScalar>(
        &self,
        costs: CostRef<'_, T>,
    ) -> Result<(Assignment, SolveStats)> {
        let (columns, stats) = solve_dispatch(self.strategy.backend(), costs, self.objective)?;
        Ok((Assignment::new(columns), stats))
    }
}
