use crate::backend::Backend;
use crate::core::{Engine, Objective, SolveStats};
use crate::error::Result;
use crate::mat::CostRef;
use crate::types::CostScalar;

use super::kernels::{LaneKernel, ScalarKernel};

/// Run the solver with the kernel selected by `backend`.
pub fn solve_dispatch<T: CostScalar>(
    backend: Backend,
    costs: CostRef<'_, T>,
    objective: Objective,
) -> Result<(Vec<usize>, SolveStats)> {
    match backend {
        Backend::Batched => Engine::new(&LaneKernel, costs, objective).run(),
        Backend::Scalar => Engine::new(&ScalarKernel, costs, objective).run(),
    }
}
