//! Rectangular linear assignment with batched scan kernels.
//!
//! Given an `n x m` cost matrix with `n <= m`, pick one distinct column for
//! every row so that the summed cost is minimal. The solver is the classic
//! Kuhn-Munkres (Hungarian) method; every bulk scan over the working matrix
//! runs through a [`ScanKernel`](simd::ScanKernel) that either walks cells
//! one at a time or processes a full SIMD register of cells per step.
//!
//! # Quick Start
//!
//! ## Function-based API
//!
//! ```
//! use simd_munkres::find_assignments;
//!
//! // 3 agents, 4 tasks, row-major
//! let costs = [
//!     71, 78, 13, 45,
//!     37, 7, 7, 3,
//!     83, 97, 72, 28,
//! ];
//! let assignment = find_assignments(&costs, 3, 4).unwrap();
//! assert_eq!(assignment, vec![2, 1, 3]); // 13 + 7 + 28
//! ```
//!
//! ## Builder API
//!
//! ```
//! use simd_munkres::{CostRef, Munkres, ScanStrategy};
//!
//! let data = [78.0f64, 80.0, 42.0, 73.0];
//! let costs = CostRef::from_slice(&data, 2, 2).unwrap();
//!
//! let (assignment, stats) = Munkres::new()
//!     .strategy(ScanStrategy::Batched)
//!     .solve_with_stats(costs)
//!     .unwrap();
//! assert_eq!(assignment.columns(), &[1, 0]);
//! assert_eq!(assignment.total_cost(costs), 122.0);
//! assert!(stats.cover_passes >= 1);
//!
//! let best = Munkres::new().maximize().solve(costs).unwrap();
//! assert_eq!(best.columns(), &[0, 1]);
//! ```
//!
//! # Non-finite costs
//!
//! `+inf` and NaN are treated as the largest finite cost and `-inf` as the
//! smallest, so they are avoided or preferred but never break the solver.
//! Internally all costs are held in `f32`.
//!
//! # Performance
//!
//! The batched kernels use the portable [`wide`] vectors, which compile to
//! SSE/AVX on x86-64 and NEON on ARM:
//!
//! ```
//! use simd_munkres::Backend;
//!
//! println!("Using: {}", Backend::current().description());
//! ```

pub mod core;
pub mod error;
pub mod mat;
pub mod simd;
pub mod types;

mod api;
mod assignment;
mod backend;

// Public API
pub use api::{find_assignments, find_assignments_rows, Munkres};
pub use assignment::Assignment;
pub use backend::{version_info, Backend, ScanStrategy};
pub use error::{AssignmentError, Result};

// Re-export commonly used types at crate root
pub use core::{Objective, SolveStats};
pub use mat::{CostMatrix, CostRef, Mark, MaskMatrix, WorkMatrix};
pub use simd::{simd_level, SimdLevel};
pub use types::CostScalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        find_assignments, find_assignments_rows, Assignment, AssignmentError, Backend,
        CostMatrix, CostRef, CostScalar, Munkres, Objective, ScanStrategy, SolveStats,
    };
}
