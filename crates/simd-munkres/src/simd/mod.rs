//! Bulk scan kernels and runtime selection.
//!
//! The state machine is generic over [`ScanKernel`]; `dispatch` picks the
//! scalar or lane-batched kernel for a given [`Backend`](crate::Backend).

mod detect;
pub mod dispatch;
pub mod kernels;

pub use detect::{simd_level, SimdLevel};
pub use dispatch::solve_dispatch;
pub use kernels::{LaneKernel, ScalarKernel, ScanKernel};
