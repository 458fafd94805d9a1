//! Core Kuhn-Munkres algorithm.
//!
//! [`normalize`] builds the reduced working matrix, and [`Engine`] drives the
//! four-step state machine over it using a [`ScanKernel`] for every bulk
//! scan.
//!
//! [`ScanKernel`]: crate::simd::ScanKernel

mod cover;
mod engine;
mod normalize;
mod path;
mod stats;

pub use cover::{Coverage, COVERED_ROW, OPEN_ROW};
pub use engine::Engine;
pub use normalize::{neutralize, normalize, reduce_rows, Objective};
pub use path::{Location, PathBuffer};
pub use stats::SolveStats;
