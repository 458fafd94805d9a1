//! Matrix types for assignment problems.
//!
//! - [`CostRef<'a, T>`]: validated row-major view over caller costs
//! - [`CostMatrix<T>`]: owned row-major costs
//! - [`WorkMatrix`]: column-major `f32` working copy mutated by the solver
//! - [`MaskMatrix`]: star/prime marks in the same layout as [`WorkMatrix`]
//!
//! # Example
//!
//! ```
//! use simd_munkres::{CostMatrix, CostRef};
//!
//! let data = [14.0f32, 15.0, 80.0, 36.0];
//! let view = CostRef::from_slice(&data, 2, 2).unwrap();
//! assert_eq!(view.get(1, 1), 36.0);
//!
//! let owned = CostMatrix::from_rows(&[vec![1, 2, 3]]).unwrap();
//! assert_eq!(owned.as_ref().row(0), &[1, 2, 3]);
//! ```

mod mask;
mod owned;
mod ref_;
mod work;

pub use mask::{Mark, MaskMatrix};
pub use owned::CostMatrix;
pub use ref_::CostRef;
pub use work::WorkMatrix;
