//! Cost value types.

mod scalar;

pub use scalar::CostScalar;
