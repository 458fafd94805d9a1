use std::fmt::{Debug, Display};

/// Trait for scalar types accepted as assignment costs.
///
/// Costs are narrowed to `f32` for the working matrix. Values outside the
/// `f32` range become infinite and are then neutralized like any other
/// non-finite cost.
pub trait CostScalar:
    Copy + Clone + Send + Sync + Debug + Display + PartialOrd + 'static + Sized
{
    /// Narrow to the working precision.
    fn to_working(self) -> f32;

    /// Widen to `f64` for reporting totals on the caller's costs.
    fn to_f64(self) -> f64;

    /// Whether the value is neither infinite nor NaN.
    fn is_finite_cost(self) -> bool;
}

macro_rules! impl_cost_scalar_float {
    ($($t:ty),*) => {
        $(
            impl CostScalar for $t {
                #[inline(always)]
                fn to_working(self) -> f32 {
                    self as f32
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                fn is_finite_cost(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

macro_rules! impl_cost_scalar_int {
    ($($t:ty),*) => {
        $(
            impl CostScalar for $t {
                #[inline(always)]
                fn to_working(self) -> f32 {
                    self as f32
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                fn is_finite_cost(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_cost_scalar_float!(f32, f64);
impl_cost_scalar_int!(i32, i64, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_out_of_range_narrows_to_infinity() {
        assert_eq!(1e300f64.to_working(), f32::INFINITY);
        assert_eq!((-1e300f64).to_working(), f32::NEG_INFINITY);
        assert!(1e300f64.is_finite_cost());
    }

    #[test]
    fn test_float_finiteness() {
        assert!(!f32::NAN.is_finite_cost());
        assert!(!f64::INFINITY.is_finite_cost());
        assert!(2.5f32.is_finite_cost());
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(42i32.to_working(), 42.0);
        assert_eq!((-7i64).to_f64(), -7.0);
        assert_eq!(9u32.to_working(), 9.0);
        assert!(i64::MAX.is_finite_cost());
    }
}
