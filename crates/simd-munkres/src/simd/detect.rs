//! Runtime CPU capability probing for the scan kernels.

use std::sync::OnceLock;

/// Vector instruction set reported by the host CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdLevel {
    /// No vector unit worth using; scans run element by element.
    Scalar,
    /// 128-bit SSE2, baseline on x86-64.
    Sse2,
    /// 256-bit AVX2.
    Avx2,
    /// 512-bit AVX-512 foundation.
    Avx512,
    /// 128-bit ARM NEON.
    Neon,
}

impl SimdLevel {
    /// Probe the running CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx512f") {
                SimdLevel::Avx512
            } else if is_x86_feature_detected!("avx2") {
                SimdLevel::Avx2
            } else {
                SimdLevel::Sse2
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            SimdLevel::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdLevel::Scalar
        }
    }

    /// Whether lane-batched scans are expected to pay off.
    pub fn is_vectorized(self) -> bool {
        self != SimdLevel::Scalar
    }

    /// Native register width in bits.
    pub fn register_bits(self) -> usize {
        match self {
            SimdLevel::Scalar => 32,
            SimdLevel::Sse2 | SimdLevel::Neon => 128,
            SimdLevel::Avx2 => 256,
            SimdLevel::Avx512 => 512,
        }
    }

    /// Number of `f32` costs one native register holds.
    pub fn cost_lanes(self) -> usize {
        self.register_bits() / 32
    }
}

static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

/// The detected level, probed once per process.
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(SimdLevel::detect)
}
