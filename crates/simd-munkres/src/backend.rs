use crate::simd::{simd_level, SimdLevel};

/// Scan implementation used by a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Element-by-element scans.
    Scalar,
    /// Lane-batched scans with scalar remainders.
    Batched,
}

impl Backend {
    /// The backend `ScanStrategy::Auto` resolves to on this CPU.
    pub fn current() -> Self {
        if simd_level().is_vectorized() {
            Backend::Batched
        } else {
            Backend::Scalar
        }
    }

    /// Human-readable description including the detected SIMD level.
    pub fn description(self) -> String {
        self.describe(simd_level())
    }

    fn describe(self, level: SimdLevel) -> String {
        let isa = match level {
            SimdLevel::Scalar => "",
            SimdLevel::Sse2 => "x86-64 SSE2",
            SimdLevel::Avx2 => "x86-64 AVX2",
            SimdLevel::Avx512 => "x86-64 AVX-512",
            SimdLevel::Neon => "ARM NEON",
        };
        match (self, level) {
            (Backend::Scalar, _) => "Scalar scans".to_string(),
            (Backend::Batched, SimdLevel::Scalar) => "Batched scans (no native SIMD)".to_string(),
            (Backend::Batched, _) => format!(
                "Batched scans, {} ({}-bit, {} f32 lanes per register)",
                isa,
                level.register_bits(),
                level.cost_lanes()
            ),
        }
    }
}

/// How the solver chooses its scan backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStrategy {
    /// Batched when the CPU has a vector unit, scalar otherwise.
    #[default]
    Auto,
    /// Always scalar.
    Scalar,
    /// Always batched.
    Batched,
}

impl ScanStrategy {
    /// Resolve to a concrete backend.
    pub fn backend(self) -> Backend {
        match self {
            ScanStrategy::Auto => Backend::current(),
            ScanStrategy::Scalar => Backend::Scalar,
            ScanStrategy::Batched => Backend::Batched,
        }
    }
}

/// Get information about the library configuration.
pub fn version_info() -> String {
    format!(
        "simd-munkres v{}\nBackend: {}\nSIMD Level: {:?}",
        env!("CARGO_PKG_VERSION"),
        Backend::current().description(),
        simd_level()
    )
}
