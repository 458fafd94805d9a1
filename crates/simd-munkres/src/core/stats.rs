/// Counters collected over one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Stars placed by the greedy initial pass.
    pub initial_stars: usize,
    /// Visits to the cover-starred-columns step.
    pub cover_passes: usize,
    /// Zeros primed while searching for augmenting paths.
    pub primes: usize,
    /// Augmenting paths applied.
    pub augmentations: usize,
    /// Cost reductions over uncovered cells.
    pub reductions: usize,
    /// Longest augmenting path seen, in cells.
    pub longest_path: usize,
    /// Input costs that were infinite or NaN and got substituted.
    pub non_finite_costs: usize,
}
