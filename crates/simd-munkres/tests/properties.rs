use proptest::prelude::*;

use simd_munkres::core::{normalize, reduce_rows, Coverage, Objective};
use simd_munkres::simd::{LaneKernel, ScalarKernel, ScanKernel};
use simd_munkres::{CostRef, Mark, MaskMatrix, Munkres, ScanStrategy, WorkMatrix};

/// Shape `(rows, cols)` with `1 <= rows <= max_rows` and
/// `rows <= cols <= rows + max_extra`.
fn arb_shape(max_rows: usize, max_extra: usize) -> impl Strategy<Value = (usize, usize)> {
    (1..=max_rows).prop_flat_map(move |n| (Just(n), n..=n + max_extra))
}

fn arb_costs(
    max_rows: usize,
    max_extra: usize,
    max_cost: u32,
) -> impl Strategy<Value = (usize, usize, Vec<u32>)> {
    arb_shape(max_rows, max_extra).prop_flat_map(move |(n, m)| {
        (Just(n), Just(m), proptest::collection::vec(0..max_cost, n * m))
    })
}

/// Minimum total over every injective row-to-column map.
fn brute_force_min(data: &[u32], nrows: usize, ncols: usize) -> u64 {
    fn go(data: &[u32], ncols: usize, row: usize, nrows: usize, used: &mut [bool]) -> u64 {
        if row == nrows {
            return 0;
        }
        let mut best = u64::MAX;
        for col in 0..ncols {
            if used[col] {
                continue;
            }
            used[col] = true;
            let rest = go(data, ncols, row + 1, nrows, used);
            used[col] = false;
            if rest != u64::MAX {
                best = best.min(data[row * ncols + col] as u64 + rest);
            }
        }
        best
    }
    go(data, ncols, 0, nrows, &mut vec![false; ncols])
}

fn is_valid(assignment: &[usize], nrows: usize, ncols: usize) -> bool {
    let mut seen = vec![false; ncols];
    assignment.len() == nrows
        && assignment.iter().all(|&c| {
            let fresh = c < ncols && !seen[c];
            if fresh {
                seen[c] = true;
            }
            fresh
        })
}

fn arb_kernel_state() -> impl Strategy<Value = (WorkMatrix, MaskMatrix, Coverage)> {
    (1usize..40, 1usize..6).prop_flat_map(|(n, m)| {
        (
            proptest::collection::vec(
                prop_oneof![(0i8..6).prop_map(f32::from), -50.0f32..50.0],
                n * m,
            ),
            proptest::collection::vec(0u8..3, n * m),
            proptest::collection::vec(any::<bool>(), n),
            proptest::collection::vec(any::<bool>(), m),
        )
            .prop_map(move |(values, marks, rows, cols)| {
                let costs = WorkMatrix::from_col_major(values, n, m);
                let mut mask = MaskMatrix::new(n, m);
                for (i, &raw) in marks.iter().enumerate() {
                    let mark = match raw {
                        0 => Mark::None,
                        1 => Mark::Starred,
                        _ => Mark::Primed,
                    };
                    mask.set(i % n, i / n, mark);
                }
                let mut cover = Coverage::new(n, m);
                for (row, &covered) in rows.iter().enumerate() {
                    if covered {
                        cover.cover_row(row);
                    }
                }
                for (col, &covered) in cols.iter().enumerate() {
                    if covered {
                        cover.cover_col(col);
                    }
                }
                (costs, mask, cover)
            })
    })
}

proptest! {
    #[test]
    fn assignment_is_valid(
        (n, m, data) in arb_shape(12, 4).prop_flat_map(|(n, m)| {
            (Just(n), Just(m), proptest::collection::vec(-1.0e6f64..1.0e6, n * m))
        })
    ) {
        let assignment = simd_munkres::find_assignments(&data, n, m).unwrap();
        prop_assert!(is_valid(&assignment, n, m), "invalid assignment {:?}", assignment);
    }

    #[test]
    fn assignment_is_optimal(
        (n, m, data) in (1usize..=5).prop_flat_map(|n| (Just(n), n..=5)).prop_flat_map(|(n, m)| {
            (Just(n), Just(m), proptest::collection::vec(0u32..100, n * m))
        })
    ) {
        let assignment = simd_munkres::find_assignments(&data, n, m).unwrap();
        let total: u64 = assignment
            .iter()
            .enumerate()
            .map(|(r, &c)| data[r * m + c] as u64)
            .sum();
        prop_assert_eq!(total, brute_force_min(&data, n, m));
    }

    #[test]
    fn strategies_agree((n, m, data) in arb_costs(40, 6, 20)) {
        let costs = CostRef::from_slice(&data, n, m).unwrap();
        let scalar = Munkres::new().strategy(ScanStrategy::Scalar).solve(costs).unwrap();
        let batched = Munkres::new().strategy(ScanStrategy::Batched).solve(costs).unwrap();
        prop_assert_eq!(scalar, batched);
    }

    #[test]
    fn non_finite_costs_avoided(
        (n, m, data, perm, blocked) in arb_shape(5, 2).prop_flat_map(|(n, m)| {
            (
                Just(n),
                Just(m),
                proptest::collection::vec(0.0f64..100.0, n * m),
                Just((0..m).collect::<Vec<usize>>()).prop_shuffle(),
                proptest::collection::vec(0u8..3, n * m),
            )
        })
    ) {
        // Row r keeps column perm[r] finite, so a finite assignment always exists.
        let mut data = data;
        for (i, &kind) in blocked.iter().enumerate() {
            let (row, col) = (i / m, i % m);
            if col == perm[row] {
                continue;
            }
            match kind {
                1 => data[i] = f64::INFINITY,
                2 => data[i] = f64::NAN,
                _ => {}
            }
        }
        for solver in [ScanStrategy::Scalar, ScanStrategy::Batched] {
            let costs = CostRef::from_slice(&data, n, m).unwrap();
            let assignment = Munkres::new().strategy(solver).solve(costs).unwrap();
            prop_assert!(is_valid(assignment.columns(), n, m));
            for (row, col) in assignment.pairs() {
                prop_assert!(
                    data[row * m + col].is_finite(),
                    "row {} took a non-finite cost",
                    row
                );
            }
        }
    }

    #[test]
    fn normalization_is_idempotent(
        (n, m, data) in arb_shape(8, 4).prop_flat_map(|(n, m)| {
            (Just(n), Just(m), proptest::collection::vec(-1.0e3f32..1.0e3, n * m))
        })
    ) {
        let costs = CostRef::from_slice(&data, n, m).unwrap();
        let once = normalize(costs, Objective::Minimize);
        let mut twice = once.clone();
        reduce_rows(&mut twice);
        prop_assert_eq!(&once, &twice);
        for row in 0..n {
            prop_assert!((0..m).any(|col| once[(row, col)] == 0.0));
            prop_assert!((0..m).all(|col| once[(row, col)] >= 0.0));
        }
    }

    #[test]
    fn kernels_agree((costs, mask, cover) in arb_kernel_state()) {
        prop_assert_eq!(
            LaneKernel.find_uncovered_zero(&costs, &cover),
            ScalarKernel.find_uncovered_zero(&costs, &cover)
        );
        prop_assert_eq!(
            LaneKernel.min_uncovered(&costs, &cover),
            ScalarKernel.min_uncovered(&costs, &cover)
        );
        for col in 0..mask.ncols() {
            prop_assert_eq!(
                LaneKernel.find_star_in_column(&mask, col),
                ScalarKernel.find_star_in_column(&mask, col)
            );
        }

        let mut lane_cover = cover.clone();
        let mut scalar_cover = cover.clone();
        prop_assert_eq!(
            LaneKernel.cover_starred_columns(&mask, &mut lane_cover),
            ScalarKernel.cover_starred_columns(&mask, &mut scalar_cover)
        );
        prop_assert_eq!(lane_cover.cols(), scalar_cover.cols());

        let mut lane_mask = mask.clone();
        let mut scalar_mask = mask.clone();
        LaneKernel.clear_primes(&mut lane_mask);
        ScalarKernel.clear_primes(&mut scalar_mask);
        prop_assert_eq!(lane_mask.as_slice(), scalar_mask.as_slice());
        prop_assert_eq!(lane_mask.count(Mark::Primed), 0);
    }
}
