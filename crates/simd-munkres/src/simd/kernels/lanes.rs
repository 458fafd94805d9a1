use wide::*;

use super::ScanKernel;
use crate::core::{Coverage, Location};
use crate::mat::{Mark, MaskMatrix, WorkMatrix};

/// Costs per `f32x8` lane group.
pub const COST_LANES: usize = 8;

/// Mask cells per `i8x16` lane group.
pub const MASK_LANES: usize = 16;

/// Lane-batched scan kernel.
///
/// Cost scans work on `f32x8` groups, mask scans on `i8x16` groups. Lane
/// predicates are reduced to a bitmask with `move_mask`, and the lowest set
/// bit gives the first matching row, which keeps the scan order identical
/// to [`ScalarKernel`](super::ScalarKernel).
#[derive(Default, Clone, Copy, Debug)]
pub struct LaneKernel;

#[inline(always)]
fn load_costs(chunk: &[f32]) -> f32x8 {
    let mut lanes = [0.0f32; COST_LANES];
    lanes.copy_from_slice(chunk);
    f32x8::from(lanes)
}

#[inline(always)]
fn load_marks(chunk: &[i8]) -> i8x16 {
    let mut lanes = [0i8; MASK_LANES];
    lanes.copy_from_slice(chunk);
    i8x16::new(lanes)
}

/// Bitmask of lanes in `chunk` equal to `mark`.
#[inline(always)]
fn mark_bits(chunk: &[i8], mark: i8x16) -> u32 {
    load_marks(chunk).cmp_eq(mark).move_mask() as u32
}

#[inline]
fn first_mark_in(column: &[i8], mark: Mark) -> Option<usize> {
    let splat = i8x16::splat(mark.as_raw());
    let chunks = column.chunks_exact(MASK_LANES);
    let tail = chunks.remainder();
    let tail_start = column.len() - tail.len();

    for (i, chunk) in chunks.enumerate() {
        let bits = mark_bits(chunk, splat);
        if bits != 0 {
            return Some(i * MASK_LANES + bits.trailing_zeros() as usize);
        }
    }
    let raw = mark.as_raw();
    tail.iter()
        .position(|&m| m == raw)
        .map(|offset| tail_start + offset)
}

impl ScanKernel for LaneKernel {
    const NAME: &'static str = "lanes";

    fn find_uncovered_zero(&self, costs: &WorkMatrix, cover: &Coverage) -> Option<Location> {
        let sentinel = cover.row_sentinel();
        let rows = cover.rows();
        let zero = f32x8::splat(0.0);

        for col in 0..costs.ncols() {
            if cover.is_col_covered(col) {
                continue;
            }
            let column = costs.column(col);
            let cost_chunks = column.chunks_exact(COST_LANES);
            let tail_start = column.len() - cost_chunks.remainder().len();

            for (i, (c, s)) in cost_chunks
                .zip(sentinel.chunks_exact(COST_LANES))
                .enumerate()
            {
                // covered rows carry f32::MAX and can never compare <= 0
                let hits = load_costs(c).max(load_costs(s)).cmp_le(zero).move_mask() as u32;
                if hits != 0 {
                    let row = i * COST_LANES + hits.trailing_zeros() as usize;
                    return Some(Location::new(row, col));
                }
            }
            for row in tail_start..column.len() {
                if column[row] <= 0.0 && !rows[row] {
                    return Some(Location::new(row, col));
                }
            }
        }
        None
    }

    fn cover_starred_columns(&self, mask: &MaskMatrix, cover: &mut Coverage) -> usize {
        let starred = i8x16::splat(Mark::Starred.as_raw());
        let raw = Mark::Starred.as_raw();
        for col in 0..mask.ncols() {
            let column = mask.column(col);
            let chunks = column.chunks_exact(MASK_LANES);
            let tail = chunks.remainder();
            let has_star = chunks
                .into_iter()
                .any(|chunk| mark_bits(chunk, starred) != 0)
                || tail.iter().any(|&m| m == raw);
            if has_star {
                cover.cover_col(col);
            }
        }
        cover.covered_cols()
    }

    fn find_star_in_column(&self, mask: &MaskMatrix, col: usize) -> Option<usize> {
        first_mark_in(mask.column(col), Mark::Starred)
    }

    fn clear_primes(&self, mask: &mut MaskMatrix) {
        let primed = i8x16::splat(Mark::Primed.as_raw());
        let raw = Mark::Primed.as_raw();
        let none = Mark::None.as_raw();

        let mut chunks = mask.as_mut_slice().chunks_exact_mut(MASK_LANES);
        for chunk in &mut chunks {
            let mut bits = mark_bits(chunk, primed);
            while bits != 0 {
                chunk[bits.trailing_zeros() as usize] = none;
                bits &= bits - 1;
            }
        }
        for m in chunks.into_remainder() {
            if *m == raw {
                *m = none;
            }
        }
    }

    fn min_uncovered(&self, costs: &WorkMatrix, cover: &Coverage) -> Option<f32> {
        if !cover.has_uncovered_cell() {
            return None;
        }
        let sentinel = cover.row_sentinel();
        let rows = cover.rows();
        let mut acc = f32x8::splat(f32::MAX);
        let mut tail_min = f32::MAX;

        for col in 0..costs.ncols() {
            if cover.is_col_covered(col) {
                continue;
            }
            let column = costs.column(col);
            let cost_chunks = column.chunks_exact(COST_LANES);
            let tail = cost_chunks.remainder();
            let tail_start = column.len() - tail.len();

            for (c, s) in cost_chunks.zip(sentinel.chunks_exact(COST_LANES)) {
                acc = acc.min(load_costs(c).max(load_costs(s)));
            }
            for (&cost, &covered) in tail.iter().zip(&rows[tail_start..]) {
                if !covered {
                    tail_min = tail_min.min(cost);
                }
            }
        }

        let lanes: [f32; COST_LANES] = acc.into();
        Some(lanes.iter().fold(tail_min, |m, &v| m.min(v)))
    }
}
