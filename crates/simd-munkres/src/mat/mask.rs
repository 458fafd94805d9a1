//! Star/prime mask over the working matrix.

/// State of one mask cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i8)]
pub enum Mark {
    /// Unmarked.
    #[default]
    None = 0,
    /// Part of the current independent zero set.
    Starred = 1,
    /// Temporarily flagged while growing an augmenting path.
    Primed = 2,
}

impl Mark {
    /// Raw byte stored in the mask buffer.
    #[inline(always)]
    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    /// Decode a raw mask byte.
    #[inline(always)]
    pub const fn from_raw(raw: i8) -> Self {
        match raw {
            1 => Mark::Starred,
            2 => Mark::Primed,
            _ => Mark::None,
        }
    }
}

/// Tri-state mask in the same column-major layout as [`WorkMatrix`].
///
/// Cells are stored as raw bytes so the lane kernels can compare
/// sixteen of them at a time.
///
/// [`WorkMatrix`]: super::WorkMatrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskMatrix {
    data: Vec<i8>,
    nrows: usize,
    ncols: usize,
}

impl MaskMatrix {
    /// Create an all-[`Mark::None`] mask.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![Mark::None.as_raw(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Mark {
        Mark::from_raw(self.data[col * self.nrows + row])
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.data[col * self.nrows + row] = mark.as_raw();
    }

    /// Raw cells of column `col`.
    #[inline]
    pub fn column(&self, col: usize) -> &[i8] {
        let start = col * self.nrows;
        &self.data[start..start + self.nrows]
    }

    /// Every raw cell, column by column.
    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i8] {
        &mut self.data
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        let raw = mark.as_raw();
        self.data.iter().filter(|&&m| m == raw).count()
    }
}
