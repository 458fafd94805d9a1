//! Row and column coverage.

/// Row sentinel for an uncovered row. `max(cost, OPEN_ROW)` is `cost` for
/// every finite cost, negative ones included.
pub const OPEN_ROW: f32 = f32::MIN;

/// Row sentinel for a covered row. Larger than any cost that can still be
/// a zero or win the uncovered minimum.
pub const COVERED_ROW: f32 = f32::MAX;

/// Covered flags for rows and columns.
///
/// Alongside the row flags this keeps a per-row `f32` sentinel column
/// (`f32::MIN` open, `f32::MAX` covered). Lane kernels combine it with a cost
/// column through `max`, which excludes covered rows from both the zero
/// search and the minimum without branching.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    rows: Vec<bool>,
    cols: Vec<bool>,
    row_sentinel: Vec<f32>,
    covered_rows: usize,
    covered_cols: usize,
}

impl Coverage {
    /// Create with nothing covered.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            rows: vec![false; nrows],
            cols: vec![false; ncols],
            row_sentinel: vec![OPEN_ROW; nrows],
            covered_rows: 0,
            covered_cols: 0,
        }
    }

    #[inline]
    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows[row]
    }

    #[inline]
    pub fn is_col_covered(&self, col: usize) -> bool {
        self.cols[col]
    }

    #[inline]
    pub fn cover_row(&mut self, row: usize) {
        if !self.rows[row] {
            self.rows[row] = true;
            self.row_sentinel[row] = COVERED_ROW;
            self.covered_rows += 1;
        }
    }

    #[inline]
    pub fn cover_col(&mut self, col: usize) {
        if !self.cols[col] {
            self.cols[col] = true;
            self.covered_cols += 1;
        }
    }

    #[inline]
    pub fn uncover_col(&mut self, col: usize) {
        if self.cols[col] {
            self.cols[col] = false;
            self.covered_cols -= 1;
        }
    }

    /// Uncover every row and column.
    pub fn clear(&mut self) {
        self.rows.fill(false);
        self.cols.fill(false);
        self.row_sentinel.fill(OPEN_ROW);
        self.covered_rows = 0;
        self.covered_cols = 0;
    }

    /// Row flags.
    #[inline]
    pub fn rows(&self) -> &[bool] {
        &self.rows
    }

    /// Column flags.
    #[inline]
    pub fn cols(&self) -> &[bool] {
        &self.cols
    }

    /// Per-row sentinel column, see the type docs.
    #[inline]
    pub fn row_sentinel(&self) -> &[f32] {
        &self.row_sentinel
    }

    #[inline]
    pub fn covered_rows(&self) -> usize {
        self.covered_rows
    }

    #[inline]
    pub fn covered_cols(&self) -> usize {
        self.covered_cols
    }

    /// Whether at least one (row, col) pair is uncovered on both axes.
    #[inline]
    pub fn has_uncovered_cell(&self) -> bool {
        self.covered_rows < self.rows.len() && self.covered_cols < self.cols.len()
    }
}
