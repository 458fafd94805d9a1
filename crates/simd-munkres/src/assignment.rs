use crate::mat::CostRef;
use crate::types::CostScalar;

/// Row-to-column assignment produced by the solver.
///
/// `columns()[i]` is the column assigned to row `i`; all entries are
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    columns: Vec<usize>,
}

impl Assignment {
    pub(crate) fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    /// Number of assigned rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column assigned to each row.
    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Column assigned to `row`, if the row exists.
    #[inline]
    pub fn column_for(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// Row assigned to `col`, if any.
    pub fn row_for(&self, col: usize) -> Option<usize> {
        self.columns.iter().position(|&c| c == col)
    }

    /// `(row, col)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }

    /// Sum of the caller's original costs over the assigned cells.
    ///
    /// Non-finite costs propagate into the total.
    ///
    /// # Panics
    /// If `costs` has fewer rows or columns than the assignment refers to.
    pub fn total_cost<T: CostScalar>(&self, costs: CostRef<'_, T>) -> f64 {
        self.pairs().map(|(r, c)| costs.get(r, c).to_f64()).sum()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.columns
    }
}

impl From<Assignment> for Vec<usize> {
    fn from(assignment: Assignment) -> Self {
        assignment.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let a = Assignment::new(vec![2, 0, 3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.column_for(1), Some(0));
        assert_eq!(a.column_for(5), None);
        assert_eq!(a.row_for(3), Some(2));
        assert_eq!(a.row_for(1), None);
        assert_eq!(a.pairs().collect::<Vec<_>>(), vec![(0, 2), (1, 0), (2, 3)]);
    }

    #[test]
    fn test_total_cost() {
        let data = [71, 78, 13, 45, 37, 7, 7, 3, 83, 97, 72, 28];
        let costs = CostRef::from_slice(&data, 3, 4).unwrap();
        let a = Assignment::new(vec![2, 1, 3]);
        assert_eq!(a.total_cost(costs), 48.0);
    }

    #[test]
    fn test_into_vec() {
        let a = Assignment::new(vec![1, 0]);
        let v: Vec<usize> = a.clone().into();
        assert_eq!(v, a.into_vec());
    }
}
