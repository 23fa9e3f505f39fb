//! # Basis bookkeeping
//!
//! Which column is basic in which row. This mapping is maintained explicitly and updated with
//! every pivot, instead of being recovered by searching the tableau for unit columns.
use std::collections::HashSet;

/// Maps each constraint row to the column of the variable that is basic in that row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Basis {
    /// For row `i`, the column index of the basic variable in that row.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,
}

impl Basis {
    /// The initial basis of a problem in standard form: the slack of row `i` is basic in row `i`.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of decision variables; the slack columns come directly after them.
    /// * `nr_constraints`: Number of rows and slack variables.
    pub fn slacks(nr_variables: usize, nr_constraints: usize) -> Self {
        let basis_indices = (nr_variables..(nr_variables + nr_constraints)).collect::<Vec<_>>();
        let basis_columns = basis_indices.iter().copied().collect();

        Self { basis_indices, basis_columns }
    }

    /// Replace the basic variable of a row.
    ///
    /// # Arguments
    ///
    /// * `row`: Row in which the pivot happens.
    /// * `entering_column`: Column that enters the basis, should not be in the basis already.
    ///
    /// # Return value
    ///
    /// Index of the column that left the basis.
    pub fn change(&mut self, row: usize, entering_column: usize) -> usize {
        debug_assert!(row < self.basis_indices.len());
        debug_assert!(!self.contains(entering_column));

        let leaving_column = std::mem::replace(&mut self.basis_indices[row], entering_column);
        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(entering_column);
        debug_assert!(was_not_there);

        leaving_column
    }

    /// Whether a column is in the basis.
    pub fn contains(&self, column: usize) -> bool {
        self.basis_columns.contains(&column)
    }

    /// Column index of the variable that is basic in `row`.
    pub fn column_for_row(&self, row: usize) -> usize {
        debug_assert!(row < self.basis_indices.len());

        self.basis_indices[row]
    }

    /// (row, column) pairs, ordered by row.
    pub fn iter(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.basis_indices.iter().copied().enumerate()
    }

    /// Number of basic variables, which equals the number of constraint rows.
    pub fn len(&self) -> usize {
        self.basis_indices.len()
    }

    /// Whether there are no constraint rows.
    pub fn is_empty(&self) -> bool {
        self.basis_indices.is_empty()
    }
}
