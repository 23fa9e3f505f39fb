//! # The Simplex tableau
//!
//! Contains the dense simplex tableau and logic for the elementary operations which can be
//! performed upon it. The tableau is extended with an explicit basis for reading off solutions.
use std::cmp::max;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter::once;

use itertools::{Itertools, repeat_n};

use crate::algorithm::simplex::tableau::basis::Basis;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Scalar;

pub mod basis;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// For a problem with `n` variables and `m` constraints, it holds a matrix of `m + 1` rows and
/// `n + m + 1` columns. The first `m` rows are the constraints, the last row is the objective
/// row. The first `n` columns belong to the decision variables, the next `m` to the slack
/// variables and the last one is the right-hand side.
///
/// The objective row holds the negated relative costs, such that a negative value indicates that
/// bringing the column into the basis can increase the objective. Its right-hand side value is the
/// current objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Constraint rows, followed by the objective row.
    ///
    /// This attribute changes with a basis change.
    matrix: DenseMatrix<F>,

    /// For each row the column that is basic in it.
    basis: Basis,

    /// Number of decision variables `n`, the slack columns start at this index.
    nr_variables: usize,
}

impl<F: Scalar> Tableau<F> {
    /// Create the initial tableau of a problem in standard form.
    ///
    /// The slack columns form an identity matrix and the initial basis. Because the right-hand
    /// side of a `StandardForm` is nonnegative, this basis is feasible.
    pub fn new(problem: &StandardForm<F>) -> Self {
        let nr_variables = problem.nr_variables();
        let nr_constraints = problem.nr_constraints();

        let constraint_rows = problem.constraints().iter()
            .zip_eq(problem.rhs())
            .enumerate()
            .map(|(i, (coefficients, b))| {
                coefficients.iter().cloned()
                    .chain((0..nr_constraints).map(|k| if k == i { F::one() } else { F::zero() }))
                    .chain(once(b.clone()))
                    .collect::<Vec<_>>()
            });
        // Slacks don't contribute to the objective, and the objective value at the origin is zero
        let objective_row = problem.objective().iter()
            .map(|c| -c.clone())
            .chain(repeat_n(F::zero(), nr_constraints + 1))
            .collect::<Vec<_>>();

        let data = constraint_rows.chain(once(objective_row)).collect();

        Self {
            matrix: DenseMatrix::from_data(data, nr_variables + nr_constraints + 1),
            basis: Basis::slacks(nr_variables, nr_constraints),
            nr_variables,
        }
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the minimal ratio
    /// between the right-hand side and a positive column value. Values that are not larger than
    /// `tolerance` are never pivoted on. Ties are broken by taking the lowest row index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column, in range `0` until `self.nr_columns()`.
    /// * `tolerance`: Column values up to this value are considered zero.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in this direction.
    pub fn select_primal_pivot_row(&self, column: usize, tolerance: &F) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen row, minimum ratio)
        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.get_value(row, column);
            if xij.is_positive_beyond(tolerance) {
                let ratio = self.constraint_value(row).clone() / xij.clone();
                let is_better = min_values.as_ref()
                    .is_none_or(|(_, min_ratio)| ratio < *min_ratio);
                if is_better {
                    min_values = Some((row, ratio));
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Brings a column into the basis with one step of Gauss-Jordan elimination.
    ///
    /// The pivot row is normalized such that the pivot element becomes one, after which a multiple
    /// of it is subtracted from every other row (the objective row included) such that the rest of
    /// the pivot column becomes zero. The basis is updated accordingly.
    ///
    /// A right-hand side value that cancels to within `tolerance`, relative to its value before
    /// the elimination, is set to exactly zero. Degenerate pivots with large right-hand sides would
    /// otherwise leave slightly negative basic variables behind.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column index of the pivot, not yet in the basis.
    /// * `pivot_row_index`: Row index of the pivot. The pivot element may not be (close to) zero.
    /// * `tolerance`: Relative tolerance for the cancellation of right-hand side values.
    ///
    /// # Return value
    ///
    /// Index of the column that left the basis.
    pub fn bring_into_basis(
        &mut self,
        pivot_column_index: usize,
        pivot_row_index: usize,
        tolerance: &F,
    ) -> usize {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot_value = self.matrix.get_value(pivot_row_index, pivot_column_index).clone();
        debug_assert!(pivot_value != F::zero());

        self.matrix.divide_row(pivot_row_index, &pivot_value);
        let rhs_column = self.nr_columns();
        for row in (0..self.matrix.nr_rows()).filter(|&row| row != pivot_row_index) {
            let factor = self.matrix.get_value(row, pivot_column_index).clone();
            let before = self.matrix.get_value(row, rhs_column).magnitude();
            self.matrix.sub_multiple_of_row(pivot_row_index, row, &factor);

            if row < self.nr_rows() {
                let scale = if before > F::one() { before } else { F::one() };
                let after = self.matrix.get_value(row, rhs_column);
                if *after != F::zero() && after.is_close_to(&F::zero(), &(tolerance.clone() * scale)) {
                    self.matrix.set_value(row, rhs_column, F::zero());
                }
            }
        }

        self.basis.change(pivot_row_index, pivot_column_index)
    }

    /// Get the current basic feasible solution, including the slack variables.
    ///
    /// Read from the explicitly maintained basis: basic variables take the right-hand side value
    /// of their row, all others are zero.
    ///
    /// # Return value
    ///
    /// Vector of length `self.nr_columns()`.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_columns()];
        for (row, column) in self.basis.iter() {
            values[column] = self.constraint_value(row).clone();
        }

        values
    }

    /// Read a `Solution` from this tableau.
    ///
    /// Only meaningful once no column has a negative relative cost.
    ///
    /// # Arguments
    ///
    /// * `iterations`: Number of pivots that led to this tableau.
    pub fn solution(&self, iterations: usize) -> Solution<F> {
        let mut values = self.current_bfs();
        let slack_values = values.split_off(self.nr_variables);

        Solution::new(self.objective_function_value().clone(), values, slack_values, iterations)
    }

    /// Find the row in which a column has its one, if it is a unit column.
    ///
    /// A unit column has a single value equal to one in one of the constraint rows and zeros
    /// everywhere else, objective row included. This is a scan of the tableau values, independent
    /// of the maintained basis, and can be used to check it.
    ///
    /// # Arguments
    ///
    /// * `column`: Column index in range `0` until `self.nr_columns()`.
    /// * `tolerance`: Maximum distance from one and zero.
    pub fn unit_column_row(&self, column: usize, tolerance: &F) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut unit_row = None;
        for (row, value) in self.matrix.column(column).enumerate() {
            if unit_row.is_none() && row < self.nr_rows() && value.is_close_to(&F::one(), tolerance) {
                unit_row = Some(row);
            } else if !value.is_close_to(&F::zero(), tolerance) {
                return None;
            }
        }

        unit_row
    }

    /// The current solution according to a scan for unit columns.
    ///
    /// See `unit_column_row`. Columns that are not a unit column are taken to be zero.
    ///
    /// # Return value
    ///
    /// Vector of length `self.nr_columns()`.
    pub fn bfs_from_unit_columns(&self, tolerance: &F) -> Vec<F> {
        (0..self.nr_columns())
            .map(|column| match self.unit_column_row(column, tolerance) {
                Some(row) => self.constraint_value(row).clone(),
                None => F::zero(),
            })
            .collect()
    }

    /// The objective row value of a column: its relative cost, negated.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index in range `0` until `self.nr_columns()`.
    pub fn relative_cost(&self, j: usize) -> &F {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(self.nr_rows(), j)
    }

    /// Current value of the basic variable of a row.
    pub fn constraint_value(&self, i: usize) -> &F {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i, self.nr_columns())
    }

    /// Get the value of the objective function of the current solution.
    pub fn objective_function_value(&self) -> &F {
        self.matrix.get_value(self.nr_rows(), self.nr_columns())
    }

    /// Any value of the tableau.
    ///
    /// # Arguments
    ///
    /// * `i`: Row index, `self.nr_rows()` being the objective row.
    /// * `j`: Column index, `self.nr_columns()` being the right-hand side.
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        self.matrix.get_value(i, j)
    }

    /// The underlying matrix, with the objective row last and the right-hand side column last.
    pub fn matrix(&self) -> &DenseMatrix<F> {
        &self.matrix
    }

    /// Which column is basic in which row.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis.contains(column)
    }

    /// Number of constraint rows `m`, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variables `n + m`: decision and slack columns, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.nr_variables + self.nr_rows()
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: Scalar>(tableau: &Tableau<F>, tolerance: &F) -> bool {
    // Each basis column is the unit vector of its row, with a zero relative cost
    let basis_consistent = tableau.basis().iter()
        .all(|(row, column)| tableau.unit_column_row(column, tolerance) == Some(row));
    // b >= 0
    let primal_feasible = (0..tableau.nr_rows())
        .all(|row| !tableau.constraint_value(row).is_negative_beyond(tolerance));

    basis_consistent && primal_feasible
}

impl<F: Scalar> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let objective = self.objective_function_value().to_string();
        let cost = (0..self.nr_columns())
            .map(|j| self.relative_cost(j).to_string())
            .collect::<Vec<_>>();
        let b = (0..self.nr_rows())
            .map(|i| self.constraint_value(i).to_string())
            .collect::<Vec<_>>();
        let columns = (0..self.nr_columns())
            .map(|j| (0..self.nr_rows()).map(|i| self.get_value(i, j).to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), self.nr_rows().to_string().len());
        let column_width = columns.iter().enumerate()
            .map(|(j, column)| {
                column.iter().map(String::len)
                    .chain([j.to_string().len(), cost[j].len()])
                    .max().unwrap_or_default()
            })
            .collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len)
            .chain([objective.len(), "b".len()])
            .max().unwrap_or_default();

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", j, width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        let separator = "-".repeat(total_width);
        writeln!(f, "{}", separator)?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", separator)?;

        // Row counter and row data
        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{}", self.basis.iter().map(|(i, j)| format!("({}, {})", i, j)).join(", "))
    }
}
