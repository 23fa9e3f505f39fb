//! # Rejected inputs
//!
//! Describes why a problem could not be brought into a tableau. These errors are raised before any
//! tableau exists; optimality, unboundedness and cycling are not errors but results, see
//! `crate::algorithm::OptimizationResult`.
use thiserror::Error;

/// A problem is not a valid, origin-feasible linear program in standard maximization form.
///
/// Inputs that would need artificial variables (a first phase, or a Big-M method) to find an
/// initial basic feasible solution are rejected with this error rather than solved incorrectly.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum InvalidInput {
    /// The constraint matrix and the right-hand side disagree on the number of constraints.
    #[error("constraint matrix has {nr_rows} rows, but the right-hand side has {nr_rhs} values")]
    RowCount {
        /// Number of rows of the constraint matrix.
        nr_rows: usize,
        /// Length of the right-hand side.
        nr_rhs: usize,
    },
    /// A constraint row does not have a coefficient for every variable.
    #[error("constraint row {row} has {length} coefficients, but there are {nr_variables} variables")]
    RowLength {
        /// Index of the first offending row.
        row: usize,
        /// Number of coefficients in that row.
        length: usize,
        /// Length of the objective vector.
        nr_variables: usize,
    },
    /// A coefficient is infinite or not a number.
    #[error("coefficient {location} is not a finite number")]
    NonFinite {
        /// Human readable position of the coefficient, e.g. `A[1][0]`.
        location: String,
    },
    /// The origin is not feasible because a right-hand side value is negative.
    #[error("right-hand side value {value} of row {row} is negative, the origin is not feasible")]
    NegativeRightHandSide {
        /// Index of the first offending row.
        row: usize,
        /// The negative value, formatted.
        value: String,
    },
}
