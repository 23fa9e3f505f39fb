//! # Linear programs in standard maximization form
//!
//! maximize c^T x, subject to Ax <= b, x >= 0, with b >= 0. Because b is nonnegative, the origin
//! is a basic feasible solution and the slack variables form an initial basis.
use crate::data::linear_program::error::InvalidInput;
use crate::data::number_types::traits::Scalar;

/// An immutable, validated linear program in standard maximization form.
///
/// Variables and constraints are only identified by their position.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Objective coefficients `c`, one per variable.
    objective: Vec<F>,
    /// Row major constraint matrix `A` of size `m x n`.
    constraints: Vec<Vec<F>>,
    /// Right-hand side `b`, one per constraint. All values are nonnegative.
    rhs: Vec<F>,
}

impl<F: Scalar> StandardForm<F> {
    /// Create a new linear program, checking that it is consistent and feasible at the origin.
    ///
    /// # Arguments
    ///
    /// * `objective`: Cost vector `c` of length `n`, to be maximized.
    /// * `constraints`: `m` rows of length `n`.
    /// * `rhs`: Right-hand side `b` of length `m`, all values nonnegative.
    ///
    /// # Errors
    ///
    /// An `InvalidInput` describing the first inconsistency found. Dimensions are checked before
    /// values.
    pub fn new(
        objective: Vec<F>,
        constraints: Vec<Vec<F>>,
        rhs: Vec<F>,
    ) -> Result<Self, InvalidInput> {
        if constraints.len() != rhs.len() {
            return Err(InvalidInput::RowCount { nr_rows: constraints.len(), nr_rhs: rhs.len() });
        }
        if let Some((row, values)) = constraints.iter()
            .enumerate()
            .find(|(_, values)| values.len() != objective.len()) {
            return Err(InvalidInput::RowLength {
                row,
                length: values.len(),
                nr_variables: objective.len(),
            });
        }

        if let Some(j) = objective.iter().position(|value| !value.is_finite()) {
            return Err(InvalidInput::NonFinite { location: format!("c[{}]", j) });
        }
        for (i, values) in constraints.iter().enumerate() {
            if let Some(j) = values.iter().position(|value| !value.is_finite()) {
                return Err(InvalidInput::NonFinite { location: format!("A[{}][{}]", i, j) });
            }
        }
        if let Some(i) = rhs.iter().position(|value| !value.is_finite()) {
            return Err(InvalidInput::NonFinite { location: format!("b[{}]", i) });
        }

        if let Some((row, value)) = rhs.iter()
            .enumerate()
            .find(|(_, value)| **value < F::zero()) {
            return Err(InvalidInput::NegativeRightHandSide { row, value: value.to_string() });
        }

        Ok(Self { objective, constraints, rhs })
    }

    /// Objective coefficients, one per variable.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    /// Constraint coefficients, one row per constraint.
    pub fn constraints(&self) -> &[Vec<F>] {
        &self.constraints
    }

    /// Right-hand side, one value per constraint.
    pub fn rhs(&self) -> &[F] {
        &self.rhs
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints `m`, which is also the number of slack variables.
    pub fn nr_constraints(&self) -> usize {
        self.rhs.len()
    }
}
