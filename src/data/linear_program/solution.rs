//! # Representation of optimal solutions
//!
//! Once the tableau reaches optimality, a solution is read from it. This solution contains a value
//! for every original decision variable, as well as for every slack variable.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::number_types::traits::Scalar;

/// An optimal basic feasible solution to a linear program in standard form.
///
/// Created once, at the end of the simplex iteration, and never changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function, `c^T x`.
    objective_value: F,
    /// One value for each decision variable, in the column order of the problem.
    values: Vec<F>,
    /// One value for each constraint: how far the constraint is from being tight.
    slack_values: Vec<F>,
    /// Number of pivots that were needed to reach this solution.
    iterations: usize,
}

impl<F: Scalar> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, values: Vec<F>, slack_values: Vec<F>, iterations: usize) -> Self {
        Self {
            objective_value,
            values,
            slack_values,
            iterations,
        }
    }

    /// Value of the objective function at this solution.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Values of the decision variables.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Values of the slack variables, one per constraint.
    pub fn slack_values(&self) -> &[F] {
        &self.slack_values
    }

    /// Number of pivots performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<F: Scalar> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        for (j, value) in self.values.iter().enumerate() {
            writeln!(f, "x{} = {}", j + 1, value)?;
        }
        for (i, value) in self.slack_values.iter().enumerate() {
            writeln!(f, "s{} = {}", i + 1, value)?;
        }
        write!(f, "({} pivots)", self.iterations)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn display() {
        let solution = Solution::new(54f64, vec![3f64, 5f64], vec![0f64, 3f64, 0f64], 2);
        assert_eq!(
            solution.to_string(),
            "Objective value: 54\nx1 = 3\nx2 = 5\ns1 = 0\ns2 = 3\ns3 = 0\n(2 pivots)",
        );
    }
}
