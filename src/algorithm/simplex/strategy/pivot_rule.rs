//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Scalar;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic feasible solution state.
    /// * `tolerance`: Objective row values not below `-tolerance` are considered nonnegative.
    ///
    /// # Return value
    ///
    /// The index of the entering column and its objective row value, or `None` if no column can
    /// improve the objective, meaning that the current solution is optimal.
    fn select_primal_pivot_column<F: Scalar>(
        &mut self,
        tableau: &Tableau<F>,
        tolerance: &F,
    ) -> Option<(usize, F)>;
}

/// Pivot on the column with the most negative objective row value (Dantzig's rule).
///
/// Ties are broken by the lowest column index, such that the pivot path is fully determined by
/// the input.
#[derive(Copy, Clone, Debug, Default)]
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Scalar>(
        &mut self,
        tableau: &Tableau<F>,
        tolerance: &F,
    ) -> Option<(usize, F)> {
        let mut most_negative: Option<(usize, &F)> = None;
        for column in (0..tableau.nr_columns()).filter(|&column| !tableau.is_in_basis(column)) {
            let cost = tableau.relative_cost(column);
            if cost.is_negative_beyond(tolerance)
                && most_negative.is_none_or(|(_, lowest)| cost < lowest) {
                most_negative = Some((column, cost));
            }
        }

        most_negative.map(|(column, cost)| (column, cost.clone()))
    }
}

/// Simply pivot on the first column which has a negative relative cost.
#[derive(Copy, Clone, Debug, Default)]
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Scalar>(
        &mut self,
        tableau: &Tableau<F>,
        tolerance: &F,
    ) -> Option<(usize, F)> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|(_, cost)| cost.is_negative_beyond(tolerance))
            .map(|(column, cost)| (column, cost.clone()))
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, MostNegative, PivotRule};
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::tests::problem_1;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn most_negative() {
        let tableau = problem_1::tableau_form();
        let mut rule = MostNegative::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau, &TOLERANCE), Some((0, -8f64)));

        let problem = StandardForm::new(
            vec![1f64, 7f64, 3f64],
            vec![vec![1f64, 1f64, 1f64]],
            vec![1f64],
        ).unwrap();
        let tableau = Tableau::new(&problem);
        assert_eq!(rule.select_primal_pivot_column(&tableau, &TOLERANCE), Some((1, -7f64)));
    }

    #[test]
    fn most_negative_ties() {
        let problem = StandardForm::new(
            vec![1f64, 3f64, 3f64],
            vec![vec![1f64, 2f64, 1f64]],
            vec![4f64],
        ).unwrap();
        let tableau = Tableau::new(&problem);
        for _ in 0..10 {
            let mut rule = MostNegative::new();
            assert_eq!(rule.select_primal_pivot_column(&tableau, &TOLERANCE), Some((1, -3f64)));
        }
    }

    #[test]
    fn optimal() {
        let mut tableau = problem_1::tableau_form();
        tableau.bring_into_basis(0, 0, &TOLERANCE);
        tableau.bring_into_basis(1, 2, &TOLERANCE);
        assert_eq!(MostNegative::new().select_primal_pivot_column(&tableau, &TOLERANCE), None);
        assert_eq!(FirstProfitable::new().select_primal_pivot_column(&tableau, &TOLERANCE), None);

        // Values within the tolerance count as nonnegative
        let problem = StandardForm::new(vec![1e-12f64, 0f64], vec![vec![1f64, 1f64]], vec![1f64]).unwrap();
        let tableau = Tableau::new(&problem);
        assert_eq!(MostNegative::new().select_primal_pivot_column(&tableau, &TOLERANCE), None);
        assert_eq!(MostNegative::new().select_primal_pivot_column(&tableau, &0f64), Some((0, -1e-12f64)));
    }

    #[test]
    fn first_profitable() {
        let problem = StandardForm::new(
            vec![0f64, 1f64, 7f64],
            vec![vec![1f64, 1f64, 1f64]],
            vec![1f64],
        ).unwrap();
        let tableau = Tableau::new(&problem);
        let mut rule = FirstProfitable::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau, &TOLERANCE), Some((1, -1f64)));
    }
}
