//! # Textbook problems
//!
//! Small problems with a known optimum or a known failure mode, as they appear in introductory
//! texts on linear programming.
use tableau_simplex::algorithm::OptimizationResult;
use tableau_simplex::algorithm::simplex::{build_tableau, run_simplex};
use tableau_simplex::algorithm::simplex::tableau::Tableau;

mod test;

/// Generous for problems of this size, small enough to stop a cycling run quickly.
const MAX_ITERATIONS: usize = 100;

fn solve(objective: &[f64], constraints: &[&[f64]], rhs: &[f64]) -> OptimizationResult<f64> {
    let tableau = build_tableau(
        objective.to_vec(),
        constraints.iter().map(|row| row.to_vec()).collect(),
        rhs.to_vec(),
    ).unwrap();

    run_simplex(tableau, MAX_ITERATIONS, None)
}

/// Run to the end, collecting every tableau passed to the trace hook.
fn trace(objective: &[f64], constraints: &[&[f64]], rhs: &[f64]) -> (OptimizationResult<f64>, Vec<Tableau<f64>>) {
    let tableau = build_tableau(
        objective.to_vec(),
        constraints.iter().map(|row| row.to_vec()).collect(),
        rhs.to_vec(),
    ).unwrap();

    let mut tableaus = Vec::new();
    let mut hook = |tableau: &Tableau<f64>, _: usize| tableaus.push(tableau.clone());
    let result = run_simplex(tableau, MAX_ITERATIONS, Some(&mut hook));

    (result, tableaus)
}
