//! # The Simplex algorithm
//!
//! This module contains the dense tableau variant of the primal simplex method. The algorithm is
//! implemented as described in chapter 2 of Combinatorial Optimization, a book by Christos H.
//! Papadimitriou and Kenneth Steiglitz.
//!
//! The problem should be feasible at the origin, such that the slack variables provide the initial
//! basic feasible solution and no first phase is needed.
use tracing::{debug, warn};

use crate::algorithm::{OptimizationResult, Solve, Status};
use crate::algorithm::simplex::config::SimplexConfig;
use crate::algorithm::simplex::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::algorithm::simplex::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::error::InvalidInput;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Scalar;

pub mod config;
pub mod strategy;
pub mod tableau;


/// Called once per iteration with the tableau and the number of pivots performed so far.
pub type Trace<'a, F> = &'a mut dyn FnMut(&Tableau<F>, usize);

/// A single run of the primal simplex method.
///
/// Owns the tableau it iterates on. The run is a state machine: it starts in `Status::Running` and
/// every `step` either pivots once and stays there, or moves to a terminal state.
#[derive(Debug)]
pub struct Simplex<F, PR = MostNegative> {
    tableau: Tableau<F>,
    rule: PR,
    tolerance: F,
    max_iterations: usize,
    status: Status,
    /// (row, column) of each pivot, in order.
    pivot_history: Vec<(usize, usize)>,
}

impl<F, PR> Simplex<F, PR>
where
    F: Scalar,
    PR: PivotRule,
{
    /// Start a run.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic feasible solution state, such as the initial one.
    /// * `config`: Tolerance and iteration bound.
    pub fn new(tableau: Tableau<F>, config: &SimplexConfig<F>) -> Self {
        Self {
            tableau,
            rule: PR::new(),
            tolerance: config.tolerance.clone(),
            max_iterations: config.max_iterations,
            status: Status::Running,
            pivot_history: Vec::new(),
        }
    }

    /// Perform a single transition.
    ///
    /// Select a column, select a row and pivot. If there is no column, the tableau is optimal. If
    /// there is no row, the problem is unbounded. If the pivot would exceed the iteration bound, the
    /// run is stopped. Once terminal, this method doesn't change anything.
    ///
    /// # Return value
    ///
    /// The state after the transition.
    pub fn step(&mut self) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        debug_assert!(is_in_basic_feasible_solution_state(&self.tableau, &self.tolerance));

        self.status = match self.rule.select_primal_pivot_column(&self.tableau, &self.tolerance) {
            Some((column, cost)) => match self.tableau.select_primal_pivot_row(column, &self.tolerance) {
                Some(_) if self.iterations() >= self.max_iterations => {
                    warn!(iterations = self.iterations(), "iteration bound reached before optimality");
                    Status::CycleDetected
                },
                Some(row) => {
                    let leaving = self.tableau.bring_into_basis(column, row, &self.tolerance);
                    self.pivot_history.push((row, column));
                    debug!(
                        iteration = self.iterations(), row, column, leaving, relative_cost = %cost,
                        objective = %self.tableau.objective_function_value(), "pivot"
                    );
                    Status::Running
                },
                None => {
                    debug!(iterations = self.iterations(), column, "unbounded");
                    Status::Unbounded
                },
            },
            None => {
                debug!(
                    iterations = self.iterations(),
                    objective = %self.tableau.objective_function_value(), "optimal"
                );
                Status::Optimal
            },
        };

        self.status
    }

    /// Iterate until a terminal state is reached.
    ///
    /// # Arguments
    ///
    /// * `trace`: Called at the start of every iteration, before anything is selected, with the
    /// tableau and the number of pivots performed so far. It is also called for the initial and the
    /// terminal tableau.
    ///
    /// # Return value
    ///
    /// The solution if the problem is found to be optimal, otherwise the terminal state.
    pub fn run(mut self, mut trace: Option<Trace<'_, F>>) -> OptimizationResult<F> {
        loop {
            if let Some(hook) = trace.as_deref_mut() {
                hook(&self.tableau, self.iterations());
            }

            match self.step() {
                Status::Running => {},
                Status::Optimal => break OptimizationResult::FiniteOptimum(
                    self.tableau.solution(self.iterations()),
                ),
                Status::Unbounded => break OptimizationResult::Unbounded,
                Status::CycleDetected => break OptimizationResult::CycleDetected {
                    iterations: self.iterations(),
                },
            }
        }
    }

    /// Current state of the run.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of pivots performed.
    pub fn iterations(&self) -> usize {
        self.pivot_history.len()
    }

    /// (row, column) of every pivot performed, in order.
    pub fn pivot_history(&self) -> &[(usize, usize)] {
        &self.pivot_history
    }

    /// The tableau in its current state.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }
}

/// Build the initial tableau of a linear program in standard maximization form.
///
/// maximize c^T x, subject to Ax <= b, x >= 0.
///
/// # Errors
///
/// `InvalidInput` if the dimensions are inconsistent, a value is not finite or a right-hand side
/// value is negative. Problems that are not feasible at the origin are not supported.
pub fn build_tableau<F: Scalar>(
    objective: Vec<F>,
    constraints: Vec<Vec<F>>,
    rhs: Vec<F>,
) -> Result<Tableau<F>, InvalidInput> {
    StandardForm::new(objective, constraints, rhs).map(|problem| Tableau::new(&problem))
}

/// Run the simplex method with the most negative relative cost pivot rule and the default
/// tolerance of the number type.
///
/// # Arguments
///
/// * `tableau`: Initial tableau, see `build_tableau`.
/// * `max_iterations`: Maximum number of pivots.
/// * `trace`: Observer, see `Simplex::run`.
pub fn run_simplex<F: Scalar>(
    tableau: Tableau<F>,
    max_iterations: usize,
    trace: Option<Trace<'_, F>>,
) -> OptimizationResult<F> {
    let config = SimplexConfig::default().with_max_iterations(max_iterations);
    Simplex::<_, MostNegative>::new(tableau, &config).run(trace)
}

impl<F: Scalar> Solve<F> for StandardForm<F> {
    fn solve(&self, config: &SimplexConfig<F>) -> OptimizationResult<F> {
        Simplex::<_, MostNegative>::new(Tableau::new(self), config).run(None)
    }
}
