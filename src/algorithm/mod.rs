//! # Algorithms
use crate::algorithm::simplex::config::SimplexConfig;
use crate::data::linear_program::solution::Solution;

pub mod simplex;

/// A problem formulation that can be solved to optimality.
pub trait Solve<F> {
    /// Solve this problem.
    ///
    /// # Return value
    ///
    /// Whether the problem is unbounded, and if not, an optimal solution. If the iteration bound of
    /// the configuration is reached first, neither is known.
    fn solve(&self, config: &SimplexConfig<F>) -> OptimizationResult<F>;
}

/// The state of a simplex run.
///
/// A run starts `Running` and ends in one of the other, terminal, states.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// More pivots are needed.
    Running,
    /// No column can improve the objective any further.
    Optimal,
    /// A column can improve the objective, but no constraint limits how far.
    Unbounded,
    /// The maximum number of pivots was performed without reaching another terminal state.
    CycleDetected,
}

impl Status {
    /// Whether no further transitions can happen.
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

/// A linear program in standard form is never infeasible; it is either unbounded or has a finite
/// optimum. A run may also be cut off before this is determined.
///
/// This is determined as the result of an algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// An optimal solution.
    FiniteOptimum(Solution<F>),
    /// The objective can be increased without limit. No solution is returned.
    Unbounded,
    /// The iteration bound was hit, typically because degenerate pivots led to cycling.
    CycleDetected {
        /// Number of pivots performed.
        iterations: usize,
    },
}

impl<F> OptimizationResult<F> {
    /// The terminal state that led to this result.
    pub fn status(&self) -> Status {
        match self {
            OptimizationResult::FiniteOptimum(_) => Status::Optimal,
            OptimizationResult::Unbounded => Status::Unbounded,
            OptimizationResult::CycleDetected { .. } => Status::CycleDetected,
        }
    }

    /// The solution, if an optimum was found.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match self {
            OptimizationResult::FiniteOptimum(solution) => Some(solution),
            _ => None,
        }
    }
}
