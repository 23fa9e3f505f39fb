//! Solve one of a few small problems, printing the tableau at every iteration.
//!
//! cargo run --example trace -- furniture --verbose
use std::process::exit;

use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tableau_simplex::algorithm::{OptimizationResult, Status};
use tableau_simplex::algorithm::simplex::Simplex;
use tableau_simplex::algorithm::simplex::config::SimplexConfig;
use tableau_simplex::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, MostNegative, PivotRule};
use tableau_simplex::algorithm::simplex::tableau::Tableau;
use tableau_simplex::data::linear_program::standard_form::StandardForm;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Problem {
    /// Two products sharing three resources, optimal after two pivots.
    Furniture,
    /// Two columns with equal relative costs.
    Tie,
    /// The objective can be increased without limit.
    Unbounded,
    /// Degenerate pivots that return to the initial basis.
    Cycling,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rule {
    MostNegative,
    FirstProfitable,
}

/// Trace the tableau simplex method on a small linear program.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Problem to solve
    #[arg(value_enum, default_value = "furniture")]
    problem: Problem,
    /// Pivot rule selecting the entering column
    #[arg(long, value_enum, default_value = "most-negative")]
    rule: Rule,
    /// Maximum number of pivots
    #[arg(long, default_value_t = 20)]
    max_iterations: usize,
    /// Log every pivot
    #[arg(short, long)]
    verbose: bool,
}

fn problem(problem: Problem) -> StandardForm<f64> {
    let (objective, constraints, rhs) = match problem {
        Problem::Furniture => (
            vec![8f64, 6f64],
            vec![vec![5f64, 3f64], vec![2f64, 3f64], vec![1f64, 3f64]],
            vec![30f64, 24f64, 18f64],
        ),
        Problem::Tie => (
            vec![3f64, 3f64],
            vec![vec![1f64, 2f64], vec![2f64, 1f64]],
            vec![4f64, 4f64],
        ),
        Problem::Unbounded => (vec![1f64, 1f64], vec![vec![1f64, -1f64]], vec![10f64]),
        Problem::Cycling => (
            vec![10f64, -57f64, -9f64, -24f64],
            vec![
                vec![0.5f64, -5.5f64, -2.5f64, 9f64],
                vec![0.5f64, -1.5f64, -0.5f64, 1f64],
                vec![1f64, 0f64, 0f64, 0f64],
            ],
            vec![0f64, 0f64, 1f64],
        ),
    };

    match StandardForm::new(objective, constraints, rhs) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("Invalid problem: {}", error);
            exit(1);
        },
    }
}

fn run<PR: PivotRule>(problem: &StandardForm<f64>, config: &SimplexConfig<f64>) -> OptimizationResult<f64> {
    let mut print = |tableau: &Tableau<f64>, iteration: usize| {
        println!("Iteration {}:\n{}", iteration, tableau);
    };

    Simplex::<_, PR>::new(Tableau::new(problem), config).run(Some(&mut print))
}

fn main() {
    let opts = Opts::parse();

    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {}", error);
    }

    let problem = problem(opts.problem);
    let config = SimplexConfig::default().with_max_iterations(opts.max_iterations);
    let result = match opts.rule {
        Rule::MostNegative => run::<MostNegative>(&problem, &config),
        Rule::FirstProfitable => run::<FirstProfitable>(&problem, &config),
    };

    let status = result.status();
    match result {
        OptimizationResult::FiniteOptimum(solution) => println!("Solution computed.\n{}", solution),
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
        OptimizationResult::CycleDetected { iterations } => {
            println!("No optimum after {} pivots, the method is likely cycling.", iterations);
        },
    }

    if status != Status::Optimal {
        exit(2);
    }
}
