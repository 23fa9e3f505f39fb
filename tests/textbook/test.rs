use approx::assert_abs_diff_eq;

use tableau_simplex::algorithm::{OptimizationResult, Status};

use crate::textbook::{solve, trace};

const EPSILON: f64 = 1e-9;

#[test]
fn furniture() {
    let result = solve(&[8f64, 6f64], &[&[5f64, 3f64], &[2f64, 3f64], &[1f64, 3f64]], &[30f64, 24f64, 18f64]);

    match result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(*solution.objective_value(), 54f64, epsilon = EPSILON);
            assert_abs_diff_eq!(solution.values()[0], 3f64, epsilon = EPSILON);
            assert_abs_diff_eq!(solution.values()[1], 5f64, epsilon = EPSILON);
            assert_abs_diff_eq!(solution.slack_values()[0], 0f64, epsilon = EPSILON);
            assert_abs_diff_eq!(solution.slack_values()[1], 3f64, epsilon = EPSILON);
            assert_abs_diff_eq!(solution.slack_values()[2], 0f64, epsilon = EPSILON);
            assert_eq!(solution.iterations(), 2);
        },
        _ => panic!("expected an optimum"),
    }
}

#[test]
fn unbounded() {
    let result = solve(&[1f64, 1f64], &[&[1f64, -1f64]], &[10f64]);
    assert_eq!(result, OptimizationResult::Unbounded);
}

#[test]
fn cycling() {
    let result = solve(
        &[10f64, -57f64, -9f64, -24f64],
        &[
            &[0.5f64, -5.5f64, -2.5f64, 9f64],
            &[0.5f64, -1.5f64, -0.5f64, 1f64],
            &[1f64, 0f64, 0f64, 0f64],
        ],
        &[0f64, 0f64, 1f64],
    );
    assert_eq!(result, OptimizationResult::CycleDetected { iterations: 100 });
}

#[test]
fn optimal_at_origin() {
    let result = solve(&[-2f64, 0f64], &[&[1f64, 1f64]], &[7f64]);

    let solution = result.solution().unwrap();
    assert_eq!(solution.iterations(), 0);
    assert_eq!(solution.values(), &[0f64, 0f64]);
    assert_eq!(solution.slack_values(), &[7f64]);
}

#[test]
fn traced_objective_non_decreasing() {
    let (result, tableaus) = trace(&[3f64, 3f64], &[&[1f64, 2f64], &[2f64, 1f64]], &[4f64, 4f64]);
    assert_eq!(result.status(), Status::Optimal);

    // Initial tableau, one per pivot
    assert_eq!(tableaus.len(), 3);
    let objective_values = tableaus.iter()
        .map(|tableau| *tableau.objective_function_value())
        .collect::<Vec<_>>();
    assert!(objective_values.windows(2).all(|pair| pair[0] <= pair[1] + EPSILON));
    assert_abs_diff_eq!(objective_values[2], 8f64, epsilon = EPSILON);

    let solution = result.solution().unwrap();
    assert_abs_diff_eq!(solution.values()[0], 4f64 / 3f64, epsilon = EPSILON);
    assert_abs_diff_eq!(solution.values()[1], 4f64 / 3f64, epsilon = EPSILON);
}

#[test]
fn traced_basis_matches_unit_columns() {
    let (_, tableaus) = trace(&[8f64, 6f64], &[&[5f64, 3f64], &[2f64, 3f64], &[1f64, 3f64]], &[30f64, 24f64, 18f64]);

    for tableau in tableaus {
        for (row, column) in tableau.basis().iter() {
            assert_eq!(tableau.unit_column_row(column, &EPSILON), Some(row));
        }
        assert_eq!(tableau.current_bfs(), tableau.bfs_from_unit_columns(&EPSILON));
    }
}

#[test]
fn deterministic() {
    let first = solve(&[3f64, 3f64], &[&[1f64, 2f64], &[2f64, 1f64]], &[4f64, 4f64]);
    for _ in 0..10 {
        let again = solve(&[3f64, 3f64], &[&[1f64, 2f64], &[2f64, 1f64]], &[4f64, 4f64]);
        assert_eq!(again, first);
    }
}
