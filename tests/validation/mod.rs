//! # Input validation
//!
//! Malformed problems are rejected before a tableau is built.
use tableau_simplex::algorithm::simplex::build_tableau;
use tableau_simplex::data::linear_program::error::InvalidInput;
use tableau_simplex::data::linear_program::standard_form::StandardForm;

#[test]
fn row_count() {
    let result = build_tableau(vec![1f64, 1f64], vec![vec![1f64, 1f64]], vec![1f64, 2f64]);
    assert_eq!(result, Err(InvalidInput::RowCount { nr_rows: 1, nr_rhs: 2 }));
}

#[test]
fn row_length() {
    let result = build_tableau(
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64], vec![1f64]],
        vec![1f64, 2f64],
    );
    assert_eq!(result, Err(InvalidInput::RowLength { row: 1, length: 1, nr_variables: 2 }));
}

#[test]
fn negative_rhs() {
    let result = build_tableau(vec![1f64], vec![vec![1f64], vec![2f64]], vec![1f64, -2f64]);
    assert!(matches!(result, Err(InvalidInput::NegativeRightHandSide { row: 1, .. })));
}

#[test]
fn non_finite() {
    let result = StandardForm::new(vec![1f64, f64::NAN], vec![vec![1f64, 1f64]], vec![1f64]);
    assert!(matches!(result, Err(InvalidInput::NonFinite { .. })));

    let result = StandardForm::new(vec![1f64], vec![vec![f64::INFINITY]], vec![1f64]);
    assert!(matches!(result, Err(InvalidInput::NonFinite { .. })));
}

#[test]
fn message() {
    let error = build_tableau(vec![1f64], vec![vec![1f64]], vec![-1f64]).unwrap_err();
    assert!(error.to_string().contains("row 0"));
}
