//! # Strategies for the Simplex algorithm
//!
//! Choices the Simplex method leaves open. Currently only the decision on which column enters the
//! basis; the leaving row is always determined by the ratio test.
pub mod pivot_rule;
