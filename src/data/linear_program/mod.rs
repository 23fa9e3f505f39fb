//! # Representing linear programs
//!
//! This module contains the input representation of a linear program, the errors raised while
//! validating it and the representation of its optimal solution.
pub mod error;
pub mod solution;
pub mod standard_form;
