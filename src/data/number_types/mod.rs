//! # Number types
//!
//! The algorithms in this crate are defined over an ordered field. This module defines that space
//! and provides implementations.
//!
//! A benefit of this approach is that the algorithm can be tested for correctness using exact
//! rational numbers (with the `exact` feature), while the same code runs without adaptation on
//! floating point numbers.
pub mod traits;
