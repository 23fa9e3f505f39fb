//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in a dense format.
pub mod matrix;
