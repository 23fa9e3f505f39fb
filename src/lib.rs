//! # A tableau simplex solver
//!
//! Linear programs in standard maximization form are solved using the primal Simplex Method on a
//! dense tableau, as described in the book Combinatorial Optimization by Christos H. Papadimitriou
//! and Kenneth Steiglitz.
//!
//! The problems should be feasible at the origin: maximize c^T x subject to Ax <= b, x >= 0 with
//! b >= 0. No console output is produced; progress can be followed through `tracing` events or a
//! trace hook, see `algorithm::simplex::Simplex::run`.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
