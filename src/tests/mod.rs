//! # Test problems shared by the unit tests
//!
//! Convention for function names:
//!
//! * `fn standard_form()`
//! * `fn tableau_form()`
//! * `fn solution_values()`
