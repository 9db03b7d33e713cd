#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The SAT engine: clause database, assignment state, move selection, and
//! the restart-driven search loop, plus the DIMACS adapter at the boundary.

pub mod assignment;
pub mod bitmask;
pub mod clause;
pub mod cnf;
pub mod dimacs;
pub mod error;
pub mod literal;
pub mod solver;
pub mod variable_selection;
