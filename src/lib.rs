#![deny(missing_docs)]
//! A stochastic local search SAT solver in the WalkSAT family.
//!
//! The engine decides satisfiability of CNF formulas by randomized hill
//! climbing with restarts. It is incomplete: it can return a satisfying
//! assignment or, with a configured restart ceiling, give up with "unknown",
//! but it can never prove unsatisfiability.

/// The `sat` module holds the search engine and the DIMACS I/O boundary.
pub mod sat;

/// The `graph_coloring` module reduces graph k-colouring to SAT and decodes
/// models back into colourings.
pub mod graph_coloring;
