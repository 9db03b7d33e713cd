//! Graph k-colouring by reduction to SAT.
//!
//! A consumer of the engine: builds a CNF instance from a graph, hands it to
//! the solver, and reads the colouring back out of the model. The engine is
//! incomplete, so a `None` answer means "gave up", never "not colourable".

pub mod solver;

pub use solver::{Coloring, Graph, color, decode, encode};
