//! Error types for formula loading.
//!
//! All variants describe malformed input detected at load time; the search
//! itself cannot fail. Running out of restart budget is *not* an error: the
//! solver reports it as an unknown result instead (see [`crate::sat::solver`]).

use thiserror::Error;

/// Errors surfaced while building a formula from DIMACS text or raw clauses.
#[derive(Debug, Error)]
pub enum SolverError {
    /// No `p cnf <vars> <clauses>` line appeared before the first clause.
    #[error("missing `p cnf` problem line")]
    MissingProblemLine,

    /// The problem line did not match `p cnf <vars> <clauses>`.
    #[error("invalid problem line: {0:?}")]
    InvalidProblemLine(String),

    /// The declared variable count was zero or negative.
    #[error("variable count must be positive, got {0}")]
    NonPositiveVariableCount(i64),

    /// A clause contained no literals. An empty clause is trivially
    /// unsatisfiable, which a local-search engine can never report.
    #[error("clause {0} is empty")]
    EmptyClause(usize),

    /// A literal referenced a variable outside `1..=num_vars`.
    #[error("literal {literal} out of range for {num_vars} variables")]
    LiteralOutOfRange {
        /// The offending signed literal value.
        literal: i32,
        /// The declared variable count.
        num_vars: usize,
    },

    /// A clause token could not be parsed as a signed integer.
    #[error("invalid literal token {0:?}")]
    InvalidLiteral(String),

    /// An I/O failure while reading the input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
