#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The clause database: an immutable CNF formula plus its occurrence index.
//!
//! Built once per solve and never mutated afterwards. Clause identity is the
//! index in creation order; the occurrence index maps each signed literal to
//! the ordered clause indices containing it, which is what makes the flip
//! update in [`crate::sat::assignment`] strictly incremental.

use crate::sat::clause::Clause;
use crate::sat::error::SolverError;
use crate::sat::literal::{Literal, Variable};
use std::ops::Index;

/// Clause indices per signed literal, as two parallel per-variable tables
/// rather than a signed-integer-keyed map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OccurrenceLists {
    positive: Vec<Vec<usize>>,
    negative: Vec<Vec<usize>>,
}

impl OccurrenceLists {
    fn new(num_vars: usize) -> Self {
        Self {
            positive: vec![Vec::new(); num_vars],
            negative: vec![Vec::new(); num_vars],
        }
    }

    /// Records that clause `clause_idx` contains `lit`. Clauses are added in
    /// index order, so a duplicate occurrence within one clause shows up as a
    /// repeat of the tail element and is skipped; one mask bit must mean one
    /// list entry or the incremental counter update would double-step.
    fn push(&mut self, lit: Literal, clause_idx: usize) {
        let list = if lit.polarity() {
            &mut self.positive[lit.index()]
        } else {
            &mut self.negative[lit.index()]
        };
        if list.last() != Some(&clause_idx) {
            list.push(clause_idx);
        }
    }

    /// The ordered clause indices containing `lit`.
    #[must_use]
    pub fn clauses_with(&self, lit: Literal) -> &[usize] {
        if lit.polarity() {
            &self.positive[lit.index()]
        } else {
            &self.negative[lit.index()]
        }
    }
}

/// An immutable formula in conjunctive normal form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cnf {
    /// The clauses, in creation order.
    pub clauses: Vec<Clause>,
    /// Number of variables; variables are named `1..=num_vars`.
    pub num_vars: usize,
    occurrences: OccurrenceLists,
}

impl Cnf {
    /// Builds the clause database from raw signed-integer clauses.
    ///
    /// # Errors
    ///
    /// [`SolverError::NonPositiveVariableCount`] if `num_vars` is zero,
    /// [`SolverError::EmptyClause`] if a clause holds no literals, and
    /// [`SolverError::LiteralOutOfRange`] if a literal is zero or names a
    /// variable beyond `num_vars`.
    pub fn new(num_vars: usize, clauses: Vec<Vec<i32>>) -> Result<Self, SolverError> {
        if num_vars == 0 {
            return Err(SolverError::NonPositiveVariableCount(0));
        }

        let mut db = Vec::with_capacity(clauses.len());
        let mut occurrences = OccurrenceLists::new(num_vars);

        for (clause_idx, raw) in clauses.into_iter().enumerate() {
            if raw.is_empty() {
                return Err(SolverError::EmptyClause(clause_idx));
            }
            for &value in &raw {
                if value == 0 || value.unsigned_abs() as usize > num_vars {
                    return Err(SolverError::LiteralOutOfRange {
                        literal: value,
                        num_vars,
                    });
                }
                occurrences.push(Literal::from_dimacs(value), clause_idx);
            }
            db.push(Clause::new(
                raw.iter().copied().map(Literal::from_dimacs),
                num_vars,
            ));
        }

        Ok(Self {
            clauses: db,
            num_vars,
            occurrences,
        })
    }

    /// Number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// `true` if the formula has no clauses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates the clauses in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The literal-to-clause index.
    #[must_use]
    pub const fn occurrences(&self) -> &OccurrenceLists {
        &self.occurrences
    }

    /// All variable names of the formula, `1..=num_vars`.
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        1..=self.num_vars as Variable
    }
}

impl Index<usize> for Cnf {
    type Output = Clause;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clauses[index]
    }
}
