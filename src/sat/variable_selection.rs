#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! WalkSAT move selection.
//!
//! Given an unsatisfied clause, decide which of its variables to flip. Every
//! literal of the clause is scored by its *break count*: the number of
//! currently-satisfied clauses that would lose their only true literal if the
//! variable were flipped. Zero-break flips ("freebies") are always taken;
//! otherwise a noise parameter trades greed against diversification.

use crate::sat::assignment::Assignment;
use crate::sat::clause::{Clause, LiteralList};
use crate::sat::cnf::Cnf;
use crate::sat::literal::{Literal, Variable};

/// Default probability of a noise move when no freebie exists.
pub const DEFAULT_OMEGA: f64 = 0.4;

/// Number of clauses flipping `lit`'s variable would break.
///
/// `lit` is a literal of an unsatisfied clause, so it is currently false and
/// its complement is true. The clauses broken by the flip are exactly those
/// containing the complement with a true-literal count of one.
#[must_use]
pub fn break_count(lit: Literal, cnf: &Cnf, assignment: &Assignment) -> usize {
    cnf.occurrences()
        .clauses_with(lit.negated())
        .iter()
        .filter(|&&clause_idx| assignment.true_count(clause_idx) == 1)
        .count()
}

/// Picks the variable to flip within an unsatisfied clause.
///
/// Computes the minimum break count over the clause's literals and the set of
/// literals achieving it. A minimum of zero is a freebie and is taken
/// unconditionally (ties split uniformly). Otherwise, with probability
/// `omega` the choice is uniform over the *whole* clause, ignoring break
/// counts; with probability `1 - omega` it is uniform over the minimum-break
/// set.
///
/// # Panics
///
/// If the clause is empty; the clause database guarantees it is not.
#[must_use]
pub fn pick_flip(
    clause: &Clause,
    cnf: &Cnf,
    assignment: &Assignment,
    omega: f64,
    rng: &mut fastrand::Rng,
) -> Variable {
    let literals = clause.literals();
    assert!(!literals.is_empty(), "clauses are non-empty by construction");

    let mut break_min = usize::MAX;
    let mut best = LiteralList::new();
    for &lit in &literals {
        let score = break_count(lit, cnf, assignment);
        if score < break_min {
            break_min = score;
            best.clear();
            best.push(lit);
        } else if score == break_min {
            best.push(lit);
        }
    }

    let pool: &[Literal] = if break_min != 0 && rng.f64() < omega {
        &literals
    } else {
        &best
    };

    pool[rng.usize(..pool.len())].variable()
}
