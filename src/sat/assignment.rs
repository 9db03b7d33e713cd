#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The mutable search state: a candidate interpretation plus, for every
//! clause, a live count of its currently-true literals.
//!
//! The counters are computed from scratch once per restart and then kept
//! current by [`Assignment::flip`], which touches exactly the clauses that
//! mention the flipped variable. The invariant maintained after every update
//! is
//!
//! ```text
//! counts[c] == popcount(interpretation & pos_mask[c])
//!            + popcount(!interpretation & neg_mask[c])
//! ```

use crate::sat::bitmask::BitMask;
use crate::sat::cnf::Cnf;
use crate::sat::literal::{Literal, Variable};

/// A satisfying assignment in DIMACS convention: entry `i` is `i + 1` if
/// variable `i + 1` is true and `-(i + 1)` otherwise.
pub type Solutions = Vec<i32>;

/// A candidate interpretation with per-clause true-literal counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    interpretation: BitMask,
    true_counts: Vec<u32>,
}

impl Assignment {
    /// Draws every variable independently and uniformly at random, then
    /// computes each clause counter in one pass over the formula.
    #[must_use]
    pub fn random(cnf: &Cnf, rng: &mut fastrand::Rng) -> Self {
        let mut interpretation = BitMask::zeros(cnf.num_vars);
        for bit in 0..cnf.num_vars {
            if rng.bool() {
                interpretation.set(bit, true);
            }
        }

        let true_counts = cnf
            .iter()
            .map(|clause| clause.true_literals(&interpretation))
            .collect();

        Self {
            interpretation,
            true_counts,
        }
    }

    /// Toggles `var` and incrementally updates the counters of exactly the
    /// clauses that mention it: clauses containing the newly-true literal
    /// gain a true literal, clauses containing the newly-false one lose one.
    ///
    /// # Panics
    ///
    /// If `var` is outside `1..=num_vars` of the formula this state was
    /// built from.
    pub fn flip(&mut self, var: Variable, cnf: &Cnf) {
        let now_true = self.interpretation.flip((var - 1) as usize);
        let gained = Literal::new(var, now_true);

        for &clause_idx in cnf.occurrences().clauses_with(gained) {
            self.true_counts[clause_idx] += 1;
        }
        for &clause_idx in cnf.occurrences().clauses_with(gained.negated()) {
            self.true_counts[clause_idx] -= 1;
        }
    }

    /// The truth value of `var` under the current interpretation.
    #[must_use]
    pub fn value(&self, var: Variable) -> bool {
        self.interpretation.get((var - 1) as usize)
    }

    /// The truth value of `lit` under the current interpretation.
    #[must_use]
    pub fn literal_value(&self, lit: Literal) -> bool {
        self.value(lit.variable()) == lit.polarity()
    }

    /// The live true-literal count of clause `clause_idx`.
    #[must_use]
    pub fn true_count(&self, clause_idx: usize) -> u32 {
        self.true_counts[clause_idx]
    }

    /// Indices of clauses with no true literal, in index order.
    pub fn unsatisfied(&self) -> impl Iterator<Item = usize> + '_ {
        self.true_counts
            .iter()
            .enumerate()
            .filter_map(|(idx, &count)| (count == 0).then_some(idx))
    }

    /// `true` if every clause has at least one true literal.
    #[must_use]
    pub fn all_satisfied(&self) -> bool {
        self.true_counts.iter().all(|&count| count > 0)
    }

    /// The current interpretation bits.
    #[must_use]
    pub const fn interpretation(&self) -> &BitMask {
        &self.interpretation
    }

    /// The interpretation as signed DIMACS literals, one per variable in
    /// order.
    #[must_use]
    pub fn solutions(&self) -> Solutions {
        (0..self.interpretation.len())
            .map(|bit| {
                let var = bit as i32 + 1;
                if self.interpretation.get(bit) { var } else { -var }
            })
            .collect()
    }
}
