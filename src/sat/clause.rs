//! Clauses as pairs of literal bit masks.
//!
//! A clause is the disjunction of an unordered set of literals, stored as two
//! masks over `num_vars` bits: one for positive occurrences and one for
//! negative ones. Masks make duplicate literals idempotent and let the number
//! of true literals under an interpretation fall out of two popcounts.

use crate::sat::bitmask::BitMask;
use crate::sat::literal::Literal;
use smallvec::SmallVec;

/// In-place literal buffer; most clauses in practice are short.
pub type LiteralList = SmallVec<[Literal; 8]>;

/// A disjunction of literals over `num_vars` variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clause {
    pos: BitMask,
    neg: BitMask,
}

impl Clause {
    /// Builds a clause from literals assumed validated against `num_vars`.
    ///
    /// Repeated literals collapse into a single mask bit. A clause holding
    /// both polarities of a variable is a tautology; it is stored as given
    /// and simply stays satisfied under every interpretation.
    #[must_use]
    pub fn new(literals: impl IntoIterator<Item = Literal>, num_vars: usize) -> Self {
        let mut pos = BitMask::zeros(num_vars);
        let mut neg = BitMask::zeros(num_vars);
        for lit in literals {
            if lit.polarity() {
                pos.set(lit.index(), true);
            } else {
                neg.set(lit.index(), true);
            }
        }
        Self { pos, neg }
    }

    /// The mask of positively occurring variables.
    #[must_use]
    pub const fn pos(&self) -> &BitMask {
        &self.pos
    }

    /// The mask of negatively occurring variables.
    #[must_use]
    pub const fn neg(&self) -> &BitMask {
        &self.neg
    }

    /// Number of distinct literals in the clause.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.pos.popcount() + self.neg.popcount()) as usize
    }

    /// `true` if the clause has no literals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if the clause contains the given literal.
    #[must_use]
    pub fn contains(&self, lit: Literal) -> bool {
        if lit.polarity() {
            self.pos.get(lit.index())
        } else {
            self.neg.get(lit.index())
        }
    }

    /// `true` if some variable occurs in both polarities.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.pos.intersects(&self.neg)
    }

    /// The clause's literals, positive occurrences first.
    #[must_use]
    pub fn literals(&self) -> LiteralList {
        let positive = self
            .pos
            .ones()
            .map(|bit| Literal::new(bit as u32 + 1, true));
        let negative = self
            .neg
            .ones()
            .map(|bit| Literal::new(bit as u32 + 1, false));
        positive.chain(negative).collect()
    }

    /// Number of literals evaluating true under `interpretation`: positive
    /// literals whose bit is set plus negative literals whose bit is clear.
    #[must_use]
    pub fn true_literals(&self, interpretation: &BitMask) -> u32 {
        self.pos.popcount_and(interpretation) + self.neg.popcount_and_not(interpretation)
    }
}
