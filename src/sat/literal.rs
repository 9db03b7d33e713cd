#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Packed literal representation.
//!
//! In DIMACS text a literal is a signed integer whose magnitude names a
//! variable and whose sign names polarity; `0` is reserved as the clause
//! terminator. Internally a literal packs the variable into the low 31 bits
//! of a `u32` with the polarity in the top bit.

use core::ops::Neg;
use std::fmt;

/// A variable name, `1..=num_vars`.
pub type Variable = u32;

/// A variable together with a polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(u32);

impl Literal {
    /// Creates a literal for `var` with the given polarity (`true` means the
    /// positive literal).
    #[must_use]
    pub const fn new(var: Variable, polarity: bool) -> Self {
        Self(var & 0x7FFF_FFFF | ((polarity as u32) << 31))
    }

    /// The variable this literal names.
    #[must_use]
    pub const fn variable(self) -> Variable {
        self.0 & 0x7FFF_FFFF
    }

    /// `true` for the positive literal, `false` for the negated one.
    #[must_use]
    pub const fn polarity(self) -> bool {
        (self.0 >> 31) != 0
    }

    /// The complementary literal over the same variable.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self(self.0 ^ (1 << 31))
    }

    /// The 0-based bit position of this literal's variable in a mask.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.variable() - 1) as usize
    }

    /// Builds a literal from its signed DIMACS form.
    ///
    /// `value` must be non-zero; `0` is the clause terminator and never a
    /// live literal.
    #[must_use]
    pub const fn from_dimacs(value: i32) -> Self {
        Self::new(value.unsigned_abs(), value.is_positive())
    }

    /// The signed DIMACS form of this literal.
    #[must_use]
    pub const fn to_dimacs(self) -> i32 {
        let var = self.variable() as i32;
        if self.polarity() { var } else { -var }
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}
