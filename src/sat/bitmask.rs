#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A growable bit mask sized to the variable count of a formula.
//!
//! Both clause literal masks and candidate interpretations are bit masks over
//! `num_vars` bits, so instance size is bounded only by memory, never by the
//! machine word. The mask is a thin wrapper over [`bit_vec::BitVec`] that adds
//! the block-wise popcount combinations the satisfaction bookkeeping needs.

use bit_vec::BitVec;

/// A fixed-length bit mask over `num_vars` bits, bit `i` standing for
/// variable `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitMask(BitVec);

impl BitMask {
    /// Creates a mask of `n_bits` zero bits.
    #[must_use]
    pub fn zeros(n_bits: usize) -> Self {
        Self(BitVec::from_elem(n_bits, false))
    }

    /// Number of bits in the mask.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the mask has no bits at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads bit `bit`. Out-of-range reads are `false`.
    #[must_use]
    pub fn get(&self, bit: usize) -> bool {
        self.0.get(bit).unwrap_or(false)
    }

    /// Writes bit `bit`.
    ///
    /// # Panics
    ///
    /// If `bit` is out of range.
    pub fn set(&mut self, bit: usize, value: bool) {
        self.0.set(bit, value);
    }

    /// Toggles bit `bit` and returns its new value.
    ///
    /// # Panics
    ///
    /// If `bit` is out of range.
    pub fn flip(&mut self, bit: usize) -> bool {
        let value = !self.get(bit);
        self.0.set(bit, value);
        value
    }

    /// Number of set bits.
    #[must_use]
    pub fn popcount(&self) -> u32 {
        self.0.blocks().map(u32::count_ones).sum()
    }

    /// Number of bits set in both `self` and `other`.
    ///
    /// Operates block-wise; the masks must have been created with the same
    /// bit length.
    #[must_use]
    pub fn popcount_and(&self, other: &Self) -> u32 {
        self.0
            .blocks()
            .zip(other.0.blocks())
            .map(|(a, b)| (a & b).count_ones())
            .sum()
    }

    /// Number of bits set in `self` and clear in `other`.
    ///
    /// Trailing bits of the final block are zero in `self`, so the complement
    /// of `other` cannot leak phantom bits into the count.
    #[must_use]
    pub fn popcount_and_not(&self, other: &Self) -> u32 {
        self.0
            .blocks()
            .zip(other.0.blocks())
            .map(|(a, b)| (a & !b).count_ones())
            .sum()
    }

    /// `true` if `self` and `other` share at least one set bit.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.popcount_and(other) > 0
    }

    /// Iterates the indices of set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, bit)| bit.then_some(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_flip() {
        let mut mask = BitMask::zeros(70);
        assert!(!mask.get(64));
        mask.set(64, true);
        assert!(mask.get(64));
        assert!(!mask.flip(64));
        assert!(mask.flip(64));
        assert_eq!(mask.popcount(), 1);
    }

    #[test]
    fn test_popcount_and() {
        let mut a = BitMask::zeros(100);
        let mut b = BitMask::zeros(100);
        for i in [0, 31, 32, 63, 64, 99] {
            a.set(i, true);
        }
        for i in [31, 64, 65] {
            b.set(i, true);
        }
        assert_eq!(a.popcount_and(&b), 2);
        assert_eq!(a.popcount_and_not(&b), 4);
        assert_eq!(b.popcount_and_not(&a), 1);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_popcount_and_not_ignores_trailing_bits() {
        // 33 bits leaves 31 unused bits in the second block.
        let mut a = BitMask::zeros(33);
        a.set(32, true);
        let b = BitMask::zeros(33);
        assert_eq!(a.popcount_and_not(&b), 1);
        assert_eq!(b.popcount_and_not(&a), 0);
    }

    #[test]
    fn test_ones() {
        let mut mask = BitMask::zeros(40);
        mask.set(3, true);
        mask.set(39, true);
        assert_eq!(mask.ones().collect::<Vec<_>>(), vec![3, 39]);
    }
}
