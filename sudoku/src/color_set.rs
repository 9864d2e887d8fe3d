//! A fixed-capacity bitset over color indices.
//!
//! Every cell of a [`crate::Grid`] holds one of these: the set of colors the
//! cell may still take. `ColorSet` is a thin newtype over `u64` so that every
//! operation on it is a handful of machine instructions, cache-resident even
//! for the largest supported grid (64x64, where a single unit has 64 cells
//! each with up to 64 candidates).

use rand::Rng;
use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

pub const MAX_COLORS: u32 = 64;

/// A bitset of colors, one bit per color index in `[0, 64)`.
///
/// Invariant: for a grid of side `N`, bits `[N, 64)` are never set on any
/// `ColorSet` that participates in that grid -- callers that combine a
/// `ColorSet` with [`ColorSet::negate`] are responsible for masking the
/// result back down to `full(N)` (`negate` complements all 64 bits, not just
/// the first `N`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSet(u64);

impl ColorSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(u64::MAX);

    /// Bits `[0, size)` set. `size >= 64` saturates to [`Self::ALL`] instead
    /// of overflowing the shift.
    #[must_use]
    pub fn full(size: usize) -> Self {
        if size == 0 {
            Self::EMPTY
        } else if size as u32 >= MAX_COLORS {
            Self::ALL
        } else {
            Self(u64::MAX >> (MAX_COLORS - size as u32))
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    #[must_use]
    pub fn singleton(color: u32) -> Self {
        if color >= MAX_COLORS {
            Self::EMPTY
        } else {
            Self(1u64 << color)
        }
    }

    #[must_use]
    pub fn add(self, color: u32) -> Self {
        if color >= MAX_COLORS {
            self
        } else {
            Self(self.0 | (1u64 << color))
        }
    }

    #[must_use]
    pub fn discard(self, color: u32) -> Self {
        if color >= MAX_COLORS {
            self
        } else {
            Self(self.0 & !(1u64 << color))
        }
    }

    #[must_use]
    pub fn contains(self, color: u32) -> bool {
        color < MAX_COLORS && self.0 & (1u64 << color) != 0
    }

    /// Complements all 64 bits, not just the colors in use -- see the
    /// struct-level note on masking.
    #[must_use]
    pub fn negate(self) -> Self {
        Self(!self.0)
    }

    #[must_use]
    pub fn and(self, other: Self) -> Self {
        self & other
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        self | other
    }

    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        self ^ other
    }

    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        self == other
    }

    #[must_use]
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    #[must_use]
    pub fn is_singleton(self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    #[must_use]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    // lowest set bit, isolated
    #[must_use]
    pub fn rightmost(self) -> Self {
        Self(self.0 & self.0.wrapping_neg())
    }

    // highest set bit, isolated
    #[must_use]
    pub fn leftmost(self) -> Self {
        if self.0 == 0 {
            Self::EMPTY
        } else {
            Self(1u64 << (63 - self.0.leading_zeros()))
        }
    }

    #[must_use]
    pub fn as_singleton(self) -> Option<u32> {
        self.is_singleton().then(|| self.0.trailing_zeros())
    }

    /// Does not reseed `rng` -- callers own the generator so repeated calls
    /// stay reproducible under a fixed seed.
    #[must_use]
    pub fn random(self, rng: &mut impl Rng) -> Self {
        let count = self.count();
        if count == 0 {
            return Self::EMPTY;
        }
        let skip = rng.random_range(0..count);
        let mut remaining = self.0;
        for _ in 0..skip {
            remaining &= remaining - 1;
        }
        Self(remaining & remaining.wrapping_neg())
    }
}

impl BitAnd for ColorSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for ColorSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for ColorSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for ColorSet {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Sub<u32> for ColorSet {
    type Output = Self;
    fn sub(self, color: u32) -> Self::Output {
        self.discard(color)
    }
}

// consumes the set, lowest to highest
impl Iterator for ColorSet {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn full_masks_high_bits() {
        assert_eq!(ColorSet::full(0), ColorSet::EMPTY);
        assert_eq!(ColorSet::full(4).count(), 4);
        assert_eq!(ColorSet::full(64), ColorSet::ALL);
        assert_eq!(ColorSet::full(100), ColorSet::ALL);
        assert!(!ColorSet::full(4).contains(4));
        assert!(ColorSet::full(4).contains(3));
    }

    #[test]
    fn negate_is_unmasked() {
        // per the struct doc: negate flips all 64 bits, callers mask down
        let nine = ColorSet::full(9);
        let negated = nine.negate();
        assert!(negated.contains(9));
        assert!(negated.contains(63));
        assert_eq!(negated.and(ColorSet::full(9)), ColorSet::EMPTY);
    }

    #[test]
    fn subset_and_equal() {
        let a = ColorSet::singleton(2).add(3);
        let b = a.add(4);
        assert!(a.is_subset(b));
        assert!(!b.is_subset(a));
        assert!(a.equal(ColorSet::singleton(2).add(3)));
    }

    #[test]
    fn rightmost_leftmost() {
        let s = ColorSet::singleton(1).add(4).add(7);
        assert_eq!(s.rightmost(), ColorSet::singleton(1));
        assert_eq!(s.leftmost(), ColorSet::singleton(7));
        assert_eq!(ColorSet::EMPTY.leftmost(), ColorSet::EMPTY);
        assert_eq!(ColorSet::EMPTY.rightmost(), ColorSet::EMPTY);
    }

    #[test]
    fn singleton_and_count() {
        assert!(ColorSet::singleton(5).is_singleton());
        assert!(!ColorSet::EMPTY.is_singleton());
        assert!(!ColorSet::full(3).is_singleton());
        assert_eq!(ColorSet::singleton(5).as_singleton(), Some(5));
        assert_eq!(ColorSet::full(3).as_singleton(), None);
    }

    #[test]
    fn random_is_deterministic_under_fixed_seed() {
        let mut rng = SmallRng::seed_from_u64(7);
        let set = ColorSet::full(9);
        let mut seen = ColorSet::EMPTY;
        for _ in 0..9 {
            let picked = set.subtract(seen).random(&mut rng);
            assert!(picked.is_singleton());
            seen = seen.or(picked);
        }
        assert_eq!(seen, set);
        assert_eq!(ColorSet::EMPTY.random(&mut rng), ColorSet::EMPTY);
    }

    #[test]
    fn iterates_members_in_order() {
        let s = ColorSet::singleton(1).add(4).add(7);
        let members: Vec<u32> = s.collect();
        assert_eq!(members, vec![1, 4, 7]);
    }
}
