use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use crate::bitset::bitset_traits;
use crate::{Square, BOARD_SIZE, NUM_SQUARES};

/// The low 81 bits, one per square.
const VALID_BITS: u128 = (1u128 << NUM_SQUARES) - 1;

/// A compact set of [`Square`]s, one bit per square.
///
/// Allows intersection/union/xor with other such sets via bitwise ops.
/// Iterating yields the squares in ascending index order.
///
/// ```
/// use tiletrack::{square, SquareSet};
/// let set = SquareSet::new().insert(square!("b2")).insert(square!("a9"));
/// assert_eq!(Vec::from_iter(set), vec![square!("a9"), square!("b2")]);
/// ```
///
/// This is an immutable type, so `insert` returns a new `SquareSet`
/// (except for `std::ops::BitXxxAssign` trait methods).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareSet {
    // Only the low 81 bits are used.
    bits: u128,
}

impl SquareSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, square: Square) -> bool {
        self.bits & (1u128 << square.index()) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, square: Square) -> Self {
        Self {
            bits: self.bits | (1u128 << square.index()),
        }
    }

    pub fn is_disjoint(self, other: SquareSet) -> bool {
        self.bits & other.bits == 0
    }
}

bitset_traits!(SquareSet, VALID_BITS);

impl Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let bit = (self.bits >> (row * BOARD_SIZE + col)) & 1;
                write!(f, " {}", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut bits = 0;
        for square in iter {
            bits |= 1u128 << square.index();
        }
        Self { bits }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;

    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter { bits: self.bits }
    }
}

/// Iterator for a [`SquareSet`] that returns squares by ascending index.
#[derive(Clone, Copy, Debug)]
pub struct SquareSetIter {
    bits: u128,
}

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        // The number of trailing zeros is the square index
        let idx = self.bits.trailing_zeros();
        if idx >= u32::from(NUM_SQUARES) {
            return None;
        }
        // Clear the flag corresponding to this square
        self.bits ^= 1u128 << idx;
        Square::new(idx as i16)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SquareSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for SquareSetIter {}
