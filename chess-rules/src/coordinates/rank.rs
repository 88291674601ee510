use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::indexed::FixedSizeIndex;

/// Uniquely identifies a single rank of the field, that is a horizontal row
/// of squares. Rank 0 is the white back rank.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8"),
    serde(into = "u8")
)]
pub struct Rank(u8);

impl Rank {
    /// Number of ranks on the field.
    pub const SIZE: usize = 8;

    /// Construct a rank with the given index. Panic if out of bounds.
    pub fn new(val: u8) -> Self {
        assert!((0..Self::SIZE as u8).contains(&val));
        Self(val)
    }

    /// Unwrap the inner u8 value.
    #[inline]
    pub(crate) fn inner(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    /// Ranks display 1-based, matching algebraic notation.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

coord_fromint!(
    Rank,
    Rank::SIZE,
    u8,
    i8,
    u16,
    i16,
    u32,
    i32,
    u64,
    i64,
    u128,
    i128,
    usize,
    isize
);

impl FixedSizeIndex for Rank {
    const NUM_INDEXES: usize = Self::SIZE;

    fn idx(&self) -> usize {
        self.0 as usize
    }

    fn from_idx(idx: usize) -> Self {
        idx.try_into().expect("index out of range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_iter() {
        let mut expected = Vec::with_capacity(8);
        for r in 0..8 {
            expected.push(Rank::new(r));
        }
        let result: Vec<_> = Rank::values().collect();
        assert_eq!(result, expected);
        for (idx, val) in result.iter().enumerate() {
            assert_eq!(val.idx(), idx);
        }
    }

    #[test]
    fn rank_from_int() {
        for r in 0..8 {
            assert_eq!(Rank::try_from(r as i32), Ok(Rank::new(r)));
        }
        for r in (-1024i32..0).chain(8..1024) {
            assert_eq!(Rank::try_from(r), Err(crate::OutOfRange(r)));
        }
    }

    #[test]
    fn rank_display() {
        let rendered: Vec<_> = Rank::values().map(|r| r.to_string()).collect();
        assert_eq!(rendered, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }
}
