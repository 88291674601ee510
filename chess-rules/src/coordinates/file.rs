use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::indexed::FixedSizeIndex;

/// Uniquely identifies a single file of the field, that is a vertical column
/// of squares. File 0 is the queenside rook file (`a`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8"),
    serde(into = "u8")
)]
pub struct File(u8);

impl File {
    /// Number of files on the field.
    pub const SIZE: usize = 8;

    /// Construct a file with the given index. Panic if out of bounds.
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

impl fmt::Display for File {
    /// Files display as the letters `a` through `h`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", (b'a' + self.0) as char)
    }
}

coord_fromint!(
    File,
    File::SIZE,
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

impl FixedSizeIndex for File {
    const NUM_INDEXES: usize = Self::SIZE;

    fn idx(&self) -> usize {
        self.0 as usize
    }

    fn from_idx(idx: usize) -> Self {
        idx.try_into().expect("index out of range")
    }
}
