use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point;

/// Displacement between two squares of the field, measured in ranks and
/// files. Each component fits in an i8 since the field is 8x8.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector {
    d_rank: i8,
    d_file: i8,
}

impl Vector {
    /// Construct a vector from its rank and file components.
    #[inline]
    pub fn new(d_rank: i8, d_file: i8) -> Self {
        Vector { d_rank, d_file }
    }

    /// The displacement that carries `from` onto `to`.
    pub fn between(from: Point, to: Point) -> Self {
        Vector {
            d_rank: to.rank().inner() as i8 - from.rank().inner() as i8,
            d_file: to.file().inner() as i8 - from.file().inner() as i8,
        }
    }

    /// Rank component (y).
    #[inline]
    pub fn d_rank(&self) -> i8 {
        self.d_rank
    }

    /// File component (x).
    #[inline]
    pub fn d_file(&self) -> i8 {
        self.d_file
    }

    /// True if both components are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.d_rank == 0 && self.d_file == 0
    }

    /// Unit step directions for walking square by square: each component
    /// reduced to its sign.
    pub fn unit(self) -> Vector {
        Vector {
            d_rank: self.d_rank.signum(),
            d_file: self.d_file.signum(),
        }
    }

    /// True for movement along exactly one axis.
    pub fn is_straight(&self) -> bool {
        (self.d_rank == 0) != (self.d_file == 0)
    }

    /// True for non-zero movement with equal magnitude along both axes.
    pub fn is_diagonal(&self) -> bool {
        self.d_rank != 0 && self.d_rank.abs() == self.d_file.abs()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.d_rank, self.d_file)
    }
}
