use std::convert::{TryFrom, TryInto};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::indexed::FixedSizeIndex;
use crate::{File, OutOfRange, Rank, Vector};

/// Coordinates of a single square on the field.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Rank (y).
    rank: Rank,
    /// File (x).
    file: File,
}

impl Point {
    /// Construct a new point. Since this is (rank, file), note that it is (y, x).
    #[inline]
    pub fn new(rank: Rank, file: File) -> Self {
        Point { rank, file }
    }

    /// Get the rank of this point (y).
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Get the file of this point (x).
    #[inline]
    pub fn file(&self) -> File {
        self.file
    }

    /// The square reached by applying `vector` to this point, or `None` if
    /// that square lies outside the field.
    pub fn offset(self, vector: Vector) -> Option<Point> {
        let rank = self.rank.inner() as i8 + vector.d_rank();
        let file = self.file.inner() as i8 + vector.d_file();
        match (rank.try_into(), file.try_into()) {
            (Ok(rank), Ok(file)) => Some(Point::new(rank, file)),
            _ => None,
        }
    }
}

impl fmt::Display for Point {
    /// Points display in algebraic notation, e.g. `e4`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl<T, U> TryFrom<(T, U)> for Point
where
    T: TryInto<Rank> + Copy + fmt::Debug,
    U: TryInto<File> + Copy + fmt::Debug,
{
    type Error = OutOfRange<(T, U)>;

    /// Converts a (y-rank, x-file) pair to a Point.
    fn try_from((rank, file): (T, U)) -> Result<Self, Self::Error> {
        let r = rank.try_into().map_err(|_| OutOfRange((rank, file)))?;
        let c = file.try_into().map_err(|_| OutOfRange((rank, file)))?;
        Ok(Point::new(r, c))
    }
}

impl FixedSizeIndex for Point {
    const NUM_INDEXES: usize = Rank::SIZE * File::SIZE;

    fn idx(&self) -> usize {
        self.rank.idx() * File::NUM_INDEXES + self.file.idx()
    }

    fn from_idx(idx: usize) -> Self {
        assert!(
            idx < Self::NUM_INDEXES,
            "flat index must be in range [0, {}), got {}",
            Self::NUM_INDEXES,
            idx
        );
        let rank = Rank::new((idx / File::NUM_INDEXES) as u8);
        let file = File::new((idx % File::NUM_INDEXES) as u8);
        Point { rank, file }
    }
}
