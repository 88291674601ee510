//! Strongly typed locations on the field -- ranks, files, points, and the
//! displacement vectors between them.
use std::fmt;

use thiserror::Error;

pub use file::File;
pub use point::Point;
pub use rank::Rank;
pub use vector::Vector;

#[macro_use]
mod shared_macros;

mod file;
mod point;
mod rank;
mod vector;

/// Error used when creating a coordinate type from a number that's out of range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("value {0:?} is out of range")]
pub struct OutOfRange<T: fmt::Debug>(pub T);
