//! Movement rules for classic chess figures.
//!
//! The crate is built from three layers: strongly typed board coordinates
//! ([`Point`], [`Rank`], [`File`]) with the displacement [`Vector`]s between
//! them, [`Figure`] values that validate a move or attack vector for their
//! kind, and a [`Field`] that holds the figures and carries out moves,
//! attacks, and the path-clearance check between squares.

pub use collections::indexed::{IncorrectSize, Values};
pub use coordinates::{File, OutOfRange, Point, Rank, Vector};
pub use field::{Field, MoveError};
pub use figure::{Color, Figure, Kind, MoveStep, UnknownSymbol};

mod collections;
#[macro_use]
mod coordinates;
mod field;
mod figure;

/// Set up for testing -- enables logging.
#[cfg(test)]
pub(crate) fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
