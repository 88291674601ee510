//! Figures on the field and the vector validity rules for their moves and
//! attacks.
use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

use crate::field::MoveError;
use crate::{Point, Rank, Vector};

/// Side a figure belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction this side's pawns advance in.
    pub(crate) fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Home rank of this side's pawns.
    pub(crate) fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank::new(1),
            Color::Black => Rank::new(6),
        }
    }
}

/// Kind of a figure, determining which vectors it may move and attack with.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Kind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Kind {
    /// FEN-style letter for this kind, in lowercase.
    fn letter(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Rook => 'r',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Kind::Pawn => "pawn",
            Kind::Knight => "knight",
            Kind::Bishop => "bishop",
            Kind::Rook => "rook",
            Kind::Queen => "queen",
            Kind::King => "king",
        })
    }
}

/// A colored figure standing on the field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Figure {
    color: Color,
    kind: Kind,
}

/// How a validated move travels from its source square.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MoveStep {
    /// Slides one square at a time with the given unit step; every square
    /// strictly between source and destination must be vacant.
    Slide(Vector),
    /// Jumps directly to the destination, ignoring figures in between.
    Jump,
}

impl Figure {
    /// Construct a figure of the given color and kind.
    #[inline]
    pub fn new(color: Color, kind: Kind) -> Self {
        Figure { color, kind }
    }

    /// Color of this figure.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Kind of this figure.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// FEN-style symbol: uppercase for white figures, lowercase for black.
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    /// Validate the displacement of a non-capturing move from `from` to `to`
    /// and return how the figure travels there.
    pub fn check_move(self, from: Point, to: Point) -> Result<MoveStep, MoveError> {
        let vector = Vector::between(from, to);
        match self.kind {
            Kind::Pawn => self.pawn_move(from, vector),
            kind => step_for(kind, vector),
        }
    }

    /// Validate the displacement of a capturing move from `from` to `to` and
    /// return how the figure travels there.
    pub fn check_attack(self, from: Point, to: Point) -> Result<MoveStep, MoveError> {
        let vector = Vector::between(from, to);
        match self.kind {
            Kind::Pawn => self.pawn_attack(vector),
            kind => step_for(kind, vector),
        }
    }

    /// Pawns move straight ahead one square, or two from their home rank.
    fn pawn_move(self, from: Point, vector: Vector) -> Result<MoveStep, MoveError> {
        let forward = self.color.forward();
        if vector.d_file() == 0 && vector.d_rank() == forward {
            Ok(MoveStep::Jump)
        } else if vector.d_file() == 0
            && vector.d_rank() == 2 * forward
            && from.rank() == self.color.pawn_rank()
        {
            Ok(MoveStep::Slide(vector.unit()))
        } else {
            Err(self.bad_vector(vector))
        }
    }

    /// Pawns capture one square ahead diagonally.
    fn pawn_attack(self, vector: Vector) -> Result<MoveStep, MoveError> {
        if vector.d_rank() == self.color.forward() && vector.d_file().abs() == 1 {
            Ok(MoveStep::Jump)
        } else {
            Err(self.bad_vector(vector))
        }
    }

    fn bad_vector(self, vector: Vector) -> MoveError {
        MoveError::BadVector {
            kind: self.kind,
            vector,
        }
    }
}

/// Vector validity for the kinds whose moves and attacks follow the same
/// pattern regardless of color.
fn step_for(kind: Kind, vector: Vector) -> Result<MoveStep, MoveError> {
    let bad = || MoveError::BadVector { kind, vector };
    match kind {
        // The bishop check only requires movement along both axes; a vector
        // that leaves the diagonal is caught by the path walk instead.
        Kind::Bishop => {
            if vector.d_rank() == 0 || vector.d_file() == 0 {
                Err(bad())
            } else {
                Ok(MoveStep::Slide(vector.unit()))
            }
        }
        Kind::Rook => {
            if vector.is_straight() {
                Ok(MoveStep::Slide(vector.unit()))
            } else {
                Err(bad())
            }
        }
        Kind::Queen => {
            if vector.is_straight() || vector.is_diagonal() {
                Ok(MoveStep::Slide(vector.unit()))
            } else {
                Err(bad())
            }
        }
        Kind::Knight => {
            let (dr, df) = (vector.d_rank().abs(), vector.d_file().abs());
            if (dr == 1 && df == 2) || (dr == 2 && df == 1) {
                Ok(MoveStep::Jump)
            } else {
                Err(bad())
            }
        }
        Kind::King => {
            let (dr, df) = (vector.d_rank().abs(), vector.d_file().abs());
            if dr.max(df) == 1 {
                Ok(MoveStep::Jump)
            } else {
                Err(bad())
            }
        }
        Kind::Pawn => unreachable!("pawn vectors are color and purpose dependent"),
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error used when parsing a figure from a character that isn't a FEN-style
/// figure symbol.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown figure symbol {0:?}")]
pub struct UnknownSymbol(pub char);

impl TryFrom<char> for Figure {
    type Error = UnknownSymbol;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => Kind::Pawn,
            'n' => Kind::Knight,
            'b' => Kind::Bishop,
            'r' => Kind::Rook,
            'q' => Kind::Queen,
            'k' => Kind::King,
            _ => return Err(UnknownSymbol(ch)),
        };
        Ok(Figure::new(color, kind))
    }
}
