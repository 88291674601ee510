//! The playing field: figure placement, move execution, and path clearance.
use std::convert::{TryFrom, TryInto};
use std::fmt;
use std::ops::{Index, IndexMut};

use log::{debug, trace};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::indexed::{FixedSizeIndex, IncorrectSize, IndexMap};
use crate::figure::MoveStep;
use crate::{Color, Figure, File, Kind, Point, Rank, Vector};

/// Error raised when a move or attack cannot be carried out.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MoveError {
    /// The source square holds no figure.
    #[error("no figure on {0}")]
    Vacant(Point),
    /// The destination of a non-capturing move is occupied.
    #[error("square {0} is already occupied")]
    Occupied(Point),
    /// The destination of an attack holds no figure to capture.
    #[error("nothing to capture on {0}")]
    NoTarget(Point),
    /// The destination of an attack holds a figure of the attacker's color.
    #[error("cannot capture a friendly figure on {0}")]
    FriendlyFire(Point),
    /// The displacement is not one the figure's kind can move with.
    #[error("incorrect move: {kind} cannot move with vector {vector}")]
    BadVector { kind: Kind, vector: Vector },
    /// A figure stands strictly between source and destination.
    #[error("path is blocked by a figure on {0}")]
    Blocked(Point),
    /// Walking by the unit step leaves the field without ever reaching the
    /// destination.
    #[error("no path from {from} to {to} with step {step}")]
    NoPath {
        from: Point,
        to: Point,
        step: Vector,
    },
}

/// An 8x8 playing field with figures optionally standing on its squares.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Field(IndexMap<Point, Option<Figure>>);

impl Field {
    /// Total number of squares on the field.
    pub const SIZE: usize = IndexMap::<Point, Option<Figure>>::LEN;

    /// Create a field with no figures on it.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a field with the conventional starting arrangement.
    pub fn standard() -> Self {
        const BACK: [Kind; 8] = [
            Kind::Rook,
            Kind::Knight,
            Kind::Bishop,
            Kind::Queen,
            Kind::King,
            Kind::Bishop,
            Kind::Knight,
            Kind::Rook,
        ];
        let mut field = Field::new();
        for (file, &kind) in File::values().zip(BACK.iter()) {
            field.place(Point::new(Rank::new(0), file), Figure::new(Color::White, kind));
            field.place(Point::new(Rank::new(7), file), Figure::new(Color::Black, kind));
        }
        for file in File::values() {
            field.place(
                Point::new(Rank::new(1), file),
                Figure::new(Color::White, Kind::Pawn),
            );
            field.place(
                Point::new(Rank::new(6), file),
                Figure::new(Color::Black, Kind::Pawn),
            );
        }
        field
    }

    /// Put a figure on the given square, returning whatever stood there
    /// before.
    pub fn place(&mut self, point: Point, figure: Figure) -> Option<Figure> {
        self.0[point].replace(figure)
    }

    /// Remove and return the figure on the given square, if any.
    pub fn take(&mut self, point: Point) -> Option<Figure> {
        self.0[point].take()
    }

    /// Iterator over all figures on the field with their squares, in
    /// rank-major order.
    pub fn figures(&self) -> impl Iterator<Item = (Point, Figure)> + '_ {
        self.0.iter().filter_map(|(point, fig)| fig.map(|fig| (point, fig)))
    }

    /// Check that every square strictly between `from` and `to` is vacant
    /// when walking by `step` squares at a time.
    ///
    /// Fails with [`MoveError::Blocked`] on the first occupied intermediate
    /// square, and with [`MoveError::NoPath`] if the walk leaves the field
    /// without reaching `to`. The destination square itself is not examined.
    pub fn can_go_through(&self, from: Point, to: Point, step: Vector) -> Result<(), MoveError> {
        assert!(!step.is_zero(), "path step must be non-zero");
        let mut at = from;
        loop {
            at = match at.offset(step) {
                Some(next) => next,
                None => return Err(MoveError::NoPath { from, to, step }),
            };
            if at == to {
                return Ok(());
            }
            if self.0[at].is_some() {
                trace!("path {} -> {} blocked on {}", from, to, at);
                return Err(MoveError::Blocked(at));
            }
        }
    }

    /// Move the figure on `from` to the vacant square `to`, validating the
    /// displacement for the figure's kind and, for sliding figures, that the
    /// path between the squares is clear.
    pub fn try_move(&mut self, from: Point, to: Point) -> Result<(), MoveError> {
        let figure = self.0[from].ok_or(MoveError::Vacant(from))?;
        if self.0[to].is_some() {
            return Err(MoveError::Occupied(to));
        }
        if let MoveStep::Slide(step) = figure.check_move(from, to)? {
            self.can_go_through(from, to, step)?;
        }
        debug!("{} moves {} -> {}", figure, from, to);
        self.0[from] = None;
        self.0[to] = Some(figure);
        Ok(())
    }

    /// Move the figure on `from` onto `to`, capturing the enemy figure
    /// standing there. Returns the captured figure.
    pub fn try_attack(&mut self, from: Point, to: Point) -> Result<Figure, MoveError> {
        let figure = self.0[from].ok_or(MoveError::Vacant(from))?;
        let target = self.0[to].ok_or(MoveError::NoTarget(to))?;
        if target.color() == figure.color() {
            return Err(MoveError::FriendlyFire(to));
        }
        if let MoveStep::Slide(step) = figure.check_attack(from, to)? {
            self.can_go_through(from, to, step)?;
        }
        debug!("{} takes {} on {} (from {})", figure, target, to, from);
        self.0[from] = None;
        self.0[to] = Some(figure);
        Ok(target)
    }
}

impl TryFrom<Vec<Option<Figure>>> for Field {
    type Error = IncorrectSize<Point, Option<Figure>, Vec<Option<Figure>>>;

    fn try_from(data: Vec<Option<Figure>>) -> Result<Self, Self::Error> {
        Ok(Field(data.try_into()?))
    }
}

impl From<Field> for Vec<Option<Figure>> {
    #[inline]
    fn from(field: Field) -> Self {
        field.0.into()
    }
}

impl Index<Point> for Field {
    type Output = Option<Figure>;

    fn index(&self, point: Point) -> &Option<Figure> {
        &self.0[point]
    }
}

impl IndexMut<Point> for Field {
    fn index_mut(&mut self, point: Point) -> &mut Option<Figure> {
        &mut self.0[point]
    }
}

impl fmt::Display for Field {
    /// Renders the field rank by rank, top rank first, with `.` for vacant
    /// squares.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in Rank::values().rev() {
            for file in File::values() {
                match self.0[Point::new(rank, file)] {
                    Some(figure) => write!(f, "{}", figure)?,
                    None => f.write_str(".")?,
                }
            }
            if rank.idx() != 0 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;

    impl From<[&str; 8]> for Field {
        /// Convenience method for building a field in a test. Takes 8 rows of
        /// 8 characters, top rank first. `.` means a vacant square; any other
        /// character must be a FEN-style figure symbol.
        fn from(rows: [&str; 8]) -> Self {
            let mut field = Field::new();
            for (r, row) in rows.iter().rev().enumerate() {
                assert!(row.len() == 8);
                for (c, ch) in row.chars().enumerate() {
                    if ch != '.' {
                        let point = Point::new(Rank::new(r as u8), File::new(c as u8));
                        field.place(point, Figure::try_from(ch).expect("bad figure symbol"));
                    }
                }
            }
            field
        }
    }

    fn pt(rank: u8, file: u8) -> Point {
        Point::new(Rank::new(rank), File::new(file))
    }

    #[test]
    fn bishop_moves_diagonally() {
        crate::setup();

        let mut field = Field::from([
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "..B.....",
        ]);
        field.try_move(pt(0, 2), pt(4, 6)).unwrap();
        assert_eq!(field[pt(0, 2)], None);
        assert_eq!(
            field[pt(4, 6)],
            Some(Figure::new(Color::White, Kind::Bishop))
        );
        field.try_move(pt(4, 6), pt(1, 3)).unwrap();
        assert_eq!(
            field[pt(1, 3)],
            Some(Figure::new(Color::White, Kind::Bishop))
        );
    }

    #[test]
    fn bishop_rejects_axis_vectors() {
        crate::setup();

        let mut field = Field::new();
        field.place(pt(0, 2), Figure::new(Color::White, Kind::Bishop));
        assert_eq!(
            field.try_move(pt(0, 2), pt(0, 5)),
            Err(MoveError::BadVector {
                kind: Kind::Bishop,
                vector: Vector::new(0, 3),
            })
        );
        assert_eq!(
            field.try_move(pt(0, 2), pt(5, 2)),
            Err(MoveError::BadVector {
                kind: Kind::Bishop,
                vector: Vector::new(5, 0),
            })
        );
        // The figure stays put on failure.
        assert_eq!(
            field[pt(0, 2)],
            Some(Figure::new(Color::White, Kind::Bishop))
        );
    }

    #[test]
    fn bad_vector_message_names_vector() {
        let mut field = Field::new();
        field.place(pt(0, 2), Figure::new(Color::White, Kind::Bishop));
        let err = field.try_move(pt(0, 2), pt(0, 5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incorrect move: bishop cannot move with vector (0, 3)"
        );
    }

    #[test]
    fn bishop_off_diagonal_vector_has_no_path() {
        crate::setup();

        let mut field = Field::new();
        field.place(pt(0, 0), Figure::new(Color::White, Kind::Bishop));
        // (2, 1) passes the vector check but the unit-step walk can never
        // land on the destination.
        assert_eq!(
            field.try_move(pt(0, 0), pt(2, 1)),
            Err(MoveError::NoPath {
                from: pt(0, 0),
                to: pt(2, 1),
                step: Vector::new(1, 1),
            })
        );
    }

    #[test]
    fn blocked_path() {
        crate::setup();

        let mut field = Field::from([
            "........",
            "........",
            "........",
            "........",
            "....p...",
            "........",
            "........",
            "B.......",
        ]);
        assert_eq!(
            field.try_move(pt(0, 0), pt(5, 5)),
            Err(MoveError::Blocked(pt(3, 4)))
        );
        // Stopping short of the blocker is fine.
        field.try_move(pt(0, 0), pt(2, 2)).unwrap();
    }

    #[test]
    fn path_ignores_destination_occupancy() {
        crate::setup();

        let field = Field::from([
            "........",
            "........",
            "........",
            "........",
            "...p....",
            "........",
            "........",
            "B.......",
        ]);
        // can_go_through only inspects squares strictly between, so walking
        // exactly onto the occupied square succeeds while walking past it
        // does not.
        field
            .can_go_through(pt(0, 0), pt(3, 3), Vector::new(1, 1))
            .unwrap();
        assert_eq!(
            field.can_go_through(pt(0, 0), pt(4, 4), Vector::new(1, 1)),
            Err(MoveError::Blocked(pt(3, 3)))
        );
    }

    #[test]
    fn attack_captures_enemy() {
        crate::setup();

        let mut field = Field::from([
            "........",
            "........",
            "........",
            "....q...",
            "........",
            "........",
            "........",
            "B.......",
        ]);
        let captured = field.try_attack(pt(0, 0), pt(4, 4)).unwrap();
        assert_eq!(captured, Figure::new(Color::Black, Kind::Queen));
        assert_eq!(
            field[pt(4, 4)],
            Some(Figure::new(Color::White, Kind::Bishop))
        );
        assert_eq!(field[pt(0, 0)], None);
    }

    #[test]
    fn attack_errors() {
        crate::setup();

        let mut field = Field::from([
            "........",
            "........",
            "........",
            "....P...",
            "........",
            "........",
            "........",
            "B...r...",
        ]);
        assert_eq!(
            field.try_attack(pt(0, 0), pt(4, 4)),
            Err(MoveError::FriendlyFire(pt(4, 4)))
        );
        assert_eq!(
            field.try_attack(pt(0, 0), pt(3, 3)),
            Err(MoveError::NoTarget(pt(3, 3)))
        );
        assert_eq!(
            field.try_attack(pt(1, 1), pt(4, 4)),
            Err(MoveError::Vacant(pt(1, 1)))
        );
        // Attacks also respect the vector rules.
        assert_eq!(
            field.try_attack(pt(0, 0), pt(0, 4)),
            Err(MoveError::BadVector {
                kind: Kind::Bishop,
                vector: Vector::new(0, 4),
            })
        );
    }

    #[test]
    fn move_to_occupied_square() {
        crate::setup();

        let mut field = Field::new();
        field.place(pt(0, 0), Figure::new(Color::White, Kind::Rook));
        field.place(pt(0, 5), Figure::new(Color::Black, Kind::Rook));
        assert_eq!(
            field.try_move(pt(0, 0), pt(0, 5)),
            Err(MoveError::Occupied(pt(0, 5)))
        );
    }

    #[test]
    fn knight_jumps_over_figures() {
        crate::setup();

        let mut field = Field::standard();
        field.try_move(pt(0, 1), pt(2, 2)).unwrap();
        assert_eq!(
            field[pt(2, 2)],
            Some(Figure::new(Color::White, Kind::Knight))
        );
    }

    #[test]
    fn pawn_double_move_needs_clear_path() {
        crate::setup();

        let mut field = Field::standard();
        field.try_move(pt(1, 4), pt(3, 4)).unwrap();

        let mut blocked = Field::from([
            "........",
            "........",
            "........",
            "........",
            "........",
            "....n...",
            "....P...",
            "........",
        ]);
        assert_eq!(
            blocked.try_move(pt(1, 4), pt(3, 4)),
            Err(MoveError::Blocked(pt(2, 4)))
        );
    }

    #[test]
    fn standard_setup() {
        crate::setup();

        let field = Field::standard();
        assert_eq!(field.figures().count(), 32);
        assert_eq!(field[pt(0, 4)], Some(Figure::new(Color::White, Kind::King)));
        assert_eq!(field[pt(7, 4)], Some(Figure::new(Color::Black, Kind::King)));
        assert_eq!(field[pt(0, 3)], Some(Figure::new(Color::White, Kind::Queen)));
        for file in 0..8 {
            assert_eq!(
                field[pt(1, file)],
                Some(Figure::new(Color::White, Kind::Pawn))
            );
            assert_eq!(
                field[pt(6, file)],
                Some(Figure::new(Color::Black, Kind::Pawn))
            );
        }
    }

    #[test]
    fn from_vec_wrong_size() {
        assert!(Field::try_from(vec![None; 63]).is_err());
        let field = Field::try_from(vec![None; Field::SIZE]).unwrap();
        assert_eq!(field, Field::new());
    }

    #[test]
    fn display_renders_ranks_top_first() {
        let field = Field::from([
            "........",
            "........",
            "........",
            "....q...",
            "........",
            "........",
            "........",
            "B.......",
        ]);
        let rendered = field.to_string();
        let rows: Vec<_> = rendered.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[3], "....q...");
        assert_eq!(rows[7], "B.......");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn field_round_trip() {
            let field = Field::standard();
            let ser = serde_json::to_string(&field).expect("could not serialize");
            let de: Field = serde_json::from_str(&ser).expect("could not deserialize");
            assert_eq!(de, field);
        }

        #[test]
        fn deserialize_wrong_length() {
            let de: Result<Field, _> = serde_json::from_str("[null,null,null]");
            assert!(de.is_err());
        }
    }
}
