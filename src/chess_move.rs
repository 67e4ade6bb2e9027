//! The move value type.
//!
//! A `Move` is an origin square, a destination square, an optional promotion
//! piece and a set of `MoveTag`s describing what the move does on the board.
//! Tags are filled in by the code that builds legal move lists and are never
//! cleared. They are not part of a move's identity: two moves are the same
//! move when their coordinate rendering ("e2e4", "e7e8q") is the same.

use bitflags::bitflags;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ChessError;
use crate::position::{PieceType, Square};

bitflags! {
    /// Notable consequences of a move.
    #[derive(Default)]
    pub struct MoveTag: u16 {
        const KING_SIDE_CASTLE = 1 << 0;
        const QUEEN_SIDE_CASTLE = 1 << 1;
        const CAPTURE = 1 << 2;
        /// Always set together with `CAPTURE`.
        const EN_PASSANT = 1 << 3;
        /// The move puts the opponent in check.
        const CHECK = 1 << 4;
        /// The move leaves the mover's own king in check. Moves carrying this
        /// are dropped before a move list is handed out.
        const IN_CHECK = 1 << 5;
    }
}

/// A movement of a piece from one square to another.
#[derive(Copy, Clone)]
pub struct Move {
    origin: Square,
    destination: Square,
    promotion: Option<PieceType>,
    tags: MoveTag,
}

impl Move {
    /// Creates a move without checking it against any board.
    ///
    /// # Arguments
    ///
    /// * `origin` - The square the piece moves from
    /// * `destination` - The square the piece moves to
    /// * `promotion` - The piece a pawn promotes to, if any
    /// * `tags` - Consequences already known at creation time
    pub fn new(origin: Square, destination: Square, promotion: Option<PieceType>, tags: MoveTag) -> Move {
        Move {
            origin,
            destination,
            promotion,
            tags,
        }
    }

    pub fn origin(&self) -> Square {
        self.origin
    }

    pub fn destination(&self) -> Square {
        self.destination
    }

    pub fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }

    pub fn tags(&self) -> MoveTag {
        self.tags
    }

    /// Returns true if any of the bits in `tag` are set on this move.
    ///
    /// Passing several flags at once asks whether any of them apply, not
    /// whether all of them do.
    pub fn has_tag(&self, tag: MoveTag) -> bool {
        self.tags.intersects(tag)
    }

    pub(crate) fn add_tag(&mut self, tag: MoveTag) {
        self.tags.insert(tag);
    }

    /// Encodes the move as a JSON string such as `"e7e8q"`.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a move from a JSON string. The result never carries tags.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Move, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Coordinate notation, e.g. "e2e4" or "e7e8q". This is not algebraic
/// notation: there is no capture or check marker and no disambiguation.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("uci", &format_args!("{}", self))
            .field("tags", &self.tags)
            .finish()
    }
}

// Tags are derived data and do not take part in equality.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.destination == other.destination
            && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.destination.hash(state);
        self.promotion.hash(state);
    }
}

impl FromStr for Move {
    type Err = ChessError;

    /// Parses coordinate notation. Only the first five bytes are looked at;
    /// the decoded move has no tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err(ChessError::IncorrectLength(s.to_string()));
        }

        let origin = s
            .get(0..2)
            .and_then(Square::lookup)
            .ok_or_else(|| ChessError::InvalidOrigin(s.to_string()))?;
        let destination = s
            .get(2..4)
            .and_then(Square::lookup)
            .ok_or_else(|| ChessError::InvalidDestination(s.to_string()))?;

        let promotion = if s.len() > 4 {
            let piece_type = s
                .get(4..5)
                .and_then(PieceType::lookup)
                .ok_or_else(|| ChessError::InvalidPromotion(s.to_string()))?;
            Some(piece_type)
        } else {
            None
        };

        Ok(Move::new(origin, destination, promotion, MoveTag::empty()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Move {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
