use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

static COL_MAP: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
static ROW_MAP: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Every coordinate string ("a1" ..= "h8") mapped to its square.
static STR_TO_SQUARE: Lazy<HashMap<String, Square>> = Lazy::new(|| {
    Square::all().map(|square| (square.to_string(), square)).collect()
});

static STR_TO_PIECE_TYPE: Lazy<HashMap<&'static str, PieceType>> = Lazy::new(|| {
    PieceType::ALL
        .iter()
        .map(|&piece_type| (piece_type.as_str(), piece_type))
        .collect()
});

/// Renders a square index (0 = a1, 63 = h8) as its two character coordinate.
pub fn index_to_position(index: usize) -> String {
    let column = index % 8;
    let row = index / 8;
    format!("{}{}", COL_MAP[column], ROW_MAP[row])
}

/// One of the 64 board coordinates.
///
/// Squares are indexed rank by rank starting from a1, so a1 is 0, h1 is 7
/// and h8 is 63.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const E2: Square = Square(12);
    pub const E4: Square = Square(28);
    pub const E7: Square = Square(52);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    /// Builds a square from zero based file and rank.
    ///
    /// # Arguments
    ///
    /// * `file` - The file, 0 for the a-file up to 7 for the h-file
    /// * `rank` - The rank, 0 for the first rank up to 7 for the eighth
    ///
    /// # Returns
    ///
    /// * `Some(square)` when both coordinates are on the board, `None` otherwise
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file > 7 || rank > 7 {
            return None;
        }
        Some(Square(rank * 8 + file))
    }

    pub fn from_index(index: usize) -> Option<Square> {
        if index >= 64 {
            None
        } else {
            Some(Square(index as u8))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn file(self) -> u8 {
        self.0 % 8
    }

    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Iterates over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Looks a coordinate string up in the static square table.
    ///
    /// Anything other than an exact lowercase coordinate such as "e4" yields
    /// `None`.
    pub fn lookup(s: &str) -> Option<Square> {
        STR_TO_SQUARE.get(s).copied()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COL_MAP[self.file() as usize], ROW_MAP[self.rank() as usize])
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::lookup(s).ok_or_else(|| ChessError::InvalidSquare(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// The canonical lowercase letter used in coordinate notation.
    pub fn as_str(self) -> &'static str {
        match self {
            PieceType::Pawn => "p",
            PieceType::Rook => "r",
            PieceType::Knight => "n",
            PieceType::Bishop => "b",
            PieceType::Queen => "q",
            PieceType::King => "k",
        }
    }

    pub fn lookup(s: &str) -> Option<PieceType> {
        STR_TO_PIECE_TYPE.get(s).copied()
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceType {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::lookup(s).ok_or_else(|| ChessError::InvalidPieceType(s.to_string()))
    }
}
