//! Chess move representation.
//!
//! This crate defines how a single chess move is represented, tagged with
//! its consequences, written to and read from coordinate notation and JSON,
//! and looked up in a list of legal moves. Board state and move generation
//! live elsewhere; they hand their candidates to [`MoveList::from_candidates`]
//! and get back fully tagged legal moves.

pub mod error;
pub mod position;
pub mod chess_move;
pub mod movelist;

pub use chess_move::{Move, MoveTag};
pub use error::ChessError;
pub use movelist::MoveList;
pub use position::{PieceType, Square};
