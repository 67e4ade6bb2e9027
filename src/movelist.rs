//! Ordered lists of fully tagged moves and lookup over them.

use std::ops::Index;
use std::slice;

use crate::chess_move::{Move, MoveTag};
use crate::error::ChessError;

#[derive(Debug, Clone, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Builds a legal move list out of raw candidate moves.
    ///
    /// This is the only place tags are recorded on a move. `classify` is
    /// called once per candidate and returns the consequences of playing
    /// it (captures, checks, castling, ...). Candidates classified as
    /// `IN_CHECK` leave the mover's king attacked and are dropped, so no
    /// move in the returned list ever carries that tag.
    ///
    /// # Arguments
    ///
    /// * `candidates` - Pseudo-legal moves, in generation order
    /// * `classify` - Computes the tags of a candidate against the board
    ///
    /// # Returns
    ///
    /// * The tagged legal moves, in the order they were generated
    pub fn from_candidates<I, F>(candidates: I, mut classify: F) -> MoveList
    where
        I: IntoIterator<Item = Move>,
        F: FnMut(&Move) -> MoveTag,
    {
        let moves = candidates
            .into_iter()
            .filter_map(|mut candidate| {
                let tags = classify(&candidate);
                candidate.add_tag(tags);
                if candidate.has_tag(MoveTag::IN_CHECK) {
                    None
                } else {
                    Some(candidate)
                }
            })
            .collect();
        MoveList { moves }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Finds the move in this list whose coordinate notation matches
    /// `target`, ignoring tags. The first match wins. An absent target
    /// is never found.
    pub fn find<'a>(&self, target: impl Into<Option<&'a Move>>) -> Option<&Move> {
        let target = target.into()?;
        let wanted = target.to_string();
        self.moves.iter().find(|mv| mv.to_string() == wanted)
    }

    /// Resolves a bare input move (from a user or a protocol) to its
    /// tagged counterpart in this list.
    pub fn resolve(&self, input: &Move) -> Result<&Move, ChessError> {
        self.find(input)
            .ok_or_else(|| ChessError::IllegalMove(input.to_string()))
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveList { moves: iter.into_iter().collect() }
    }
}
