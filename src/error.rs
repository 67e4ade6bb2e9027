//! Error types for move parsing and lookup.

/// Domain errors raised while decoding or resolving moves.
///
/// Square and piece lookups, tag queries and accessors never fail; only
/// parsing text and resolving an input move against a legal list do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("chess: unable to unmarshal move: incorrect data length: '{0}'")]
    IncorrectLength(String),

    #[error("chess: unable to unmarshal move: invalid src square: '{0}'")]
    InvalidOrigin(String),

    #[error("chess: unable to unmarshal move: invalid dst square: '{0}'")]
    InvalidDestination(String),

    #[error("chess: unable to unmarshal move: invalid promo piece type: '{0}'")]
    InvalidPromotion(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid piece type: {0}")]
    InvalidPieceType(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),
}
