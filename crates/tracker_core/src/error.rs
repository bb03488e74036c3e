//! Error types for parsing and move submission.
//!
//! Contract violations (an out-of-range `Coord`) are not represented here;
//! they panic at the point of construction.

use thiserror::Error;

/// Failure to parse rank-file text such as `e2` or `e2e4`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected {expected} characters in {text:?}")]
    WrongLength { text: String, expected: usize },
    #[error("invalid file {0:?}, expected a..h")]
    InvalidFile(char),
    #[error("invalid rank {0:?}, expected 1..8")]
    InvalidRank(char),
}

/// Failure to parse a FEN placement or side-to-move field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("expected 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("invalid piece character {0:?}")]
    InvalidPiece(char),
    #[error("rank {rank} has a malformed empty-square run")]
    InvalidEmptyRun { rank: u8 },
    #[error("rank {rank} describes more than 8 files")]
    TooManyFiles { rank: u8 },
    #[error("rank {rank} describes fewer than 8 files")]
    NotEnoughFiles { rank: u8 },
    #[error("invalid side to move {0:?}, expected w or b")]
    InvalidSideToMove(String),
}

/// A submitted move that the position refuses to apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error("no piece on {0}")]
    EmptyStart(String),
    #[error("{0} is not a candidate move in this position")]
    NotACandidate(String),
}
