use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{board::Board, error::NotationError, types::*};

/// One ply, together with the square contents needed to reverse it.
///
/// Identity is the `(start, end)` pair alone: two moves built from the same
/// coordinates compare equal whatever board they were snapshotted from.
/// A move is only meaningful against the board it was built from.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub start: Coord,
    pub end: Coord,
    /// Occupant of `start` before the move.
    pub piece_moved: Square,
    /// Occupant of `end` before the move, `Square::Empty` if none.
    pub piece_captured: Square,
}

impl Move {
    pub fn new(start: Coord, end: Coord, board: &Board) -> Self {
        Self {
            start,
            end,
            piece_moved: board.get(start),
            piece_captured: board.get(end),
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.piece_captured.is_empty()
    }

    /// True when the start square was empty. Such a move is well-formed but
    /// meaningless and must not be applied.
    pub fn moves_nothing(&self) -> bool {
        self.piece_moved.is_empty()
    }

    /// Simple rank-file notation, e.g. `e2e4`. No capture or check marks.
    pub fn notation(&self) -> String {
        let mut s = String::with_capacity(4);
        s.push(self.start.file_char());
        s.push(self.start.rank_char());
        s.push(self.end.file_char());
        s.push(self.end.rank_char());
        s
    }

    /// Parse `e2e4` style text into its start and end coordinates.
    pub fn parse_coords(text: &str) -> Result<(Coord, Coord), NotationError> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(NotationError::WrongLength {
                text: text.to_string(),
                expected: 4,
            });
        }
        let start = Coord::from_notation(&text[0..2])?;
        let end = Coord::from_notation(&text[2..4])?;
        Ok((start, end))
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
