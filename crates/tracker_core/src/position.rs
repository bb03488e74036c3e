use tracing::{debug, trace};

use crate::{
    board::Board,
    error::{FenError, MoveError},
    movegen::candidate_moves_into,
    moves::Move,
    types::*,
};

/// Board, side to move, and the log of applied moves.
///
/// The log is the only undo record: each entry carries the occupants of its
/// start and end squares from before it was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    white_to_move: bool,
    move_log: Vec<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            white_to_move: side_to_move == Color::White,
            move_log: Vec::new(),
        }
    }

    /// Reads the placement and side-to-move fields of a FEN string. Any
    /// further fields (castling, en-passant, clocks) are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::MissingField("placement"))?;
        let board = Board::from_placement(placement)?;
        let side = match parts.next() {
            Some("w") | None => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidSideToMove(other.to_string())),
        };
        Ok(Self::from_board(board, side))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Apply `mv` without validating it.
    ///
    /// The caller guarantees `mv.start` holds `mv.piece_moved` on this board,
    /// normally by taking `mv` from [`Position::legal_candidate_moves`].
    /// Only the start and end squares are touched.
    pub fn apply_move(&mut self, mv: Move) {
        trace!(mv = %mv, side = ?self.side_to_move(), "apply move");
        self.board.set(mv.start, Square::Empty);
        self.board.set(mv.end, mv.piece_moved);
        self.move_log.push(mv);
        self.white_to_move = !self.white_to_move;
    }

    /// Reverse the most recent move and return it.
    ///
    /// With an empty log this is a no-op returning `None`; undoing at the
    /// initial position is always safe.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let Some(mv) = self.move_log.pop() else {
            debug!("undo requested with empty move log");
            return None;
        };
        trace!(mv = %mv, "undo move");
        self.board.set(mv.end, mv.piece_captured);
        self.board.set(mv.start, mv.piece_moved);
        self.white_to_move = !self.white_to_move;
        Some(mv)
    }

    /// All pseudo-legal moves for the side to move, in board scan order.
    /// Moves that leave the mover's king attacked are included.
    pub fn legal_candidate_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.candidate_moves_into(&mut out);
        out
    }

    /// Same as [`Position::legal_candidate_moves`], reusing `out`.
    pub fn candidate_moves_into(&self, out: &mut Vec<Move>) {
        candidate_moves_into(&self.board, self.side_to_move(), out);
    }

    /// The generated candidate with these coordinates, if any.
    pub fn find_candidate(&self, start: Coord, end: Coord) -> Option<Move> {
        self.legal_candidate_moves()
            .into_iter()
            .find(|m| m.start == start && m.end == end)
    }

    /// Apply `mv` only if it matches a generated candidate.
    ///
    /// The applied move is the generator's own, so its recorded occupants
    /// come from this board even if `mv` was built against another one.
    pub fn try_apply(&mut self, mv: Move) -> Result<Move, MoveError> {
        if self.board.get(mv.start).is_empty() {
            return Err(MoveError::EmptyStart(mv.start.to_notation()));
        }
        let candidate = self
            .find_candidate(mv.start, mv.end)
            .ok_or_else(|| MoveError::NotACandidate(mv.notation()))?;
        self.apply_move(candidate);
        Ok(candidate)
    }

    /// Parse `e2e4` style text and apply it through [`Position::try_apply`].
    pub fn play(&mut self, text: &str) -> Result<Move, MoveError> {
        let (start, end) = Move::parse_coords(text)?;
        self.try_apply(Move::new(start, end, &self.board))
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
