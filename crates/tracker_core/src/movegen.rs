//! Pseudo-legal move generation.
//!
//! Every generator is a pure function of `(board, square, side)`. None of
//! them look at the move log, and none check whether the mover's own king is
//! left attacked. Emission order is fixed so callers and tests can rely on it:
//!
//! - pawn: forward one, forward two, capture toward col-1, capture toward col+1
//! - rook: up, down, left, right (up = toward row 0 / rank 8)
//! - bishop: up-left, up-right, down-left, down-right
//! - queen: the rook directions, then the bishop directions
//! - knight: [`KNIGHT_OFFSETS`]
//! - king: [`KING_OFFSETS`]

use crate::{board::Board, moves::Move, types::*};

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// `(row, col)` offsets in emission order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// `(row, col)` offsets in emission order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Longest ray on an 8x8 board.
const MAX_RAY: i8 = 7;

/// Generate every pseudo-legal move for `side`, returning a fresh vector.
pub fn candidate_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    candidate_moves_into(board, side, &mut out);
    out
}

/// Generate every pseudo-legal move for `side` into `out`, clearing it first.
/// Squares are scanned row 0..8, then col 0..8.
pub fn candidate_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    for from in Coord::all() {
        let pc = match board.get(from).piece() {
            Some(p) => p,
            None => continue,
        };
        if pc.color != side {
            continue;
        }
        piece_moves(board, from, pc, out);
    }
}

/// Append the moves of the piece `pc` standing on `from`.
pub fn piece_moves(board: &Board, from: Coord, pc: Piece, out: &mut Vec<Move>) {
    let c = pc.color;
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, c, out),
        PieceKind::Rook => gen_slider(board, from, c, out, &ROOK_DIRS),
        PieceKind::Knight => gen_knight(board, from, c, out),
        PieceKind::Bishop => gen_slider(board, from, c, out, &BISHOP_DIRS),
        PieceKind::Queen => gen_slider(board, from, c, out, &QUEEN_DIRS),
        PieceKind::King => gen_king(board, from, c, out),
    }
}

/// Row offset of one pawn step for `c`.
pub fn pawn_direction(c: Color) -> i8 {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row from which a pawn of `c` may advance two squares.
pub fn pawn_home_row(c: Color) -> u8 {
    match c {
        Color::White => 6,
        Color::Black => 1,
    }
}

pub fn gen_pawn(board: &Board, from: Coord, c: Color, out: &mut Vec<Move>) {
    let dir = pawn_direction(c);

    // forward 1, then forward 2 from home through an empty square
    if let Some(one) = from.offset(dir, 0) {
        if board.get(one).is_empty() {
            out.push(Move::new(from, one, board));

            if from.row() == pawn_home_row(c) {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.get(two).is_empty() {
                        out.push(Move::new(from, two, board));
                    }
                }
            }
        }
    }

    // captures; no en-passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.get(to).is_color(c.other()) {
                out.push(Move::new(from, to, board));
            }
        }
    }
}

pub fn gen_knight(board: &Board, from: Coord, c: Color, out: &mut Vec<Move>) {
    gen_steps(board, from, c, out, &KNIGHT_OFFSETS);
}

pub fn gen_king(board: &Board, from: Coord, c: Color, out: &mut Vec<Move>) {
    gen_steps(board, from, c, out, &KING_OFFSETS);
}

fn gen_steps(board: &Board, from: Coord, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            if !board.get(to).is_color(c) {
                out.push(Move::new(from, to, board));
            }
        }
    }
}

pub fn gen_slider(board: &Board, from: Coord, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        for step in 1..=MAX_RAY {
            let Some(to) = from.offset(dr * step, dc * step) else {
                break;
            };
            match board.get(to) {
                Square::Empty => out.push(Move::new(from, to, board)),
                Square::Occupied(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to, board));
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
