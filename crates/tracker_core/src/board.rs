use std::fmt;
use std::ops::Index;

use crate::{error::FenError, types::*};

/// FEN placement field of the standard starting position.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// The 8x8 grid. `squares[row][col]`, row 0 = rank 8, col 0 = file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    pub fn standard() -> Self {
        let mut b = Board::empty();

        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (c, &kind) in back.iter().enumerate() {
            b.squares[0][c] = Square::occupied(Color::Black, kind);
            b.squares[7][c] = Square::occupied(Color::White, kind);
        }
        // Pawns
        for c in 0..8 {
            b.squares[1][c] = Square::occupied(Color::Black, PieceKind::Pawn);
            b.squares[6][c] = Square::occupied(Color::White, PieceKind::Pawn);
        }
        b
    }

    pub fn get(&self, at: Coord) -> Square {
        self.squares[at.row() as usize][at.col() as usize]
    }

    pub fn set(&mut self, at: Coord, sq: Square) {
        self.squares[at.row() as usize][at.col() as usize] = sq;
    }

    /// Builder-style placement, handy for setting up test positions.
    pub fn with(mut self, at: Coord, pc: Piece) -> Self {
        self.set(at, Square::Occupied(pc));
        self
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|at| self.get(at).piece().map(|pc| (at, pc)))
    }

    pub fn find(&self, pc: Piece) -> Option<Coord> {
        self.pieces()
            .find(|&(_, found)| found == pc)
            .map(|(at, _)| at)
    }

    /// Parse the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount(ranks.len()));
        }

        let mut b = Board::empty();
        // FEN lists rank 8 .. 1, which is row 0 .. 7
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut col: u8 = 0;
            let mut prev_digit = false;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    // runs are 1..=8 and never split across two digits
                    if d == 0 || prev_digit {
                        return Err(FenError::InvalidEmptyRun { rank });
                    }
                    col += d as u8;
                    prev_digit = true;
                } else {
                    prev_digit = false;
                    let pc = Piece::from_symbol(ch).ok_or(FenError::InvalidPiece(ch))?;
                    if col >= 8 {
                        return Err(FenError::TooManyFiles { rank });
                    }
                    b.squares[row][col as usize] = Square::Occupied(pc);
                    col += 1;
                }
                if col > 8 {
                    return Err(FenError::TooManyFiles { rank });
                }
            }
            if col != 8 {
                return Err(FenError::NotEnoughFiles { rank });
            }
        }
        Ok(b)
    }

    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (row, rank) in self.squares.iter().enumerate() {
            let mut run = 0;
            for sq in rank {
                match sq.piece() {
                    None => run += 1,
                    Some(pc) => {
                        if run > 0 {
                            out.push(char::from(b'0' + run));
                            run = 0;
                        }
                        out.push(pc.symbol());
                    }
                }
            }
            if run > 0 {
                out.push(char::from(b'0' + run));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl Index<Coord> for Board {
    type Output = Square;

    fn index(&self, at: Coord) -> &Square {
        &self.squares[at.row() as usize][at.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.squares {
            let line: String = rank
                .iter()
                .map(|sq| sq.piece().map_or('.', Piece::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
