//! Text board rendering

use tracker_core::{Board, Color, Coord, Move, Piece, PieceKind};

use crate::config::GlyphStyle;

/// Piece glyph table, built once at startup and passed by reference to
/// every render call.
#[derive(Debug, Clone)]
pub struct GlyphSet {
    /// Indexed by `[color][kind]`
    pieces: [[char; 6]; 2],
    empty: char,
}

impl GlyphSet {
    pub fn new(style: GlyphStyle) -> Self {
        let mut pieces = [[' '; 6]; 2];
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let pc = Piece::new(color, kind);
                pieces[color.idx()][kind.idx()] = match style {
                    GlyphStyle::Ascii => pc.symbol(),
                    GlyphStyle::Unicode => unicode_glyph(pc),
                };
            }
        }
        let empty = match style {
            GlyphStyle::Ascii => '.',
            GlyphStyle::Unicode => '·',
        };
        Self { pieces, empty }
    }

    pub fn glyph(&self, pc: Option<Piece>) -> char {
        match pc {
            None => self.empty,
            Some(pc) => self.pieces[pc.color.idx()][pc.kind.idx()],
        }
    }
}

fn unicode_glyph(pc: Piece) -> char {
    match (pc.color, pc.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Board diagram with rank labels on the left and file labels underneath.
pub fn render_board(board: &Board, glyphs: &GlyphSet) -> String {
    let mut out = String::with_capacity(256);
    for row in 0..8u8 {
        out.push(Coord::new(row, 0).rank_char());
        out.push(' ');
        for col in 0..8u8 {
            if col > 0 {
                out.push(' ');
            }
            out.push(glyphs.glyph(board.get(Coord::new(row, col)).piece()));
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

/// Candidate list in rank-file notation, wrapped at ten moves per line.
pub fn render_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "(no candidate moves)\n".to_string();
    }
    let mut out = String::new();
    for chunk in moves.chunks(10) {
        let line: Vec<String> = chunk.iter().map(Move::notation).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
