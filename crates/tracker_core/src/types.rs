use std::fmt;

use crate::error::NotationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Position in [`PieceKind::ALL`].
    pub fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn symbol(self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_symbol(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { color, kind })
    }
}

/// Contents of one board square. `Empty` is a real value, never an absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Square {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Square {
    pub const fn occupied(color: Color, kind: PieceKind) -> Self {
        Square::Occupied(Piece::new(color, kind))
    }

    pub fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(pc) => Some(pc),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    pub fn color(self) -> Option<Color> {
        self.piece().map(|pc| pc.color)
    }

    pub fn is_color(self, c: Color) -> bool {
        self.color() == Some(c)
    }
}

impl From<Piece> for Square {
    fn from(pc: Piece) -> Self {
        Square::Occupied(pc)
    }
}

/// A board coordinate. Row 0 is rank 8, column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Panics when either component is outside `0..8`.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < 8 && col < 8,
            "coordinate out of bounds: ({row}, {col})"
        );
        Self { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    /// Step by `(dr, dc)`; `None` once the result leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        let r = self.row as i16 + dr as i16;
        let c = self.col as i16 + dc as i16;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Coord {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    /// Iterate all 64 coordinates, row 0 first, then by column.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Coord { row, col }))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }
    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    pub fn to_notation(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    pub fn from_notation(text: &str) -> Result<Coord, NotationError> {
        let mut chars = text.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(NotationError::WrongLength {
                text: text.to_string(),
                expected: 2,
            });
        };
        if !('a'..='h').contains(&f) {
            return Err(NotationError::InvalidFile(f));
        }
        if !('1'..='8').contains(&r) {
            return Err(NotationError::InvalidRank(r));
        }
        Ok(Coord {
            row: b'8' - r as u8,
            col: f as u8 - b'a',
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
