use super::*;
use tracker_core::Position;

#[test]
fn test_ascii_board() {
    let glyphs = GlyphSet::new(GlyphStyle::Ascii);
    let text = render_board(&Board::standard(), &glyphs);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 r n b q k b n r");
    assert_eq!(lines[4], "4 . . . . . . . .");
    assert_eq!(lines[7], "1 R N B Q K B N R");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn test_unicode_glyphs() {
    let glyphs = GlyphSet::new(GlyphStyle::Unicode);
    assert_eq!(
        glyphs.glyph(Some(Piece::new(Color::White, PieceKind::King))),
        '♔'
    );
    assert_eq!(
        glyphs.glyph(Some(Piece::new(Color::Black, PieceKind::Knight))),
        '♞'
    );
    assert_eq!(glyphs.glyph(None), '·');

    let text = render_board(&Board::standard(), &glyphs);
    assert!(text.starts_with("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
}

#[test]
fn test_render_moves_wraps() {
    let pos = Position::new();
    let text = render_moves(&pos.legal_candidate_moves());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("a2a3 a2a4 b2b3"));
    assert_eq!(lines[1].split(' ').count(), 10);
}

#[test]
fn test_render_no_moves() {
    assert_eq!(render_moves(&[]), "(no candidate moves)\n");
}
