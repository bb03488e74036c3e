use super::*;

#[test]
fn test_coord_notation() {
    assert_eq!(Coord::new(6, 4).to_notation(), "e2");
    assert_eq!(Coord::new(0, 0).to_notation(), "a8");
    assert_eq!(Coord::new(7, 7).to_notation(), "h1");

    assert_eq!(Coord::from_notation("e4"), Ok(Coord::new(4, 4)));
    assert_eq!(Coord::from_notation("a1"), Ok(Coord::new(7, 0)));
    assert_eq!(Coord::from_notation("h8"), Ok(Coord::new(0, 7)));
}

#[test]
fn test_coord_notation_rejects_bad_text() {
    assert_eq!(
        Coord::from_notation("i1"),
        Err(NotationError::InvalidFile('i'))
    );
    assert_eq!(
        Coord::from_notation("a9"),
        Err(NotationError::InvalidRank('9'))
    );
    assert!(matches!(
        Coord::from_notation("e"),
        Err(NotationError::WrongLength { .. })
    ));
    assert!(matches!(
        Coord::from_notation("e2e"),
        Err(NotationError::WrongLength { .. })
    ));
}

#[test]
fn test_coord_offset_clips_at_edges() {
    let a8 = Coord::new(0, 0);
    assert_eq!(a8.offset(-1, 0), None);
    assert_eq!(a8.offset(0, -1), None);
    assert_eq!(a8.offset(1, 1), Some(Coord::new(1, 1)));

    // Large deltas clip instead of overflowing.
    assert_eq!(Coord::new(7, 0).offset(127, 0), None);
    assert_eq!(a8.offset(-128, 127), None);

    let h1 = Coord::new(7, 7);
    assert_eq!(h1.offset(1, 0), None);
    assert_eq!(h1.offset(-7, -7), Some(a8));
}

#[test]
#[should_panic(expected = "coordinate out of bounds")]
fn test_coord_out_of_bounds_panics() {
    let _ = Coord::new(8, 0);
}

#[test]
fn test_coord_all_scan_order() {
    let all: Vec<Coord> = Coord::all().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all[0], Coord::new(0, 0));
    assert_eq!(all[1], Coord::new(0, 1));
    assert_eq!(all[8], Coord::new(1, 0));
    assert_eq!(all[63], Coord::new(7, 7));
}

#[test]
fn test_piece_symbols() {
    for kind in PieceKind::ALL {
        for color in [Color::White, Color::Black] {
            let pc = Piece::new(color, kind);
            assert_eq!(Piece::from_symbol(pc.symbol()), Some(pc));
        }
    }
    assert_eq!(Piece::new(Color::White, PieceKind::Knight).symbol(), 'N');
    assert_eq!(Piece::new(Color::Black, PieceKind::Queen).symbol(), 'q');
    assert_eq!(Piece::from_symbol('x'), None);
}

#[test]
fn test_square_helpers() {
    let empty = Square::default();
    assert!(empty.is_empty());
    assert_eq!(empty.piece(), None);
    assert_eq!(empty.color(), None);

    let bq = Square::occupied(Color::Black, PieceKind::Queen);
    assert!(!bq.is_empty());
    assert!(bq.is_color(Color::Black));
    assert!(!bq.is_color(Color::White));
    assert_eq!(bq.piece().map(|p| p.kind), Some(PieceKind::Queen));
}
