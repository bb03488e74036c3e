use super::*;
use std::collections::HashSet;

#[test]
fn test_notation_e2e4() {
    let b = Board::standard();
    let mv = Move::new(Coord::new(6, 4), Coord::new(4, 4), &b);
    assert_eq!(mv.notation(), "e2e4");
    assert_eq!(mv.to_string(), "e2e4");
    assert_eq!(
        mv.piece_moved,
        Square::occupied(Color::White, PieceKind::Pawn)
    );
    assert_eq!(mv.piece_captured, Square::Empty);
    assert!(!mv.is_capture());
}

#[test]
fn test_parse_coords() {
    assert_eq!(
        Move::parse_coords("g1f3"),
        Ok((Coord::new(7, 6), Coord::new(5, 5)))
    );
    assert_eq!(
        Move::parse_coords(" b8c6\n"),
        Ok((Coord::new(0, 1), Coord::new(2, 2)))
    );
    assert!(matches!(
        Move::parse_coords("e2e"),
        Err(NotationError::WrongLength { .. })
    ));
    assert_eq!(
        Move::parse_coords("e2z4"),
        Err(NotationError::InvalidFile('z'))
    );
    assert_eq!(
        Move::parse_coords("e0e4"),
        Err(NotationError::InvalidRank('0'))
    );
}

#[test]
fn test_equality_ignores_snapshot() {
    // Same coordinates, different boards: equal.
    let start = Coord::new(4, 3);
    let end = Coord::new(1, 3);
    let quiet = Board::empty().with(start, Piece::new(Color::White, PieceKind::Rook));
    let capture = Board::empty()
        .with(start, Piece::new(Color::White, PieceKind::Queen))
        .with(end, Piece::new(Color::Black, PieceKind::Pawn));

    let a = Move::new(start, end, &quiet);
    let b = Move::new(start, end, &capture);
    assert_ne!(a.piece_moved, b.piece_moved);
    assert_ne!(a.piece_captured, b.piece_captured);
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));

    let other = Move::new(start, Coord::new(2, 3), &quiet);
    assert_ne!(a, other);
}

#[test]
fn test_moves_nothing() {
    let b = Board::standard();
    let from_empty = Move::new(Coord::new(4, 4), Coord::new(3, 4), &b);
    assert!(from_empty.moves_nothing());
    let real = Move::new(Coord::new(7, 6), Coord::new(5, 5), &b);
    assert!(!real.moves_nothing());
}
