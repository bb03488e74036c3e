use super::*;

#[test]
fn test_standard_layout() {
    let b = Board::standard();

    assert_eq!(
        b.get(Coord::new(0, 4)),
        Square::occupied(Color::Black, PieceKind::King)
    );
    assert_eq!(
        b.get(Coord::new(7, 3)),
        Square::occupied(Color::White, PieceKind::Queen)
    );
    assert_eq!(
        b.get(Coord::new(6, 0)),
        Square::occupied(Color::White, PieceKind::Pawn)
    );
    for row in 2..6 {
        for col in 0..8 {
            assert!(b.get(Coord::new(row, col)).is_empty());
        }
    }
    assert_eq!(b.pieces().count(), 32);
}

#[test]
fn test_one_king_per_color() {
    let b = Board::standard();
    for color in [Color::White, Color::Black] {
        let kings = b
            .pieces()
            .filter(|&(_, pc)| pc == Piece::new(color, PieceKind::King))
            .count();
        assert_eq!(kings, 1);
    }
    assert_eq!(
        b.find(Piece::new(Color::White, PieceKind::King)),
        Some(Coord::new(7, 4))
    );
}

#[test]
fn test_placement_matches_standard() {
    let parsed = Board::from_placement(START_PLACEMENT).unwrap();
    assert_eq!(parsed, Board::standard());
    assert_eq!(Board::standard().to_placement(), START_PLACEMENT);
}

#[test]
fn test_placement_sparse_board() {
    let b = Board::from_placement("8/8/8/8/3R4/8/8/k6K").unwrap();
    assert_eq!(
        b[Coord::new(4, 3)],
        Square::occupied(Color::White, PieceKind::Rook)
    );
    assert_eq!(
        b[Coord::new(7, 0)],
        Square::occupied(Color::Black, PieceKind::King)
    );
    assert_eq!(b.pieces().count(), 3);
    assert_eq!(b.to_placement(), "8/8/8/8/3R4/8/8/k6K");
}

#[test]
fn test_placement_errors() {
    assert_eq!(
        Board::from_placement("8/8/8"),
        Err(FenError::WrongRankCount(3))
    );
    assert_eq!(
        Board::from_placement("8/8/8/8/8/8/8/7x"),
        Err(FenError::InvalidPiece('x'))
    );
    assert_eq!(
        Board::from_placement("9/8/8/8/8/8/8/8"),
        Err(FenError::TooManyFiles { rank: 8 })
    );
    assert_eq!(
        Board::from_placement("8/8/8/8/8/8/8/ppppppppp"),
        Err(FenError::TooManyFiles { rank: 1 })
    );
    assert_eq!(
        Board::from_placement("08/8/8/8/8/8/8/8"),
        Err(FenError::InvalidEmptyRun { rank: 8 })
    );
    assert_eq!(
        Board::from_placement("8/44/8/8/8/8/8/8"),
        Err(FenError::InvalidEmptyRun { rank: 7 })
    );
    assert_eq!(
        Board::from_placement("8/8/8/8/8/8/8/4K0p2"),
        Err(FenError::InvalidEmptyRun { rank: 1 })
    );
    assert_eq!(
        Board::from_placement("8/8/7/8/8/8/8/8"),
        Err(FenError::NotEnoughFiles { rank: 6 })
    );
}

#[test]
fn test_display_diagram() {
    let text = Board::standard().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "rnbqkbnr");
    assert_eq!(lines[3], "........");
    assert_eq!(lines[7], "RNBQKBNR");
}
