use super::*;

#[test]
fn random_walk_completes_from_startpos() {
    let start = Position::new();
    let report = random_walk(&start, 60, 42).unwrap();

    assert_eq!(report.seed, 42);
    assert_eq!(report.moves.len() as u32, report.plies_played);
    assert!(report.plies_played > 0);
    // At least the 20 opening candidates were checked.
    assert!(report.round_trips_checked >= 20);
}

#[test]
fn random_walk_is_reproducible() {
    let start = Position::new();
    let a = random_walk(&start, 40, 7).unwrap();
    let b = random_walk(&start, 40, 7).unwrap();
    assert_eq!(a, b);
}

#[test]
fn random_walk_stops_without_candidates() {
    // Black has no pieces, so black has nothing to play after white's move.
    let start = Position::from_fen("8/8/8/8/8/8/8/4K3 w").unwrap();
    let report = random_walk(&start, 10, 1).unwrap();
    assert_eq!(report.plies_played, 1);
}

#[test]
fn random_walk_zero_plies() {
    let start = Position::new();
    let report = random_walk(&start, 0, 3).unwrap();
    assert_eq!(report.plies_played, 0);
    assert!(report.moves.is_empty());
}
