use crate::{moves::Move, position::Position};

/// Pseudo-legal perft node count.
/// Counts every leaf reachable from the current position in `depth` plies,
/// applying and undoing each candidate along the way.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Node counts per root candidate, in candidate order.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut layers = vec![Vec::with_capacity(64); depth as usize - 1];
    pos.legal_candidate_moves()
        .into_iter()
        .map(|mv| {
            pos.apply_move(mv);
            let nodes = inner(pos, depth - 1, &mut layers[..]);
            pos.undo_last_move();
            (mv, nodes)
        })
        .collect()
}

fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
    if depth == 0 {
        return 1;
    }

    let (buf, rest) = layers
        .split_first_mut()
        .expect("perft requires one buffer per remaining ply");

    pos.candidate_moves_into(buf);

    let mut nodes = 0u64;
    for mv in buf.iter().copied() {
        pos.apply_move(mv);
        nodes += inner(pos, depth - 1, rest);
        pos.undo_last_move();
    }
    nodes
}
