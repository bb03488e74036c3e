//! Seeded random walks over candidate moves.
//!
//! Each ply checks the apply/undo round trip for every candidate before
//! playing a random one; the walk then unwinds the whole log and checks the
//! starting position comes back.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};
use tracker_core::Position;

/// Summary of one random walk
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WalkReport {
    pub seed: u64,
    pub plies_played: u32,
    pub captures: u32,
    /// Candidate moves checked for the round trip, summed over all plies
    pub round_trips_checked: u64,
    /// Rank-file notation of every move played
    pub moves: Vec<String>,
}

pub fn random_walk(start: &Position, plies: u32, seed: u64) -> Result<WalkReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = start.clone();
    let mut report = WalkReport {
        seed,
        plies_played: 0,
        captures: 0,
        round_trips_checked: 0,
        moves: Vec::new(),
    };

    for ply in 0..plies {
        let moves = pos.legal_candidate_moves();
        for &mv in &moves {
            let board = *pos.board();
            let white = pos.white_to_move();
            pos.apply_move(mv);
            pos.undo_last_move();
            if *pos.board() != board || pos.white_to_move() != white {
                bail!("round trip failed for {mv} at ply {ply}");
            }
        }
        report.round_trips_checked += moves.len() as u64;

        let Some(&mv) = moves.choose(&mut rng) else {
            debug!(ply, "no candidate moves, stopping walk");
            break;
        };
        if mv.is_capture() {
            report.captures += 1;
        }
        pos.apply_move(mv);
        report.plies_played += 1;
        report.moves.push(mv.notation());
    }

    for _ in 0..report.plies_played {
        pos.undo_last_move();
    }
    if pos != *start {
        bail!("unwinding {} plies did not restore the start position", report.plies_played);
    }

    info!(
        seed,
        plies = report.plies_played,
        captures = report.captures,
        "random walk finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "random_walk_tests.rs"]
mod random_walk_tests;
