//! Candidate generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs `candidate_moves_into` many times over positions from different game
//! phases, reusing one buffer.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p tracker_core

use std::time::Instant;

use tracker_core::Position;

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
    ("e4", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"),
    ("Sicilian", "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b"),
    ("Kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w"),
    (
        "Complex",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w"),
    ("Open queens", "3qk3/8/8/8/8/8/8/3QK3 w"),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Candidate Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(256);
    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let pos = match Position::from_fen(fen) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            pos.candidate_moves_into(&mut move_buf);
            moves_generated += move_buf.len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_pps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_pps:.0} positions/sec)");
}
