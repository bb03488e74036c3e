//! Tracker CLI
//!
//! Play a game in the terminal, count perft nodes, or run random walks.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracker_cli::{random_walk, GlyphSet, Session, ShellConfig, DEFAULT_CONFIG_FILE};
use tracker_core::{perft, perft_divide, Position};

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Chess position tracker and pseudo-legal move generator")]
#[command(version)]
struct Args {
    /// Config file (TOML). Defaults to tracker.toml in the working directory
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive game on stdin/stdout
    Play {
        /// Start from this FEN instead of the standard position
        #[arg(long)]
        fen: Option<String>,
    },
    /// Count pseudo-legal leaf nodes to the given depth
    Perft {
        #[arg(short, long, default_value_t = 3)]
        depth: u8,
        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        #[arg(long)]
        fen: Option<String>,
    },
    /// Play random candidate moves, checking apply/undo at every ply
    Random {
        #[arg(short, long)]
        plies: Option<u32>,
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PerftReport {
    depth: u8,
    nodes: u64,
    elapsed_ms: u128,
    divide: Vec<DivideEntry>,
}

#[derive(Serialize)]
struct DivideEntry {
    mv: String,
    nodes: u64,
}

fn start_position(fen: Option<&str>) -> Result<Position> {
    match fen {
        Some(text) => Position::from_fen(text).with_context(|| format!("Invalid FEN {text:?}")),
        None => Ok(Position::new()),
    }
}

fn init_logging(cfg: &ShellConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_play(cfg: &ShellConfig, fen: Option<&str>) -> Result<()> {
    let pos = start_position(fen)?;
    let glyphs = GlyphSet::new(cfg.display.glyphs);
    let mut session = Session::new(pos, &glyphs, cfg.display.show_candidates);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    info!(plies = session.position().move_log().len(), "session ended");
    Ok(())
}

fn run_perft(depth: u8, divide: bool, json: bool, fen: Option<&str>) -> Result<()> {
    let mut pos = start_position(fen)?;
    let start = Instant::now();

    let split = if divide {
        perft_divide(&mut pos, depth)
    } else {
        Vec::new()
    };
    let nodes = if divide && depth > 0 {
        split.iter().map(|&(_, n)| n).sum()
    } else {
        perft(&mut pos, depth)
    };

    let report = PerftReport {
        depth,
        nodes,
        elapsed_ms: start.elapsed().as_millis(),
        divide: split
            .iter()
            .map(|(mv, n)| DivideEntry {
                mv: mv.notation(),
                nodes: *n,
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for entry in &report.divide {
        println!("{}: {}", entry.mv, entry.nodes);
    }
    println!(
        "perft({}) = {} in {} ms",
        report.depth, report.nodes, report.elapsed_ms
    );
    Ok(())
}

fn run_random(cfg: &ShellConfig, plies: Option<u32>, seed: Option<u64>, json: bool) -> Result<()> {
    let plies = plies.unwrap_or(cfg.random.plies);
    let seed = seed.or(cfg.random.seed).unwrap_or_else(rand::random);

    let report = random_walk(&Position::new(), plies, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Seed: {}", report.seed);
        println!(
            "Plies: {}, captures: {}, round trips checked: {}",
            report.plies_played, report.captures, report.round_trips_checked
        );
        println!("{}", report.moves.join(" "));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let cfg = ShellConfig::load(&config_path)?;
    init_logging(&cfg);

    match args.command {
        Command::Play { fen } => run_play(&cfg, fen.as_deref()),
        Command::Perft {
            depth,
            divide,
            json,
            fen,
        } => run_perft(depth, divide, json, fen.as_deref()),
        Command::Random { plies, seed, json } => run_random(&cfg, plies, seed, json),
    }
}
