//! Text-mode host for the position tracker
//!
//! This crate plays the part of a presentation layer over `tracker_core`:
//! - Rendering the board and reading moves in an interactive session
//! - Perft node counts for checking move generation
//! - Seeded random walks that exercise the apply/undo round trip
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tracker_cli -- play
//! cargo run -p tracker_cli -- perft --depth 3 --divide
//! cargo run -p tracker_cli -- random --plies 500 --seed 7
//! ```

mod config;
mod random_walk;
mod render;
mod session;

pub use config::*;
pub use random_walk::*;
pub use render::*;
pub use session::*;
