//! Chess position tracking and pseudo-legal move generation.
//!
//! A [`Position`] owns the board, the side to move and the log of applied
//! moves. Candidates come from [`Position::legal_candidate_moves`], are
//! applied with [`Position::apply_move`] and reversed with
//! [`Position::undo_last_move`]. Check detection, castling, en-passant and
//! promotion are left to higher layers.

pub mod board;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod position;
pub mod types;

pub use board::*;
pub use error::*;
pub use movegen::*;
pub use moves::*;
pub use perft::{perft, perft_divide};
pub use position::*;
pub use types::*;
