//! Interactive play session over a line-based reader and writer.
//!
//! Input moves are matched against the freshly generated candidates before
//! anything is applied; anything else is reported and discarded.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};
use tracker_core::{MoveError, Position};

use crate::render::{render_board, render_moves, GlyphSet};

const HELP: &str = "\
Commands:
  <move>   play a move in rank-file notation, e.g. e2e4
  undo     take back the last move
  moves    list candidate moves for the side to move
  board    redraw the board
  help     show this text
  quit     leave the session
";

pub struct Session<'a> {
    pos: Position,
    glyphs: &'a GlyphSet,
    show_candidates: bool,
}

impl<'a> Session<'a> {
    pub fn new(pos: Position, glyphs: &'a GlyphSet, show_candidates: bool) -> Self {
        Self {
            pos,
            glyphs,
            show_candidates,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.draw(out)?;
        self.prompt(out)?;

        for line in input.lines() {
            let line = line?;
            let cmd = line.trim();
            if cmd.is_empty() {
                self.prompt(out)?;
                continue;
            }

            match cmd {
                "quit" | "exit" => break,
                "help" | "?" => write!(out, "{HELP}")?,
                "board" => self.draw(out)?,
                "moves" => write!(out, "{}", render_moves(&self.pos.legal_candidate_moves()))?,
                "undo" => match self.pos.undo_last_move() {
                    Some(mv) => {
                        writeln!(out, "Undid {mv}")?;
                        self.draw(out)?;
                    }
                    None => writeln!(out, "Nothing to undo")?,
                },
                text => self.submit(text, out)?,
            }
            self.prompt(out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn submit<W: Write>(&mut self, text: &str, out: &mut W) -> Result<()> {
        match self.pos.play(text) {
            Ok(mv) => {
                debug!(mv = %mv, ply = self.pos.move_log().len(), "move played");
                if mv.is_capture() {
                    writeln!(out, "Played {mv} (capture)")?;
                } else {
                    writeln!(out, "Played {mv}")?;
                }
                self.draw(out)?;
            }
            Err(MoveError::Notation(e)) => {
                writeln!(out, "Unrecognized input {text:?}: {e}. Type 'help' for commands.")?;
            }
            Err(e) => {
                warn!(input = text, error = %e, "move rejected");
                writeln!(out, "Rejected: {e}")?;
            }
        }
        Ok(())
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", render_board(self.pos.board(), self.glyphs))?;
        if self.show_candidates {
            write!(out, "{}", render_moves(&self.pos.legal_candidate_moves()))?;
        }
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        let side = if self.pos.white_to_move() { "White" } else { "Black" };
        write!(out, "{side} to move> ")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
