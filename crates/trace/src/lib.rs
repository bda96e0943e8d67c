//! Trace emitter: formats simulation events into a line-oriented sink.
//!
//! This is pure formatting over `core` state (no terminal handling), so it
//! can be unit-tested against in-memory sinks. Two line formats exist:
//!
//! - board snapshots: `height` lines of `width` glyphs, `#` for locked
//!   cells, `*` for the active figure, `.` for empty, rows top to bottom
//! - score changes: `"<command index> <score>"`, two integers separated by
//!   a single space
//!
//! Emission order strictly follows command processing order; there is no
//! buffering beyond line-by-line writes, so interleaving with the score
//! lines is exactly the order the engine produced the events in.

use std::collections::HashSet;
use std::io::Write;

use anyhow::Result;

use blockfall_core::{Scenario, SimState, StepEvent};
use blockfall_types::{Point, ACTIVE_CELL, EMPTY_CELL, FILLED_CELL};

/// Writes trace lines into an `io::Write` sink.
///
/// Keeps one reusable row buffer so snapshot rendering does not allocate
/// per line.
pub struct TraceWriter<W: Write> {
    out: W,
    row: String,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            row: String::new(),
        }
    }

    /// Emit a board snapshot with the active figure overlaid.
    ///
    /// Locked cells take precedence over active ones; active cells outside
    /// the board (possible right after a spawn overflow) simply do not
    /// render.
    pub fn snapshot(&mut self, state: &SimState) -> Result<()> {
        let active: HashSet<Point> = state.active_cells().collect();
        let board = state.board();

        for y in 0..board.height() {
            self.row.clear();
            for x in 0..board.width() {
                let p = Point::new(x, y);
                let glyph = if board.is_filled(p) {
                    FILLED_CELL
                } else if active.contains(&p) {
                    ACTIVE_CELL
                } else {
                    EMPTY_CELL
                };
                self.row.push(glyph);
            }
            writeln!(self.out, "{}", self.row)?;
        }
        Ok(())
    }

    /// Emit a score-change line.
    pub fn score_change(&mut self, command_index: usize, score: i64) -> Result<()> {
        writeln!(self.out, "{} {}", command_index, score)?;
        Ok(())
    }

    /// Route a step event to the matching emission.
    ///
    /// `state` must be the state the event was produced from (the pre-step
    /// snapshot), so that `Snapshot` renders what the print command saw.
    pub fn emit(&mut self, state: &SimState, event: StepEvent) -> Result<()> {
        match event {
            StepEvent::Snapshot => self.snapshot(state),
            StepEvent::ScoreChange {
                command_index,
                score,
            } => self.score_change(command_index, score),
        }
    }
}

/// Replay a whole scenario, routing every event into `out` in command
/// order.
pub fn replay<W: Write>(scenario: &Scenario, out: W) -> Result<()> {
    let mut writer = TraceWriter::new(out);
    let mut state = SimState::initial(scenario);

    while !state.is_finished(scenario) {
        let (next, event) = state.step(scenario);
        if let Some(event) = event {
            writer.emit(&state, event)?;
        }
        state = next;
    }
    Ok(())
}
