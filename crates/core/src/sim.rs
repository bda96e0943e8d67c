//! The command-driven simulation state machine.
//!
//! Every [`SimState`] is an immutable snapshot: `step` consumes one command
//! character and produces exactly one successor state, never mutating the
//! receiver. That keeps past states valid for inspection and makes the step
//! function trivial to test in isolation.
//!
//! Movement and rotation share one failure path: whatever candidate fails
//! placement, the *current* figure locks at its *current* anchor, full rows
//! clear, and the next palette figure spawns. A spawn that itself cannot be
//! placed costs [`SPAWN_OVERFLOW_PENALTY`] and resets the board to empty;
//! the replay never halts early.

use blockfall_types::{Command, Figure, Point, SPAWN_OVERFLOW_PENALTY};

use crate::board::Board;
use crate::scenario::Scenario;

/// Event produced by a step, for the trace writer to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Emit a snapshot of the board and active figure.
    Snapshot,
    /// A figure locked. `score` is the cumulative total after the lock,
    /// including any spawn penalty taken in the same step.
    ScoreChange { command_index: usize, score: i64 },
}

/// One immutable snapshot of the simulation.
#[derive(Debug, Clone)]
pub struct SimState {
    figure: Figure,
    anchor: Point,
    board: Board,
    score: i64,
    cursor: usize,
    spawn_index: usize,
}

impl SimState {
    /// Fresh state: empty board, score 0, cursor 0, first palette figure at
    /// its spawn anchor.
    ///
    /// The spawn-overflow rule applies even here: a palette figure that does
    /// not fit the board starts the replay at −10 (the board is already
    /// empty, so the reset is a no-op).
    pub fn initial(scenario: &Scenario) -> SimState {
        Self::spawn(
            scenario,
            Board::new(scenario.width, scenario.height),
            0,
            0,
            0,
        )
    }

    /// Spawn palette figure `spawn_index` above `board`.
    ///
    /// A spawn that cannot be placed keeps the figure at its anchor but
    /// costs [`SPAWN_OVERFLOW_PENALTY`] and resets the board to empty.
    fn spawn(
        scenario: &Scenario,
        board: Board,
        score: i64,
        cursor: usize,
        spawn_index: usize,
    ) -> SimState {
        let figure = scenario.piece(spawn_index).clone();
        let anchor = figure.spawn_anchor(scenario.width);

        if board.can_place(&figure, anchor) {
            SimState {
                figure,
                anchor,
                board,
                score,
                cursor,
                spawn_index,
            }
        } else {
            SimState {
                figure,
                anchor,
                board: Board::new(scenario.width, scenario.height),
                score: score - SPAWN_OVERFLOW_PENALTY,
                cursor,
                spawn_index,
            }
        }
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn spawn_index(&self) -> usize {
        self.spawn_index
    }

    /// Board cells the active figure currently covers.
    pub fn active_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.figure
            .cells()
            .iter()
            .map(move |c| c.translate(self.anchor))
    }

    /// Terminal when the cursor has consumed the whole command script.
    pub fn is_finished(&self, scenario: &Scenario) -> bool {
        self.cursor >= scenario.commands.len()
    }

    /// Apply the command under the cursor, yielding the successor snapshot
    /// and an optional trace event.
    ///
    /// A failed rotation locks the pre-rotation figure at the current
    /// anchor rather than becoming a no-op; rotation and movement share the
    /// lock path, and the candidate that failed placement is what triggers
    /// it.
    pub fn step(&self, scenario: &Scenario) -> (SimState, Option<StepEvent>) {
        let command = scenario.commands[self.cursor];

        let (candidate_figure, candidate_anchor) = match command {
            Command::Print => {
                let mut next = self.clone();
                next.cursor += 1;
                return (next, Some(StepEvent::Snapshot));
            }
            Command::RotateCw => (self.figure.rotated_cw(), self.anchor),
            Command::RotateCcw => (self.figure.rotated_ccw(), self.anchor),
            Command::MoveLeft | Command::MoveRight | Command::MoveDown => {
                // Move commands always carry a shift vector.
                let v = command.shift().unwrap_or(Point::new(0, 0));
                (self.figure.clone(), self.anchor.translate(v))
            }
        };

        if self.board.can_place(&candidate_figure, candidate_anchor) {
            let next = SimState {
                figure: candidate_figure,
                anchor: candidate_anchor,
                board: self.board.clone(),
                score: self.score,
                cursor: self.cursor + 1,
                spawn_index: self.spawn_index,
            };
            return (next, None);
        }

        // Lock path: the current figure fixes in place, full rows clear,
        // and the next palette figure spawns.
        let (board, cleared) = self.board.lock(&self.figure, self.anchor);
        let next = SimState::spawn(
            scenario,
            board,
            self.score + cleared as i64,
            self.cursor + 1,
            self.spawn_index + 1,
        );
        let event = StepEvent::ScoreChange {
            command_index: self.cursor,
            score: next.score,
        };
        (next, Some(event))
    }
}
