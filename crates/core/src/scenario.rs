//! Scenario: the read-only replay configuration.

use blockfall_types::{Command, Figure};

/// Board dimensions, the figure palette, and the command script.
///
/// Built once by the loader, then passed by reference into the simulation.
/// Nothing here mutates during a replay; there is deliberately no global
/// settings state.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub pieces: Vec<Figure>,
    pub commands: Vec<Command>,
}

impl Scenario {
    /// Palette figure for the Nth spawn (cyclic modulo palette size).
    pub fn piece(&self, spawn_index: usize) -> &Figure {
        &self.pieces[spawn_index % self.pieces.len()]
    }
}
