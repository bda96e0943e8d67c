//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate contains the whole replay state machine and nothing else: no
//! I/O, no parsing, no output formatting. It consumes a parsed [`Scenario`]
//! and produces a sequence of immutable [`SimState`] snapshots plus trace
//! events for the writer to log, which keeps every rule unit-testable and
//! makes replays trivially deterministic.
//!
//! # Module Structure
//!
//! - [`board`]: filled-cell set with per-row fill counts, placement checks,
//!   locking, and full-row compaction
//! - [`scenario`]: the read-only replay configuration
//! - [`sim`]: the command-driven state machine over immutable snapshots
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Scenario, SimState, StepEvent};
//! use blockfall_types::{Command, Figure, Point};
//!
//! let scenario = Scenario {
//!     width: 4,
//!     height: 4,
//!     pieces: vec![Figure::new(vec![Point::new(0, 0)])],
//!     commands: vec![Command::MoveDown, Command::MoveDown],
//! };
//!
//! let state = SimState::initial(&scenario);
//! let (state, event) = state.step(&scenario);
//! assert_eq!(event, None);
//! assert_eq!(state.anchor(), Point::new(1, 1));
//! ```

pub mod board;
pub mod scenario;
pub mod sim;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use scenario::Scenario;
pub use sim::{SimState, StepEvent};
