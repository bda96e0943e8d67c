//! Trace writer tests - snapshot and score-line formatting

use blockfall::core::{Scenario, SimState, StepEvent};
use blockfall::trace::TraceWriter;
use blockfall::types::{Command, Figure, Point};

fn snapshot_of(state: &SimState) -> String {
    let mut out = Vec::new();
    let mut writer = TraceWriter::new(&mut out);
    writer.snapshot(state).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_snapshot_dimensions_match_board() {
    let scenario = Scenario {
        width: 7,
        height: 3,
        pieces: vec![Figure::new(vec![Point::new(0, 0)])],
        commands: vec![],
    };
    let state = SimState::initial(&scenario);
    let text = snapshot_of(&state);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.len() == 7));
}

#[test]
fn test_snapshot_glyphs() {
    // One locked cell, one active cell, rest empty.
    let scenario = Scenario {
        width: 3,
        height: 3,
        pieces: vec![Figure::new(vec![Point::new(0, 0)])],
        commands: vec![
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveDown,
        ],
    };
    let mut state = SimState::initial(&scenario);
    while !state.is_finished(&scenario) {
        let (next, _) = state.step(&scenario);
        state = next;
    }

    // Locked dot at the floor, fresh dot back at the spawn anchor.
    let text = snapshot_of(&state);
    assert_eq!(text, ".*.\n...\n.#.\n");
}

#[test]
fn test_snapshot_after_spawn_overflow() {
    let scenario = Scenario {
        width: 2,
        height: 1,
        pieces: vec![Figure::new(vec![Point::new(0, 0)])],
        commands: vec![Command::MoveDown, Command::Print],
    };
    let mut state = SimState::initial(&scenario);
    let mut out = Vec::new();
    let mut writer = TraceWriter::new(&mut out);
    while !state.is_finished(&scenario) {
        let (next, event) = state.step(&scenario);
        if let Some(event) = event {
            writer.emit(&state, event).unwrap();
        }
        state = next;
    }

    let text = String::from_utf8(out).unwrap();
    // Lock at command 0 overflows the respawn (score -10, board reset);
    // the print then shows the fresh piece alone.
    assert_eq!(text, "0 -10\n*.\n");
}

#[test]
fn test_score_change_format_with_negative_score() {
    let mut out = Vec::new();
    let mut writer = TraceWriter::new(&mut out);
    writer.score_change(0, -10).unwrap();
    writer.score_change(123, 45).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0 -10\n123 45\n");
}

#[test]
fn test_emit_routes_events() {
    let scenario = Scenario {
        width: 2,
        height: 2,
        pieces: vec![Figure::new(vec![Point::new(0, 0)])],
        commands: vec![Command::Print],
    };
    let state = SimState::initial(&scenario);

    let mut out = Vec::new();
    let mut writer = TraceWriter::new(&mut out);
    writer.emit(&state, StepEvent::Snapshot).unwrap();
    writer
        .emit(
            &state,
            StepEvent::ScoreChange {
                command_index: 9,
                score: 2,
            },
        )
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "*.\n..\n9 2\n");
}
