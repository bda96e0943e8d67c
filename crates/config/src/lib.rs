//! Scenario loading: JSON parsing and validation.
//!
//! The simulation core assumes a structurally valid [`Scenario`]; anything
//! suspect about the input is rejected here, before the core ever runs.
//! Malformed command characters are a load-time error, never a simulated
//! one.
//!
//! # Format
//!
//! ```json
//! {
//!   "width": 9,
//!   "height": 10,
//!   "pieces": [{ "cells": [{ "x": 0, "y": 0 }, { "x": 1, "y": 0 }] }],
//!   "commands": "AASSDQEP"
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use blockfall_core::Scenario;
use blockfall_types::{Command, Figure, Point};

// Wire-format DTOs, kept separate from the core types on purpose: the JSON
// shape can evolve without touching the simulation.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    width: i32,
    height: i32,
    pieces: Vec<PieceDef>,
    commands: String,
}

#[derive(Debug, Deserialize)]
struct PieceDef {
    cells: Vec<CellDef>,
}

#[derive(Debug, Deserialize)]
struct CellDef {
    x: i32,
    y: i32,
}

/// Load and validate a scenario from a JSON file.
pub fn load(path: &Path) -> Result<Scenario> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    from_str(&json).with_context(|| format!("in scenario file {}", path.display()))
}

/// Parse and validate a scenario from a JSON string.
pub fn from_str(json: &str) -> Result<Scenario> {
    let raw: ScenarioFile = serde_json::from_str(json).context("malformed scenario JSON")?;

    if raw.width < 1 {
        bail!("board width must be at least 1, got {}", raw.width);
    }
    if raw.height < 1 {
        bail!("board height must be at least 1, got {}", raw.height);
    }
    if raw.pieces.is_empty() {
        bail!("piece palette must not be empty");
    }

    let mut pieces = Vec::with_capacity(raw.pieces.len());
    for (i, piece) in raw.pieces.iter().enumerate() {
        if piece.cells.is_empty() {
            bail!("piece {} has no cells", i);
        }
        let span = |f: fn(&CellDef) -> i32| {
            let lo = piece.cells.iter().map(f).min().unwrap_or(0);
            let hi = piece.cells.iter().map(f).max().unwrap_or(0);
            1 + hi - lo
        };
        // A piece that cannot fit even an empty board would leave the
        // simulation with nowhere legal to lock it.
        if span(|c| c.x) > raw.width || span(|c| c.y) > raw.height {
            bail!(
                "piece {} ({}x{}) does not fit the {}x{} board",
                i,
                span(|c| c.x),
                span(|c| c.y),
                raw.width,
                raw.height
            );
        }
        pieces.push(Figure::new(
            piece.cells.iter().map(|c| Point::new(c.x, c.y)).collect(),
        ));
    }

    let mut commands = Vec::with_capacity(raw.commands.len());
    for (i, c) in raw.commands.chars().enumerate() {
        match Command::from_char(c) {
            Some(cmd) => commands.push(cmd),
            None => bail!("invalid command character {:?} at index {}", c, i),
        }
    }

    Ok(Scenario {
        width: raw.width,
        height: raw.height,
        pieces,
        commands,
    })
}
