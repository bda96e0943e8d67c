//! Scripted replay runner (default binary).
//!
//! Loads a JSON scenario, replays its command script, and writes the trace
//! (snapshots and score changes) to stdout. Logs go to stderr so the trace
//! stream stays byte-deterministic.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use blockfall::config;
use blockfall::trace;

/// Deterministic scripted falling-block puzzle replay.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the JSON scenario file (dimensions, pieces, commands).
    scenario: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let scenario = config::load(&args.scenario)?;
    log::info!(
        "loaded scenario: {}x{} board, {} pieces, {} commands",
        scenario.width,
        scenario.height,
        scenario.pieces.len(),
        scenario.commands.len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    trace::replay(&scenario, &mut out)?;
    out.flush()?;
    Ok(())
}
