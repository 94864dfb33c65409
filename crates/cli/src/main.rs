#![deny(unsafe_code)]
//! CLI binary for the 4096-color mosaic.
//!
//! Subcommands:
//! - `color <hex3>` — show where one color was placed
//! - `grid` — print the whole grid (or one row) as hex3 keys
//! - `stats` — per-tier displacement statistics
//! - `check` — rebuild and verify completeness and determinism

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use log::{debug, info};
use mosaic_core::cache::mosaic;
use mosaic_core::{
    get_mosaic_grid, get_mosaic_stats, try_mosaic_color, Cell, ColorEntry, Mosaic, OkLchAdapter,
    CELL_COUNT, GRID_SIZE,
};
use std::collections::HashSet;
use std::process;

#[derive(Parser)]
#[command(name = "mosaic", about = "Inspect the 64x64 mosaic of all 4096 twelve-bit colors")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the cell a color was placed in.
    Color {
        /// Three lowercase hex digits, e.g. "f0a".
        hex3: String,
    },
    /// Print the grid as rows of hex3 keys.
    Grid {
        /// Print only this row (0 = lightest).
        #[arg(short, long)]
        row: Option<usize>,
    },
    /// Print per-tier displacement statistics.
    Stats,
    /// Rebuild the grid and verify completeness, lookup agreement and determinism.
    Check,
}

fn describe(entry: &ColorEntry) -> String {
    format!(
        "{} {} row {:>2} col {:>2}  L {:.3} C {:.3} H {:.1}",
        entry.hex3,
        entry.hex6,
        entry.row,
        entry.col,
        entry.perceptual.l,
        entry.perceptual.c,
        entry.perceptual.h
    )
}

fn render_row(entries: &[ColorEntry]) -> String {
    entries
        .iter()
        .map(|e| e.hex3.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Verifies that `built` is a complete bijection and that `other` is identical.
fn check_mosaic(built: &Mosaic, other: &Mosaic) -> Result<(), String> {
    let entries = built.grid().entries();
    if entries.len() != CELL_COUNT {
        return Err(format!("{} entries, expected {CELL_COUNT}", entries.len()));
    }
    let mut cells = HashSet::with_capacity(CELL_COUNT);
    let mut keys = HashSet::with_capacity(CELL_COUNT);
    for (i, entry) in entries.iter().enumerate() {
        let expected = Cell::new(i / GRID_SIZE, i % GRID_SIZE);
        if entry.cell() != expected {
            return Err(format!(
                "{} stored at {expected:?} but records {:?}",
                entry.hex3,
                entry.cell()
            ));
        }
        if !cells.insert(entry.cell()) {
            return Err(format!("cell {:?} assigned twice", entry.cell()));
        }
        if !keys.insert(entry.hex3.as_str()) {
            return Err(format!("{} placed twice", entry.hex3));
        }
        match built.color(&entry.hex3) {
            Some(found) if found == entry => {}
            _ => return Err(format!("lookup disagrees with grid for {}", entry.hex3)),
        }
    }
    if built.grid() != other.grid() {
        return Err("two builds produced different grids".to_string());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Color { hex3 } => {
            let entry = try_mosaic_color(&hex3)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                println!("{}", describe(entry));
            }
        }
        Command::Grid { row } => {
            let grid = mosaic().grid();
            let rows: Vec<&[ColorEntry]> = match row {
                Some(r) => vec![grid.row(r).ok_or_else(|| {
                    CliError::Input(format!("row {r} out of range 0..{GRID_SIZE}"))
                })?],
                None => grid.rows().collect(),
            };
            if cli.json {
                let flat: Vec<&ColorEntry> = rows.iter().flat_map(|r| r.iter()).collect();
                println!("{}", serde_json::to_string_pretty(&flat)?);
            } else {
                for r in rows {
                    println!("{}", render_row(r));
                }
            }
        }
        Command::Stats => {
            let stats = get_mosaic_stats();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(stats)?);
            } else {
                println!(
                    "{:<16} {:>5} {:>6} {:>9} {:>9} {:>7}",
                    "tier", "count", "exact", "mean", "max", "radius"
                );
                for t in &stats.tiers {
                    println!(
                        "{:<16} {:>5} {:>6} {:>9.2} {:>9.1} {:>7}",
                        t.tier, t.count, t.exact, t.mean_distance, t.max_distance, t.max_radius
                    );
                }
            }
        }
        Command::Check => {
            debug!("building two independent mosaics for comparison");
            let first = Mosaic::build(&OkLchAdapter)?;
            let second = Mosaic::build(&OkLchAdapter)?;
            check_mosaic(&first, &second).map_err(CliError::Check)?;
            if first.grid().entries() != get_mosaic_grid() {
                return Err(CliError::Check(
                    "fresh build differs from cached grid".to_string(),
                ));
            }
            info!("mosaic check passed");
            if cli.json {
                let report = serde_json::json!({
                    "ok": true,
                    "cells": CELL_COUNT,
                    "exact": first.stats().exact(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "ok: {CELL_COUNT} cells, {} colors on target",
                    first.stats().exact()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
