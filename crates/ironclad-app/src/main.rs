//! IRONCLAD command-line front end.
//!
//! Loads (or generates) a map, runs the battle to completion with the
//! standard decision modules, and writes the tick log to `<map>.out`.
//! Exit code 0 means the simulation completed, whoever won; a
//! configuration or I/O failure exits non-zero with one diagnostic line.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use ironclad_arena::MapFile;
use ironclad_procgen::ArenaRecipe;
use ironclad_sim::BattleEngine;
use ironclad_tactics::StandardFactory;

#[derive(Parser)]
#[command(name = "ironclad", version, about = "Deterministic turn-based tank battles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a battle on a map file and write its tick log.
    Run {
        /// Path to the map file.
        map: PathBuf,
        /// Log path; defaults to `<map>.out`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a mirror-symmetric map from a seeded recipe.
    Generate {
        /// Where to write the map file.
        path: PathBuf,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 16)]
        width: usize,
        #[arg(long, default_value_t = 12)]
        height: usize,
        #[arg(long, default_value_t = 2)]
        tanks_per_side: usize,
        #[arg(long, default_value_t = 500)]
        max_steps: u32,
        #[arg(long, default_value_t = 16)]
        num_shells: u32,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match dispatch(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ironclad: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run { map, out } => run_battle(&map, out.as_deref()),
        Command::Generate {
            path,
            seed,
            width,
            height,
            tanks_per_side,
            max_steps,
            num_shells,
        } => {
            let recipe = ArenaRecipe {
                width,
                height,
                tanks_per_side,
                max_steps,
                num_shells,
                seed,
                ..Default::default()
            };
            let map = ironclad_procgen::generate(&recipe);
            fs::write(&path, map.render())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
            Ok(())
        }
    }
}

fn run_battle(map_path: &Path, out: Option<&Path>) -> anyhow::Result<()> {
    let map = MapFile::load(map_path)
        .with_context(|| format!("failed to load map {}", map_path.display()))?;
    let out_path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_out_path(map_path));

    let mut engine = BattleEngine::new(map, &StandardFactory);
    let (reports, outcome) = engine.run();

    let mut log = String::new();
    for report in &reports {
        for event in &report.events {
            debug!(tick = report.tick, ?event, "game event");
        }
        log.push_str(&report.log_line());
        log.push('\n');
    }
    log.push_str(&outcome.to_string());
    log.push('\n');
    fs::write(&out_path, log)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("{outcome}");
    Ok(())
}

/// `<map>.out` next to the input file.
fn default_out_path(map_path: &Path) -> PathBuf {
    let mut name = map_path.as_os_str().to_os_string();
    name.push(".out");
    PathBuf::from(name)
}
