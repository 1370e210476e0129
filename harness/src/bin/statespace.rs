//! `statespace`: solve one of the built-in worlds and print the report.
//!
//! Usage: `statespace --world maze --algorithm a_star [--seed N] [--max-expansions N]`
//!
//! Output: a JSON array of `{ "digest": ..., "report": ... }` objects on
//! stdout, one per algorithm run. Diagnostics go to stderr (`RUST_LOG`).

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use statespace_harness::contract::{World, WorldError};
use statespace_harness::report::{CanonError, SolveReport};
use statespace_harness::runner::{solve_with_every_algorithm, solve_world, RunError};
use statespace_harness::worlds::countdown::Countdown;
use statespace_harness::worlds::eight_puzzle::EightPuzzle;
use statespace_harness::worlds::hanoi::Hanoi;
use statespace_harness::worlds::maze::Maze;
use statespace_search::policy::{ClosedSetFilter, SearchPolicy, DEFAULT_RANDOM_STEP_LIMIT};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WorldKind {
    /// 5x5 room around a pillar.
    Maze,
    /// 7x7 corridors.
    MazeCorridors,
    /// U-shaped corridor that traps gradient descent.
    MazeUBend,
    /// Towers of Hanoi (`--disks` disks, 3 pegs).
    Hanoi,
    /// Numbers 1..=6, target 21.
    Countdown,
    /// A scrambled 3x3 sliding puzzle.
    EightPuzzle,
}

#[derive(Debug, Parser)]
#[command(name = "statespace")]
#[command(about = "Solve a built-in state-space world and print the solve report")]
struct Cli {
    /// World to solve.
    #[arg(long, value_enum, default_value = "maze")]
    world: WorldKind,

    /// Algorithm name (case-insensitive), or `all` for every algorithm.
    #[arg(long, default_value = "A_STAR")]
    algorithm: String,

    /// Seed for FULL_RANDOM. Entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Expansion budget for DFS/BFS/GREEDY/A_STAR.
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Step budget for FULL_RANDOM.
    #[arg(long, default_value_t = DEFAULT_RANDOM_STEP_LIMIT)]
    step_limit: u64,

    /// Make GRADIENT skip states it already stood on.
    #[arg(long)]
    skip_visited: bool,

    /// Disk count for the hanoi world.
    #[arg(long, default_value_t = 3)]
    disks: u8,
}

impl Cli {
    fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.max_expansions,
            random_step_limit: self.step_limit,
            random_seed: self.seed,
            gradient_filter: if self.skip_visited {
                ClosedSetFilter::SkipVisited
            } else {
                ClosedSetFilter::KeepVisited
            },
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error(transparent)]
    Canon(#[from] CanonError),
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

fn solve<W: World>(world: &W, cli: &Cli) -> Result<Vec<SolveReport>, RunError> {
    let policy = cli.policy();
    if cli.algorithm.eq_ignore_ascii_case("all") {
        solve_with_every_algorithm(world, &policy)
    } else {
        Ok(vec![solve_world(world, cli.algorithm.as_str(), &policy)?])
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let reports = match cli.world {
        WorldKind::Maze => solve(&Maze::small(), cli)?,
        WorldKind::MazeCorridors => solve(&Maze::corridors(), cli)?,
        WorldKind::MazeUBend => solve(&Maze::u_bend(), cli)?,
        WorldKind::Hanoi => solve(&Hanoi::new(cli.disks, 3)?, cli)?,
        WorldKind::Countdown => solve(&Countdown::classic(), cli)?,
        WorldKind::EightPuzzle => solve(&EightPuzzle::scrambled(), cli)?,
    };

    let mut entries = Vec::with_capacity(reports.len());
    for report in &reports {
        entries.push(serde_json::json!({
            "digest": report.digest()?,
            "report": report,
        }));
    }
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn main() -> ExitCode {
    statespace_harness::logging::init("info");
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}
