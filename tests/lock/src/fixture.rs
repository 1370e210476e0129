//! The deterministic search suite behind the `search_fixture` binary.
//!
//! Both the binary and the in-process tests call [`fixture_lines`], so the
//! cross-process test can compare a child process against the same suite
//! run in the test process.

use statespace_harness::contract::World;
use statespace_harness::report::SolveReport;
use statespace_harness::runner::{solve_with_every_algorithm, solve_world};
use statespace_harness::worlds::countdown::Countdown;
use statespace_harness::worlds::eight_puzzle::EightPuzzle;
use statespace_harness::worlds::hanoi::Hanoi;
use statespace_harness::worlds::maze::Maze;
use statespace_search::policy::SearchPolicy;

/// Seed used for every `FULL_RANDOM` run in the suite.
pub const FIXTURE_SEED: u64 = 7;

/// Policy used by the suite: defaults plus a fixed random seed.
#[must_use]
pub fn fixture_policy() -> SearchPolicy {
    SearchPolicy {
        random_seed: Some(FIXTURE_SEED),
        ..SearchPolicy::default()
    }
}

/// Run the suite and return its reports in a fixed order.
///
/// # Panics
///
/// Panics if any run fails: the suite only uses valid worlds and names.
#[must_use]
pub fn fixture_reports() -> Vec<SolveReport> {
    let policy = fixture_policy();
    let mut reports = solve_with_every_algorithm(&Maze::small(), &policy).expect("maze suite");
    reports.extend(solve_with_every_algorithm(&Maze::u_bend(), &policy).expect("u-bend suite"));
    let hanoi = Hanoi::new(3, 3).expect("3-disk hanoi");
    for algorithm in ["BFS", "A_STAR", "GRADIENT"] {
        reports.push(one(&hanoi, algorithm, &policy));
    }
    reports.push(one(&Countdown::classic(), "A_STAR", &policy));
    reports.push(one(&EightPuzzle::scrambled(), "A_STAR", &policy));
    reports
}

fn one<W: World>(world: &W, algorithm: &str, policy: &SearchPolicy) -> SolveReport {
    solve_world(world, algorithm, policy)
        .unwrap_or_else(|e| panic!("{} {algorithm}: {e}", world.world_id()))
}

/// `key=value` lines, one block per report.
///
/// # Panics
///
/// Panics if a report cannot be canonicalized.
#[must_use]
pub fn fixture_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for report in fixture_reports() {
        let key = format!("{}.{}", report.world_id, report.algorithm);
        let digest = report.digest().expect("report digest");
        let status = if report.is_solved() { "solved" } else { "no_solution" };
        lines.push(format!("{key}.status={status}"));
        lines.push(format!("{key}.path_len={}", report.path_len));
        lines.push(format!("{key}.expansions={}", report.stats.expansions));
        lines.push(format!("{key}.digest={digest}"));
    }
    lines
}
