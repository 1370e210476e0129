//! Shared helpers for statespace benchmark suites.

use statespace_harness::contract::World;
use statespace_harness::report::SolveReport;
use statespace_harness::runner::solve_world;
use statespace_harness::worlds::maze::Position;
use statespace_kernel::arena::{StateArena, StateId};
use statespace_kernel::contract::OperatorId;
use statespace_search::policy::SearchPolicy;

/// Seeded policy so `FULL_RANDOM` timings are repeatable.
#[must_use]
pub fn bench_policy() -> SearchPolicy {
    SearchPolicy {
        random_seed: Some(7),
        ..SearchPolicy::default()
    }
}

/// An arena holding a chain of `n` states plus their handles, for fringe
/// benchmarks that need valid [`StateId`]s without running a search.
///
/// # Panics
///
/// Panics if `n` does not fit in an `i32`.
#[must_use]
pub fn chain_arena(n: usize) -> (StateArena<Position>, Vec<StateId>) {
    let mut arena = StateArena::new();
    let mut ids = Vec::with_capacity(n);
    if n == 0 {
        return (arena, ids);
    }
    let mut prev = arena.insert_root(Position::new(0, 0));
    ids.push(prev);
    for x in 1..n {
        let x = i32::try_from(x).expect("chain length fits in i32");
        prev = arena.derive(prev, OperatorId(0), Position::new(x, 0));
        ids.push(prev);
    }
    (arena, ids)
}

/// Deterministic pseudo-priorities spread over `[0, 97)`.
#[must_use]
pub fn spread_priorities(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| f64::from(u32::try_from((i * 31) % 97).unwrap_or(0)))
        .collect()
}

/// Solve `world` once and return its report.
///
/// # Panics
///
/// Panics if the run fails. Benchmark setup failures are fatal.
pub fn solve_once<W: World>(world: &W, algorithm: &str) -> SolveReport {
    solve_world(world, algorithm, &bench_policy())
        .unwrap_or_else(|e| panic!("{} {algorithm}: {e}", world.world_id()))
}
