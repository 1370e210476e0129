//! Optimality locks: BFS and A* return shortest paths on the built-in
//! worlds; DFS returns a valid path that is never shorter.

use lock_tests::fixture::fixture_policy;
use statespace_harness::contract::World;
use statespace_harness::runner::solve_world;
use statespace_harness::worlds::eight_puzzle::EightPuzzle;
use statespace_harness::worlds::hanoi::Hanoi;
use statespace_harness::worlds::maze::Maze;
use statespace_search::error::TerminationReason;
use statespace_search::policy::SearchPolicy;

fn path_len<W: World>(world: &W, algorithm: &str) -> u64 {
    let report = solve_world(world, algorithm, &fixture_policy()).unwrap();
    assert!(
        report.is_solved(),
        "{} {algorithm}: {:?}",
        world.world_id(),
        report.outcome
    );
    report.path_len
}

// ---------------------------------------------------------------------------
// Mazes
// ---------------------------------------------------------------------------

#[test]
fn small_maze_shortest_path_is_four() {
    let maze = Maze::small();
    assert_eq!(path_len(&maze, "BFS"), 4);
    assert_eq!(path_len(&maze, "A_STAR"), 4);
    assert!(path_len(&maze, "DFS") >= 4, "DFS cannot beat the optimum");
}

#[test]
fn corridor_maze_shortest_path_is_eight() {
    let maze = Maze::corridors();
    assert_eq!(path_len(&maze, "BFS"), 8);
    assert_eq!(path_len(&maze, "A_STAR"), 8);
    assert!(path_len(&maze, "DFS") >= 8);
}

#[test]
fn u_bend_shortest_path_is_six() {
    let maze = Maze::u_bend();
    assert_eq!(path_len(&maze, "BFS"), 6);
    assert_eq!(path_len(&maze, "A_STAR"), 6);
}

// ---------------------------------------------------------------------------
// Hanoi
// ---------------------------------------------------------------------------

#[test]
fn three_disk_hanoi_takes_seven_moves() {
    let hanoi = Hanoi::new(3, 3).unwrap();
    assert_eq!(path_len(&hanoi, "BFS"), 7);
    assert_eq!(path_len(&hanoi, "A_STAR"), 7);
    assert!(path_len(&hanoi, "DFS") >= 7);
}

#[test]
fn four_pegs_shorten_hanoi() {
    // Frame-Stewart: 3 disks on 4 pegs need 5 moves.
    let hanoi = Hanoi::new(3, 4).unwrap();
    assert_eq!(path_len(&hanoi, "BFS"), 5);
}

// ---------------------------------------------------------------------------
// Eight puzzle
// ---------------------------------------------------------------------------

#[test]
fn eight_puzzle_shortest_path_is_eight() {
    let puzzle = EightPuzzle::scrambled();
    assert_eq!(path_len(&puzzle, "BFS"), 8);
    assert_eq!(path_len(&puzzle, "A_STAR"), 8);
}

#[test]
fn astar_expands_fewer_states_than_bfs() {
    let puzzle = EightPuzzle::scrambled();
    let bfs = solve_world(&puzzle, "BFS", &fixture_policy()).unwrap();
    let astar = solve_world(&puzzle, "A_STAR", &fixture_policy()).unwrap();
    assert!(
        astar.stats.expansions < bfs.stats.expansions,
        "A* {} vs BFS {}",
        astar.stats.expansions,
        bfs.stats.expansions
    );
}

#[test]
fn expansion_budget_bounds_dfs_on_eight_puzzle() {
    let policy = SearchPolicy {
        max_expansions: Some(1_000),
        ..fixture_policy()
    };
    let report = solve_world(&EightPuzzle::scrambled(), "DFS", &policy).unwrap();
    assert!(!report.is_solved());
    assert_eq!(
        report.outcome,
        statespace_harness::report::Outcome::NoSolution {
            reason: TerminationReason::ExpansionBudgetExceeded { limit: 1_000 }
                .as_str()
                .into()
        }
    );
    assert_eq!(report.stats.expansions, 1_000);
}
