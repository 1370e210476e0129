//! Registry locks: the name table is fixed, lookups through the façade
//! ignore case, and named strategies pick up the space's policy.

use statespace_harness::contract::World;
use statespace_harness::worlds::maze::Maze;
use statespace_search::error::SearchError;
use statespace_search::policy::{ClosedSetFilter, SearchPolicy};
use statespace_search::registry::{algorithm_names, algorithms};
use statespace_search::strategy::{Strategy, StrategySelector};

#[test]
fn registry_names_are_locked() {
    assert_eq!(
        algorithm_names(),
        ["DFS", "BFS", "GREEDY", "A_STAR", "GRADIENT", "FULL_RANDOM"],
        "registry order is part of the report format; changing it changes digests"
    );
    assert_eq!(algorithms().len(), algorithm_names().len());
}

#[test]
fn every_name_resolves_in_any_case() {
    let world = Maze::small();
    for name in algorithm_names() {
        for spelling in [name.to_owned(), name.to_lowercase()] {
            let strategy = world
                .state_space(StrategySelector::from(spelling.as_str()), SearchPolicy::default())
                .resolve()
                .unwrap_or_else(|e| panic!("{spelling}: {e}"));
            assert_eq!(strategy.name(), name);
        }
    }
}

#[test]
fn unknown_name_fails_before_searching() {
    let err = Maze::small()
        .state_space("DIJKSTRA".into(), SearchPolicy::default())
        .solve()
        .unwrap_err();
    match err {
        SearchError::NoSuchAlgorithm(inner) => assert_eq!(inner.name, "DIJKSTRA"),
        other => panic!("expected NoSuchAlgorithm, got {other}"),
    }
}

#[test]
fn named_strategies_take_parameters_from_policy() {
    let policy = SearchPolicy {
        random_step_limit: 25,
        random_seed: Some(3),
        gradient_filter: ClosedSetFilter::SkipVisited,
        ..SearchPolicy::default()
    };
    let world = Maze::small();
    assert_eq!(
        world
            .state_space("full_random".into(), policy.clone())
            .resolve()
            .unwrap(),
        Strategy::FullRandom {
            step_limit: 25,
            seed: Some(3)
        }
    );
    assert_eq!(
        world.state_space("GRADIENT".into(), policy).resolve().unwrap(),
        Strategy::Gradient {
            filter: ClosedSetFilter::SkipVisited
        }
    );
}

#[test]
fn strategy_values_bypass_the_name_table() {
    let custom = Strategy::FullRandom {
        step_limit: 5,
        seed: Some(1),
    };
    let resolved = Maze::small()
        .state_space(custom.into(), SearchPolicy::default())
        .resolve()
        .unwrap();
    assert_eq!(resolved, custom);
}
