//! Lookup of strategies by name.
//!
//! The registry holds no state: every call builds fresh [`Strategy`] values.
//! Names are matched case-insensitively against [`Strategy::name`].

use crate::error::NoSuchAlgorithm;
use crate::policy::SearchPolicy;
use crate::strategy::{Strategy, StrategySelector};

/// All built-in strategies with default parameters, in registry order.
#[must_use]
pub fn algorithms() -> Vec<Strategy> {
    algorithms_with(&SearchPolicy::default())
}

/// All built-in strategies, parameterized by `policy`, in registry order:
/// `DFS`, `BFS`, `GREEDY`, `A_STAR`, `GRADIENT`, `FULL_RANDOM`.
#[must_use]
pub fn algorithms_with(policy: &SearchPolicy) -> Vec<Strategy> {
    vec![
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::Greedy,
        Strategy::AStar,
        Strategy::Gradient {
            filter: policy.gradient_filter,
        },
        Strategy::FullRandom {
            step_limit: policy.random_step_limit,
            seed: policy.random_seed,
        },
    ]
}

/// Registry names, in registry order.
#[must_use]
pub fn algorithm_names() -> Vec<&'static str> {
    algorithms().iter().map(Strategy::name).collect()
}

/// Find a default-parameter strategy by name.
///
/// # Errors
///
/// Returns [`NoSuchAlgorithm`] if no strategy has that name.
pub fn find_by_name(name: &str) -> Result<Strategy, NoSuchAlgorithm> {
    find_by_name_with(name, &SearchPolicy::default())
}

/// Find a strategy by name, parameterized by `policy`.
///
/// # Errors
///
/// Returns [`NoSuchAlgorithm`] if no strategy has that name.
pub fn find_by_name_with(name: &str, policy: &SearchPolicy) -> Result<Strategy, NoSuchAlgorithm> {
    algorithms_with(policy)
        .into_iter()
        .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| NoSuchAlgorithm {
            name: name.to_owned(),
        })
}

/// Resolve a selector with default parameters.
///
/// # Errors
///
/// Returns [`NoSuchAlgorithm`] for an unknown [`StrategySelector::ByName`].
pub fn find(selector: &StrategySelector) -> Result<Strategy, NoSuchAlgorithm> {
    find_with(selector, &SearchPolicy::default())
}

/// Resolve a selector. Named lookups take their parameters from `policy`;
/// [`StrategySelector::ByValue`] passes through unchanged.
///
/// # Errors
///
/// Returns [`NoSuchAlgorithm`] for an unknown [`StrategySelector::ByName`].
pub fn find_with(
    selector: &StrategySelector,
    policy: &SearchPolicy,
) -> Result<Strategy, NoSuchAlgorithm> {
    match selector {
        StrategySelector::ByName(name) => find_by_name_with(name, policy),
        StrategySelector::ByValue(strategy) => Ok(*strategy),
    }
}
