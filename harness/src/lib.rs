//! Statespace Harness: fixed example worlds and a report-producing runner.
//!
//! The harness runs a world through `statespace_search` and packages the
//! outcome as a [`report::SolveReport`] with a canonical digest.
//!
//! The harness does NOT implement search logic: it delegates to the search
//! crate. Worlds provide domain data only; the runner owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod logging;
pub mod report;
pub mod runner;
pub mod worlds;
