//! World implementations for the harness runner.

pub mod countdown;
pub mod eight_puzzle;
pub mod hanoi;
pub mod maze;
