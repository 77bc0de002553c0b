//! # fibench core
//!
//! Naive recursive Fibonacci and the timed driver that prints a run of it.

#![warn(unused_extern_crates)]

pub mod fibonacci;
pub mod runtime;
pub mod utils;

pub use fibonacci::{fibonacci, FibError, MAX_INDEX};
pub use runtime::{Driver, DriverError, RunSummary, Timestamp};
