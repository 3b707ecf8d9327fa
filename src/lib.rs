//! Core library for the `procbench` CLI.
//!
//! Runs an external command-line tool many times under a closed-loop worker
//! pool, reduces the outcomes to throughput and latency percentiles, and
//! persists sweeps across concurrency levels as JSON reports. The binary is
//! the primary interface; these modules are what it is built from.
pub mod args;
pub mod config;
pub mod driver;
pub mod error;
pub mod invocation;
pub mod pool;
pub mod report;
pub mod resolver;
pub mod stats;
pub mod ui;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
