//! Benchmark report model and its JSON persistence.
mod store;
mod types;


pub use store::ReportStore;
pub use types::{BenchmarkReport, LevelResult, report_timestamp};
