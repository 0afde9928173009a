//! Data models module
//!
//! Result records produced by the benchmark suite and the
//! correctness checks.

pub mod report;

// Re-export commonly used types
pub use report::{BenchmarkRun, DatasetReport, Measurement};
