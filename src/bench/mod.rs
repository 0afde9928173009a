//! Benchmark engine module
//!
//! Timing of search batches, the per-dataset benchmark suite, and the
//! sort break-even analysis.

pub mod preprocessing;
pub mod suite;
pub mod timing;

// Re-export commonly used types
pub use preprocessing::{
    analyze, break_even, BreakEven, PreprocessingAnalysis, PreprocessingAnalyzer,
};
pub use suite::BenchmarkSuite;
pub use timing::{benchmark_algorithm, timed_sort};
