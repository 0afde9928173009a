//! Utility functions module
//!
//! Contains helper functions for formatting timings and ratios.

pub mod units;

// Re-export commonly used functions
pub use units::{
    duration_ratio, format_count, format_one_time_cost, format_search_time, format_speedup,
};
