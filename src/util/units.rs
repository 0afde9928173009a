//! Units formatting utilities
//!
//! Human-readable formatting of per-search latencies, one-time costs,
//! speedup ratios and query counts.

use std::time::Duration;

/// Format a per-search latency in milliseconds with four decimals
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use searchbench::util::units::format_search_time;
///
/// assert_eq!(format_search_time(Duration::from_micros(1500)), "1.5000 ms");
/// assert_eq!(format_search_time(Duration::from_nanos(1500)), "0.0015 ms");
/// ```
pub fn format_search_time(duration: Duration) -> String {
    format!("{:.4} ms", duration.as_secs_f64() * 1000.0)
}

/// Format a one-time cost (such as sorting) in milliseconds with two decimals
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use searchbench::util::units::format_one_time_cost;
///
/// assert_eq!(format_one_time_cost(Duration::from_micros(12_340)), "12.34 ms");
/// ```
pub fn format_one_time_cost(duration: Duration) -> String {
    format!("{:.2} ms", duration.as_secs_f64() * 1000.0)
}

/// Format a speedup ratio
///
/// # Examples
/// ```
/// use searchbench::util::units::format_speedup;
///
/// assert_eq!(format_speedup(12.3456), "12.35x");
/// ```
pub fn format_speedup(ratio: f64) -> String {
    format!("{:.2}x", ratio)
}

/// Format a count with thousands separators
///
/// # Examples
/// ```
/// use searchbench::util::units::format_count;
///
/// assert_eq!(format_count(100000), "100,000");
/// assert_eq!(format_count(500), "500");
/// ```
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Ratio of two durations, `None` when the denominator is zero
pub fn duration_ratio(numerator: Duration, denominator: Duration) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }
    Some(numerator.as_secs_f64() / denominator.as_secs_f64())
}
