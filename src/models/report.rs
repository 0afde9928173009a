//! Benchmark report data models
//!
//! Contains structures for storing, rendering and serializing the
//! timings of one benchmark run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::Algorithm;
use crate::util::units::{duration_ratio, format_one_time_cost, format_search_time, format_speedup};
use crate::{Result, SearchBenchError};

/// Average time per search for one algorithm over one batch of targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    /// Mean elapsed time per search
    #[serde(with = "duration_serde")]
    pub average: Duration,
    /// Number of searches in the batch
    pub searches: usize,
}

/// Timings for one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Dataset key
    pub dataset: String,
    /// Human-readable label
    pub description: String,
    /// Number of elements searched
    pub elements: usize,
    /// Linear search on the data as stored
    pub linear: Measurement,
    /// One-time sort cost, `None` when the data was stored sorted
    #[serde(with = "option_duration_serde")]
    pub sort_time: Option<Duration>,
    pub binary_iterative: Measurement,
    pub binary_recursive: Measurement,
}

impl DatasetReport {
    /// How many times faster iterative binary search is than linear search
    pub fn speedup(&self) -> Option<f64> {
        duration_ratio(self.linear.average, self.binary_iterative.average)
    }

    /// Render the timing table printed to the console
    pub fn render(&self) -> String {
        let mut lines = vec![format!("Dataset: {}", self.description), "-".repeat(70)];

        lines.push(format!(
            "  {:<28}{} per search",
            format!("{}:", self.linear.algorithm.name()),
            format_search_time(self.linear.average)
        ));

        if let Some(sort_time) = self.sort_time {
            lines.push(format!(
                "  {:<28}{} (one-time cost)",
                "Time to sort data:",
                format_one_time_cost(sort_time)
            ));
        }

        for measurement in [&self.binary_iterative, &self.binary_recursive] {
            lines.push(format!(
                "  {:<28}{} per search",
                format!("{}:", measurement.algorithm.name()),
                format_search_time(measurement.average)
            ));
        }

        if let Some(speedup) = self.speedup() {
            lines.push(format!(
                "  {:<28}{} faster than linear",
                "Binary speedup:",
                format_speedup(speedup)
            ));
        }

        lines.join("\n")
    }
}

/// Complete benchmark run over every dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// When the run finished
    pub timestamp: DateTime<Utc>,
    /// Seed used to shuffle the targets
    pub seed: u64,
    pub reports: Vec<DatasetReport>,
}

impl BenchmarkRun {
    pub fn new(seed: u64, reports: Vec<DatasetReport>) -> Self {
        Self {
            timestamp: Utc::now(),
            seed,
            reports,
        }
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        let best = self
            .reports
            .iter()
            .filter_map(|r| r.speedup().map(|s| (r, s)))
            .max_by(|a, b| a.1.total_cmp(&b.1));

        match best {
            Some((report, speedup)) => format!(
                "{} - {} datasets - best binary speedup {} on {}",
                self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                self.reports.len(),
                format_speedup(speedup),
                report.dataset
            ),
            None => format!(
                "{} - {} datasets",
                self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                self.reports.len()
            ),
        }
    }

    /// Write the run as pretty-printed JSON
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SearchBenchError::PersistenceError(format!(
                    "Failed to create report directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            SearchBenchError::PersistenceError(format!(
                "Failed to write report {}: {}",
                path.display(),
                e
            ))
        })
    }
}

// Durations are stored as integer nanoseconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_nanos() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos))
    }
}

mod option_duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_nanos() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = Option::<u64>::deserialize(deserializer)?;
        Ok(nanos.map(Duration::from_nanos))
    }
}
