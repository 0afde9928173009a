//! Preprocessing cost analysis
//!
//! Answers when sorting unsorted data once pays for itself: linear search
//! costs `l` per query, sort-then-binary-search costs `s` once plus `b` per
//! query. Sorting wins after `s / (l - b)` queries, and never when `l <= b`.

use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::timing::{benchmark_algorithm, timed_sort};
use crate::config::BenchConfig;
use crate::data::{catalog, DatasetSpec, DatasetStore, ElementKind};
use crate::search::{binary_search_iterative, linear_search};
use crate::util::units::{format_count, format_one_time_cost, format_search_time};
use crate::{Result, SearchBenchError};

/// Verdict of the break-even computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakEven {
    /// Sorting plus binary search is no more expensive once this many queries ran
    After(u64),
    /// Binary search is not faster per query, sorting never pays off
    Never,
}

/// Number of queries after which sorting pays for itself
pub fn break_even(sort_time: Duration, linear: Duration, binary: Duration) -> BreakEven {
    if linear <= binary {
        return BreakEven::Never;
    }

    let saved = (linear - binary).as_nanos();
    let queries = sort_time.as_nanos().div_ceil(saved);
    BreakEven::After(u64::try_from(queries).unwrap_or(u64::MAX))
}

/// Outcome of one preprocessing analysis
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessingAnalysis {
    pub dataset: String,
    pub elements: usize,
    /// Number of targets each search was timed with
    pub searches: usize,
    /// One-time cost of sorting the data
    pub sort_time: Duration,
    pub linear_per_search: Duration,
    pub binary_per_search: Duration,
    pub break_even: BreakEven,
}

impl PreprocessingAnalysis {
    /// Build an analysis from measured costs
    pub fn from_costs(
        dataset: &str,
        elements: usize,
        searches: usize,
        sort_time: Duration,
        linear_per_search: Duration,
        binary_per_search: Duration,
    ) -> Self {
        Self {
            dataset: dataset.to_string(),
            elements,
            searches,
            sort_time,
            linear_per_search,
            binary_per_search,
            break_even: break_even(sort_time, linear_per_search, binary_per_search),
        }
    }

    /// Time binary search saves on each query, `None` if it saves nothing
    pub fn time_saved_per_search(&self) -> Option<Duration> {
        self.linear_per_search
            .checked_sub(self.binary_per_search)
            .filter(|saved| !saved.is_zero())
    }

    /// Total cost of `queries` lookups: (linear only, sort + binary)
    pub fn cumulative_costs(&self, queries: u32) -> (Duration, Duration) {
        let linear = self.linear_per_search.saturating_mul(queries);
        let sorted = self
            .sort_time
            .saturating_add(self.binary_per_search.saturating_mul(queries));
        (linear, sorted)
    }

    /// Query counts shown in the cumulative cost table
    pub fn cumulative_checkpoints(&self) -> Vec<u32> {
        match self.break_even {
            BreakEven::After(queries) if queries > 10 => {
                let queries = u32::try_from(queries).unwrap_or(u32::MAX);
                vec![10, queries, queries.saturating_mul(10)]
            }
            _ => vec![10, 100, 1000],
        }
    }

    /// Render the analysis printed to the console
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!(
                "Dataset: {} ({} entries)",
                self.dataset,
                format_count(self.elements as u64)
            ),
            format!("One-time sort cost: {}", format_one_time_cost(self.sort_time)),
            format!(
                "Linear search time: {} per search",
                format_search_time(self.linear_per_search)
            ),
            format!(
                "Binary search time: {} per search",
                format_search_time(self.binary_per_search)
            ),
        ];

        match self.time_saved_per_search() {
            Some(saved) => lines.push(format!(
                "Time saved per search: {}",
                format_search_time(saved)
            )),
            None => lines.push("Time saved per search: none".to_string()),
        }

        match self.break_even {
            BreakEven::After(queries) => {
                lines.push(format!(
                    "Break-even point: {} searches",
                    format_count(queries)
                ));
                lines.push(format!(
                    "After {} searches, sorting + binary search becomes faster",
                    format_count(queries)
                ));
            }
            BreakEven::Never => {
                lines.push("Break-even point: never".to_string());
                lines.push(
                    "Binary search is not faster per search here, sorting does not pay off"
                        .to_string(),
                );
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "  {:>14}  {:>14}  {:>16}",
            "Searches", "Linear only", "Sort + binary"
        ));
        for queries in self.cumulative_checkpoints() {
            let (linear, sorted) = self.cumulative_costs(queries);
            lines.push(format!(
                "  {:>14}  {:>14}  {:>16}",
                format_count(u64::from(queries)),
                format_one_time_cost(linear),
                format_one_time_cost(sorted)
            ));
        }

        lines.join("\n")
    }
}

/// Measure sort cost and per-search times for `data`
///
/// Linear search runs on `data` as given; iterative binary search runs on
/// a sorted copy.
pub fn analyze<T: Ord + Clone>(
    dataset: &str,
    data: &[T],
    targets: &[T],
) -> Result<PreprocessingAnalysis> {
    let (sorted, sort_time) = timed_sort(data);
    let linear = benchmark_algorithm(linear_search, data, targets)?;
    let binary = benchmark_algorithm(binary_search_iterative, &sorted, targets)?;

    let analysis = PreprocessingAnalysis::from_costs(
        dataset,
        data.len(),
        targets.len(),
        sort_time,
        linear,
        binary,
    );
    if analysis.break_even == BreakEven::Never {
        warn!("{}: binary search was not faster than linear search", dataset);
    }
    Ok(analysis)
}

/// Runs the analysis against the configured dataset
pub struct PreprocessingAnalyzer {
    config: BenchConfig,
    store: DatasetStore,
}

impl PreprocessingAnalyzer {
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let store = DatasetStore::new(config.data_dir.clone());
        Ok(Self { config, store })
    }

    pub fn run(&self) -> Result<PreprocessingAnalysis> {
        let spec = catalog::find(&self.config.analysis_dataset).ok_or_else(|| {
            SearchBenchError::ConfigError(format!(
                "Unknown analysis dataset: {}",
                self.config.analysis_dataset
            ))
        })?;

        match spec.kind {
            ElementKind::Integer => self.run_typed::<i64>(spec),
            ElementKind::Text => self.run_typed::<String>(spec),
        }
    }

    fn run_typed<T>(&self, spec: &DatasetSpec) -> Result<PreprocessingAnalysis>
    where
        T: Ord + Clone + DeserializeOwned,
    {
        let data: Vec<T> = self.store.load_dataset(spec)?;
        let cases = self.store.load_test_cases()?;
        let targets = cases
            .targets::<T>(spec.name)?
            .mixed(self.config.analysis_sample, 0);
        debug!(
            "{}: analysing with {} present targets",
            spec.name,
            targets.len()
        );

        analyze(spec.name, &data, &targets)
    }
}
