//! Correctness checks
//!
//! Fixed example scenarios for the three search functions, and an
//! agreement check running every algorithm over a whole dataset.

use log::debug;
use serde::de::DeserializeOwned;

use crate::bench::timed_sort;
use crate::data::{DatasetSpec, DatasetStore, ElementKind, TargetSet, TestCases, CATALOG};
use crate::search::{display_index, Algorithm};
use crate::Result;

const UNSORTED_SAMPLE: [i64; 8] = [7, 2, 9, 1, 5, 13, 3, 11];
const SORTED_SAMPLE: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

/// Result of one example scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub title: &'static str,
    pub algorithm: Algorithm,
    pub data: Vec<i64>,
    pub target: i64,
    pub expected: Option<usize>,
    pub actual: Option<usize>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    /// Render the PASS/FAIL lines printed to the console
    pub fn render(&self) -> String {
        let verdict = if self.passed() { "✓ PASS" } else { "✗ FAIL" };
        format!(
            "{}\n  {}({:?}, {}) = {}\n  Expected: {}, Got: {}, {}",
            self.title,
            self.algorithm.name(),
            self.data,
            self.target,
            display_index(self.actual),
            display_index(self.expected),
            display_index(self.actual),
            verdict
        )
    }
}

/// Run the six example scenarios
pub fn run_scenarios() -> Vec<CheckOutcome> {
    let scenarios: [(&'static str, Algorithm, &[i64], i64, Option<usize>); 6] = [
        (
            "Test 1: Linear search on unsorted data",
            Algorithm::Linear,
            &UNSORTED_SAMPLE,
            9,
            Some(2),
        ),
        (
            "Test 2: Linear search - item not found",
            Algorithm::Linear,
            &UNSORTED_SAMPLE,
            99,
            None,
        ),
        (
            "Test 3: Binary search iterative on sorted data",
            Algorithm::BinaryIterative,
            &SORTED_SAMPLE,
            9,
            Some(4),
        ),
        (
            "Test 4: Binary search iterative - item not found",
            Algorithm::BinaryIterative,
            &SORTED_SAMPLE,
            10,
            None,
        ),
        (
            "Test 5: Binary search recursive on sorted data",
            Algorithm::BinaryRecursive,
            &SORTED_SAMPLE,
            13,
            Some(6),
        ),
        (
            "Test 6: Binary search recursive - item not found",
            Algorithm::BinaryRecursive,
            &SORTED_SAMPLE,
            8,
            None,
        ),
    ];

    scenarios
        .into_iter()
        .map(|(title, algorithm, data, target, expected)| CheckOutcome {
            title,
            algorithm,
            data: data.to_vec(),
            target,
            expected,
            actual: algorithm.run(data, &target),
        })
        .collect()
}

/// Outcome of running every algorithm over one dataset's targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgreementReport {
    pub dataset: String,
    pub present_checked: usize,
    pub absent_checked: usize,
    /// One line per wrong or disagreeing answer
    pub mismatches: Vec<String>,
}

impl AgreementReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn render(&self) -> String {
        let verdict = if self.passed() { "✓ PASS" } else { "✗ FAIL" };
        let mut line = format!(
            "{}: {} present, {} absent targets checked, {}",
            self.dataset, self.present_checked, self.absent_checked, verdict
        );
        for mismatch in &self.mismatches {
            line.push_str("\n  ");
            line.push_str(mismatch);
        }
        line
    }
}

/// Check that all algorithms find every present target and no absent one
///
/// `sorted` must be in ascending order.
pub fn verify_targets<T>(dataset: &str, sorted: &[T], targets: &TargetSet<T>) -> AgreementReport
where
    T: Ord + std::fmt::Debug,
{
    let mut report = AgreementReport {
        dataset: dataset.to_string(),
        ..AgreementReport::default()
    };

    for target in &targets.present {
        let results = Algorithm::ALL.map(|algorithm| algorithm.run(sorted, target));
        for (algorithm, result) in Algorithm::ALL.iter().zip(results) {
            match result {
                Some(index) if sorted[index] == *target => {}
                Some(index) => report.mismatches.push(format!(
                    "{} returned index {} for {:?}, which holds {:?}",
                    algorithm.name(),
                    index,
                    target,
                    sorted[index]
                )),
                None => report
                    .mismatches
                    .push(format!("{} missed present target {:?}", algorithm.name(), target)),
            }
        }
        if results[1] != results[2] {
            report.mismatches.push(format!(
                "binary variants disagree on {:?}: {} vs {}",
                target,
                display_index(results[1]),
                display_index(results[2])
            ));
        }
        report.present_checked += 1;
    }

    for target in &targets.absent {
        for algorithm in Algorithm::ALL {
            if let Some(index) = algorithm.run(sorted, target) {
                report.mismatches.push(format!(
                    "{} found absent target {:?} at index {}",
                    algorithm.name(),
                    target,
                    index
                ));
            }
        }
        report.absent_checked += 1;
    }

    report
}

/// Run the agreement check on every catalog dataset in `store`
pub fn verify_store(store: &DatasetStore) -> Result<Vec<AgreementReport>> {
    let cases = store.load_test_cases()?;
    let mut reports = Vec::with_capacity(CATALOG.len());

    for spec in CATALOG.iter() {
        let report = match spec.kind {
            ElementKind::Integer => verify_dataset::<i64>(store, spec, &cases)?,
            ElementKind::Text => verify_dataset::<String>(store, spec, &cases)?,
        };
        debug!("{}: {} mismatches", spec.name, report.mismatches.len());
        reports.push(report);
    }

    Ok(reports)
}

fn verify_dataset<T>(
    store: &DatasetStore,
    spec: &DatasetSpec,
    cases: &TestCases,
) -> Result<AgreementReport>
where
    T: Ord + Clone + std::fmt::Debug + DeserializeOwned,
{
    let data: Vec<T> = store.load_dataset(spec)?;
    let (sorted, _) = timed_sort(&data);
    let targets = cases.targets::<T>(spec.name)?;
    Ok(verify_targets(spec.name, &sorted, &targets))
}
