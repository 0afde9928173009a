//! Benchmark suite over the dataset catalog
//!
//! For every dataset: time linear search on the data as stored, sort a
//! copy if the data is stored unsorted, then time both binary search
//! variants on the sorted data.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::de::DeserializeOwned;

use super::timing::{benchmark_algorithm, timed_sort};
use crate::config::BenchConfig;
use crate::data::{DatasetSpec, DatasetStore, ElementKind, TestCases, CATALOG};
use crate::models::{BenchmarkRun, DatasetReport, Measurement};
use crate::search::Algorithm;
use crate::{Result, SearchBenchError};

/// Runs every algorithm against every catalog dataset
pub struct BenchmarkSuite {
    config: BenchConfig,
    store: DatasetStore,
    rng: SmallRng,
}

impl BenchmarkSuite {
    /// Create a suite reading from the configured data directory
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let store = DatasetStore::new(config.data_dir.clone());
        let rng = SmallRng::seed_from_u64(config.seed);
        Ok(Self { config, store, rng })
    }

    /// Benchmark all datasets in catalog order
    pub fn run(&mut self) -> Result<BenchmarkRun> {
        let cases = self.store.load_test_cases()?;

        let progress = if self.config.show_progress {
            let pb = ProgressBar::new(CATALOG.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut reports = Vec::with_capacity(CATALOG.len());
        for spec in CATALOG.iter() {
            progress.set_message(spec.description);
            reports.push(self.run_dataset(spec, &cases)?);
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(BenchmarkRun::new(self.config.seed, reports))
    }

    /// Benchmark a single dataset
    pub fn run_dataset(
        &mut self,
        spec: &DatasetSpec,
        cases: &TestCases,
    ) -> Result<DatasetReport> {
        match spec.kind {
            ElementKind::Integer => self.measure::<i64>(spec, cases),
            ElementKind::Text => self.measure::<String>(spec, cases),
        }
    }

    fn measure<T>(&mut self, spec: &DatasetSpec, cases: &TestCases) -> Result<DatasetReport>
    where
        T: Ord + Clone + DeserializeOwned,
    {
        let data: Vec<T> = self.store.load_dataset(spec)?;
        let mut targets = cases
            .targets::<T>(spec.name)?
            .mixed(self.config.present_per_dataset, self.config.absent_per_dataset);
        targets.shuffle(&mut self.rng);
        debug!(
            "{}: {} elements, {} targets",
            spec.name,
            data.len(),
            targets.len()
        );

        let linear = measurement(Algorithm::Linear, &data, &targets)?;

        let (sorted, sort_time) = if spec.sorted {
            (data, None)
        } else {
            let (sorted, elapsed) = timed_sort(&data);
            (sorted, Some(elapsed))
        };

        let binary_iterative = measurement(Algorithm::BinaryIterative, &sorted, &targets)?;
        let binary_recursive = measurement(Algorithm::BinaryRecursive, &sorted, &targets)?;

        let report = DatasetReport {
            dataset: spec.name.to_string(),
            description: spec.description.to_string(),
            elements: sorted.len(),
            linear,
            sort_time,
            binary_iterative,
            binary_recursive,
        };
        info!("{}: speedup {:?}", spec.name, report.speedup());
        Ok(report)
    }
}

fn measurement<T: Ord>(algorithm: Algorithm, data: &[T], targets: &[T]) -> Result<Measurement> {
    if algorithm.requires_sorted() && !data.windows(2).all(|pair| pair[0] <= pair[1]) {
        return Err(SearchBenchError::BenchmarkError(format!(
            "{} needs sorted data",
            algorithm.name()
        )));
    }

    let average = benchmark_algorithm(|d: &[T], t: &T| algorithm.run(d, t), data, targets)?;
    Ok(Measurement {
        algorithm,
        average,
        searches: targets.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::{CONFIG_SETTINGS, CUSTOMER_IDS, PRODUCT_CATALOG};
    use crate::data::catalog;
    use crate::data::{DatasetGenerator, TargetSet};
    use tempfile::TempDir;

    fn small_store(dir: &TempDir) -> DatasetStore {
        let store = DatasetStore::new(dir.path());
        let ids: Vec<i64> = vec![40, 10, 30, 20, 50];
        store.save_dataset(&CUSTOMER_IDS, &ids).unwrap();
        let products: Vec<String> = (0..20).map(|i| format!("PROD{:06}", i)).collect();
        store.save_dataset(&PRODUCT_CATALOG, &products).unwrap();

        let mut cases = TestCases::new();
        cases
            .insert(
                CUSTOMER_IDS.name,
                &TargetSet {
                    present: vec![10i64, 50],
                    absent: vec![99],
                },
            )
            .unwrap();
        cases
            .insert(
                PRODUCT_CATALOG.name,
                &TargetSet {
                    present: vec!["PROD000003".to_string()],
                    absent: vec!["PROD060000".to_string()],
                },
            )
            .unwrap();
        store.save_test_cases(&cases).unwrap();
        store
    }

    fn quiet_config(dir: &TempDir) -> BenchConfig {
        BenchConfig::new()
            .with_data_dir(dir.path().to_path_buf())
            .with_progress(false)
    }

    #[test]
    fn test_unsorted_dataset_records_sort_cost() {
        let temp_dir = TempDir::new().unwrap();
        let store = small_store(&temp_dir);
        let cases = store.load_test_cases().unwrap();

        let mut suite = BenchmarkSuite::new(quiet_config(&temp_dir)).unwrap();
        let report = suite.run_dataset(&CUSTOMER_IDS, &cases).unwrap();

        assert_eq!(report.dataset, "customer_ids");
        assert_eq!(report.elements, 5);
        assert!(report.sort_time.is_some());
        assert_eq!(report.linear.searches, 3);
        assert_eq!(report.binary_iterative.algorithm, Algorithm::BinaryIterative);
        assert_eq!(report.binary_recursive.algorithm, Algorithm::BinaryRecursive);
    }

    #[test]
    fn test_sorted_dataset_has_no_sort_cost() {
        let temp_dir = TempDir::new().unwrap();
        let store = small_store(&temp_dir);
        let cases = store.load_test_cases().unwrap();

        let mut suite = BenchmarkSuite::new(quiet_config(&temp_dir)).unwrap();
        let report = suite.run_dataset(&PRODUCT_CATALOG, &cases).unwrap();
        assert_eq!(report.sort_time, None);
        assert_eq!(report.binary_iterative.searches, 2);
    }

    #[test]
    fn test_binary_search_refuses_unsorted_data() {
        let temp_dir = TempDir::new().unwrap();
        let store = small_store(&temp_dir);
        // the catalog marks products as stored sorted, so no sort happens
        let products: Vec<String> = (0..20).rev().map(|i| format!("PROD{:06}", i)).collect();
        store.save_dataset(&PRODUCT_CATALOG, &products).unwrap();
        let cases = store.load_test_cases().unwrap();

        let mut suite = BenchmarkSuite::new(quiet_config(&temp_dir)).unwrap();
        let result = suite.run_dataset(&PRODUCT_CATALOG, &cases);
        match result {
            Err(SearchBenchError::BenchmarkError(msg)) => assert!(msg.contains("sorted")),
            other => panic!("expected benchmark error, got {:?}", other.map(|r| r.dataset)),
        }
    }

    #[test]
    fn test_measurement_checks_order_only_for_binary() {
        let data = vec![3, 1, 2];
        let linear = measurement(Algorithm::Linear, &data, &[2]).unwrap();
        assert_eq!(linear.searches, 1);
        assert!(measurement(Algorithm::BinaryRecursive, &data, &[2]).is_err());
        assert!(measurement(Algorithm::BinaryIterative, &[1, 2, 3], &[2]).is_ok());
    }

    #[test]
    fn test_missing_test_cases_for_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let store = small_store(&temp_dir);
        store.save_dataset(&CONFIG_SETTINGS, &["config.setting.000"]).unwrap();
        let cases = store.load_test_cases().unwrap();

        let mut suite = BenchmarkSuite::new(quiet_config(&temp_dir)).unwrap();
        let result = suite.run_dataset(&CONFIG_SETTINGS, &cases);
        assert!(matches!(result, Err(SearchBenchError::DatasetError(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = quiet_config(&temp_dir).with_targets(0, 0);
        assert!(BenchmarkSuite::new(config).is_err());
    }

    #[test]
    fn test_full_run_over_generated_data() {
        let temp_dir = TempDir::new().unwrap();
        let store = DatasetStore::new(temp_dir.path());
        DatasetGenerator::new(3).generate_all(&store).unwrap();

        let config = quiet_config(&temp_dir).with_targets(10, 10);
        let run = BenchmarkSuite::new(config).unwrap().run().unwrap();

        assert_eq!(run.seed, 42);
        let names: Vec<&str> = run.reports.iter().map(|r| r.dataset.as_str()).collect();
        assert_eq!(
            names,
            vec!["customer_ids", "product_catalog", "config_settings", "dictionary_words"]
        );
        for report in &run.reports {
            assert_eq!(report.linear.searches, 20);
            let spec = catalog::find(&report.dataset).unwrap();
            assert_eq!(report.sort_time.is_none(), spec.sorted);
        }
    }
}
