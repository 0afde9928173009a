use searchbench::bench::{BenchmarkSuite, BreakEven, PreprocessingAnalyzer};
use searchbench::check::verify_store;
use searchbench::config::BenchConfig;
use searchbench::data::{DatasetGenerator, DatasetStore};
use tempfile::TempDir;

fn generated(seed: u64) -> (TempDir, BenchConfig) {
    let temp_dir = TempDir::new().unwrap();
    let store = DatasetStore::new(temp_dir.path().join("datasets"));
    DatasetGenerator::new(seed).generate_all(&store).unwrap();
    let config = BenchConfig::new()
        .with_data_dir(store.root().to_path_buf())
        .with_seed(seed)
        .with_progress(false);
    (temp_dir, config)
}

#[test]
fn test_generate_check_bench_analyze() {
    let (_dir, config) = generated(42);

    let store = DatasetStore::new(config.data_dir.clone());
    assert!(verify_store(&store).unwrap().iter().all(|r| r.passed()));

    let run = BenchmarkSuite::new(config.clone()).unwrap().run().unwrap();
    assert_eq!(run.reports.len(), 4);
    let customers = &run.reports[0];
    assert_eq!(customers.elements, 100_000);
    assert!(customers.sort_time.is_some());
    assert_eq!(customers.linear.searches, 100);

    let analysis = PreprocessingAnalyzer::new(config).unwrap().run().unwrap();
    assert_eq!(analysis.dataset, "customer_ids");
    assert_eq!(analysis.elements, 100_000);
    if let BreakEven::After(queries) = analysis.break_even {
        assert!(analysis.linear_per_search > analysis.binary_per_search);
        let (linear, sorted) = analysis.cumulative_costs(queries.min(u32::MAX as u64) as u32);
        assert!(linear >= sorted);
    }
}

#[test]
fn test_json_report_written() {
    let (dir, config) = generated(9);
    let run = BenchmarkSuite::new(config).unwrap().run().unwrap();
    let path = dir.path().join("out").join("run.json");
    run.save_json(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["seed"], 9);
    assert_eq!(json["reports"].as_array().unwrap().len(), 4);
}
