//! Dataset module
//!
//! Dataset catalog, seeded dataset generation, and JSON loading/saving
//! of datasets and their test cases.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Result, SearchBenchError};

pub mod catalog;
pub mod generator;
pub mod store;

// Re-export commonly used types
pub use catalog::{DatasetSpec, ElementKind, CATALOG};
pub use generator::DatasetGenerator;
pub use store::{load_dataset, load_test_cases, DatasetStore};

/// Targets known to exist (`present`) or not exist (`absent`) in a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSet<T> {
    pub present: Vec<T>,
    pub absent: Vec<T>,
}

impl<T: Clone> TargetSet<T> {
    /// Mix of the first `present` present and first `absent` absent targets
    pub fn mixed(&self, present: usize, absent: usize) -> Vec<T> {
        self.present
            .iter()
            .take(present)
            .chain(self.absent.iter().take(absent))
            .cloned()
            .collect()
    }
}

/// Contents of the test-case file, keyed by dataset name
///
/// Each dataset has its own element type, so entries are kept as raw JSON
/// and converted when a dataset's targets are requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCases {
    entries: BTreeMap<String, serde_json::Value>,
}

impl TestCases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the targets for `name`, replacing any previous entry
    pub fn insert<T: Serialize>(&mut self, name: &str, targets: &TargetSet<T>) -> Result<()> {
        let value = serde_json::to_value(targets)?;
        self.entries.insert(name.to_string(), value);
        Ok(())
    }

    /// Targets for `name`, decoded with the dataset's element type
    pub fn targets<T: DeserializeOwned>(&self, name: &str) -> Result<TargetSet<T>> {
        let value = self.entries.get(name).ok_or_else(|| {
            SearchBenchError::DatasetError(format!("No test cases for dataset '{}'", name))
        })?;

        TargetSet::deserialize(value).map_err(|e| {
            SearchBenchError::DatasetError(format!(
                "Malformed test cases for dataset '{}': {}",
                name, e
            ))
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_targets() {
        let targets = TargetSet {
            present: vec![1, 2, 3, 4],
            absent: vec![10, 11, 12],
        };
        assert_eq!(targets.mixed(2, 2), vec![1, 2, 10, 11]);
        assert_eq!(targets.mixed(10, 0), vec![1, 2, 3, 4]);
        assert!(targets.mixed(0, 0).is_empty());
    }

    #[test]
    fn test_test_cases_typed_access() {
        let mut cases = TestCases::new();
        cases
            .insert("ints", &TargetSet { present: vec![1i64, 2], absent: vec![99] })
            .unwrap();
        cases
            .insert(
                "words",
                &TargetSet {
                    present: vec!["a".to_string()],
                    absent: vec!["zzz".to_string()],
                },
            )
            .unwrap();

        let ints: TargetSet<i64> = cases.targets("ints").unwrap();
        assert_eq!(ints.absent, vec![99]);
        let words: TargetSet<String> = cases.targets("words").unwrap();
        assert_eq!(words.present, vec!["a".to_string()]);
        assert_eq!(cases.len(), 2);
        assert!(cases.contains("words"));
    }

    #[test]
    fn test_test_cases_errors() {
        let mut cases = TestCases::new();
        cases
            .insert("words", &TargetSet { present: vec!["a"], absent: vec!["b"] })
            .unwrap();

        let missing = cases.targets::<i64>("ints");
        assert!(
            matches!(missing, Err(SearchBenchError::DatasetError(msg)) if msg.contains("ints"))
        );

        let wrong_type = cases.targets::<i64>("words");
        match wrong_type {
            Err(SearchBenchError::DatasetError(msg)) => assert!(msg.contains("Malformed")),
            other => panic!("expected dataset error, got {:?}", other),
        }
    }

    #[test]
    fn test_test_cases_json_shape() {
        let json = r#"{
            "customer_ids": {"present": [1000001, 1000002], "absent": [1200000]},
            "config_settings": {"present": ["config.setting.001"], "absent": ["config.missing.000"]}
        }"#;
        let cases: TestCases = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = cases.names().collect();
        assert_eq!(names, vec!["config_settings", "customer_ids"]);

        let ids: TargetSet<i64> = cases.targets("customer_ids").unwrap();
        assert_eq!(ids.present, vec![1000001, 1000002]);
    }
}
