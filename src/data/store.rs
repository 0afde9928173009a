//! Dataset file storage
//!
//! Reads and writes dataset arrays and the test-case file as JSON
//! inside a data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{DatasetSpec, TestCases};
use crate::{Result, SearchBenchError, TEST_CASES_FILE};

/// Load a dataset (JSON array) from `path`
pub fn load_dataset<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = read_file(path)?;

    let data: Vec<T> = serde_json::from_str(&content).map_err(|e| {
        SearchBenchError::DatasetError(format!("Failed to parse dataset {}: {}", path.display(), e))
    })?;

    debug!("loaded {} elements from {}", data.len(), path.display());
    Ok(data)
}

/// Load the test-case file from `path`
pub fn load_test_cases(path: &Path) -> Result<TestCases> {
    let content = read_file(path)?;

    serde_json::from_str(&content).map_err(|e| {
        SearchBenchError::DatasetError(format!(
            "Failed to parse test cases {}: {}",
            path.display(),
            e
        ))
    })
}

// Keeps the io::ErrorKind so callers can still tell a missing file apart
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let message = format!("{}: {}", path.display(), e);
        SearchBenchError::IoError(io::Error::new(e.kind(), message))
    })
}

/// Data directory holding the generated files
#[derive(Debug, Clone)]
pub struct DatasetStore {
    root: PathBuf,
}

impl DatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dataset_path(&self, spec: &DatasetSpec) -> PathBuf {
        self.root.join(spec.file_name)
    }

    pub fn test_cases_path(&self) -> PathBuf {
        self.root.join(TEST_CASES_FILE)
    }

    /// Whether every catalog dataset and the test-case file are present
    pub fn is_complete(&self) -> bool {
        self.test_cases_path().is_file()
            && super::CATALOG
                .iter()
                .all(|spec| self.dataset_path(spec).is_file())
    }

    pub fn load_dataset<T: DeserializeOwned>(&self, spec: &DatasetSpec) -> Result<Vec<T>> {
        load_dataset(&self.dataset_path(spec))
    }

    pub fn load_test_cases(&self) -> Result<TestCases> {
        load_test_cases(&self.test_cases_path())
    }

    /// Write a dataset as a compact JSON array
    pub fn save_dataset<T: Serialize>(&self, spec: &DatasetSpec, data: &[T]) -> Result<PathBuf> {
        self.ensure_root()?;
        let path = self.dataset_path(spec);
        let content = serde_json::to_string(data)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write the test-case file, pretty-printed
    pub fn save_test_cases(&self, cases: &TestCases) -> Result<PathBuf> {
        self.ensure_root()?;
        let path = self.test_cases_path();
        let content = serde_json::to_string_pretty(cases)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            SearchBenchError::DatasetError(format!(
                "Failed to create data directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }
}
