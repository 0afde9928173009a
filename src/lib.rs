//! searchbench - search algorithm assignment toolkit
//!
//! Generates synthetic datasets, implements linear and binary search,
//! and benchmarks each algorithm against each dataset.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod check;
pub mod config;
pub mod data;
pub mod models;
pub mod search;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum SearchBenchError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Dataset or test-case file is missing, malformed or inconsistent
    DatasetError(String),
    /// Benchmark execution error
    BenchmarkError(String),
    /// Report persistence error
    PersistenceError(String),
}

impl fmt::Display for SearchBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBenchError::IoError(err) => write!(f, "I/O error: {}", err),
            SearchBenchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SearchBenchError::DatasetError(msg) => write!(f, "Dataset error: {}", msg),
            SearchBenchError::BenchmarkError(msg) => write!(f, "Benchmark error: {}", msg),
            SearchBenchError::PersistenceError(msg) => {
                write!(f, "Report persistence error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SearchBenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchBenchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SearchBenchError {
    fn from(err: std::io::Error) -> Self {
        SearchBenchError::IoError(err)
    }
}

impl From<serde_json::Error> for SearchBenchError {
    fn from(err: serde_json::Error) -> Self {
        SearchBenchError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for SearchBenchError {
    fn from(err: toml::de::Error) -> Self {
        SearchBenchError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for SearchBenchError {
    fn from(err: toml::ser::Error) -> Self {
        SearchBenchError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for searchbench operations
pub type Result<T> = std::result::Result<T, SearchBenchError>;

/// Error handling utilities
pub mod error {
    use super::SearchBenchError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &SearchBenchError) -> String {
        match error {
            SearchBenchError::IoError(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                "Dataset files not found. Run `searchbench generate` first.".to_string()
            }
            SearchBenchError::DatasetError(msg) => {
                format!("{}. Regenerate the datasets with `searchbench generate`.", msg)
            }
            SearchBenchError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            SearchBenchError::PersistenceError(_) => {
                "Failed to write the report. Check the output path and permissions.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "searchbench";
pub const CONFIG_FILE: &str = "searchbench.toml";
pub const DEFAULT_DATA_DIR: &str = "datasets";
pub const TEST_CASES_FILE: &str = "test_cases.json";
pub const DEFAULT_SEED: u64 = 42;
