//! Configuration management module
//!
//! Handles loading, saving, and validation of benchmark settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::catalog;
use crate::{Result, SearchBenchError, APP_NAME, CONFIG_FILE, DEFAULT_DATA_DIR, DEFAULT_SEED};

/// Benchmark configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Directory holding the dataset and test-case files
    pub data_dir: PathBuf,
    /// Seed for dataset generation and target shuffling
    pub seed: u64,
    /// Present targets taken per dataset for the benchmark
    pub present_per_dataset: usize,
    /// Absent targets taken per dataset for the benchmark
    pub absent_per_dataset: usize,
    /// Present targets timed by the preprocessing analysis
    pub analysis_sample: usize,
    /// Dataset used by the preprocessing analysis
    pub analysis_dataset: String,
    /// Draw a progress bar while benchmarking
    pub show_progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: DEFAULT_SEED,
            present_per_dataset: 50,
            absent_per_dataset: 50,
            analysis_sample: 10,
            analysis_dataset: catalog::CUSTOMER_IDS.name.to_string(),
            show_progress: true,
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(SearchBenchError::ConfigError(
                "Data directory must not be empty".to_string(),
            ));
        }

        if self.data_dir.is_file() {
            return Err(SearchBenchError::ConfigError(format!(
                "Data directory is a file: {}",
                self.data_dir.display()
            )));
        }

        // Timing divides by the target count
        if self.present_per_dataset == 0 && self.absent_per_dataset == 0 {
            return Err(SearchBenchError::ConfigError(
                "At least one present or absent target is required per dataset".to_string(),
            ));
        }

        if self.analysis_sample == 0 {
            return Err(SearchBenchError::ConfigError(
                "Analysis sample must be greater than 0".to_string(),
            ));
        }

        match catalog::find(&self.analysis_dataset) {
            None => {
                return Err(SearchBenchError::ConfigError(format!(
                    "Unknown analysis dataset: {}",
                    self.analysis_dataset
                )));
            }
            Some(spec) if self.analysis_sample > spec.present_samples => {
                return Err(SearchBenchError::ConfigError(format!(
                    "Analysis sample too large: {} (max: {})",
                    self.analysis_sample, spec.present_samples
                )));
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many present and absent targets each dataset is timed with
    pub fn with_targets(mut self, present: usize, absent: usize) -> Self {
        self.present_per_dataset = present;
        self.absent_per_dataset = absent;
        self
    }

    /// Set the preprocessing analysis sample size
    pub fn with_analysis_sample(mut self, sample: usize) -> Self {
        self.analysis_sample = sample;
        self
    }

    /// Set the preprocessing analysis dataset
    pub fn with_analysis_dataset(mut self, name: &str) -> Self {
        self.analysis_dataset = name.to_string();
        self
    }

    /// Set whether to draw the progress bar
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SearchBenchError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SearchBenchError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SearchBenchError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            SearchBenchError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/searchbench/searchbench.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SearchBenchError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
