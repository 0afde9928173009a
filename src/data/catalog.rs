//! Dataset catalog
//!
//! The four datasets of the assignment, each modelling a different
//! lookup scenario.

use serde::{Deserialize, Serialize};

/// Element type stored in a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// JSON integers, loaded as `i64`
    Integer,
    /// JSON strings, loaded as `String`
    Text,
}

/// Static description of one dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    /// Key used in the test-case file
    pub name: &'static str,
    /// File name inside the data directory
    pub file_name: &'static str,
    /// Human-readable label for reports
    pub description: &'static str,
    /// Scenario the dataset stands for
    pub scenario: &'static str,
    pub kind: ElementKind,
    /// Whether the file is stored in ascending order
    pub sorted: bool,
    /// Number of elements written by the generator
    pub size: usize,
    /// Present targets written to the test-case file
    pub present_samples: usize,
    /// Absent targets written to the test-case file
    pub absent_samples: usize,
}

pub const CUSTOMER_IDS: DatasetSpec = DatasetSpec {
    name: "customer_ids",
    file_name: "customer_ids.json",
    description: "Unsorted Customer IDs (100K)",
    scenario: "Customer service database",
    kind: ElementKind::Integer,
    sorted: false,
    size: 100_000,
    present_samples: 100,
    absent_samples: 100,
};

pub const PRODUCT_CATALOG: DatasetSpec = DatasetSpec {
    name: "product_catalog",
    file_name: "product_catalog.json",
    description: "Pre-sorted Product Catalog (50K)",
    scenario: "E-commerce inventory system",
    kind: ElementKind::Text,
    sorted: true,
    size: 50_000,
    present_samples: 100,
    absent_samples: 100,
};

pub const CONFIG_SETTINGS: DatasetSpec = DatasetSpec {
    name: "config_settings",
    file_name: "config_settings.json",
    description: "Small Config Settings (500)",
    scenario: "Application settings lookup",
    kind: ElementKind::Text,
    sorted: false,
    size: 500,
    present_samples: 50,
    absent_samples: 50,
};

pub const DICTIONARY_WORDS: DatasetSpec = DatasetSpec {
    name: "dictionary_words",
    file_name: "dictionary_words.json",
    description: "Dictionary Words (10K)",
    scenario: "Autocomplete/search-as-you-type",
    kind: ElementKind::Text,
    sorted: true,
    size: 10_000,
    present_samples: 100,
    absent_samples: 100,
};

/// All datasets in benchmark order
pub const CATALOG: [DatasetSpec; 4] = [
    CUSTOMER_IDS,
    PRODUCT_CATALOG,
    CONFIG_SETTINGS,
    DICTIONARY_WORDS,
];

/// Look up a dataset by its test-case key
pub fn find(name: &str) -> Option<&'static DatasetSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("customer_ids"), Some(&CUSTOMER_IDS));
        assert_eq!(find("dictionary_words").map(|s| s.size), Some(10_000));
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_catalog_names_match_files() {
        for spec in CATALOG.iter() {
            assert_eq!(spec.file_name, format!("{}.json", spec.name));
            assert!(spec.present_samples <= spec.size);
        }
    }

    #[test]
    fn test_unsorted_datasets() {
        let unsorted: Vec<&str> = CATALOG.iter().filter(|s| !s.sorted).map(|s| s.name).collect();
        assert_eq!(unsorted, vec!["customer_ids", "config_settings"]);
    }
}
