//! Search algorithms module
//!
//! Linear search for arbitrary data and two binary search variants
//! (iterative and recursive) for sorted data. A search result is
//! `Option<usize>`: the zero-based index of the target, or `None`.

pub mod binary;
pub mod linear;

use serde::{Deserialize, Serialize};

pub use binary::{binary_search_iterative, binary_search_recursive, binary_search_recursive_between};
pub use linear::linear_search;

/// Search algorithm variants compared by the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Sequential scan, any order
    Linear,
    /// Loop-based binary search, sorted input
    BinaryIterative,
    /// Self-recursive binary search, sorted input
    BinaryRecursive,
}

impl Algorithm {
    /// All variants in reporting order
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Linear,
        Algorithm::BinaryIterative,
        Algorithm::BinaryRecursive,
    ];

    /// Get a human-readable name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Linear => "Linear Search",
            Algorithm::BinaryIterative => "Binary Search (Iterative)",
            Algorithm::BinaryRecursive => "Binary Search (Recursive)",
        }
    }

    /// Whether the algorithm only gives meaningful results on sorted input
    pub fn requires_sorted(&self) -> bool {
        !matches!(self, Algorithm::Linear)
    }

    /// Run the algorithm once
    pub fn run<T: Ord>(&self, data: &[T], target: &T) -> Option<usize> {
        match self {
            Algorithm::Linear => linear_search(data, target),
            Algorithm::BinaryIterative => binary_search_iterative(data, target),
            Algorithm::BinaryRecursive => binary_search_recursive(data, target),
        }
    }
}

/// Render a search result the way the assignment prints it (`-1` for not found)
pub fn display_index(result: Option<usize>) -> String {
    match result {
        Some(index) => index.to_string(),
        None => "-1".to_string(),
    }
}
