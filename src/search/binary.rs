//! Binary search over a sorted slice, iterative and recursive
//!
//! Both variants keep a closed range `[low, high]` and check the floor
//! midpoint `(low + high) / 2`. They visit the same midpoints in the same
//! order, so on any sorted input they return the same result, including
//! which index is reported when the target occurs more than once.
//!
//! The input must be sorted ascending. On unsorted input the result is
//! unspecified (a present value may be reported as missing).

use std::cmp::Ordering;

/// Floor midpoint of a closed range without overflowing `low + high`.
fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// Search for `target` in sorted `data` using a loop.
///
/// O(log n) comparisons, O(1) extra space.
///
/// # Examples
/// ```
/// use searchbench::search::binary_search_iterative;
///
/// assert_eq!(binary_search_iterative(&[1, 2, 5, 8, 9], &8), Some(3));
/// assert_eq!(binary_search_iterative(&[1, 2, 5, 8, 9], &7), None);
/// ```
pub fn binary_search_iterative<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = data.len() - 1;

    while low <= high {
        let mid = midpoint(low, high);
        match data[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            // mid == 0 means the range collapses below the first element
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }

    None
}

/// Search for `target` in sorted `data` by recursing over halves.
///
/// Starts with the full range `[0, len - 1]`.
///
/// # Examples
/// ```
/// use searchbench::search::binary_search_recursive;
///
/// assert_eq!(binary_search_recursive(&[1, 2, 5, 8, 9], &8), Some(3));
/// ```
pub fn binary_search_recursive<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let right = data.len().checked_sub(1)?;
    binary_search_recursive_between(data, target, 0, right)
}

/// Recursive binary search restricted to the closed range `[left, right]`.
///
/// Returns `None` when `left > right`. A `right` bound past the end of
/// `data` is clamped to the last index.
pub fn binary_search_recursive_between<T: Ord>(
    data: &[T],
    target: &T,
    left: usize,
    right: usize,
) -> Option<usize> {
    let right = right.min(data.len().checked_sub(1)?);
    if left > right {
        return None;
    }

    let mid = midpoint(left, right);
    match data[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => binary_search_recursive_between(data, target, mid + 1, right),
        Ordering::Greater => {
            let right = mid.checked_sub(1)?;
            binary_search_recursive_between(data, target, left, right)
        }
    }
}
