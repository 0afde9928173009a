//! Sequential scan over an arbitrary slice

/// Search for `target` by checking each element in order.
///
/// Works on sorted and unsorted data alike. Returns the index of the
/// first element equal to `target`, or `None` if no element matches.
///
/// # Examples
/// ```
/// use searchbench::search::linear_search;
///
/// assert_eq!(linear_search(&[5, 2, 8, 1, 9], &8), Some(2));
/// assert_eq!(linear_search(&[5, 2, 8, 1, 9], &7), None);
/// ```
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    for (index, item) in data.iter().enumerate() {
        if item == target {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_search_unsorted() {
        let data = [7, 2, 9, 1, 5, 13, 3, 11];
        assert_eq!(linear_search(&data, &9), Some(2));
        assert_eq!(linear_search(&data, &7), Some(0));
        assert_eq!(linear_search(&data, &11), Some(7));
        assert_eq!(linear_search(&data, &99), None);
    }

    #[test]
    fn test_linear_search_empty() {
        let data: [i64; 0] = [];
        assert_eq!(linear_search(&data, &1), None);
    }

    #[test]
    fn test_linear_search_returns_first_duplicate() {
        let data = [4, 1, 4, 4, 2];
        assert_eq!(linear_search(&data, &4), Some(0));

        let data = ["b", "a", "c", "a"];
        assert_eq!(linear_search(&data, &"a"), Some(1));
    }

    #[test]
    fn test_linear_search_strings() {
        let data: Vec<String> = ["config.setting.004", "config.setting.001"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(linear_search(&data, &"config.setting.001".to_string()), Some(1));
        assert_eq!(linear_search(&data, &"config.missing.001".to_string()), None);
    }

    #[test]
    fn test_linear_search_every_element() {
        let data: Vec<i64> = (0..64).map(|i| (i * 37) % 101).collect();
        for (i, value) in data.iter().enumerate() {
            let found = linear_search(&data, value).unwrap();
            assert_eq!(found, i);
            assert_eq!(data[found], *value);
        }
    }
}
