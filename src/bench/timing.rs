//! Search timing primitives

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::{Result, SearchBenchError};

/// Average wall-clock time of one `search` call over `targets`
///
/// Calls `search` once per target, in order, and divides the elapsed time
/// of the whole batch by the number of targets. Results are discarded.
/// An empty batch is rejected instead of producing a meaningless average.
pub fn benchmark_algorithm<T, F>(search: F, data: &[T], targets: &[T]) -> Result<Duration>
where
    F: Fn(&[T], &T) -> Option<usize>,
{
    if targets.is_empty() {
        return Err(SearchBenchError::BenchmarkError(
            "Cannot benchmark with zero targets".to_string(),
        ));
    }

    let start = Instant::now();
    for target in targets {
        black_box(search(black_box(data), black_box(target)));
    }
    let elapsed = start.elapsed();

    Ok(elapsed.div_f64(targets.len() as f64))
}

/// Sort a copy of `data`, returning it with the time the sort took
pub fn timed_sort<T: Ord + Clone>(data: &[T]) -> (Vec<T>, Duration) {
    let mut sorted = data.to_vec();
    let start = Instant::now();
    sorted.sort();
    (sorted, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{binary_search_iterative, binary_search_recursive, linear_search};
    use std::cell::Cell;

    #[test]
    fn test_rejects_empty_targets() {
        let data = [1, 2, 3];
        let result = benchmark_algorithm(linear_search, &data, &[]);
        match result {
            Err(SearchBenchError::BenchmarkError(msg)) => assert!(msg.contains("zero targets")),
            other => panic!("Expected benchmark error, got {:?}", other),
        }
    }

    #[test]
    fn test_calls_search_once_per_target_in_order() {
        let data = [10, 20, 30];
        let targets = [30, 10, 99, 20];
        let seen = Cell::new(0usize);
        let order = std::cell::RefCell::new(Vec::new());

        let average = benchmark_algorithm(
            |d: &[i32], t: &i32| {
                seen.set(seen.get() + 1);
                order.borrow_mut().push(*t);
                linear_search(d, t)
            },
            &data,
            &targets,
        )
        .unwrap();

        assert_eq!(seen.get(), 4);
        assert_eq!(*order.borrow(), targets.to_vec());
        assert!(average >= Duration::ZERO);
    }

    #[test]
    fn test_accepts_every_algorithm() {
        let data: Vec<i64> = (0..10_000).collect();
        let targets: Vec<i64> = (0..100).map(|i| i * 97).collect();
        let searches = [
            linear_search::<i64>,
            binary_search_iterative::<i64>,
            binary_search_recursive::<i64>,
        ];
        for search in searches {
            assert!(benchmark_algorithm(search, &data, &targets).is_ok());
        }
    }

    #[test]
    fn test_average_reflects_batch_time() {
        let targets = [0u8; 4];
        let average = benchmark_algorithm(
            |_: &[u8], _: &u8| {
                std::thread::sleep(Duration::from_millis(2));
                None
            },
            &[],
            &targets,
        )
        .unwrap();
        assert!(average >= Duration::from_millis(2));
    }

    #[test]
    fn test_timed_sort() {
        let data = vec![5, 3, 9, 1];
        let (sorted, _elapsed) = timed_sort(&data);
        assert_eq!(sorted, vec![1, 3, 5, 9]);
        assert_eq!(data, vec![5, 3, 9, 1]);
    }
}
