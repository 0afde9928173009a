//! Cross-algorithm agreement on randomly generated inputs

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use searchbench::search::{
    binary_search_iterative, binary_search_recursive, linear_search, Algorithm,
};

fn random_sorted(rng: &mut SmallRng, len: usize, max: i64) -> Vec<i64> {
    let mut data: Vec<i64> = (0..len).map(|_| rng.gen_range(0..max)).collect();
    data.sort_unstable();
    data
}

#[test]
fn test_present_targets_resolve_to_equal_elements() {
    let mut rng = SmallRng::seed_from_u64(1);
    for len in [1usize, 2, 3, 7, 8, 64, 1000] {
        let data = random_sorted(&mut rng, len, 50);
        for target in &data {
            for algorithm in Algorithm::ALL {
                let index = algorithm.run(&data, target).expect("present target found");
                assert_eq!(data[index], *target, "{} len {}", algorithm.name(), len);
            }
        }
    }
}

#[test]
fn test_binary_variants_always_agree() {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..200 {
        let len = rng.gen_range(0..300);
        let data = random_sorted(&mut rng, len, 100);
        for target in -5..105 {
            assert_eq!(
                binary_search_iterative(&data, &target),
                binary_search_recursive(&data, &target),
                "data {:?} target {}",
                data,
                target
            );
        }
    }
}

#[test]
fn test_absent_targets_not_found() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..100 {
        let len = rng.gen_range(0..200);
        // even values only, odd targets are absent
        let data: Vec<i64> = random_sorted(&mut rng, len, 500).into_iter().map(|v| v * 2).collect();
        for target in (-1..1001).step_by(2) {
            assert_eq!(linear_search(&data, &target), None);
            assert_eq!(binary_search_iterative(&data, &target), None);
            assert_eq!(binary_search_recursive(&data, &target), None);
        }
    }
}

#[test]
fn test_linear_search_on_unsorted_data() {
    let mut rng = SmallRng::seed_from_u64(4);
    let data: Vec<i64> = (0..500).map(|_| rng.gen_range(-1000..1000)).collect();
    for target in -1000..1000 {
        match linear_search(&data, &target) {
            Some(index) => {
                assert_eq!(data[index], target);
                assert!(!data[..index].contains(&target));
            }
            None => assert!(!data.contains(&target)),
        }
    }
}

#[test]
fn test_searches_do_not_mutate_input() {
    let data: Vec<String> = (0..100).map(|i| format!("word{:05}", i)).collect();
    let before = data.clone();
    let target = "word00042".to_string();
    let first = binary_search_recursive(&data, &target);
    for _ in 0..3 {
        assert_eq!(binary_search_recursive(&data, &target), first);
        assert_eq!(binary_search_iterative(&data, &target), first);
        assert_eq!(linear_search(&data, &target), first);
    }
    assert_eq!(data, before);
}
