mod common;

use common::assert_partition;
use kenstone::{DistanceMatrix, KennardStone, MetricKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Synthetic sample matrix drawn from a fixed-seed generator, so every run sees the
/// same data.
fn synthetic_samples(n: usize, d: usize) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (0..d).map(|_| rng.gen_range(0.0..10.0)).collect())
        .collect()
}

#[test]
fn test_partition_for_all_valid_sizes() {
    let samples = synthetic_samples(30, 4);
    let selector = KennardStone::new();
    for k in 2..=samples.len() {
        let result = selector.select(&samples, k).unwrap();
        assert_eq!(result.selected.len(), k);
        assert_eq!(result.remaining.len(), samples.len() - k);
        assert_partition(&result, samples.len());
    }
}

#[test]
fn test_seed_pair_is_the_global_maximum() {
    let samples = synthetic_samples(40, 3);
    let distances = DistanceMatrix::compute(&samples, MetricKind::Euclidean).unwrap();
    let result = KennardStone::new().select(&samples, 5).unwrap();

    let mut brute_max = f64::NEG_INFINITY;
    for i in 0..samples.len() {
        for j in 0..samples.len() {
            if i != j && distances.get(i, j) > brute_max {
                brute_max = distances.get(i, j);
            }
        }
    }

    assert_eq!(distances.get(result.selected[0], result.selected[1]), brute_max);
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let samples = synthetic_samples(25, 5);
    let selector = KennardStone::new();
    let first = selector.select(&samples, 10).unwrap();
    let second = selector.select(&samples, 10).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_selection_order_is_prefix_consistent() {
    let samples = synthetic_samples(20, 3);
    let selector = KennardStone::new();
    for k in 2..samples.len() {
        let shorter = selector.select(&samples, k).unwrap();
        let longer = selector.select(&samples, k + 1).unwrap();
        assert_eq!(
            longer.selected[..k],
            shorter.selected[..],
            "run with size {} is not a prefix of size {}",
            k,
            k + 1
        );
    }
}

#[test]
fn test_separations_never_increase() {
    let samples = synthetic_samples(30, 4);
    let result = KennardStone::new().select(&samples, 15).unwrap();
    assert_eq!(result.separations.len(), 14);
    for pair in result.separations.windows(2) {
        assert!(
            pair[1] <= pair[0],
            "separation increased from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_matrix_is_reusable_across_sizes() {
    let samples = synthetic_samples(18, 2);
    let distances = DistanceMatrix::compute(&samples, MetricKind::Euclidean).unwrap();
    let selector = KennardStone::new();
    for k in [2, 5, 9, 18] {
        let from_matrix = selector.select_from_matrix(&distances, k).unwrap();
        let from_samples = selector.select(&samples, k).unwrap();
        assert_eq!(from_matrix, from_samples);
    }
}

#[test]
fn test_squared_euclidean_selects_like_euclidean() {
    // The square root is monotone, so both metrics order every comparison identically.
    let samples = synthetic_samples(22, 3);
    let plain = KennardStone::new().select(&samples, 8).unwrap();
    let squared = KennardStone::new()
        .with_options(kenstone::SelectorOptions {
            metric: MetricKind::SquaredEuclidean,
            ..Default::default()
        })
        .select(&samples, 8)
        .unwrap();
    assert_eq!(plain.selected, squared.selected);
    assert_eq!(plain.remaining, squared.remaining);
}
