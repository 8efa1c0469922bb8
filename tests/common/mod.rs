use kenstone::{KennardStone, SelectionResult};

pub struct TestCase<'a> {
    pub name: &'a str,
    pub samples: Vec<Vec<f64>>,
    pub subset_size: usize,
    pub expected_selected: Vec<usize>,
}

pub fn run_group_test(group_name: &str, cases: Vec<TestCase>) {
    let selector = KennardStone::new();

    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<20} | {:<8} | {:<20} | {:<20}",
        "Data Set", "Size", "Expected", "Selected"
    );

    for case in cases {
        let result = selector
            .select(&case.samples, case.subset_size)
            .expect("Selection failed");

        println!(
            "{:<20} | {:<8} | {:<20} | {:<20}",
            case.name,
            case.subset_size,
            format!("{:?}", case.expected_selected),
            format!("{:?}", result.selected)
        );

        assert_eq!(
            result.selected, case.expected_selected,
            "Selection order mismatch for '{}'",
            case.name
        );
        assert_partition(&result, case.samples.len());
    }

    println!("{:-<80}\n", "");
}

/// Asserts that selected and remaining partition `0..n` exactly.
pub fn assert_partition(result: &SelectionResult, n: usize) {
    let mut seen = vec![false; n];
    for &index in result.selected.iter().chain(result.remaining.iter()) {
        assert!(index < n, "Index {} out of bounds for {} samples", index, n);
        assert!(!seen[index], "Index {} appears twice in the partition", index);
        seen[index] = true;
    }
    assert!(
        seen.iter().all(|&s| s),
        "Partition does not cover all {} indices",
        n
    );

    let mut sorted = result.remaining.clone();
    sorted.sort_unstable();
    assert_eq!(
        result.remaining, sorted,
        "Remaining indices are not in ascending order"
    );
}
