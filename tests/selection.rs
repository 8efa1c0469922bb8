mod common;

use common::{run_group_test, TestCase};

fn line_quartet() -> Vec<Vec<f64>> {
    vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]]
}

fn unit_square() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
    ]
}

fn two_clusters() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![0.5, 0.0],
        vec![0.0, 0.5],
        vec![10.0, 10.0],
        vec![9.5, 10.0],
    ]
}

#[test]
fn test_known_selections_group() {
    let cases = vec![
        TestCase {
            // Samples 0 and 3 are the farthest pair; sample 2 then beats sample 1
            // (min-distance 2 against 1).
            name: "Line quartet",
            samples: line_quartet(),
            subset_size: 3,
            expected_selected: vec![0, 3, 2],
        },
        TestCase {
            name: "Line quartet, full",
            samples: line_quartet(),
            subset_size: 4,
            expected_selected: vec![0, 3, 2, 1],
        },
        TestCase {
            // Both diagonals tie for the maximum; the row-major scan seeds (0, 2).
            // Corners 1 and 3 then tie at min-distance 1; the lower index wins.
            name: "Unit square",
            samples: unit_square(),
            subset_size: 3,
            expected_selected: vec![0, 2, 1],
        },
        TestCase {
            // After the cross-cluster seed pair, every other sample sits 0.5 from
            // its cluster's seed; the tie resolves to the lowest index.
            name: "Two clusters",
            samples: two_clusters(),
            subset_size: 3,
            expected_selected: vec![0, 3, 1],
        },
    ];

    run_group_test("Known Selections", cases);
}
