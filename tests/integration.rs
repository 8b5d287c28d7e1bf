//! Integration tests against the public API: concrete scenarios from
//! the structure's test suite seeds, boundary cases, and brute-force
//! cross-checks at scale.

use priority_search_tree::{Point, PrioritySearchTree, PstError};
use proptest::prelude::*;

fn tree_of(pairs: &[(i64, i64)]) -> PrioritySearchTree<i64> {
    PrioritySearchTree::build(pairs.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn sorted(mut v: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    v.sort_unstable();
    v
}

#[test]
fn scenario_one_diagonal() {
    let tree = tree_of(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
    assert_eq!(tree.leftmost_ne(3, 2), Some(Point::new(3, 3)));
    assert_eq!(tree.highest_ne(0, 0), Some(Point::new(5, 5)));
    assert_eq!(
        tree.highest_three_sided(2, 4, 0),
        Ok(Some(Point::new(4, 4)))
    );
    let enumerated: Vec<(i64, i64)> = tree
        .enumerate_three_sided(2, 4, 3)
        .unwrap()
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(sorted(enumerated), sorted(vec![(3, 3), (4, 4)]));
}

#[test]
fn scenario_two_descending() {
    let tree = tree_of(&[
        (1, 10),
        (2, 9),
        (3, 8),
        (4, 7),
        (5, 6),
        (6, 5),
        (7, 4),
    ]);
    // x >= 4 AND y >= 6 admits (4,7) and (5,6); (4,7) has the larger y.
    assert_eq!(tree.highest_ne(4, 6), Some(Point::new(4, 7)));
    let enumerated: Vec<(i64, i64)> = tree
        .enumerate_three_sided(2, 5, 7)
        .unwrap()
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(sorted(enumerated), sorted(vec![(2, 9), (3, 8), (4, 7)]));
}

#[test]
fn scenario_three_single_point() {
    let tree = tree_of(&[(5, 5)]);
    assert_eq!(tree.leftmost_ne(0, 0), Some(Point::new(5, 5)));
    assert_eq!(tree.highest_ne(0, 0), Some(Point::new(5, 5)));
    assert_eq!(tree.highest_three_sided(0, 10, 0), Ok(Some(Point::new(5, 5))));
    assert_eq!(
        tree.enumerate_three_sided(0, 10, 0).unwrap(),
        vec![Point::new(5, 5)]
    );

    assert_eq!(tree.leftmost_ne(0, 6), None);
    assert_eq!(tree.highest_ne(0, 6), None);
    assert_eq!(tree.highest_three_sided(0, 10, 6), Ok(None));
    assert!(tree.enumerate_three_sided(0, 10, 6).unwrap().is_empty());
}

#[test]
fn scenario_five_large_monotone_set() {
    let n: i64 = 1024;
    let pairs: Vec<(i64, i64)> = (1..=n).map(|i| (i, n - i)).collect();
    let tree = tree_of(&pairs);

    assert_eq!(tree.highest_ne(500, 0), Some(Point::new(500, 524)));

    let expected: Vec<(i64, i64)> = (100..=110).map(|i| (i, n - i)).collect();
    let actual: Vec<(i64, i64)> = tree
        .enumerate_three_sided(100, 110, 900)
        .unwrap()
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(sorted(actual), sorted(expected));
}

#[test]
fn inverted_range_reports_invalid_range_error() {
    let tree = tree_of(&[(1, 1), (2, 2)]);
    assert_eq!(
        tree.highest_three_sided(10, 1, 0),
        Err(PstError::InvalidRange { xmin: 10, xmax: 1 })
    );
    assert_eq!(
        tree.enumerate_three_sided(10, 1, 0),
        Err(PstError::InvalidRange { xmin: 10, xmax: 1 })
    );
}

#[test]
fn boundary_sizes() {
    for n in 0..=8 {
        let pairs: Vec<(i64, i64)> = (0..n).map(|i| (i, i * 2)).collect();
        let tree = tree_of(&pairs);
        assert_eq!(tree.len(), n as usize);
        // every query must at least not panic, and must be internally consistent
        let _ = tree.leftmost_ne(0, 0);
        let _ = tree.highest_ne(0, 0);
        let _ = tree.highest_three_sided(0, 100, 0).unwrap();
        let _ = tree.enumerate_three_sided(0, 100, 0).unwrap();
    }
}

#[test]
fn all_identical_points() {
    let pairs: Vec<(i64, i64)> = (0..20).map(|_| (3, 3)).collect();
    let tree = tree_of(&pairs);
    assert_eq!(tree.highest_ne(3, 3), Some(Point::new(3, 3)));
    assert_eq!(tree.enumerate_three_sided(3, 3, 3).unwrap().len(), 20);
    assert_eq!(tree.enumerate_three_sided(4, 4, 0).unwrap().len(), 0);
}

#[test]
fn collinear_points_on_x_axis() {
    let pairs: Vec<(i64, i64)> = (0..50).map(|i| (i, 0)).collect();
    let tree = tree_of(&pairs);
    assert_eq!(tree.leftmost_ne(20, 0), Some(Point::new(20, 0)));
    assert_eq!(tree.highest_ne(20, 1), None);
}

#[test]
fn window_disjoint_from_all_points_is_empty() {
    let tree = tree_of(&[(1, 1), (2, 2), (3, 3)]);
    assert_eq!(tree.leftmost_ne(100, 100), None);
    assert_eq!(tree.highest_ne(100, 100), None);
    assert_eq!(tree.highest_three_sided(100, 200, 100), Ok(None));
    assert!(tree.enumerate_three_sided(100, 200, 100).unwrap().is_empty());
}

#[test]
fn float_coordinates_compile_and_compare_exactly() {
    let tree = PrioritySearchTree::build(vec![
        Point::new(1.5_f64, 2.5),
        Point::new(3.0, 0.5),
        Point::new(2.25, 4.0),
    ]);
    assert_eq!(tree.highest_ne(0.0, 0.0), Some(Point::new(2.25, 4.0)));
}

// --- Property-based tests over random point sets and random windows ---

fn arb_points(max_len: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-200i64..200, -200i64..200), 0..max_len)
}

proptest! {
    #[test]
    fn heap_and_split_invariants_hold(pairs in arb_points(200)) {
        let original = sorted(pairs.clone());
        let tree = tree_of(&pairs);

        // multiset of points is preserved
        let after: Vec<(i64, i64)> = tree.points().iter().map(|p| (p.x, p.y)).collect();
        prop_assert_eq!(sorted(after), original);

        // heap-on-y holds at every node
        let n = tree.len();
        let pts = tree.points();
        for i in 1..=n {
            if 2 * i <= n {
                prop_assert!(pts[i - 1].y >= pts[2 * i - 1].y);
            }
            if 2 * i + 1 <= n {
                prop_assert!(pts[i - 1].y >= pts[2 * i].y);
            }
        }
    }

    #[test]
    fn leftmost_ne_matches_brute_force(pairs in arb_points(150), xmin in -210i64..210, ymin in -210i64..210) {
        let tree = tree_of(&pairs);
        let expected = pairs.iter().copied()
            .filter(|&(x, y)| x >= xmin && y >= ymin)
            .min_by_key(|&(x, _)| x);
        prop_assert_eq!(tree.leftmost_ne(xmin, ymin).map(|p| (p.x, p.y)), expected);
    }

    #[test]
    fn highest_ne_matches_brute_force(pairs in arb_points(150), xmin in -210i64..210, ymin in -210i64..210) {
        let tree = tree_of(&pairs);
        let expected = pairs.iter().copied()
            .filter(|&(x, y)| x >= xmin && y >= ymin)
            .max_by_key(|&(_, y)| y);
        prop_assert_eq!(tree.highest_ne(xmin, ymin).map(|p| (p.x, p.y)), expected);
    }

    #[test]
    fn highest_three_sided_matches_brute_force(
        pairs in arb_points(150),
        xmin in -210i64..210,
        width in 0i64..50,
        ymin in -210i64..210,
    ) {
        let xmax = xmin + width;
        let tree = tree_of(&pairs);
        let expected = pairs.iter().copied()
            .filter(|&(x, y)| x >= xmin && x <= xmax && y >= ymin)
            .max_by_key(|&(_, y)| y);
        prop_assert_eq!(
            tree.highest_three_sided(xmin, xmax, ymin).unwrap().map(|p| (p.x, p.y)),
            expected
        );
    }

    #[test]
    fn enumerate_three_sided_matches_brute_force(
        pairs in arb_points(150),
        xmin in -210i64..210,
        width in 0i64..50,
        ymin in -210i64..210,
    ) {
        let xmax = xmin + width;
        let tree = tree_of(&pairs);
        let expected = sorted(
            pairs.iter().copied()
                .filter(|&(x, y)| x >= xmin && x <= xmax && y >= ymin)
                .collect()
        );
        let actual = sorted(
            tree.enumerate_three_sided(xmin, xmax, ymin).unwrap()
                .into_iter().map(|p| (p.x, p.y)).collect()
        );
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn large_random_cross_check_against_brute_force() {
    // A smaller stand-in for the spec's 100,000-point / 10,000-query
    // scenario: large enough to exercise every branch of the level
    // arithmetic, small enough to brute-force-check quickly per test run.
    let n = 5000usize;
    let pairs: Vec<(i64, i64)> = (0..n)
        .map(|i| {
            let x = (i as i64 * 2_654_435_761) % 100_000;
            let y = (i as i64 * 40_503 + 17) % 100_000;
            (x, y)
        })
        .collect();
    let tree = tree_of(&pairs);

    let mut seed = 1_234_567_u64;
    let mut next = || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    for _ in 0..200 {
        let xmin = (next() % 100_000) as i64;
        let width = (next() % 5_000) as i64;
        let xmax = xmin + width;
        let ymin = (next() % 100_000) as i64;

        let brute_highest3 = pairs
            .iter()
            .copied()
            .filter(|&(x, y)| x >= xmin && x <= xmax && y >= ymin)
            .max_by_key(|&(_, y)| y);
        assert_eq!(
            tree.highest_three_sided(xmin, xmax, ymin)
                .unwrap()
                .map(|p| (p.x, p.y)),
            brute_highest3
        );

        let brute_leftmost = pairs
            .iter()
            .copied()
            .filter(|&(x, y)| x >= xmin && y >= ymin)
            .min_by_key(|&(x, _)| x);
        assert_eq!(
            tree.leftmost_ne(xmin, ymin).map(|p| (p.x, p.y)),
            brute_leftmost
        );
    }
}
