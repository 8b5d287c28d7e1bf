//! `leftmostNE`: the leftmost point in a north-east quadrant.
//!
//! Two cursors `p` and `q` descend the tree in lock-step, with
//! `level(p) <= level(q)` maintained as an invariant, following the
//! ten-case table from De, Maheshwari, Nandy & Smid (2011). The walk
//! terminates the step `p` reaches a leaf; both cursors strictly
//! descend a level on every iteration except the initial `p == q`
//! phase, where they split — so it runs in O(log n).

use super::{get, update_if};
use crate::point::Point;
use crate::tree_math::{is_leaf, left_child, num_children, right_child};

pub(crate) fn leftmost_ne<C: Copy + PartialOrd>(
    points: &[Point<C>],
    xmin: C,
    ymin: C,
) -> Option<Point<C>> {
    let n = points.len();
    if n == 0 {
        return None;
    }

    let mut best: Option<Point<C>> = None;
    let smaller_x = |a: Point<C>, b: Point<C>| a.x < b.x;

    let mut index_p = 1usize;
    let mut index_q = 1usize;

    while !is_leaf(index_p, n) {
        update_if(&mut best, get(points, index_p), xmin, ymin, smaller_x);
        update_if(&mut best, get(points, index_q), xmin, ymin, smaller_x);

        if index_p == index_q {
            if num_children(index_p, n) == 1 {
                index_q = left_child(index_p);
                index_p = left_child(index_p);
            } else {
                index_q = right_child(index_p);
                index_p = left_child(index_p);
            }
        } else if is_leaf(index_q, n) {
            index_q = index_p;
        } else if num_children(index_q, n) == 1 {
            let ql = get(points, left_child(index_q));
            let pr = get(points, right_child(index_p));
            if ql.y < ymin {
                index_q = right_child(index_p);
                index_p = left_child(index_p);
            } else if pr.y < ymin {
                index_p = left_child(index_p);
                index_q = left_child(index_q);
            } else if ql.x < xmin {
                index_p = left_child(index_q);
                index_q = left_child(index_q);
            } else if pr.x < xmin {
                index_p = right_child(index_p);
                index_q = left_child(index_q);
            } else {
                index_q = right_child(index_p);
                index_p = left_child(index_p);
            }
        } else {
            // q has two children
            let ql = get(points, left_child(index_q));
            let pr = get(points, right_child(index_p));
            let pl = get(points, left_child(index_p));
            if pr.x >= xmin && pr.y >= ymin {
                index_q = right_child(index_p);
                index_p = left_child(index_p);
            } else if pr.x < xmin {
                if ql.x < xmin {
                    index_p = left_child(index_q);
                    index_q = right_child(index_q);
                } else if ql.y < ymin {
                    index_p = right_child(index_p);
                    index_q = right_child(index_q);
                } else {
                    index_p = right_child(index_p);
                    index_q = left_child(index_q);
                }
            } else {
                // pr.x >= xmin && pr.y < ymin
                if pl.y < ymin {
                    index_p = left_child(index_q);
                    index_q = right_child(index_q);
                } else {
                    index_p = left_child(index_p);
                    index_q = if ql.y >= ymin {
                        left_child(index_q)
                    } else {
                        right_child(index_q)
                    };
                }
            }
        }
    }

    update_if(&mut best, get(points, index_p), xmin, ymin, smaller_x);
    update_if(&mut best, get(points, index_q), xmin, ymin, smaller_x);
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_in_place;

    fn build(pairs: &[(i64, i64)]) -> Vec<Point<i64>> {
        let mut v: Vec<Point<i64>> = pairs.iter().map(|&(x, y)| Point::new(x, y)).collect();
        build_in_place(&mut v);
        v
    }

    fn brute_leftmost(pairs: &[(i64, i64)], xmin: i64, ymin: i64) -> Option<(i64, i64)> {
        pairs
            .iter()
            .filter(|&&(x, y)| x >= xmin && y >= ymin)
            .min_by_key(|&&(x, _)| x)
            .copied()
    }

    #[test]
    fn empty_tree_returns_none() {
        let v: Vec<Point<i64>> = Vec::new();
        assert_eq!(leftmost_ne(&v, 0, 0), None);
    }

    #[test]
    fn scenario_one_diagonal() {
        let pairs = [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)];
        let tree = build(&pairs);
        let result = leftmost_ne(&tree, 3, 2);
        assert_eq!(result, Some(Point::new(3, 3)));
    }

    #[test]
    fn disjoint_window_returns_none() {
        let pairs = [(1, 1), (2, 2), (3, 3)];
        let tree = build(&pairs);
        assert_eq!(leftmost_ne(&tree, 100, 100), None);
    }

    #[test]
    fn matches_brute_force_on_random_windows() {
        let pairs: Vec<(i64, i64)> = (0..200)
            .map(|i| ((i * 37) % 101, (i * 53) % 97))
            .collect();
        let tree = build(&pairs);
        for xmin in (-5..105).step_by(7) {
            for ymin in (-5..105).step_by(11) {
                let expected = brute_leftmost(&pairs, xmin, ymin);
                let actual = leftmost_ne(&tree, xmin, ymin).map(|p| (p.x, p.y));
                assert_eq!(actual, expected, "xmin={xmin} ymin={ymin}");
            }
        }
    }
}
