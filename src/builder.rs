//! The in-place PST construction algorithm (De–Maheshwari–Nandy–Smid 2011).
//!
//! Builds the heap-on-y / median-split-on-x layout level by level, over
//! the already-allocated backing array, using only the sort primitive
//! in [`crate::sort`] and O(1) extra scalars. See the module-level docs
//! on [`crate::PrioritySearchTree`] for the invariants this establishes.

use crate::point::Point;
use crate::sort::sort_by_x;
use crate::tree_math::{level, pow2};

/// Rearrange `points` in place into a valid priority search tree layout.
///
/// `points` is treated as a 1-based implicit complete binary tree
/// (index 1 is the root). On return, for every index `i`: every child
/// `c` of `i` has `points[c].y <= points[i].y`, and the subtree rooted
/// at `i` is split by x so the left half is `<=` the right half's
/// x-coordinates (spec: heap-on-y, median-split-on-x).
pub(crate) fn build_in_place<C: Copy + PartialOrd>(points: &mut [Point<C>]) {
    let n = points.len();
    if n < 2 {
        return;
    }

    // Precondition for level 0: the whole array sorted by x.
    sort_by_x(points);

    let h = level(n) as usize;
    for i in 0..h {
        build_level(points, i, n);
    }
}

/// Promote the max-y point of every subtree rooted at level `i` to its
/// root, then re-sort everything past level `i` by x so the next level
/// again sees a clean median split.
fn build_level<C: Copy + PartialOrd>(points: &mut [Point<C>], i: usize, n: usize) {
    let h = level(n) as usize;
    // number of nodes present on the (possibly partial) last level
    let a = n - (pow2(h) - 1);
    // the first `k` nodes at this level root "full" subtrees of size k1
    let k = a / pow2(h - i);
    let k1 = pow2(h + 1 - i) - 1;
    // the (k+1)-th node, if any, roots the one "straddling" subtree of size k2
    let k2 = pow2(h - i) - 1 + a - k * pow2(h - i);
    // the remaining nodes root "empty last level" subtrees of size k3
    let k3 = pow2(h - i) - 1;

    let level_start = pow2(i); // 1-based index of the first node at this level

    for j in 1..=k {
        let root = level_start + j - 1;
        let lo = level_start + (j - 1) * k1;
        let hi = level_start + j * k1 - 1;
        promote_max_y(points, lo, hi, root);
    }

    if k < pow2(i) {
        let straddle_root = level_start + k;
        let lo = level_start + k * k1;
        let hi = lo + k2 - 1;
        promote_max_y(points, lo, hi, straddle_root);

        let m = level_start + k * k1 + k2;
        for j in 1..=(pow2(i) - k - 1) {
            let root = level_start + k + j;
            let lo = m + (j - 1) * k3;
            let hi = m + j * k3 - 1;
            promote_max_y(points, lo, hi, root);
        }
    }

    // Re-establish the median-split precondition for every level below i.
    sort_by_x(&mut points[pow2(i + 1) - 1..n]);
}

/// Find the max-y point in the 1-based inclusive range `[lo, hi]` and
/// swap it into `root` (also 1-based). Ties keep the first-seen index.
fn promote_max_y<C: Copy + PartialOrd>(points: &mut [Point<C>], lo: usize, hi: usize, root: usize) {
    let mut best = lo;
    for idx in (lo + 1)..=hi {
        if points[idx - 1].y > points[best - 1].y {
            best = idx;
        }
    }
    points.swap(best - 1, root - 1);
}
