//! Non-recursive subtree enumeration: every point at or below `index_p`
//! with `y >= ymin`.
//!
//! Relies on the heap-on-y invariant to prune: a child with `y < ymin`
//! means its whole subtree is below `ymin` too, so that branch is never
//! entered. The walk is a preorder DFS driven by a 3-state machine
//! (`0`: visit current and try descending left, `1`: try descending
//! right, `2`: ascend back towards the parent) instead of recursion, so
//! it uses O(1) auxiliary state beyond the output buffer.

use crate::point::Point;
use crate::tree_math::{is_left_child, left_child, num_children, parent, right_child};

pub(crate) fn explore<C: Copy + PartialOrd>(
    points: &[Point<C>],
    index_p: usize,
    ymin: C,
    out: &mut Vec<Point<C>>,
) {
    let n = points.len();
    let p = points[index_p - 1];
    if p.y < ymin {
        return;
    }

    let mut index_c = index_p;
    let mut state = 0u8;
    while index_c != index_p || state != 2 {
        match state {
            0 => {
                out.push(points[index_c - 1]);
                let index_cl = left_child(index_c);
                if num_children(index_c, n) > 0 && points[index_cl - 1].y >= ymin {
                    index_c = index_cl;
                } else {
                    state = 1;
                }
            }
            1 => {
                let index_cr = right_child(index_c);
                if num_children(index_c, n) == 2 && points[index_cr - 1].y >= ymin {
                    index_c = index_cr;
                    state = 0;
                } else {
                    state = 2;
                }
            }
            _ => {
                if is_left_child(index_c) {
                    state = 1;
                }
                index_c = parent(index_c);
            }
        }
    }
}
