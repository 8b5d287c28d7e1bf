//! `highest3Sided`: the highest point in a three-sided region
//! `{xmin <= x <= xmax, y >= ymin}`.
//!
//! Two cursors walk the tree: `p` sweeps in from the left boundary,
//! `q` sweeps in from the right boundary. At most one of them is
//! "live" (`L`/`R`) at a time except for a brief window where a single
//! `CheckLeft`/`CheckRight` step discovers the region straddles both
//! children and wakes the other cursor up. Whichever live cursor sits
//! at the shallower level advances first, so the whole walk is
//! O(log n).

use crate::point::Point;
use crate::tree_math::{is_leaf, left_child, level, num_children, right_child};

pub(crate) fn highest_three_sided<C: Copy + PartialOrd>(
    points: &[Point<C>],
    xmin: C,
    xmax: C,
    ymin: C,
) -> Option<Point<C>> {
    let n = points.len();
    if n == 0 {
        return None;
    }

    let mut best: Option<Point<C>> = None;
    let mut bump = |candidate: Point<C>| {
        if candidate.in_x_range(xmin, xmax) && candidate.y >= ymin {
            let improves = match best {
                None => true,
                Some(b) => candidate.y > b.y,
            };
            if improves {
                best = Some(candidate);
            }
        }
    };

    let mut l = false;
    let mut r = false;
    let mut index_p = 1usize;
    let mut index_q = 1usize;

    let root = points[0];
    if root.x >= xmin && root.x <= xmax {
        if root.y >= ymin {
            best = Some(root);
        }
    } else if root.x < xmin {
        l = true;
    } else {
        r = true;
    }

    while l || r {
        if l && (!r || level(index_p) < level(index_q)) {
            // CheckLeft(p)
            let index_pl = left_child(index_p);
            let index_pr = right_child(index_p);
            if is_leaf(index_p, n) {
                l = false;
            } else if num_children(index_p, n) == 1 {
                let pl = points[index_pl - 1];
                if pl.x >= xmin && pl.x <= xmax {
                    bump(pl);
                    l = false;
                } else if pl.x < xmin {
                    index_p = index_pl;
                } else {
                    index_q = index_pl;
                    r = true;
                    l = false;
                }
            } else {
                let pl = points[index_pl - 1];
                let pr = points[index_pr - 1];
                if pl.x < xmin {
                    if pr.x < xmin {
                        index_p = index_pr;
                    } else if pr.x <= xmax {
                        bump(pr);
                        index_p = index_pl;
                    } else {
                        index_q = index_pr;
                        index_p = index_pl;
                        r = true;
                    }
                } else if pl.x <= xmax {
                    bump(pl);
                    l = false;
                    if pr.x > xmax {
                        index_q = index_pr;
                        r = true;
                    } else {
                        bump(pr);
                    }
                } else {
                    index_q = index_pl;
                    l = false;
                    r = true;
                }
            }
        } else {
            // CheckRight(q)
            let index_ql = left_child(index_q);
            let index_qr = right_child(index_q);
            if is_leaf(index_q, n) {
                r = false;
            } else if num_children(index_q, n) == 1 {
                let ql = points[index_ql - 1];
                if ql.x >= xmin && ql.x <= xmax {
                    bump(ql);
                    r = false;
                } else if ql.x > xmax {
                    index_q = index_ql;
                } else {
                    index_p = index_ql;
                    l = true;
                    r = false;
                }
            } else {
                let ql = points[index_ql - 1];
                let qr = points[index_qr - 1];
                if qr.x > xmax {
                    if ql.x > xmax {
                        index_q = index_ql;
                    } else if ql.x >= xmin {
                        bump(ql);
                        index_q = index_qr;
                    } else {
                        index_p = index_ql;
                        index_q = index_qr;
                        l = true;
                    }
                } else if qr.x >= xmin {
                    bump(qr);
                    r = false;
                    if ql.x < xmin {
                        index_p = index_qr;
                        l = true;
                    } else {
                        bump(ql);
                    }
                } else {
                    index_p = index_qr;
                    l = true;
                    r = false;
                }
            }
        }
    }

    best
}
