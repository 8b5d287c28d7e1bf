//! `enumerate3Sided`: every point in the three-sided region
//! `{xmin <= x <= xmax, y >= ymin}`.
//!
//! Four cursors walk the tree simultaneously: `p`/`q` approach the
//! query region's x-boundaries from outside it (left and right
//! respectively), while `p'`/`q'` walk the region's interior once a
//! boundary has been crossed. Whenever the interior is known to be
//! fully bracketed between a live `p'` and a live `q'`, the subtree
//! between them is reported in one shot via [`super::explore::explore`]
//! rather than walked cursor-by-cursor. At every step, only the live
//! cursor at the shallowest level advances, ties broken in the fixed
//! order `p`, `p'`, `q`, `q'`; this keeps the walk to O(log n + k)
//! where `k` is the output size.

use super::explore::explore;
use crate::point::Point;
use crate::tree_math::{is_leaf, left_child, level, num_children, right_child};

pub(crate) fn enumerate_three_sided<C: Copy + PartialOrd>(
    points: &[Point<C>],
    xmin: C,
    xmax: C,
    ymin: C,
) -> Vec<Point<C>> {
    let n = points.len();
    let mut out = Vec::new();
    if n == 0 {
        return out;
    }

    let mut index_p = 1usize;
    let mut index_pp = 1usize;
    let mut index_q = 1usize;
    let mut index_qp = 1usize;

    // L: p found left of the region, children may be within it.
    // Lp: p' found inside [xmin, xmax], possibly below ymin.
    // R / Rp: symmetric, from the right.
    let mut l = false;
    let mut lp = false;
    let mut r = false;
    let mut rp = false;

    let root = points[0];
    if root.x < xmin {
        l = true;
    } else if root.x <= xmax {
        lp = true;
    } else {
        r = true;
    }

    while l || lp || r || rp {
        // Advance whichever live cursor sits at the shallowest level;
        // ties broken in the fixed order p, p', q, q'.
        let mut chosen: Option<(u32, u8)> = None;
        let consider = |cond: bool, lvl: u32, tag: u8, chosen: &mut Option<(u32, u8)>| {
            if cond && chosen.map_or(true, |(best_lvl, _)| lvl < best_lvl) {
                *chosen = Some((lvl, tag));
            }
        };
        consider(l, level(index_p), 0, &mut chosen);
        consider(lp, level(index_pp), 1, &mut chosen);
        consider(r, level(index_q), 2, &mut chosen);
        consider(rp, level(index_qp), 3, &mut chosen);
        let branch = chosen.expect("at least one cursor is live while the loop runs").1;

        match branch {
            0 => {
                // EnumerateLeft(p)
                let index_pl = left_child(index_p);
                let index_pr = right_child(index_p);
                if is_leaf(index_p, n) {
                    l = false;
                } else if num_children(index_p, n) == 1 {
                    let pl = points[index_pl - 1];
                    if pl.x >= xmin && pl.x <= xmax {
                        if lp && rp {
                            explore(points, index_pp, ymin, &mut out);
                        } else if lp {
                            index_qp = index_pp;
                            rp = true;
                        }
                        index_pp = index_pl;
                        lp = true;
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
                            if lp && rp {
                                explore(points, index_pp, ymin, &mut out);
                            } else if lp {
                                index_qp = index_pp;
                                rp = true;
                            }
                            index_pp = index_pr;
                            index_p = index_pl;
                            lp = true;
                        } else {
                            index_q = index_pr;
                            index_p = index_pl;
                            r = true;
                        }
                    } else if pl.x <= xmax {
                        if pr.x > xmax {
                            index_q = index_pr;
                            index_pp = index_pl;
                            l = false;
                            lp = true;
                            r = true;
                        } else {
                            if rp && lp {
                                explore(points, index_pp, ymin, &mut out);
                                explore(points, index_pr, ymin, &mut out);
                            } else if lp {
                                explore(points, index_pr, ymin, &mut out);
                                index_qp = index_pp;
                                rp = true;
                            } else if rp {
                                explore(points, index_pr, ymin, &mut out);
                                lp = true;
                            } else {
                                index_qp = index_pr;
                                lp = true;
                                rp = true;
                            }
                            index_pp = index_pl;
                            l = false;
                        }
                    } else {
                        index_q = index_pl;
                        l = false;
                        r = true;
                    }
                }
            }
            1 => {
                // EnumerateLeftIn(p')
                let index_ppl = left_child(index_pp);
                let index_ppr = right_child(index_pp);
                let pp = points[index_pp - 1];
                if pp.y >= ymin {
                    out.push(pp);
                }
                if is_leaf(index_pp, n) {
                    lp = false;
                } else if num_children(index_pp, n) == 1 {
                    let ppl = points[index_ppl - 1];
                    if ppl.x >= xmin && ppl.x <= xmax {
                        index_pp = index_ppl;
                    } else if ppl.x < xmin {
                        index_p = index_ppl;
                        lp = false;
                        l = true;
                    } else {
                        index_q = index_ppl;
                        r = true;
                        lp = false;
                    }
                } else {
                    let ppl = points[index_ppl - 1];
                    let ppr = points[index_ppr - 1];
                    if ppl.x < xmin {
                        if ppr.x < xmin {
                            index_p = index_ppr;
                            l = true;
                            lp = false;
                        } else if ppr.x <= xmax {
                            index_p = index_ppl;
                            index_pp = index_ppr;
                            l = true;
                        } else {
                            index_q = index_ppr;
                            index_p = index_ppl;
                            r = true;
                            l = true;
                            lp = false;
                        }
                    } else if ppl.x <= xmax {
                        if ppr.x > xmax {
                            index_q = index_ppr;
                            index_pp = index_ppl;
                            r = true;
                        } else {
                            if rp {
                                explore(points, index_ppr, ymin, &mut out);
                                index_pp = index_ppl;
                            } else {
                                index_qp = index_ppr;
                                index_pp = index_ppl;
                                rp = true;
                            }
                        }
                    } else {
                        index_q = index_ppl;
                        lp = false;
                        r = true;
                    }
                }
            }
            2 => {
                // EnumerateRight(q)
                let index_ql = left_child(index_q);
                let index_qr = right_child(index_q);
                if is_leaf(index_q, n) {
                    r = false;
                } else if num_children(index_q, n) == 1 {
                    let ql = points[index_ql - 1];
                    if ql.x >= xmin && ql.x <= xmax {
                        if lp && rp {
                            explore(points, index_qp, ymin, &mut out);
                        } else if rp {
                            index_pp = index_qp;
                            lp = true;
                        }
                        index_qp = index_ql;
                        rp = true;
                        r = false;
                    } else if ql.x < xmin {
                        index_p = index_ql;
                        r = false;
                        l = true;
                    } else {
                        index_q = index_ql;
                    }
                } else {
                    let ql = points[index_ql - 1];
                    let qr = points[index_qr - 1];
                    if qr.x > xmax {
                        if ql.x > xmax {
                            index_q = index_ql;
                        } else if ql.x >= xmin {
                            if lp && rp {
                                explore(points, index_qp, ymin, &mut out);
                            } else if rp {
                                index_pp = index_qp;
                                lp = true;
                            }
                            index_qp = index_ql;
                            index_q = index_qr;
                            rp = true;
                        } else {
                            index_p = index_ql;
                            index_q = index_qr;
                            l = true;
                        }
                    } else if qr.x >= xmin {
                        if ql.x < xmin {
                            index_qp = index_qr;
                            index_p = index_ql;
                            r = false;
                            rp = true;
                            l = true;
                        } else {
                            if rp && lp {
                                explore(points, index_qp, ymin, &mut out);
                                explore(points, index_ql, ymin, &mut out);
                            } else if rp {
                                explore(points, index_ql, ymin, &mut out);
                                index_pp = index_qp;
                                lp = true;
                            } else if lp {
                                explore(points, index_ql, ymin, &mut out);
                                rp = true;
                            } else {
                                index_pp = index_ql;
                                lp = true;
                                rp = true;
                            }
                            index_qp = index_qr;
                            r = false;
                        }
                    } else {
                        index_p = index_ql;
                        l = true;
                        r = false;
                    }
                }
            }
            _ => {
                // EnumerateRightIn(q')
                let index_qpl = left_child(index_qp);
                let index_qpr = right_child(index_qp);
                let qp = points[index_qp - 1];
                if qp.y >= ymin {
                    out.push(qp);
                }
                if is_leaf(index_qp, n) {
                    rp = false;
                } else if num_children(index_qp, n) == 1 {
                    let qpl = points[index_qpl - 1];
                    if qpl.x >= xmin && qpl.x <= xmax {
                        index_qp = index_qpl;
                    } else if qpl.x < xmin {
                        index_p = index_qpl;
                        rp = false;
                        l = true;
                    } else {
                        index_q = index_qpl;
                        r = true;
                        rp = false;
                    }
                } else {
                    let qpl = points[index_qpl - 1];
                    let qpr = points[index_qpr - 1];
                    if qpr.x > xmax {
                        if qpl.x > xmax {
                            index_q = index_qpr;
                            r = true;
                            rp = false;
                        } else if qpl.x >= xmin {
                            index_q = index_qpr;
                            index_qp = index_qpl;
                            r = true;
                        } else {
                            index_q = index_qpr;
                            index_p = index_qpl;
                            r = true;
                            l = true;
                            rp = false;
                        }
                    } else if qpr.x >= xmin {
                        if qpl.x < xmin {
                            index_p = index_qpl;
                            index_qp = index_qpr;
                            l = true;
                        } else {
                            if lp {
                                explore(points, index_qpl, ymin, &mut out);
                                index_qp = index_qpl;
                            } else {
                                index_qp = index_qpr;
                                index_pp = index_qpl;
                                lp = true;
                            }
                        }
                    } else {
                        index_p = index_qpr;
                        rp = false;
                        l = true;
                    }
                }
            }
        }
    }

    out
}
