//! The point type stored in a priority search tree.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-D point with coordinates of type `C`.
///
/// `C` only needs to be `Copy + PartialOrd`: there is no requirement of
/// a total order (`Ord`) or equality (`Eq`), so plain `f32`/`f64`
/// coordinates work without a wrapper type. Per the crate's scope,
/// coordinates are compared exactly — there is no floating-point
/// tolerance anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<C> {
    pub x: C,
    pub y: C,
}

impl<C> Point<C> {
    /// Create a new point from its coordinates.
    #[inline]
    pub const fn new(x: C, y: C) -> Self {
        Self { x, y }
    }
}

impl<C: Copy + PartialOrd> Point<C> {
    /// Does this point lie in the north-east quadrant `{x >= xmin, y >= ymin}`?
    #[inline]
    pub(crate) fn in_ne_quadrant(&self, xmin: C, ymin: C) -> bool {
        self.x >= xmin && self.y >= ymin
    }

    /// Does this point lie in the slab `{xmin <= x <= xmax}`, ignoring y?
    #[inline]
    pub(crate) fn in_x_range(&self, xmin: C, xmax: C) -> bool {
        self.x >= xmin && self.x <= xmax
    }
}
