//! Priority Search Tree
//!
//! An in-place priority search tree over a static set of 2-D points,
//! built with the De–Maheshwari–Nandy–Smid (2011) construction
//! algorithm: the backing storage is heap-ordered by y-coordinate and
//! median-split by x-coordinate, laid out as an implicit complete
//! binary tree with no pointers and no auxiliary arrays.
//!
//! # Architecture
//!
//! - `point`: the `Point<C>` coordinate pair stored at every node
//! - `tree_math`: pure index arithmetic over the implicit tree
//! - `sort`: the in-place heap sort the builder uses to maintain the
//!   x-median-split precondition between levels
//! - `builder`: the level-by-level in-place construction algorithm
//! - `query`: the four traversal algorithms (`leftmostNE`, `highestNE`,
//!   `highest3Sided`, `enumerate3Sided`)
//! - `error`: the error type for range-validated queries

mod builder;
mod error;
mod point;
mod query;
mod sort;
mod tree_math;

pub use error::PstError;
pub use point::Point;

/// An in-place priority search tree over a fixed set of points.
///
/// Built once from a `Vec<Point<C>>` via [`PrioritySearchTree::build`];
/// there is no insertion or deletion afterwards; see the crate's
/// concurrency and resource model for why the structure is static.
#[derive(Debug, Clone)]
pub struct PrioritySearchTree<C> {
    tree: Vec<Point<C>>,
}

impl<C: Copy + PartialOrd> PrioritySearchTree<C> {
    /// Build a priority search tree from `points`, consuming and
    /// rearranging the vector in place. Runs in O(n log n) time and
    /// O(1) auxiliary memory beyond the input itself.
    pub fn build(points: Vec<Point<C>>) -> Self {
        let mut tree = points;
        builder::build_in_place(&mut tree);
        Self { tree }
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Is the tree empty?
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// A read-only view of the points in their internal tree layout
    /// (heap-on-y, median-split-on-x) — not sorted by either
    /// coordinate in the way a caller might expect from insertion
    /// order.
    pub fn points(&self) -> &[Point<C>] {
        &self.tree
    }

    /// The leftmost point with `x >= xmin` and `y >= ymin`, or `None`
    /// if no such point exists.
    pub fn leftmost_ne(&self, xmin: C, ymin: C) -> Option<Point<C>> {
        query::leftmost_ne(&self.tree, xmin, ymin)
    }

    /// The highest point with `x >= xmin` and `y >= ymin`, or `None` if
    /// no such point exists.
    pub fn highest_ne(&self, xmin: C, ymin: C) -> Option<Point<C>> {
        query::highest_ne(&self.tree, xmin, ymin)
    }

    /// The highest point with `xmin <= x <= xmax` and `y >= ymin`, or
    /// `None` if no such point exists.
    ///
    /// # Errors
    ///
    /// Returns [`PstError::InvalidRange`] if `xmin > xmax`.
    pub fn highest_three_sided(
        &self,
        xmin: C,
        xmax: C,
        ymin: C,
    ) -> Result<Option<Point<C>>, PstError<C>> {
        validate_range(xmin, xmax)?;
        Ok(query::highest_three_sided(&self.tree, xmin, xmax, ymin))
    }

    /// Every point with `xmin <= x <= xmax` and `y >= ymin`, in no
    /// particular order.
    ///
    /// # Errors
    ///
    /// Returns [`PstError::InvalidRange`] if `xmin > xmax`.
    pub fn enumerate_three_sided(
        &self,
        xmin: C,
        xmax: C,
        ymin: C,
    ) -> Result<Vec<Point<C>>, PstError<C>> {
        validate_range(xmin, xmax)?;
        Ok(query::enumerate_three_sided(&self.tree, xmin, xmax, ymin))
    }
}

fn validate_range<C: Copy + PartialOrd>(xmin: C, xmax: C) -> Result<(), PstError<C>> {
    if xmin <= xmax {
        Ok(())
    } else {
        Err(PstError::InvalidRange { xmin, xmax })
    }
}
