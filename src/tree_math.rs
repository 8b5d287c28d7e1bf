//! Arithmetic on the implicit tree.
//!
//! The priority search tree is never materialized as a graph of nodes:
//! it is a plain array interpreted as a complete binary tree via
//! 1-based index arithmetic (index `1` is the root, index `i` has
//! children `2i` and `2i + 1`). Every function here is a pure,
//! allocation-free computation over indices and is used by both the
//! builder and the query engine.

/// Index of the parent of `index`. Undefined (and meaningless) for the
/// root, `index == 1` — callers never invoke it there.
#[inline]
pub(crate) fn parent(index: usize) -> usize {
    index / 2
}

/// Index of the left child of `index`.
#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index
}

/// Index of the right child of `index`.
#[inline]
pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 1
}

/// `floor(log2(index))`. Level 0 is the root.
#[inline]
pub(crate) fn level(index: usize) -> u32 {
    debug_assert!(index >= 1);
    usize::BITS - 1 - index.leading_zeros()
}

/// Is `index` the left child of its parent? Equivalently, is it even?
#[inline]
pub(crate) fn is_left_child(index: usize) -> bool {
    index % 2 == 0
}

/// Number of children `index` has, given a tree holding `len` points
/// (1-based indices `1..=len` are in range).
#[inline]
pub(crate) fn num_children(index: usize, len: usize) -> u8 {
    if left_child(index) > len {
        0
    } else if right_child(index) > len {
        1
    } else {
        2
    }
}

/// Does `index` have no children in a tree of `len` points?
#[inline]
pub(crate) fn is_leaf(index: usize, len: usize) -> bool {
    left_child(index) > len
}

/// Smallest power of two that is `>= x`'s exponent form: `2^x`.
#[inline]
pub(crate) fn pow2(exp: u32) -> usize {
    1usize << exp
}
