//! # balanced-bst
//!
//! A binary search tree over any totally ordered value type, with an explicit
//! full-rebuild [`Tree::rebalance`].
//!
//! Construction sorts and deduplicates its input and builds a height-balanced
//! tree in one pass. `insert` and `delete` are plain BST operations and never
//! rebalance on their own; call [`Tree::is_balanced`] to check and
//! [`Tree::rebalance`] to restore balance.
//!
//! ## Example
//!
//! ```rust
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_values([5, 3, 8, 1, 4, 7, 9]);
//! assert!(tree.is_balanced());
//!
//! for v in 10..=12 {
//!     tree.insert(v);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(
//!     tree.inorder().copied().collect::<Vec<_>>(),
//!     vec![1, 3, 4, 5, 7, 8, 9, 10, 11, 12]
//! );
//! ```

mod display;
mod error;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod traversal;

pub use error::{Result, TreeError};
pub use node::Node;
pub use traversal::{Inorder, LevelOrder, Postorder, Preorder};

use std::fmt;

use tracing::{debug, trace};

use node::Link;
use traversal::NodeWalk;

// =============================================================================
// Tree
// =============================================================================

/// A binary search tree that owns its nodes.
///
/// For every node, all values in its left subtree compare less than the
/// node's value and all values in its right subtree compare greater. Values
/// are unique.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of values in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        node::teardown(self.root.take());
        self.len = 0;
    }

    /// The root node, for read-only inspection of the tree's shape.
    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Smallest value, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| node::leftmost(root).value())
    }

    /// Largest value, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| node::rightmost(root).value())
    }

    /// Height of the whole tree in edges: `-1` when empty, `0` for a lone root.
    ///
    /// Use [`Node::height`] for the height of an individual subtree.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// Returns `true` if, at every node, the heights of the two subtrees
    /// differ by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(self.root())
    }

    /// Rebuilds the tree from its ascending value sequence, producing a
    /// height-balanced tree holding the same values.
    ///
    /// All existing nodes are dropped; the values themselves are moved, not
    /// cloned.
    pub fn rebalance(&mut self) {
        let height_before = self.height();
        let mut values = Vec::with_capacity(self.len);
        node::drain_inorder(self.root.take(), &mut values);
        debug_assert_eq!(values.len(), self.len);
        self.root = node::build(&mut values.into_iter(), self.len);
        debug!(
            len = self.len,
            height_before,
            height_after = self.height(),
            "rebalanced tree"
        );
    }

    // -------------------------------------------------------------------------
    // Traversals
    // -------------------------------------------------------------------------

    /// Values level by level from the root, left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Values with each node before its left then right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Values in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }

    /// Values with each node after its left then right subtree.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root())
    }

    /// Calls `f` on every node in level order.
    pub fn visit_level_order(&self, f: impl FnMut(&Node<T>)) {
        self.level_order().visit(f);
    }

    /// Calls `f` on every node in preorder.
    pub fn visit_preorder(&self, f: impl FnMut(&Node<T>)) {
        self.preorder().visit(f);
    }

    /// Calls `f` on every node in ascending value order.
    pub fn visit_inorder(&self, f: impl FnMut(&Node<T>)) {
        self.inorder().visit(f);
    }

    /// Calls `f` on every node in postorder.
    pub fn visit_postorder(&self, f: impl FnMut(&Node<T>)) {
        self.postorder().visit(f);
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a height-balanced tree from arbitrary values. Duplicates are
    /// dropped.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut values: Vec<T> = values.into_iter().collect();
        let input = values.len();
        values.sort_unstable();
        values.dedup();
        let len = values.len();
        debug!(input, unique = len, "building tree");
        Self {
            root: node::build(&mut values.into_iter(), len),
            len,
        }
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree
    /// untouched, if the value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = node::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        } else {
            trace!("insert: value already present");
        }
        inserted
    }

    /// Removes `value`. Returns `false` if it was not present.
    pub fn delete(&mut self, value: &T) -> bool {
        let deleted = node::delete(&mut self.root, value);
        if deleted {
            self.len -= 1;
        } else {
            trace!("delete: value not present");
        }
        deleted
    }

    /// Returns the node holding `value`, if any.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        node::find(self.root(), value)
    }

    /// Returns `true` if `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Number of edges between the root and the node holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if `value` is not in the tree.
    pub fn depth(&self, value: &T) -> Result<usize> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Greater => node.right(),
                std::cmp::Ordering::Equal => return Ok(depth),
            };
            depth += 1;
        }
        Err(TreeError::NotFound)
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(self.root()),
            len: self.len,
        }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::teardown(self.root.take());
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Ord> From<Vec<T>> for Tree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

/// Inserts each value in turn. The tree is not rebalanced afterwards.
impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Two trees are equal when they hold the same values, whatever their shape.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.inorder().eq(other.inorder())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}


#[cfg(test)]
mod proptests;
