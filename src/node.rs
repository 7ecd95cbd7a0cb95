//! Tree nodes and the algorithms that operate on owned child slots.
//!
//! `insert` and `delete` never rebalance, so a tree may legitimately degrade
//! into a chain as long as it has values. Everything here that walks a whole
//! path or subtree therefore uses a cursor or an explicit stack rather than
//! recursion. `build` recurses, but only on trees it balances itself.

use std::cmp::Ordering;

use crate::traversal::{NodeWalk, Postorder};

/// An owned child slot. `None` is an empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`Tree`](crate::Tree).
///
/// Each node exclusively owns its children; there are no parent pointers.
/// Nodes are only handed out by shared reference, so the ordering invariant
/// cannot be broken from outside the crate.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Root of the left subtree, whose values all compare less than this node's.
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Root of the right subtree, whose values all compare greater than this node's.
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf.
    ///
    /// A leaf has height `0`; an empty subtree counts as `-1`.
    pub fn height(&self) -> isize {
        height(Some(self))
    }
}

/// Counts levels breadth-first; `-1` for an empty subtree.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> isize {
    let mut level: Vec<&Node<T>> = node.into_iter().collect();
    let mut height = -1;
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    height
}

/// Builds a subtree out of the next `len` values yielded by `values`.
///
/// `values` must be strictly ascending. The subtree root is the value at index
/// `len / 2`, so on even lengths the left half holds one value fewer than the
/// right half. Recursion depth is `log2(len)`.
pub(crate) fn build<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build(values, mid);
    let value = values.next()?;
    let right = build(values, len - mid - 1);
    Some(Box::new(Node { value, left, right }))
}

/// Walks down from `link` to the slot that holds `value`, or to the empty
/// slot where it would be inserted.
fn locate<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        // Decide through a shared borrow first; the mutable reborrow below is
        // only taken on the paths that move the cursor.
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return link,
        };
        if ordering == Ordering::Equal {
            return link;
        }
        let Some(node) = link else {
            return link;
        };
        link = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Inserts `value` as a new leaf. Returns `false` if an equal value is already
/// present, in which case the subtree is unchanged.
pub(crate) fn insert<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    let slot = locate(link, &value);
    if slot.is_some() {
        return false;
    }
    *slot = Some(Box::new(Node::leaf(value)));
    true
}

/// Removes `value` from the subtree. Returns `false` if it was not present.
///
/// A node with a single child is replaced by that child. A node with two
/// children takes over the value of its in-order successor, and the successor
/// node is unlinked from the right subtree.
pub(crate) fn delete<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let slot = locate(link, value);
    let Some(node) = slot.as_mut() else {
        return false;
    };
    if node.left.is_some() && node.right.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            node.value = successor;
        }
    } else if let Some(mut removed) = slot.take() {
        *slot = removed.left.take().or(removed.right.take());
    }
    true
}

/// Unlinks the leftmost node of the subtree and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min.value)
}

pub(crate) fn find<'a, T: Ord>(mut current: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>> {
    while let Some(node) = current {
        current = match value.cmp(&node.value) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

pub(crate) fn leftmost<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

pub(crate) fn rightmost<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(right) = node.right() {
        node = right;
    }
    node
}

/// Returns `false` as soon as some node's subtree heights differ by more
/// than one.
///
/// Heights are computed bottom-up in a single postorder pass: each node pops
/// the heights its children pushed and pushes its own.
pub(crate) fn is_balanced<T>(root: Option<&Node<T>>) -> bool {
    let mut walk = Postorder::new(root);
    let mut heights: Vec<isize> = Vec::new();
    while let Some(node) = walk.next_node() {
        let right = match node.right {
            Some(_) => heights.pop().unwrap_or(-1),
            None => -1,
        };
        let left = match node.left {
            Some(_) => heights.pop().unwrap_or(-1),
            None => -1,
        };
        if (left - right).abs() > 1 {
            return false;
        }
        heights.push(1 + left.max(right));
    }
    true
}

/// Moves every value out of the subtree into `out`, in ascending order.
pub(crate) fn drain_inorder<T>(link: Link<T>, out: &mut Vec<T>) {
    let mut pending: Vec<Box<Node<T>>> = Vec::new();
    let mut current = link;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            pending.push(node);
        }
        let Some(node) = pending.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        out.push(value);
        current = right;
    }
}

/// Frees a subtree one node at a time. The derived drop of `Link<T>` recurses
/// once per level.
pub(crate) fn teardown<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// Copies a subtree, shape included, without recursing.
///
/// Visiting in postorder leaves both finished child subtrees on top of the
/// stack by the time their parent comes up.
pub(crate) fn clone_subtree<T: Clone>(root: Option<&Node<T>>) -> Link<T> {
    let mut walk = Postorder::new(root);
    let mut built: Vec<Box<Node<T>>> = Vec::new();
    while let Some(node) = walk.next_node() {
        let right = node.right.as_ref().and_then(|_| built.pop());
        let left = node.left.as_ref().and_then(|_| built.pop());
        built.push(Box::new(Node {
            value: node.value.clone(),
            left,
            right,
        }));
    }
    built.pop()
}
