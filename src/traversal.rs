//! Depth-first and breadth-first walks over a tree.
//!
//! Each walk is a small explicit-stack (or queue) cursor over `&Node<T>`.
//! As an [`Iterator`] a cursor yields the stored values; the `visit_*`
//! methods on [`Tree`](crate::Tree) drive the same cursors and hand every
//! node to a callback instead.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

pub(crate) trait NodeWalk<'a, T: 'a>: Sized {
    fn next_node(&mut self) -> Option<&'a Node<T>>;

    fn visit<F: FnMut(&'a Node<T>)>(mut self, mut f: F) {
        while let Some(node) = self.next_node() {
            f(node);
        }
    }
}

macro_rules! value_iterator {
    ($walk:ident) => {
        impl<'a, T> Iterator for $walk<'a, T> {
            type Item = &'a T;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.next_node().map(Node::value)
            }
        }

        impl<T> FusedIterator for $walk<'_, T> {}
    };
}

/// Breadth-first walk: the root, then each level left to right.
#[derive(Clone)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> NodeWalk<'a, T> for LevelOrder<'a, T> {
    fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

value_iterator!(LevelOrder);

/// Node, then left subtree, then right subtree.
#[derive(Clone)]
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> NodeWalk<'a, T> for Preorder<'a, T> {
    fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.stack.pop()?;
        // Right goes first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

value_iterator!(Preorder);

/// Left subtree, then node, then right subtree. Yields values in ascending order.
#[derive(Clone)]
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> NodeWalk<'a, T> for Inorder<'a, T> {
    fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

value_iterator!(Inorder);

/// Left subtree, then right subtree, then node.
#[derive(Clone)]
pub struct Postorder<'a, T> {
    /// Pending nodes, flagged once their children have been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> NodeWalk<'a, T> for Postorder<'a, T> {
    fn next_node(&mut self) -> Option<&'a Node<T>> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

value_iterator!(Postorder);
