//! Sideways text rendering of a tree.
//!
//! The right subtree is drawn above its parent and the left subtree below,
//! so reading the output top to bottom gives the values in descending order:
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```
//!
//! Rendering recurses once per level and each line carries a prefix as wide
//! as the node's depth, so it is meant for small trees.

use std::fmt;

use crate::node::Node;
use crate::Tree;

const BRANCH_LEFT: &str = "└── ";
const BRANCH_RIGHT: &str = "┌── ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, &mut String::new(), true),
            None => Ok(()),
        }
    }
}

fn write_node<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &mut String,
    is_left: bool,
) -> fmt::Result {
    let base = prefix.len();

    if let Some(right) = node.right() {
        prefix.push_str(if is_left { CONTINUE } else { BLANK });
        write_node(f, right, prefix, false)?;
        prefix.truncate(base);
    }

    let branch = if is_left { BRANCH_LEFT } else { BRANCH_RIGHT };
    writeln!(f, "{prefix}{branch}{}", node.value())?;

    if let Some(left) = node.left() {
        prefix.push_str(if is_left { BLANK } else { CONTINUE });
        write_node(f, left, prefix, true)?;
        prefix.truncate(base);
    }

    Ok(())
}
