//! A sideways drawing of a [`Tree`] for showing progress in a terminal.
//!
//! The right subtree is drawn above its parent and the left subtree below,
//! so the tree reads top to bottom from largest to smallest value. Nodes
//! that are marked by a running traversal or that carry a thread are drawn
//! as `[value]`. Threads themselves are never followed.

use std::fmt;

use crate::node::NodeId;
use crate::threaded::Tree;

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// Renders the tree as indented branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// assert_eq!(tree.dump(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &str,
        is_tail: bool,
    ) -> fmt::Result {
        let node = &self.nodes[id];

        if let Some(right) = node.right.child() {
            let prefix = format!("{prefix}{}", if is_tail { "│   " } else { "    " });
            self.write_node(f, right, &prefix, false)?;
        }

        let branch = if is_tail { "└── " } else { "┌── " };
        if node.is_marked() || node.is_right_threaded() {
            writeln!(f, "{prefix}{branch}[{}]", node.value())?;
        } else {
            writeln!(f, "{prefix}{branch}{}", node.value())?;
        }

        if let Some(left) = node.left {
            let prefix = format!("{prefix}{}", if is_tail { "    " } else { "│   " });
            self.write_node(f, left, &prefix, true)?;
        }

        Ok(())
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => self.write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}
