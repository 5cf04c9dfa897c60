use std::fmt::Display;
use termtree::Tree;

use crate::node::{Link, TreeNode};

/// Conversion into a renderable [`termtree::Tree`] for terminal display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for TreeNode<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let mut tree = Tree::new(self.value.to_string());
        if let Some(left) = &self.left {
            tree.push(left.to_tree_string());
        }
        if let Some(right) = &self.right {
            tree.push(right.to_tree_string());
        }
        tree
    }
}

impl<T: Display> TreeNodeConvert for Link<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Some(node) => node.to_tree_string(),
            None => Tree::new("(empty)".to_string()),
        }
    }
}
