use std::collections::VecDeque;
use tracing::instrument;

/// Child slot of a binary tree node. `None` marks an absent child;
/// the same type doubles as the empty-tree marker at the root.
pub type Link<T> = Option<Box<TreeNode<T>>>;

/// A node of a reconstructed binary tree.
///
/// Each node exclusively owns its children, so the whole tree is a single
/// ownership hierarchy with no sharing and no cycles. Structural equality
/// via `PartialEq` compares shape and values together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Assembles a subtree link from a value and two child links.
    pub fn branch(value: T, left: Link<T>, right: Link<T>) -> Link<T> {
        Some(Box::new(Self { value, left, right }))
    }

    pub fn leaf(value: T) -> Link<T> {
        Some(Box::new(Self::new(value)))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn depth(&self) -> usize {
        let left = self.left.as_deref().map(TreeNode::depth).unwrap_or(0);
        let right = self.right.as_deref().map(TreeNode::depth).unwrap_or(0);
        1 + left.max(right)
    }
}

impl<T: Clone> TreeNode<T> {
    /// Values in left-root-right order.
    pub fn inorder_values(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.collect_inorder(&mut values);
        values
    }

    fn collect_inorder(&self, values: &mut Vec<T>) {
        if let Some(left) = &self.left {
            left.collect_inorder(values);
        }
        values.push(self.value.clone());
        if let Some(right) = &self.right {
            right.collect_inorder(values);
        }
    }

    /// Values in left-right-root order.
    ///
    /// Iterative two-phase traversal: each node is stacked twice, first to
    /// schedule its children and then to be emitted once both are done.
    pub fn postorder_values(&self) -> Vec<T> {
        let mut values = Vec::new();
        let mut stack: Vec<(&TreeNode<T>, bool)> = vec![(self, false)];

        while let Some((node, visited)) = stack.pop() {
            if visited {
                values.push(node.value.clone());
            } else {
                stack.push((node, true));
                if let Some(right) = &node.right {
                    stack.push((right, false));
                }
                if let Some(left) = &node.left {
                    stack.push((left, false));
                }
            }
        }

        values
    }
}

/// Collects the tree's values in level order, breadth-first with a queue.
///
/// Absent children of visited nodes are reported as `None`, trailing `None`
/// entries are trimmed. The empty tree yields an empty vector.
#[instrument(level = "trace", skip(root))]
pub fn level_values<T: Clone>(root: &Link<T>) -> Vec<Option<T>> {
    let mut values = Vec::new();
    let mut queue: VecDeque<Option<&TreeNode<T>>> = VecDeque::new();
    queue.push_back(root.as_deref());

    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(node) => {
                values.push(Some(node.value.clone()));
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
            None => values.push(None),
        }
    }

    while values.last().is_some_and(Option::is_none) {
        values.pop();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    //      3
    //     / \
    //    9  20
    //       / \
    //      15  7
    fn sample_tree() -> Link<i32> {
        TreeNode::branch(
            3,
            TreeNode::leaf(9),
            TreeNode::branch(20, TreeNode::leaf(15), TreeNode::leaf(7)),
        )
    }

    #[test]
    fn test_depth() {
        let tree = sample_tree().unwrap();
        assert_eq!(tree.depth(), 3);
        assert_eq!(TreeNode::new(1).depth(), 1);
    }

    #[test]
    fn test_inorder_values() {
        let tree = sample_tree().unwrap();
        assert_eq!(tree.inorder_values(), vec![9, 3, 15, 20, 7]);
    }

    #[test]
    fn test_postorder_values() {
        let tree = sample_tree().unwrap();
        assert_eq!(tree.postorder_values(), vec![9, 15, 7, 20, 3]);
    }

    #[test]
    fn test_level_values_reports_gaps() {
        let tree = sample_tree();
        assert_eq!(
            level_values(&tree),
            vec![Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]
        );
    }

    #[test]
    fn test_level_values_empty_tree() {
        let tree: Link<i32> = None;
        assert!(level_values(&tree).is_empty());
    }
}
