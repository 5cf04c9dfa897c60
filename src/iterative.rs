//! Iterative stack builder.
//!
//! Reconstructs the same tree as [`crate::recursive`] without call-stack
//! recursion: an explicit stack holds the path of nodes whose left subtree
//! is still open, and a cursor walks the inorder sequence backwards to
//! decide when that path must be unwound.
//!
//! Children are attached to nodes that were pushed earlier, which exclusive
//! `Box` ownership cannot express while the parent sits on the stack. The
//! builder therefore links nodes inside an arena scoped to one invocation
//! and materializes the owned tree from the arena root at the end.

use generational_arena::{Arena, Index};
use std::collections::HashMap;
use tracing::instrument;

use crate::node::{Link, TreeNode};

struct ArenaNode<T> {
    value: T,
    left: Option<Index>,
    right: Option<Index>,
}

impl<T> ArenaNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Reconstructs a binary tree from its inorder and postorder traversals
/// using an explicit stack instead of recursion.
///
/// Same contract and same output as [`crate::recursive::build_tree`]: empty
/// input returns `None`, malformed input yields an unspecified tree.
#[instrument(level = "debug", skip(inorder, postorder), fields(n = inorder.len()))]
pub fn build_tree<T>(inorder: &[T], postorder: &[T]) -> Link<T>
where
    T: Eq + Clone,
{
    if inorder.is_empty() || postorder.is_empty() {
        return None;
    }

    let mut arena: Arena<ArenaNode<T>> = Arena::with_capacity(postorder.len());
    let root = arena.insert(ArenaNode::new(postorder[postorder.len() - 1].clone()));

    // Stack of nodes whose left child slot is still open, root at the bottom.
    let mut stack: Vec<Index> = vec![root];
    let mut inorder_idx = inorder.len() - 1;

    for value in postorder[..postorder.len() - 1].iter().rev() {
        let node = arena.insert(ArenaNode::new(value.clone()));
        let Some(&parent) = stack.last() else {
            break;
        };

        if arena[parent].value != inorder[inorder_idx] {
            // The top of the stack still has its right subtree ahead of it
            // in the backwards postorder walk.
            arena[parent].right = Some(node);
        } else {
            // The top's right subtree is complete. Pop every ancestor whose
            // inorder position has been reached; the last one popped is the
            // node whose left child comes next.
            let mut last_popped = parent;
            while let Some(&top) = stack.last() {
                if arena[top].value != inorder[inorder_idx] {
                    break;
                }
                stack.pop();
                last_popped = top;
                inorder_idx = inorder_idx.saturating_sub(1);
            }
            arena[last_popped].left = Some(node);
        }

        stack.push(node);
    }

    materialize(&arena, root)
}

/// Converts the arena-linked structure rooted at `root` into the owned tree.
///
/// Two-phase postorder walk: every index is stacked once to schedule its
/// children and once to be assembled after both subtrees exist, so the
/// conversion needs no call-stack recursion either.
fn materialize<T: Clone>(arena: &Arena<ArenaNode<T>>, root: Index) -> Link<T> {
    let mut built: HashMap<Index, Box<TreeNode<T>>> = HashMap::with_capacity(arena.len());
    let mut stack: Vec<(Index, bool)> = vec![(root, false)];

    while let Some((idx, visited)) = stack.pop() {
        let Some(entry) = arena.get(idx) else {
            continue;
        };
        if visited {
            let mut node = Box::new(TreeNode::new(entry.value.clone()));
            node.left = entry.left.and_then(|left| built.remove(&left));
            node.right = entry.right.and_then(|right| built.remove(&right));
            built.insert(idx, node);
        } else {
            stack.push((idx, true));
            if let Some(right) = entry.right {
                stack.push((right, false));
            }
            if let Some(left) = entry.left {
                stack.push((left, false));
            }
        }
    }

    built.remove(&root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_single_node() {
        let tree = build_tree(&[7], &[7]).unwrap();
        assert_eq!(tree.value, 7);
        assert!(tree.is_leaf());
    }

    #[test]
    fn test_build_empty() {
        let inorder: [i32; 0] = [];
        assert!(build_tree(&inorder, &inorder).is_none());
    }

    #[test]
    fn test_consecutive_left_children() {
        // 3 -> left 2 -> left 1, exercises the multi-pop backtracking path
        let tree = build_tree(&[1, 2, 3], &[1, 2, 3]).unwrap();
        assert_eq!(tree.value, 3);
        let left = tree.left.as_ref().unwrap();
        assert_eq!(left.value, 2);
        assert!(tree.right.is_none());
        let leftmost = left.left.as_ref().unwrap();
        assert_eq!(leftmost.value, 1);
        assert!(leftmost.is_leaf());
    }

    #[test]
    fn test_right_chain() {
        let tree = build_tree(&[1, 2, 3], &[3, 2, 1]).unwrap();
        assert_eq!(tree.value, 1);
        assert!(tree.left.is_none());
        let right = tree.right.as_ref().unwrap();
        assert_eq!(right.value, 2);
        assert_eq!(right.right.as_ref().unwrap().value, 3);
    }
}
