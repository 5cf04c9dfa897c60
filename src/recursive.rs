//! Recursive partition builder.
//!
//! Reconstructs the tree top-down: the last unconsumed postorder element is
//! always the root of the subtree currently being built, and its position in
//! the inorder sequence splits the remaining values into left and right
//! subtrees.

use std::collections::HashMap;
use std::hash::Hash;
use tracing::instrument;

use crate::node::{Link, TreeNode};

/// Cursor walking a postorder sequence back to front.
///
/// Owned by a single `build_tree` invocation and threaded through the
/// recursion by mutable reference, so reusing the builder concurrently on
/// independent inputs is safe. Counting consumed elements instead of holding
/// a decrementing index keeps the arithmetic in `usize`.
struct PostorderCursor<'a, T> {
    items: &'a [T],
    consumed: usize,
}

impl<'a, T> PostorderCursor<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self { items, consumed: 0 }
    }

    fn next_back(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.items.len().checked_sub(self.consumed + 1)?)?;
        self.consumed += 1;
        Some(item)
    }
}

/// Reconstructs a binary tree from its inorder and postorder traversals.
///
/// Both sequences must have the same length, contain pairwise distinct
/// values, and describe the same tree; violating that invariant yields an
/// unspecified tree (use [`crate::validate::build_tree_checked`] to reject
/// malformed input instead). Empty input returns `None`, the empty tree.
///
/// Runs in O(n) time with an O(n) value-to-index map and O(h) recursion
/// depth for a tree of height h.
#[instrument(level = "debug", skip(inorder, postorder), fields(n = inorder.len()))]
pub fn build_tree<T>(inorder: &[T], postorder: &[T]) -> Link<T>
where
    T: Eq + Hash + Clone,
{
    if inorder.is_empty() || postorder.is_empty() {
        return None;
    }

    let index_map: HashMap<&T, usize> = inorder
        .iter()
        .enumerate()
        .map(|(idx, value)| (value, idx))
        .collect();
    let mut cursor = PostorderCursor::new(postorder);

    build_range(&index_map, &mut cursor, 0, inorder.len())
}

/// Builds the subtree covering the half-open inorder range `lo..hi`.
fn build_range<T>(
    index_map: &HashMap<&T, usize>,
    cursor: &mut PostorderCursor<'_, T>,
    lo: usize,
    hi: usize,
) -> Link<T>
where
    T: Eq + Hash + Clone,
{
    if lo >= hi {
        return None;
    }

    let root_value = cursor.next_back()?;
    let root_idx = *index_map.get(root_value)?;
    let mut node = Box::new(TreeNode::new(root_value.clone()));

    // Right subtree first: the cursor walks postorder from the end, and in
    // postorder layout [left, right, root] the element preceding any root
    // belongs to that root's right subtree.
    node.right = build_range(index_map, cursor, root_idx + 1, hi);
    node.left = build_range(index_map, cursor, lo, root_idx);

    Some(node)
}
