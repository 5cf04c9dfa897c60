//! Optional hardening layer over the unchecked builders.
//!
//! The core contract leaves malformed traversal pairs undefined. This module
//! rejects them instead: structural preconditions are checked up front, the
//! tree is built, and the result is re-traversed and compared against both
//! inputs. Strictly additive, the unchecked builders stay the default path.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::node::Link;
use crate::recursive;

/// Reconstructs a binary tree from its traversals, rejecting malformed input.
///
/// # Errors
///
/// * [`TreeError::LengthMismatch`] if the sequences differ in length.
/// * [`TreeError::DuplicateValue`] if `inorder` repeats a value.
/// * [`TreeError::ValueSetMismatch`] if the sequences are not permutations
///   of the same values.
/// * [`TreeError::InconsistentTraversals`] if no binary tree has both
///   traversals, detected by re-traversing the reconstructed tree.
#[instrument(level = "debug", skip(inorder, postorder), fields(n = inorder.len()))]
pub fn build_tree_checked<T>(inorder: &[T], postorder: &[T]) -> TreeResult<Link<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    if inorder.len() != postorder.len() {
        return Err(TreeError::LengthMismatch {
            inorder: inorder.len(),
            postorder: postorder.len(),
        });
    }

    if let Some(dup) = inorder.iter().duplicates().next() {
        return Err(TreeError::DuplicateValue(format!("{:?}", dup)));
    }

    // With inorder duplicate-free and the lengths equal, set equality also
    // rules out duplicates in postorder.
    let inorder_set: HashSet<&T> = inorder.iter().collect();
    let postorder_set: HashSet<&T> = postorder.iter().collect();
    if inorder_set != postorder_set || postorder_set.len() != postorder.len() {
        return Err(TreeError::ValueSetMismatch);
    }

    let root = recursive::build_tree(inorder, postorder);

    let rebuilt_inorder = root.as_ref().map(|n| n.inorder_values()).unwrap_or_default();
    let rebuilt_postorder = root
        .as_ref()
        .map(|n| n.postorder_values())
        .unwrap_or_default();
    if rebuilt_inorder.as_slice() != inorder || rebuilt_postorder.as_slice() != postorder {
        debug!("reconstructed traversals do not match the inputs");
        return Err(TreeError::InconsistentTraversals);
    }

    Ok(root)
}
