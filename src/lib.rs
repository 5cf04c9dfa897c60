//! Reconstruct binary trees from their inorder and postorder traversals.
//!
//! Two interchangeable builders produce the unique tree consistent with a
//! pair of traversals over pairwise distinct values:
//!
//! * [`recursive::build_tree`] partitions the inorder range around the root
//!   taken from the back of postorder.
//! * [`iterative::build_tree`] builds the same tree with an explicit stack
//!   and a walking inorder cursor, avoiding call-stack recursion.
//!
//! Malformed input (duplicates, mismatched value sets, traversals of no
//! common tree) is undefined behavior for both; [`validate::build_tree_checked`]
//! rejects it with a [`TreeError`] instead.
//!
//! ```
//! use retree::recursive;
//!
//! let inorder = [9, 3, 15, 20, 7];
//! let postorder = [9, 15, 7, 20, 3];
//!
//! let root = recursive::build_tree(&inorder, &postorder).unwrap();
//! assert_eq!(root.value, 3);
//! assert_eq!(root.inorder_values(), inorder);
//! assert_eq!(root.postorder_values(), postorder);
//! ```

pub mod errors;
pub mod iterative;
pub mod node;
pub mod recursive;
pub mod tree_traits;
pub mod util;
pub mod validate;

pub use errors::{TreeError, TreeResult};
pub use node::{level_values, Link, TreeNode};
