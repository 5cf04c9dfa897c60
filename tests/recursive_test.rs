//! Tests for the recursive partition builder

use rstest::rstest;

use retree::node::{level_values, Link, TreeNode};
use retree::recursive::build_tree;
use retree::tree_traits::TreeNodeConvert;

// ============================================================
// Degenerate Input Tests
// ============================================================

#[test]
fn given_empty_traversals_when_building_then_returns_empty_tree() {
    let inorder: [i32; 0] = [];
    let postorder: [i32; 0] = [];

    assert!(build_tree(&inorder, &postorder).is_none());
}

#[test]
fn given_single_value_when_building_then_returns_leaf() {
    let tree = build_tree(&[42], &[42]).expect("single node tree");

    assert_eq!(tree.value, 42);
    assert!(tree.is_leaf());
}

// ============================================================
// Shape Tests
// ============================================================

#[test]
fn given_textbook_traversals_when_building_then_returns_expected_shape() {
    let inorder = [9, 3, 15, 20, 7];
    let postorder = [9, 15, 7, 20, 3];

    let tree = build_tree(&inorder, &postorder);

    let expected = TreeNode::branch(
        3,
        TreeNode::leaf(9),
        TreeNode::branch(20, TreeNode::leaf(15), TreeNode::leaf(7)),
    );
    assert_eq!(tree, expected);
    assert_eq!(
        level_values(&tree),
        vec![Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]
    );
}

#[rstest]
#[case(&[1, 2], &[2, 1], TreeNode::branch(1, None, TreeNode::leaf(2)))]
#[case(&[2, 1], &[2, 1], TreeNode::branch(1, TreeNode::leaf(2), None))]
fn given_two_values_when_building_then_child_side_follows_inorder(
    #[case] inorder: &[i32],
    #[case] postorder: &[i32],
    #[case] expected: Link<i32>,
) {
    assert_eq!(build_tree(inorder, postorder), expected);
}

#[test]
fn given_left_chain_when_building_then_every_node_has_only_left_child() {
    let inorder = [1, 2, 3, 4, 5];
    let postorder = [1, 2, 3, 4, 5];

    let mut current = build_tree(&inorder, &postorder);
    let mut expected_value = 5;
    while let Some(node) = current {
        assert_eq!(node.value, expected_value);
        assert!(node.right.is_none());
        expected_value -= 1;
        current = node.left;
    }
    assert_eq!(expected_value, 0);
}

// ============================================================
// Traversal Consistency Tests
// ============================================================

#[test]
fn given_valid_traversals_when_retraversing_then_inputs_are_reproduced() {
    let inorder = [4, 2, 5, 1, 6, 3, 7];
    let postorder = [4, 5, 2, 6, 7, 3, 1];

    let tree = build_tree(&inorder, &postorder).expect("non-empty tree");

    assert_eq!(tree.inorder_values(), inorder);
    assert_eq!(tree.postorder_values(), postorder);
}

#[test]
fn given_string_values_when_building_then_tree_is_generic_over_value_type() {
    let inorder = ["lib", "src", "tests"];
    let postorder = ["lib", "tests", "src"];

    let tree = build_tree(&inorder, &postorder).expect("non-empty tree");

    assert_eq!(tree.value, "src");
    assert_eq!(tree.inorder_values(), inorder);
    // Rendering is available for any displayable value type
    assert!(tree.to_tree_string().to_string().contains("src"));
}
