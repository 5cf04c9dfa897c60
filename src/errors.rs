use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Traversal length mismatch: inorder has {inorder} values, postorder has {postorder}")]
    LengthMismatch { inorder: usize, postorder: usize },

    #[error("Duplicate value in inorder traversal: {0}")]
    DuplicateValue(String),

    #[error("Inorder and postorder do not contain the same values")]
    ValueSetMismatch,

    #[error("Traversals are not consistent with any binary tree")]
    InconsistentTraversals,
}

pub type TreeResult<T> = Result<T, TreeError>;
