//! AVL tree: node type, rotation and rebalancing routines, and the
//! [`AvlTree`] container built on them.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod iter;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use iter::Inorder;
pub use types::{AvlNode, AvlNodeLike, Rotation, RotationStats};
pub use util::{assert_avl_tree, insert_left, insert_right, locate, rebalance, Slot};
