//! Arena-based AVL tree.
//!
//! An ordered set of unique keys that stays height-balanced: after every
//! insertion the heights of any node's two subtrees differ by at most one.
//!
//! Nodes live in a `Vec` owned by the tree. Every "pointer" (parent, left
//! child, right child) is an `Option<u32>` index into that arena, so the
//! parent back-link is a plain index and never owns anything.
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [7, 9, 13, 21] {
//!     tree.insert(key);
//! }
//! tree.insert(9); // already present, no-op
//!
//! let keys: Vec<i32> = tree.inorder().copied().collect();
//! assert_eq!(keys, vec![7, 9, 13, 21]);
//! assert_eq!(tree.root_key(), Some(&9));
//! assert_eq!(tree.rotations().total(), 1);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] link traits |
//! [`util`] | `first`, `last`, `next` in-order stepping |
//! [`avl`] | [`AvlNode`], rotations, rebalancing walk, [`AvlTree`] |
//! [`print`] | `tree-dump` style rendering |
//! [`error`] | [`InvariantError`] reported by the validator |

pub mod avl;
pub mod error;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlTree, Inorder, Rotation, RotationStats};
pub use error::{InvariantError, Side};
pub use types::{KeyNode, Node};
pub use util::{first, last, next};
