//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Each link is an
//! `Option<u32>` index into that arena rather than a pointer, so the parent
//! back-link is never an owner and can never dangle.

use std::cmp::Ordering;

/// Structural links (`p`, `l`, `r`).
///
/// `p` is the non-owning back-link to the parent; it is `None` only for the
/// root. `l` and `r` are the owned children.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by the tree. Must describe a total order over `K`.
pub type Comparator<K> = dyn Fn(&K, &K) -> Ordering;

/// Keyed node interface.
///
/// A key is fixed once its node is created. Rotations only relink nodes.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}
