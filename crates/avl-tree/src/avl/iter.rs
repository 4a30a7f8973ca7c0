use std::iter::FusedIterator;

use crate::util::{first, next};

use super::types::AvlNode;

/// Lazy in-order iterator over the keys of an [`AvlTree`](super::AvlTree).
///
/// Steps through successor links, so it needs no stack and never mutates the
/// tree. Every call to `inorder()` starts a fresh traversal.
pub struct Inorder<'a, K> {
    arena: &'a [AvlNode<K>],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, K> Inorder<'a, K> {
    pub(crate) fn new(arena: &'a [AvlNode<K>], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: first(arena, root),
            remaining: if root.is_some() { arena.len() } else { 0 },
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = next(self.arena, idx);
        self.remaining -= 1;
        Some(&self.arena[idx as usize].k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Inorder<'_, K> {}

impl<K> FusedIterator for Inorder<'_, K> {}

impl<K> Clone for Inorder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}
