use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use log::trace;

use crate::error::InvariantError;
use crate::print::{print_tree, PrintChild};
use crate::util::{first, last};

use super::iter::Inorder;
use super::types::{AvlNode, RotationStats};
use super::util::{assert_avl_tree, insert_left, insert_right, locate, print, Slot};

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Self-balancing ordered set of unique keys.
///
/// Nodes are stored in an arena owned by the tree and linked by index. A
/// rotation only relinks existing nodes; nodes are released together when
/// the tree is dropped.
pub struct AvlTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<K>>,
    rotations: RotationStats,
}

impl<K> AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty tree ordered by `comparator`, which must be a total
    /// order over `K`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
            rotations: RotationStats::default(),
        }
    }

    fn push_node(&mut self, key: K) -> u32 {
        self.arena.push(AvlNode::new(key));
        (self.arena.len() - 1) as u32
    }

    /// Inserts `key` unless an equal key is already present.
    ///
    /// Returns `true` when the key was added.
    pub fn insert(&mut self, key: K) -> bool {
        let Some(root) = self.root else {
            let n = self.push_node(key);
            trace!("insert: new root [{n}]");
            self.root = Some(n);
            return true;
        };

        let (p, left) = match locate(&self.arena, root, &key, &self.comparator) {
            Slot::Occupied(existing) => {
                trace!("insert: key already present at [{existing}]");
                return false;
            }
            Slot::Left(p) => (p, true),
            Slot::Right(p) => (p, false),
        };

        let n = self.push_node(key);
        let stats = &mut self.rotations;
        let root = if left {
            trace!("insert: [{n}] as left child of [{p}]");
            insert_left(&mut self.arena, root, n, p, |r| stats.record(r))
        } else {
            trace!("insert: [{n}] as right child of [{p}]");
            insert_right(&mut self.arena, root, n, p, |r| stats.record(r))
        };
        self.root = Some(root);
        true
    }

    /// Keys in ascending order.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        self.root.map_or(-1, |i| self.arena[i as usize].height)
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| &self.arena[i as usize].k)
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Rotations performed since the tree was created.
    pub fn rotations(&self) -> &RotationStats {
        &self.rotations
    }

    /// Verifies ordering, balance, heights and parent links of every node.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    /// Raw node dump with arena indices, heights and balance factors.
    pub fn print(&self) -> String
    where
        K: Debug,
    {
        print::<K, AvlNode<K>>(&self.arena, self.root, "")
    }

    fn dump_node(&self, i: u32, tab: &str) -> String
    where
        K: Display,
    {
        let n = &self.arena[i as usize];
        let label = format!("{} [h={}, bf={}]", n.k, n.height, n.bf);
        if n.l.is_none() && n.r.is_none() {
            return label;
        }
        let child = |c: Option<u32>, tab: &str| match c {
            Some(c) => self.dump_node(c, tab),
            None => "∅".to_string(),
        };
        let left = |tab: &str| child(n.l, tab);
        let right = |tab: &str| child(n.r, tab);
        let children: [Option<&PrintChild>; 2] = [Some(&left), Some(&right)];
        format!("{label}{}", print_tree(Some(tab), &children))
    }

    /// Box-drawing rendering of the tree, left child first.
    pub fn dump(&self) -> String
    where
        K: Display,
    {
        match self.root {
            Some(root) => {
                let node = |tab: &str| self.dump_node(root, tab);
                let children: [Option<&PrintChild>; 1] = [Some(&node)];
                format!("AvlTree{}", print_tree(None, &children))
            }
            None => "AvlTree ∅".to_string(),
        }
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<K, C> Debug for AvlTree<K, C>
where
    K: Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = AvlTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.root_key(), None);
        assert_eq!(tree.inorder().next(), None);
        assert_eq!(tree.dump(), "AvlTree ∅");
        tree.assert_valid().unwrap();
    }

    #[test]
    fn test_first_insert_becomes_root() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(42));
        assert_eq!(tree.root_key(), Some(&42));
        assert_eq!(tree.arena[0].p, None);
        assert_eq!(tree.arena[0].bf, 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.rotations().total(), 0);
    }

    #[test]
    fn test_duplicate_is_noop() {
        let mut tree = AvlTree::new();
        for k in [5, 3, 8] {
            tree.insert(k);
        }
        let before = tree.print();
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.print(), before);
    }

    #[test]
    fn test_dump() {
        let mut tree = AvlTree::new();
        for k in [7, 9, 13, 21] {
            tree.insert(k);
        }
        assert_eq!(
            tree.dump(),
            "AvlTree\n└─ 9 [h=2, bf=1]\n   ├─ 7 [h=0, bf=0]\n   └─ 13 [h=1, bf=1]\n      ├─ ∅\n      └─ 21 [h=0, bf=0]"
        );
    }

    #[test]
    fn test_debug_lists_keys_in_order() {
        let mut tree = AvlTree::new();
        for k in [3, 1, 2] {
            tree.insert(k);
        }
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }
}
