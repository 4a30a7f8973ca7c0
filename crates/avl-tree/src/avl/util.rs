use std::cmp::Ordering;
use std::fmt::Debug;

use log::debug;

use crate::error::{InvariantError, Side};
use crate::types::Node;
use crate::util::{first, next};

use super::types::{AvlNodeLike, Rotation};

/// Where a key belongs in a non-empty tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// An equal key already lives at this node.
    Occupied(u32),
    /// Vacant left child of this node.
    Left(u32),
    /// Vacant right child of this node.
    Right(u32),
}

#[inline]
fn set_p<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Stored height of `node`, `-1` when absent.
#[inline]
pub fn height<K, N>(arena: &[N], node: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    node.map_or(-1, |i| arena[i as usize].height())
}

/// Recomputes the height and balance factor of `n` from its children.
pub fn update<K, N>(arena: &mut [N], n: u32)
where
    N: AvlNodeLike<K>,
{
    let lh = height(arena, arena[n as usize].l());
    let rh = height(arena, arena[n as usize].r());
    let node = &mut arena[n as usize];
    node.set_height(1 + lh.max(rh));
    node.set_bf(rh - lh);
}

/// Redirects the child slot of `p` that held `old` to `new`.
fn replace_child<N: Node>(arena: &mut [N], p: Option<u32>, old: u32, new: u32) {
    if let Some(p) = p {
        if arena[p as usize].l() == Some(old) {
            set_l(arena, p, Some(new));
        } else {
            set_r(arena, p, Some(new));
        }
    }
}

/// Rotates `n` down to the left of its right child `nr`.
///
/// `nr` takes over the parent slot of `n`; the caller records it as the root
/// when `n` had no parent.
pub fn rotate_left<K, N>(arena: &mut [N], n: u32, nr: u32)
where
    N: AvlNodeLike<K>,
{
    let p = arena[n as usize].p();
    let nrl = arena[nr as usize].l();

    set_p(arena, nr, p);
    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    replace_child(arena, p, n, nr);

    update(arena, n);
    update(arena, nr);
}

/// Rotates `n` down to the right of its left child `nl`.
pub fn rotate_right<K, N>(arena: &mut [N], n: u32, nl: u32)
where
    N: AvlNodeLike<K>,
{
    let p = arena[n as usize].p();
    let nlr = arena[nl as usize].r();

    set_p(arena, nl, p);
    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    replace_child(arena, p, n, nl);

    update(arena, n);
    update(arena, nl);
}

/// Right-left case: `nrl` ends up in the place of `n`.
pub fn rotate_right_left<K, N>(arena: &mut [N], n: u32, nr: u32, nrl: u32)
where
    N: AvlNodeLike<K>,
{
    rotate_right(arena, nr, nrl);
    rotate_left(arena, n, nrl);
}

/// Left-right case: `nlr` ends up in the place of `n`.
pub fn rotate_left_right<K, N>(arena: &mut [N], n: u32, nl: u32, nlr: u32)
where
    N: AvlNodeLike<K>,
{
    rotate_left(arena, nl, nlr);
    rotate_right(arena, n, nlr);
}

/// Corrects a left-heavy `n`. Returns the new subtree root.
fn fix_left_heavy<K, N>(arena: &mut [N], n: u32, nl: u32) -> (u32, Rotation)
where
    N: AvlNodeLike<K>,
{
    let nll = arena[nl as usize].l();
    match arena[nl as usize].r() {
        Some(nlr) if height(arena, Some(nlr)) > height(arena, nll) => {
            rotate_left_right(arena, n, nl, nlr);
            (nlr, Rotation::LeftRight)
        }
        _ => {
            rotate_right(arena, n, nl);
            (nl, Rotation::LeftLeft)
        }
    }
}

/// Corrects a right-heavy `n`. Returns the new subtree root.
fn fix_right_heavy<K, N>(arena: &mut [N], n: u32, nr: u32) -> (u32, Rotation)
where
    N: AvlNodeLike<K>,
{
    let nrr = arena[nr as usize].r();
    match arena[nr as usize].l() {
        Some(nrl) if height(arena, Some(nrl)) > height(arena, nrr) => {
            rotate_right_left(arena, n, nr, nrl);
            (nrl, Rotation::RightLeft)
        }
        _ => {
            rotate_left(arena, n, nr);
            (nr, Rotation::RightRight)
        }
    }
}

/// Restores the AVL invariant from `n` upwards and returns the root.
///
/// Each step refreshes the node's height and balance factor, rotates when the
/// factor reached `±2`, then moves to the parent. Equal grandchild heights
/// pick the single rotation. The walk stops early once a subtree comes out
/// with its previous height: ancestors only depend on that height.
///
/// `on_rotate` is called once per corrective rotation.
pub fn rebalance<K, N, F>(arena: &mut [N], root: u32, mut n: u32, mut on_rotate: F) -> u32
where
    N: AvlNodeLike<K>,
    F: FnMut(Rotation),
{
    loop {
        let before = arena[n as usize].height();
        update(arena, n);

        let node = &arena[n as usize];
        let fixed = match (node.bf(), node.l(), node.r()) {
            (-2, Some(nl), _) => Some(fix_left_heavy(arena, n, nl)),
            (2, _, Some(nr)) => Some(fix_right_heavy(arena, n, nr)),
            _ => None,
        };
        if let Some((subtree, rotation)) = fixed {
            debug!("{rotation:?} rotation at node [{n}], new subtree root [{subtree}]");
            on_rotate(rotation);
            n = subtree;
        }

        match arena[n as usize].p() {
            None => return n,
            Some(_) if arena[n as usize].height() == before => return root,
            Some(p) => n = p,
        }
    }
}

/// Finds the slot for `key` by walking down from `root`.
pub fn locate<K, N, C>(arena: &[N], root: u32, key: &K, comparator: &C) -> Slot
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    loop {
        let node = &arena[curr as usize];
        let (child, vacant) = match comparator(key, node.key()) {
            Ordering::Equal => return Slot::Occupied(curr),
            Ordering::Less => (node.l(), Slot::Left(curr)),
            Ordering::Greater => (node.r(), Slot::Right(curr)),
        };
        match child {
            Some(child) => curr = child,
            None => return vacant,
        }
    }
}

/// Attaches the detached node `n` as the left child of `p` and rebalances.
///
/// Returns the new root.
pub fn insert_left<K, N, F>(arena: &mut [N], root: u32, n: u32, p: u32, on_rotate: F) -> u32
where
    N: AvlNodeLike<K>,
    F: FnMut(Rotation),
{
    set_l(arena, p, Some(n));
    set_p(arena, n, Some(p));
    rebalance(arena, root, p, on_rotate)
}

/// Attaches the detached node `n` as the right child of `p` and rebalances.
///
/// Returns the new root.
pub fn insert_right<K, N, F>(arena: &mut [N], root: u32, n: u32, p: u32, on_rotate: F) -> u32
where
    N: AvlNodeLike<K>,
    F: FnMut(Rotation),
{
    set_r(arena, p, Some(n));
    set_p(arena, n, Some(p));
    rebalance(arena, root, p, on_rotate)
}

/// Checks every structural invariant of the tree at `root`.
///
/// Heights are recomputed from scratch and compared with the stored ones.
pub fn assert_avl_tree<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err(InvariantError::RootHasParent(root));
    }

    fn validate<K, N>(arena: &[N], node: u32) -> Result<i32, InvariantError>
    where
        N: AvlNodeLike<K>,
    {
        let n = &arena[node as usize];
        let child_height = |child: Option<u32>, side: Side| match child {
            None => Ok(-1),
            Some(c) if arena[c as usize].p() != Some(node) => {
                Err(InvariantError::BrokenParentLink { node, side })
            }
            Some(c) => validate(arena, c),
        };
        let lh = child_height(n.l(), Side::Left)?;
        let rh = child_height(n.r(), Side::Right)?;

        let expected = 1 + lh.max(rh);
        if n.height() != expected {
            return Err(InvariantError::HeightMismatch {
                node,
                expected,
                actual: n.height(),
            });
        }
        let expected_bf = rh - lh;
        if n.bf() != expected_bf {
            return Err(InvariantError::BalanceFactorMismatch {
                node,
                expected: expected_bf,
                actual: n.bf(),
            });
        }
        if !(-1..=1).contains(&expected_bf) {
            return Err(InvariantError::Unbalanced {
                node,
                bf: expected_bf,
            });
        }
        Ok(expected)
    }

    validate(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            let cmp = comparator(arena[prev as usize].key(), arena[i as usize].key());
            if cmp != Ordering::Less {
                return Err(InvariantError::OrderViolated { prev, next: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}, bf={}] {:?}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.bf(),
                n.key()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;

    fn cmp(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    fn add(
        arena: &mut Vec<AvlNode<i32>>,
        root: Option<u32>,
        key: i32,
    ) -> (Option<u32>, Option<Rotation>) {
        let mut rotation = None;
        let n = arena.len() as u32;
        let Some(root) = root else {
            arena.push(AvlNode::new(key));
            return (Some(n), None);
        };
        let root = match locate(arena, root, &key, &cmp) {
            Slot::Occupied(_) => root,
            Slot::Left(p) => {
                arena.push(AvlNode::new(key));
                insert_left(arena, root, n, p, |r| rotation = Some(r))
            }
            Slot::Right(p) => {
                arena.push(AvlNode::new(key));
                insert_right(arena, root, n, p, |r| rotation = Some(r))
            }
        };
        (Some(root), rotation)
    }

    fn build(keys: &[i32]) -> (Vec<AvlNode<i32>>, Option<u32>, Vec<Rotation>) {
        let mut arena = Vec::new();
        let mut root = None;
        let mut rotations = Vec::new();
        for &k in keys {
            let (r, rotation) = add(&mut arena, root, k);
            root = r;
            rotations.extend(rotation);
            assert_avl_tree(&arena, root, &cmp).unwrap();
        }
        (arena, root, rotations)
    }

    fn root_key(arena: &[AvlNode<i32>], root: Option<u32>) -> i32 {
        arena[root.unwrap() as usize].k
    }

    #[test]
    fn test_right_right_case() {
        let (arena, root, rotations) = build(&[1, 2, 3]);
        assert_eq!(rotations, vec![Rotation::RightRight]);
        assert_eq!(root_key(&arena, root), 2);
    }

    #[test]
    fn test_left_left_case() {
        let (arena, root, rotations) = build(&[3, 2, 1]);
        assert_eq!(rotations, vec![Rotation::LeftLeft]);
        assert_eq!(root_key(&arena, root), 2);
    }

    #[test]
    fn test_left_right_case() {
        let (arena, root, rotations) = build(&[3, 1, 2]);
        assert_eq!(rotations, vec![Rotation::LeftRight]);
        assert_eq!(root_key(&arena, root), 2);
    }

    #[test]
    fn test_right_left_case() {
        let (arena, root, rotations) = build(&[1, 3, 2]);
        assert_eq!(rotations, vec![Rotation::RightLeft]);
        assert_eq!(root_key(&arena, root), 2);
    }

    #[test]
    fn test_rotation_below_root_keeps_root() {
        // 5 stays the root while 7 -> 8 -> 9 rotates under it.
        let (arena, root, rotations) = build(&[5, 3, 7, 8, 9]);
        assert_eq!(rotations, vec![Rotation::RightRight]);
        assert_eq!(root_key(&arena, root), 5);
        let r = arena[root.unwrap() as usize].r.unwrap();
        assert_eq!(arena[r as usize].k, 8);
        assert_eq!(arena[r as usize].p, root);
    }

    #[test]
    fn test_locate_slots() {
        let (arena, root, _) = build(&[2, 1, 3]);
        let root = root.unwrap();
        assert_eq!(locate(&arena, root, &2, &cmp), Slot::Occupied(0));
        assert_eq!(locate(&arena, root, &0, &cmp), Slot::Left(1));
        assert_eq!(locate(&arena, root, &4, &cmp), Slot::Right(2));
    }

    #[test]
    fn test_update_leaf_and_parent() {
        let (mut arena, _, _) = build(&[2, 1]);
        update(&mut arena, 1);
        assert_eq!((arena[1].height, arena[1].bf), (0, 0));
        update(&mut arena, 0);
        assert_eq!((arena[0].height, arena[0].bf), (1, -1));
        assert_eq!(height(&arena, None), -1);
    }

    #[test]
    fn test_assert_detects_broken_parent_link() {
        let (mut arena, root, _) = build(&[2, 1, 3]);
        arena[1].p = None;
        assert_eq!(
            assert_avl_tree(&arena, root, &cmp),
            Err(InvariantError::BrokenParentLink {
                node: 0,
                side: Side::Left
            })
        );
    }

    #[test]
    fn test_assert_detects_stale_height() {
        let (mut arena, root, _) = build(&[2, 1, 3]);
        arena[0].height = 5;
        assert!(matches!(
            assert_avl_tree(&arena, root, &cmp),
            Err(InvariantError::HeightMismatch { node: 0, .. })
        ));
    }

    #[test]
    fn test_assert_detects_order_violation() {
        let (mut arena, root, _) = build(&[2, 1, 3]);
        arena[1].k = 9;
        assert_eq!(
            assert_avl_tree(&arena, root, &cmp),
            Err(InvariantError::OrderViolated { prev: 1, next: 0 })
        );
    }

    #[test]
    fn test_print() {
        let (arena, root, _) = build(&[2, 1]);
        let out = print(&arena, root, "");
        assert_eq!(
            out,
            "Node[0] [h=1, bf=-1] 2\nL=Node[1] [h=0, bf=0] 1\n  L=∅\n  R=∅\nR=∅"
        );
    }
}
