use crate::types::{KeyNode, Node};

/// A single arena cell of an AVL tree.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// True subtree height. A leaf has height `0`, an absent subtree `-1`.
    pub height: i32,
    /// Balance factor, `height(right) - height(left)`.
    pub bf: i32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            height: 0,
            bf: 0,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike<K>: KeyNode<K> {
    fn height(&self) -> i32;
    fn set_height(&mut self, height: i32);
    fn bf(&self) -> i32;
    fn set_bf(&mut self, bf: i32);
}

impl<K> AvlNodeLike<K> for AvlNode<K> {
    fn height(&self) -> i32 {
        self.height
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    fn bf(&self) -> i32 {
        self.bf
    }

    fn set_bf(&mut self, bf: i32) {
        self.bf = bf;
    }
}

/// The four imbalance shapes, each corrected by one single or double rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Left-heavy node with a left-heavy (or even) left child: rotate right.
    LeftLeft,
    /// Left-heavy node with a right-heavy left child: rotate left, then right.
    LeftRight,
    /// Right-heavy node with a right-heavy (or even) right child: rotate left.
    RightRight,
    /// Right-heavy node with a left-heavy right child: rotate right, then left.
    RightLeft,
}

/// Cumulative count of corrective rotations, per imbalance case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationStats {
    pub left_left: usize,
    pub left_right: usize,
    pub right_right: usize,
    pub right_left: usize,
}

impl RotationStats {
    pub fn record(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::LeftLeft => self.left_left += 1,
            Rotation::LeftRight => self.left_right += 1,
            Rotation::RightRight => self.right_right += 1,
            Rotation::RightLeft => self.right_left += 1,
        }
    }

    /// Single and double rotations each count once.
    pub fn total(&self) -> usize {
        self.left_left + self.left_right + self.right_right + self.right_left
    }
}
