use thiserror::Error;

/// Which child slot a link check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A broken structural invariant, as reported by
/// [`assert_avl_tree`](crate::avl::util::assert_avl_tree).
///
/// Node positions are arena indices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node [{0}] has a parent")]
    RootHasParent(u32),
    #[error("broken parent link on {side} child of node [{node}]")]
    BrokenParentLink { node: u32, side: Side },
    #[error("height mismatch at node [{node}]: expected {expected}, got {actual}")]
    HeightMismatch { node: u32, expected: i32, actual: i32 },
    #[error("balance factor mismatch at node [{node}]: expected {expected}, got {actual}")]
    BalanceFactorMismatch { node: u32, expected: i32, actual: i32 },
    #[error("AVL balance violated at node [{node}]: balance factor {bf}")]
    Unbalanced { node: u32, bf: i32 },
    #[error("node order violated between nodes [{prev}] and [{next}]")]
    OrderViolated { prev: u32, next: u32 },
}
