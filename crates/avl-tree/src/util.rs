//! In-order stepping over any arena of [`Node`]s.

use crate::types::Node;

#[inline]
fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}
#[inline]
fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}
#[inline]
fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

/// Leftmost node of the subtree at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node of the subtree at `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `node`.
///
/// Descends into the right subtree when there is one, otherwise climbs parent
/// links until it arrives from a left child.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Link {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
    }

    impl Node for Link {
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

    //        0
    //      /   \
    //     1     2
    //      \   /
    //       3 4
    fn sample() -> Vec<Link> {
        let mut arena: Vec<Link> = (0..5).map(|_| Link::default()).collect();
        let mut link = |p: u32, c: u32, left: bool| {
            if left {
                arena[p as usize].set_l(Some(c));
            } else {
                arena[p as usize].set_r(Some(c));
            }
            arena[c as usize].set_p(Some(p));
        };
        link(0, 1, true);
        link(0, 2, false);
        link(1, 3, false);
        link(2, 4, true);
        arena
    }

    #[test]
    fn test_first_and_last() {
        let arena = sample();
        assert_eq!(first(&arena, Some(0)), Some(1));
        assert_eq!(last(&arena, Some(0)), Some(2));
        assert_eq!(first::<Link>(&arena, None), None);
        assert_eq!(last::<Link>(&arena, None), None);
    }

    #[test]
    fn test_next_walks_in_order() {
        let arena = sample();
        let mut order = Vec::new();
        let mut curr = first(&arena, Some(0));
        while let Some(i) = curr {
            order.push(i);
            curr = next(&arena, i);
        }
        assert_eq!(order, vec![1, 3, 0, 4, 2]);
    }

    #[test]
    fn test_next_of_single_node() {
        let arena = vec![Link::default()];
        assert_eq!(next(&arena, 0), None);
    }
}
