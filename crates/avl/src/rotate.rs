use std::fmt;

use crate::node::Node;

/// The four AVL restructurings, named after the path from the unbalanced
/// node down to the inserted key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Rotation {
    /// Single clockwise rotation around the left child.
    LeftLeft,
    /// Single counterclockwise rotation around the right child.
    RightRight,
    /// Left child leans right; its right child becomes the subtree root.
    LeftRight,
    /// Right child leans left; its left child becomes the subtree root.
    RightLeft,
}

impl Rotation {
    /// Picks the rotation that rebalances `node`, assuming its own height is
    /// up to date. Returns `None` while `|balance| <= 1`.
    pub(crate) fn select(node: &Node) -> Option<Self> {
        match node.balance() {
            2.. => {
                if Node::balance_factor(&node.left) >= 0 {
                    Some(Self::LeftLeft)
                } else {
                    Some(Self::LeftRight)
                }
            }
            ..=-2 => {
                if Node::balance_factor(&node.right) <= 0 {
                    Some(Self::RightRight)
                } else {
                    Some(Self::RightLeft)
                }
            }
            _ => None,
        }
    }

    pub(crate) fn apply(self, node: Box<Node>) -> Box<Node> {
        match self {
            Self::LeftLeft => rotate_right(node),
            Self::RightRight => rotate_left(node),
            Self::LeftRight => rotate_left_right(node),
            Self::RightLeft => rotate_right_left(node),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftLeft => "LL",
            Self::RightRight => "RR",
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
        };
        f.write_str(name)
    }
}

fn rotate_right(mut p: Box<Node>) -> Box<Node> {
    let mut pl = match p.left.take() {
        Some(node) => node,
        None => return p,
    };
    p.left = pl.right.take();
    p.recalc();
    pl.right = Some(p);
    pl.recalc();
    pl
}

fn rotate_left(mut p: Box<Node>) -> Box<Node> {
    let mut pr = match p.right.take() {
        Some(node) => node,
        None => return p,
    };
    p.right = pr.left.take();
    p.recalc();
    pr.left = Some(p);
    pr.recalc();
    pr
}

fn rotate_left_right(mut p: Box<Node>) -> Box<Node> {
    let Some(mut pl) = p.left.take() else {
        return p;
    };
    let Some(mut plr) = pl.right.take() else {
        p.left = Some(pl);
        return p;
    };

    pl.right = plr.left.take();
    p.left = plr.right.take();
    pl.recalc();
    p.recalc();

    plr.left = Some(pl);
    plr.right = Some(p);
    plr.recalc();
    plr
}

fn rotate_right_left(mut p: Box<Node>) -> Box<Node> {
    let Some(mut pr) = p.right.take() else {
        return p;
    };
    let Some(mut prl) = pr.left.take() else {
        p.right = Some(pr);
        return p;
    };

    pr.left = prl.right.take();
    p.right = prl.left.take();
    pr.recalc();
    p.recalc();

    prl.right = Some(pr);
    prl.left = Some(p);
    prl.recalc();
    prl
}

/// Rebuilds `node`'s height and, if it became unbalanced, rotates it.
pub(crate) fn rebalance(mut node: Box<Node>) -> (Box<Node>, Option<Rotation>) {
    node.recalc();
    match Rotation::select(&node) {
        Some(rotation) => (rotation.apply(node), Some(rotation)),
        None => (node, None),
    }
}
