use std::fmt;

use crate::node::{Link, Node};
use crate::rotate::{Rotation, rebalance};

/// AVL tree over distinct `i64` keys.
///
/// - Equal keys are ignored on insert.
/// - After every insert each node's balance factor lies in `{-1, 0, 1}`.
#[derive(Clone, Default)]
pub struct AvlTree {
    pub(crate) root: Link,
    pub(crate) len: usize,
}

/// What a single [`AvlTree::insert`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InsertOutcome {
    /// The key was already present; the tree is unchanged.
    Duplicate,
    /// A new node was placed. `rotation` is the rebalancing step performed on
    /// the way back up, if any.
    Inserted { rotation: Option<Rotation> },
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }

    pub fn rotation(&self) -> Option<Rotation> {
        match self {
            Self::Inserted { rotation } => *rotation,
            Self::Duplicate => None,
        }
    }
}

impl AvlTree {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree; 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        Node::height(&self.root) as usize
    }

    pub fn root_key(&self) -> Option<i64> {
        self.root.as_ref().map(|node| node.key)
    }

    pub fn insert(&mut self, key: i64) -> InsertOutcome {
        let (root, outcome) = Self::insert_node(self.root.take(), key);
        self.root = root;
        if outcome.is_inserted() {
            self.len += 1;
        }
        outcome
    }

    /// Places `key` below `root` and returns the subtree that replaces it.
    ///
    /// Rebalancing happens while unwinding; at most one rotation fires per
    /// insert, at the lowest unbalanced ancestor.
    fn insert_node(root: Link, key: i64) -> (Link, InsertOutcome) {
        let Some(mut node) = root else {
            let leaf = Box::new(Node::new(key));
            return (Some(leaf), InsertOutcome::Inserted { rotation: None });
        };

        let outcome = match key.cmp(&node.key) {
            std::cmp::Ordering::Less => {
                let (left, outcome) = Self::insert_node(node.left.take(), key);
                node.left = left;
                outcome
            }
            std::cmp::Ordering::Greater => {
                let (right, outcome) = Self::insert_node(node.right.take(), key);
                node.right = right;
                outcome
            }
            std::cmp::Ordering::Equal => return (Some(node), InsertOutcome::Duplicate),
        };

        let InsertOutcome::Inserted { rotation: below } = outcome else {
            return (Some(node), outcome);
        };
        let (node, here) = rebalance(node);
        let rotation = below.or(here);
        (Some(node), InsertOutcome::Inserted { rotation })
    }
}

impl Extend<i64> for AvlTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<i64> for AvlTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl fmt::Debug for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
