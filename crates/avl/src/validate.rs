use std::error::Error;
use std::fmt;

use crate::node::{Link, Node};
use crate::tree::AvlTree;

/// First broken invariant found by [`AvlTree::validate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Violation {
    /// `key` lies outside the open interval `(lower, upper)` implied by its
    /// ancestors. `None` means unbounded.
    Order {
        key: i64,
        lower: Option<i64>,
        upper: Option<i64>,
    },
    StaleHeight {
        key: i64,
        cached: i16,
        actual: i16,
    },
    Unbalanced {
        key: i64,
        balance: i16,
    },
    Length {
        counted: usize,
        recorded: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Order { key, lower, upper } => {
                write!(f, "key {key} out of order: expected ")?;
                match lower {
                    Some(lower) => write!(f, "({lower}, ")?,
                    None => f.write_str("(-inf, ")?,
                }
                match upper {
                    Some(upper) => write!(f, "{upper})"),
                    None => f.write_str("+inf)"),
                }
            }
            Self::StaleHeight {
                key,
                cached,
                actual,
            } => write!(f, "node {key} caches height {cached}, actual {actual}"),
            Self::Unbalanced { key, balance } => {
                write!(f, "node {key} has balance factor {balance}")
            }
            Self::Length { counted, recorded } => {
                write!(f, "tree holds {counted} nodes but records len {recorded}")
            }
        }
    }
}

impl Error for Violation {}

struct Walk {
    count: usize,
}

impl Walk {
    /// Returns the recomputed height of `link`.
    fn visit(
        &mut self,
        link: &Link,
        lower: Option<i64>,
        upper: Option<i64>,
    ) -> Result<i16, Violation> {
        let Some(node) = link.as_deref() else {
            return Ok(0);
        };
        let key = node.key;
        if lower.is_some_and(|l| key <= l) || upper.is_some_and(|u| key >= u) {
            return Err(Violation::Order { key, lower, upper });
        }
        self.count += 1;

        let hl = self.visit(&node.left, lower, Some(key))?;
        let hr = self.visit(&node.right, Some(key), upper)?;

        let actual = 1 + hl.max(hr);
        if node.height != actual {
            return Err(Violation::StaleHeight {
                key,
                cached: node.height,
                actual,
            });
        }
        let balance = Node::balance_factor(link);
        if !(-1..=1).contains(&balance) {
            return Err(Violation::Unbalanced { key, balance });
        }
        Ok(actual)
    }
}

impl AvlTree {
    /// Checks strict key order, cached heights, AVL balance and `len`.
    pub fn validate(&self) -> Result<(), Violation> {
        let mut walk = Walk { count: 0 };
        walk.visit(&self.root, None, None)?;
        if walk.count != self.len {
            return Err(Violation::Length {
                counted: walk.count,
                recorded: self.len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Violation;
    use crate::AvlTree;
    use crate::node::Node;

    fn leaf(key: i64) -> Option<Box<Node>> {
        Some(Box::new(Node::new(key)))
    }

    #[test]
    fn valid_trees_pass() {
        assert_eq!(AvlTree::new().validate(), Ok(()));
        let tree: AvlTree = (0..64).collect();
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn detects_order_violation() {
        let mut tree: AvlTree = [20, 10, 30].into_iter().collect();
        if let Some(root) = tree.root.as_deref_mut() {
            root.left = leaf(25);
        }
        assert_eq!(
            tree.validate(),
            Err(Violation::Order {
                key: 25,
                lower: None,
                upper: Some(20),
            })
        );
    }

    #[test]
    fn detects_equal_key_as_order_violation() {
        let mut tree: AvlTree = [20, 10].into_iter().collect();
        if let Some(root) = tree.root.as_deref_mut() {
            root.right = leaf(20);
        }
        assert!(matches!(
            tree.validate(),
            Err(Violation::Order { key: 20, .. })
        ));
    }

    #[test]
    fn detects_stale_height() {
        let mut tree: AvlTree = [20, 10, 30].into_iter().collect();
        if let Some(root) = tree.root.as_deref_mut() {
            root.height = 5;
        }
        assert_eq!(
            tree.validate(),
            Err(Violation::StaleHeight {
                key: 20,
                cached: 5,
                actual: 2,
            })
        );
    }

    #[test]
    fn detects_imbalance() {
        let mut tree = AvlTree::new();
        let mut mid = Node::new(20);
        mid.left = leaf(10);
        mid.recalc();
        let mut top = Node::new(30);
        top.left = Some(Box::new(mid));
        top.recalc();
        tree.root = Some(Box::new(top));
        tree.len = 3;
        assert_eq!(
            tree.validate(),
            Err(Violation::Unbalanced {
                key: 30,
                balance: 2,
            })
        );
    }

    #[test]
    fn detects_len_mismatch() {
        let mut tree: AvlTree = [1, 2, 3].into_iter().collect();
        tree.len = 4;
        assert_eq!(
            tree.validate(),
            Err(Violation::Length {
                counted: 3,
                recorded: 4,
            })
        );
    }

    #[test]
    fn messages() {
        let err = Violation::Order {
            key: 25,
            lower: None,
            upper: Some(20),
        };
        assert_eq!(err.to_string(), "key 25 out of order: expected (-inf, 20)");
        let err = Violation::Unbalanced { key: 7, balance: -2 };
        assert_eq!(err.to_string(), "node 7 has balance factor -2");
    }
}
