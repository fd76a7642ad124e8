pub(crate) type Link = Option<Box<Node>>;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) key: i64,
    pub(crate) height: i16,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(key: i64) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Cached height of `node`, 0 when absent.
    pub(crate) fn height(node: &Link) -> i16 {
        node.as_ref().map(|n| n.height).unwrap_or(0)
    }

    /// Children's cached heights must already be correct.
    pub(crate) fn recalc(&mut self) {
        let hl = Self::height(&self.left);
        let hr = Self::height(&self.right);
        self.height = 1 + hl.max(hr);
    }

    pub(crate) fn balance(&self) -> i16 {
        Self::height(&self.left) - Self::height(&self.right)
    }

    /// Balance factor of `node`, 0 when absent.
    pub(crate) fn balance_factor(node: &Link) -> i16 {
        node.as_ref().map(|n| n.balance()).unwrap_or(0)
    }
}
