//! Binary trie node over the 32-bit address space.

use crate::models::MAX_LENGTH;

/// A prefix reachable from the root by one bit per level.
///
/// `children[0]` follows a 0 bit, `children[1]` a 1 bit. A node with no children is a
/// member leaf: the whole block named by its path is in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Node {
    children: [Option<Box<Node>>; 2],
}

impl Node {
    pub(crate) fn leaf() -> Box<Node> {
        Box::default()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children[0].is_none() && self.children[1].is_none()
    }

    pub(crate) fn child(&self, bit: usize) -> Option<&Node> {
        self.children[bit].as_deref()
    }

    pub(crate) fn slot_mut(&mut self, bit: usize) -> &mut Option<Box<Node>> {
        &mut self.children[bit]
    }

    /// Replace a leaf by its two halves, both leaves.
    pub(crate) fn split(&mut self) {
        debug_assert!(self.is_leaf());
        self.children = [Some(Node::leaf()), Some(Node::leaf())];
    }

    pub(crate) fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children
            .iter()
            .flatten()
            .map(|child| child.leaf_count())
            .sum()
    }
}

/// Child index taken from a node at `depth` on the way to `address`.
pub(crate) fn branch(address: u32, depth: u8) -> usize {
    debug_assert!(depth < MAX_LENGTH);
    ((address >> (MAX_LENGTH - 1 - depth)) & 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_and_split() {
        let mut node = Node::leaf();
        assert!(node.is_leaf());
        assert_eq!(node.leaf_count(), 1);

        node.split();
        assert!(!node.is_leaf());
        assert_eq!(node.leaf_count(), 2);
        assert!(node.child(0).is_some_and(Node::is_leaf));
        assert!(node.child(1).is_some_and(Node::is_leaf));

        *node.slot_mut(1) = None;
        assert_eq!(node.leaf_count(), 1);
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_branch() {
        let address = 0b1010 << 28;
        assert_eq!(branch(address, 0), 1);
        assert_eq!(branch(address, 1), 0);
        assert_eq!(branch(address, 2), 1);
        assert_eq!(branch(address, 3), 0);
        assert_eq!(branch(1, 31), 1);
        assert_eq!(branch(u32::MAX - 1, 31), 0);
    }
}
