//! Ordered traversal of a [`CidrSet`](super::CidrSet).

use super::node::Node;
use crate::models::{Cidr, MAX_LENGTH};

/// Member blocks in ascending network order.
///
/// Depth-first with the 0 branch before the 1 branch, so each call to
/// [`CidrSet::iter`](super::CidrSet::iter) starts a fresh walk.
pub struct Iter<'a> {
    stack: Vec<(&'a Node, u32, u8)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Iter<'a> {
        Iter {
            stack: root.map(|node| (node, 0, 0)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Cidr;

    fn next(&mut self) -> Option<Cidr> {
        while let Some((node, address, depth)) = self.stack.pop() {
            if node.is_leaf() {
                return Some(Cidr::masked(address, depth));
            }
            // high pushed first so low pops first
            if let Some(high) = node.child(1) {
                let high_address = address | 1 << (MAX_LENGTH - 1 - depth);
                self.stack.push((high, high_address, depth + 1));
            }
            if let Some(low) = node.child(0) {
                self.stack.push((low, address, depth + 1));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Iter<'_> {}
