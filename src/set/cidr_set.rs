//! Canonical set of IPv4 CIDR blocks.
//!
//! The set is a binary trie whose leaves are exactly its member blocks. Every public
//! mutation leaves the trie canonical: no two sibling leaves, no empty interior nodes.
//! Two sets holding the same addresses therefore always have the same shape.
//!
//! Mutation is not internally synchronised. Sharing a `CidrSet` across threads for
//! concurrent `add`/`remove` needs an external lock; concurrent reads are fine.

use super::iter::Iter;
use super::node::{branch, Node};
use crate::models::{Cidr, MAX_LENGTH};
use itertools::Itertools;
use std::fmt;

/// A set of IPv4 addresses held as its minimal list of disjoint CIDR blocks.
///
/// # Examples
/// ```
/// use cidr_set::{Cidr, CidrSet};
/// let mut set: CidrSet = ["0.0.0.0/1", "128.0.0.0/1"]
///     .iter()
///     .map(|s| s.parse::<Cidr>().unwrap())
///     .collect();
/// assert_eq!(set.to_string(), "0.0.0.0/0");
///
/// set.remove("0.0.0.0/3".parse().unwrap());
/// assert_eq!(set.to_string(), "32.0.0.0/3, 64.0.0.0/2, 128.0.0.0/1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CidrSet {
    root: Option<Box<Node>>,
    leaves: usize,
}

impl CidrSet {
    /// Create an empty set.
    pub fn new() -> CidrSet {
        CidrSet::default()
    }

    /// Number of disjoint blocks in the set.
    pub fn size(&self) -> usize {
        self.leaves
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.leaves = 0;
    }

    /// Total number of addresses covered.
    pub fn address_count(&self) -> u64 {
        self.iter().map(|cidr| cidr.size()).sum()
    }

    /// True if every address of `cidr` is in the set.
    pub fn contains(&self, cidr: Cidr) -> bool {
        let mut node = self.root.as_deref();
        let mut depth = 0;
        while let Some(n) = node {
            if n.is_leaf() {
                return true;
            }
            if depth == cidr.prefix_length() {
                return false;
            }
            node = n.child(branch(cidr.address(), depth));
            depth += 1;
        }
        false
    }

    /// Add every address of `cidr`, merging sibling blocks into their parent.
    pub fn add(&mut self, cidr: Cidr) {
        let len = cidr.prefix_length();
        let address = cidr.address();

        // sibling_leaf[d]: the node beside the path at depth d is a member leaf
        let mut sibling_leaf = [false; MAX_LENGTH as usize + 1];
        let mut node = self.root.as_deref();
        for depth in 0..len {
            let Some(n) = node else {
                break;
            };
            if n.is_leaf() {
                log::trace!("add {cidr}: already covered at /{depth}");
                return;
            }
            let bit = branch(address, depth);
            sibling_leaf[depth as usize + 1] = n.child(1 - bit).is_some_and(Node::is_leaf);
            node = n.child(bit);
        }
        if node.is_some_and(Node::is_leaf) {
            log::trace!("add {cidr}: already a member");
            return;
        }

        // Every sibling leaf directly above the new block merges with it.
        let mut target = len;
        while target > 0 && sibling_leaf[target as usize] {
            target -= 1;
        }
        if target < len {
            log::trace!(
                "add {cidr}: collapsed into {}",
                Cidr::masked(address, target)
            );
        }

        let mut slot = &mut self.root;
        for depth in 0..target {
            let n = slot.get_or_insert_with(Node::leaf);
            slot = n.slot_mut(branch(address, depth));
        }
        let replaced = slot.as_deref().map_or(0, Node::leaf_count);
        *slot = Some(Node::leaf());
        self.leaves = self.leaves + 1 - replaced;
    }

    /// Remove every address of `cidr`, splitting any wider member block around it.
    pub fn remove(&mut self, cidr: Cidr) {
        let len = cidr.prefix_length();
        let address = cidr.address();

        // Either a wider leaf must be expanded down to `len`, or the subtree at
        // `prune_at` leads only to the removed block and is dropped whole.
        let mut expand_at = None;
        let mut prune_at = 0;
        let mut node = self.root.as_deref();
        for depth in 0..len {
            let Some(n) = node else {
                return;
            };
            if n.is_leaf() {
                expand_at = Some(depth);
                break;
            }
            let bit = branch(address, depth);
            if n.child(1 - bit).is_some() {
                prune_at = depth + 1;
            }
            node = n.child(bit);
        }
        if node.is_none() {
            return;
        }

        let stop = match expand_at {
            Some(depth) => {
                log::trace!(
                    "remove {cidr}: expanding {}",
                    Cidr::masked(address, depth)
                );
                len
            }
            None => prune_at,
        };

        // Nodes above `stop` exist (checked above); from `expand_at` down each is a leaf
        // that splits, leaving its children as leaves for the next level.
        let mut slot = &mut self.root;
        for depth in 0..stop {
            let n = slot.get_or_insert_with(Node::leaf);
            if expand_at.is_some_and(|at| depth >= at) {
                n.split();
            }
            slot = n.slot_mut(branch(address, depth));
        }
        let splits = expand_at.map_or(0, |at| usize::from(len - at));
        let removed = slot.take().map_or(0, |n| n.leaf_count());
        self.leaves = self.leaves + splits - removed;
        log::trace!("remove {cidr}: dropped {removed} block(s) at /{stop}");
    }

    /// Blocks in ascending network order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// New set with the addresses of both sets. Neither input changes.
    pub fn union(&self, other: &CidrSet) -> CidrSet {
        log::debug!(
            "union of {} and {} block(s)",
            self.size(),
            other.size()
        );
        let mut result = self.clone();
        result.extend(other);
        result
    }

    /// New set with the addresses of `self` that are not in `other`. Neither input changes.
    pub fn difference(&self, other: &CidrSet) -> CidrSet {
        log::debug!(
            "difference of {} minus {} block(s)",
            self.size(),
            other.size()
        );
        let mut result = self.clone();
        for cidr in other {
            result.remove(cidr);
        }
        result
    }
}

impl fmt::Display for CidrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(", "))
    }
}

impl<'a> IntoIterator for &'a CidrSet {
    type Item = Cidr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Cidr> for CidrSet {
    fn from_iter<I: IntoIterator<Item = Cidr>>(iter: I) -> CidrSet {
        let mut set = CidrSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Cidr> for CidrSet {
    fn extend<I: IntoIterator<Item = Cidr>>(&mut self, iter: I) {
        for cidr in iter {
            self.add(cidr);
        }
    }
}

impl std::ops::BitOr<&CidrSet> for &CidrSet {
    type Output = CidrSet;

    fn bitor(self, rhs: &CidrSet) -> CidrSet {
        self.union(rhs)
    }
}

impl std::ops::Sub<&CidrSet> for &CidrSet {
    type Output = CidrSet;

    fn sub(self, rhs: &CidrSet) -> CidrSet {
        self.difference(rhs)
    }
}
