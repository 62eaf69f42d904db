//! Canonical CIDR set.
//!
//! - [`CidrSet`] - trie-backed set of disjoint blocks
//! - [`Iter`] - ascending traversal of a set

mod cidr_set;
mod iter;
mod node;

pub use cidr_set::CidrSet;
pub use iter::Iter;
