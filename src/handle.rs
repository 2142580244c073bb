//! Handles to the nodes of the arena backed trees ([`GeneralTree`](crate::general::GeneralTree)
//! and [`BinaryTree`](crate::binary::BinaryTree)).
//!
//! A [`NodeRef`] is only meaningful for the tree that returned it. Passing it to a different
//! tree, or using it after its node was removed, is rejected with
//! [`InvalidHandle`](crate::error::InvalidHandle) rather than touching an unrelated node.

use std::fmt;

use generational_arena::Index;

use crate::util::TreeId;

/// An opaque reference to one node of one tree. Cheap to copy and compare.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) tree: TreeId,
    pub(crate) index: Index,
}

impl NodeRef {
    pub(crate) fn new(tree: TreeId, index: Index) -> Self {
        Self { tree, index }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "node #{slot} (generation {generation})")
    }
}
