//! Errors returned by tree mutations.
//!
//! Only conditions the caller has to branch on get a type here. A missing child on removal and
//! a duplicate value on BST insertion are ordinary outcomes and are reported as `bool`s instead.

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::handle::NodeRef;

/// The handle passed to a tree doesn't name one of its live nodes. Either it came from another
/// tree or the node was removed since the handle was taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("{node} is not a live node of this tree")]
pub struct InvalidHandle {
    /// The rejected handle.
    pub node: NodeRef,
}

/// Both child slots of a binary node are already occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("both child slots of {parent} are occupied")]
pub struct SlotsFull {
    /// The node that had no free slot.
    pub parent: NodeRef,
}

/// Everything that can stop [`BinaryTree::add_child`](crate::binary::BinaryTree::add_child).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AddChildError {
    /// The parent already has a left and a right child.
    SlotsFull(SlotsFull),
    /// The parent handle is foreign or stale.
    InvalidHandle(InvalidHandle),
}
