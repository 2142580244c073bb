//! This crate exposes a few classic in-memory trees mostly for educational
//! purposes.
//!
//! ## Trees
//!
//! A tree is a hierarchy of `Node`s. Every `Node` stores some value and owns
//! zero or more child `Node`s. Exactly one `Node`, the root, has no parent and
//! every other `Node` has exactly one. There are no cycles and no `Node` is
//! shared between two parents.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The trees here differ in how many children a `Node` may have and in how
//! they decide where a new `Node` goes:
//!
//! 1. [`general::GeneralTree`] allows any number of ordered children. The
//!    caller picks the parent of every new `Node`.
//! 2. [`binary::BinaryTree`] allows at most two children, kept in a "left" and
//!    a "right" slot. The caller picks the parent and the tree picks the slot
//!    (right first). `Node`s can be removed either with their whole subtree or
//!    by promoting their children into the freed slot.
//! 3. [`search::BinarySearchTree`] also has two slots per `Node` but picks the
//!    position itself: smaller values go left and larger values go right, so
//!    walking the tree "in order" yields sorted values.
//!
//! None of the trees support being empty. Each is created with its root value.
//!
//! ## Handles
//!
//! The general and binary trees hand out [`handle::NodeRef`]s so the caller can
//! name a parent. A handle is bound to the tree that created it, and to the
//! node's lifetime in that tree, so a handle from another tree or to a removed
//! node is rejected with [`error::InvalidHandle`].
//!
//! ## Output
//!
//! Every tree can be walked with iterators that yield values (and depths,
//! where useful). Turning those into text is left to [`render`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
pub mod error;
pub mod general;
pub mod handle;
pub mod render;
pub mod search;

mod util;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
