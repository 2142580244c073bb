//! A binary tree without any ordering between values. Each node has a `left` and a `right` slot
//! and children are placed structurally: [`add_child`](BinaryTree::add_child) fills the right
//! slot first, then the left one.
//!
//! Nodes can be removed in two ways. [`remove_subtree`](BinaryTree::remove_subtree) drops a
//! child along with everything below it. [`remove_and_replace`](BinaryTree::remove_and_replace)
//! drops only the child and moves its children up into the freed slot.
//!
//! # Examples
//!
//! ```
//! use trees::binary::BinaryTree;
//!
//! let mut tree = BinaryTree::new(10);
//! let root = tree.root();
//!
//! let twenty = tree.add_child(root, 20).unwrap();
//! let thirty = tree.add_child(root, 30).unwrap();
//! tree.add_child(thirty, 60).unwrap();
//!
//! // Both slots of the root are taken now.
//! assert!(tree.add_child(root, 40).unwrap_err().is_slots_full());
//!
//! // Removing 30 promotes its only child.
//! assert_eq!(tree.remove_and_replace(root, thirty), Ok(true));
//! let values: Vec<_> = tree.traverse().map(|(_, v)| *v).collect();
//! assert_eq!(values, [10, 60, 20]);
//!
//! // 20 isn't a child of itself.
//! assert_eq!(tree.remove_subtree(twenty, twenty), Ok(false));
//! ```

use std::iter::FusedIterator;

use derive_more::Display;
use generational_arena::{Arena, Index};
use log::{debug, trace};

use crate::error::{AddChildError, InvalidHandle, SlotsFull};
use crate::handle::NodeRef;
use crate::util::TreeId;

/// One of the two child positions of a binary node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Slot {
    /// The left child.
    #[display("left")]
    Left,
    /// The right child.
    #[display("right")]
    Right,
}

/// A rooted tree where every node has at most two children. There is no empty tree: a root
/// value is required up front.
#[derive(Debug)]
pub struct BinaryTree<T> {
    id: TreeId,
    root: Index,
    nodes: Arena<Node<T>>,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Option<Index>,
    right: Option<Index>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn slot(&self, slot: Slot) -> Option<Index> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Index> {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Right => &mut self.right,
        }
    }

    /// Which slot, if any, holds `child`.
    fn slot_of(&self, child: Index) -> Option<Slot> {
        if self.left == Some(child) {
            Some(Slot::Left)
        } else if self.right == Some(child) {
            Some(Slot::Right)
        } else {
            None
        }
    }
}

// The tree always holds its root so it is never empty.
#[allow(clippy::len_without_is_empty)]
impl<T> BinaryTree<T> {
    /// Creates a tree holding only a root node with the given value.
    pub fn new(value: T) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.insert(Node::new(value));
        Self {
            id: TreeId::next(),
            root,
            nodes,
        }
    }

    /// The handle of the root node.
    pub fn root(&self) -> NodeRef {
        NodeRef::new(self.id, self.root)
    }

    /// The number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `node` names a live node of this tree. Handles to removed nodes are not live.
    pub fn contains(&self, node: NodeRef) -> bool {
        node.tree == self.id && self.nodes.contains(node.index)
    }

    /// The value stored at `node`, or `None` if the handle isn't valid for this tree.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.resolve(node).ok().map(|index| &self.nodes[index].value)
    }

    /// Mutable access to the value stored at `node`.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        let index = self.resolve(node).ok()?;
        Some(&mut self.nodes[index].value)
    }

    /// The child of `node` held in `slot`, if the slot is occupied.
    ///
    /// # Errors
    ///
    /// [`InvalidHandle`] if `node` isn't a live node of this tree.
    pub fn child(&self, node: NodeRef, slot: Slot) -> Result<Option<NodeRef>, InvalidHandle> {
        let index = self.resolve(node)?;
        Ok(self.nodes[index]
            .slot(slot)
            .map(|child| NodeRef::new(self.id, child)))
    }

    /// Shorthand for [`child`](Self::child) with [`Slot::Left`].
    pub fn left(&self, node: NodeRef) -> Result<Option<NodeRef>, InvalidHandle> {
        self.child(node, Slot::Left)
    }

    /// Shorthand for [`child`](Self::child) with [`Slot::Right`].
    pub fn right(&self, node: NodeRef) -> Result<Option<NodeRef>, InvalidHandle> {
        self.child(node, Slot::Right)
    }

    /// Adds a new node holding `value` under `parent` and returns its handle. The new node goes
    /// into the right slot if it is free, otherwise into the left slot.
    ///
    /// # Errors
    ///
    /// - [`AddChildError::SlotsFull`] if `parent` already has two children.
    /// - [`AddChildError::InvalidHandle`] if `parent` isn't a live node of this tree.
    ///
    /// The tree is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::binary::{BinaryTree, Slot};
    ///
    /// let mut tree = BinaryTree::new('a');
    /// let root = tree.root();
    ///
    /// let b = tree.add_child(root, 'b').unwrap();
    /// let c = tree.add_child(root, 'c').unwrap();
    ///
    /// assert_eq!(tree.child(root, Slot::Right), Ok(Some(b)));
    /// assert_eq!(tree.child(root, Slot::Left), Ok(Some(c)));
    /// assert!(tree.add_child(root, 'd').is_err());
    /// ```
    pub fn add_child(&mut self, parent: NodeRef, value: T) -> Result<NodeRef, AddChildError> {
        let parent_index = self.resolve(parent)?;
        let slot = match &self.nodes[parent_index] {
            Node { right: None, .. } => Slot::Right,
            Node { left: None, .. } => Slot::Left,
            _ => {
                debug!("cannot add under {parent}: both slots are occupied");
                return Err(SlotsFull { parent }.into());
            }
        };

        let child = self.nodes.insert(Node::new(value));
        *self.nodes[parent_index].slot_mut(slot) = Some(child);

        let child = NodeRef::new(self.id, child);
        trace!("added {child} into the {slot} slot of {parent}");
        Ok(child)
    }

    /// Detaches `child` from `parent` and drops it together with its whole subtree. Handles to
    /// any of the dropped nodes become invalid.
    ///
    /// Returns `Ok(false)`, changing nothing, if `child` isn't held in either slot of `parent`.
    ///
    /// # Errors
    ///
    /// [`InvalidHandle`] if either handle isn't a live node of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::binary::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(1);
    /// let root = tree.root();
    /// let two = tree.add_child(root, 2).unwrap();
    /// let three = tree.add_child(two, 3).unwrap();
    ///
    /// assert_eq!(tree.remove_subtree(root, two), Ok(true));
    /// assert_eq!(tree.len(), 1);
    /// assert!(!tree.contains(three));
    /// ```
    pub fn remove_subtree(
        &mut self,
        parent: NodeRef,
        child: NodeRef,
    ) -> Result<bool, InvalidHandle> {
        let parent_index = self.resolve(parent)?;
        let child_index = self.resolve(child)?;
        let Some(slot) = self.nodes[parent_index].slot_of(child_index) else {
            debug!("{child} is not a child of {parent}, nothing removed");
            return Ok(false);
        };

        *self.nodes[parent_index].slot_mut(slot) = None;
        let freed = self.free_subtree(child_index);
        debug!(
            "removed {child} and {} descendants from the {slot} slot of {parent}",
            freed - 1
        );
        Ok(true)
    }

    /// Removes `child` from `parent` and fills the freed slot from `child`'s own children:
    ///
    /// 1. With two children, the left child takes the slot and the right child is re-attached as
    ///    the right child of the last node on the left child's chain of right children.
    /// 2. With only a left child, the left child takes the slot.
    /// 3. With only a right child, the right child takes the slot.
    /// 4. A leaf just leaves the slot empty.
    ///
    /// Only `child` itself is dropped so only its handle becomes invalid.
    ///
    /// Returns `Ok(false)`, changing nothing, if `child` isn't held in either slot of `parent`.
    ///
    /// # Errors
    ///
    /// [`InvalidHandle`] if either handle isn't a live node of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::binary::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(30);
    /// let root = tree.root();
    /// let seventy = tree.add_child(root, 70).unwrap();
    /// let ninety = tree.add_child(seventy, 90).unwrap();
    /// let eighty = tree.add_child(seventy, 80).unwrap();
    ///
    /// assert_eq!(tree.remove_and_replace(root, seventy), Ok(true));
    ///
    /// // 80 took 70's place and 90 now hangs off 80's right.
    /// assert_eq!(tree.right(root), Ok(Some(eighty)));
    /// assert_eq!(tree.right(eighty), Ok(Some(ninety)));
    /// ```
    pub fn remove_and_replace(
        &mut self,
        parent: NodeRef,
        child: NodeRef,
    ) -> Result<bool, InvalidHandle> {
        let parent_index = self.resolve(parent)?;
        let child_index = self.resolve(child)?;
        let Some(slot) = self.nodes[parent_index].slot_of(child_index) else {
            debug!("{child} is not a child of {parent}, nothing replaced");
            return Ok(false);
        };

        let removed = self
            .nodes
            .remove(child_index)
            .expect("a resolved handle names a live node");

        let replacement = match (removed.left, removed.right) {
            (Some(left), Some(right)) => {
                let mut terminal = left;
                while let Some(next) = self.nodes[terminal].right {
                    terminal = next;
                }
                self.nodes[terminal].right = Some(right);
                Some(left)
            }
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (None, None) => None,
        };
        *self.nodes[parent_index].slot_mut(slot) = replacement;

        debug!("replaced {child} in the {slot} slot of {parent}");
        Ok(true)
    }

    /// Walks the tree depth first (node, left subtree, right subtree) and yields every value
    /// together with its depth (the root is at depth 0). Every call starts a fresh walk.
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse(Preorder::new(&self.nodes, self.root))
    }

    /// The handles of all nodes, in the same order [`traverse`](Self::traverse) visits them.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            id: self.id,
            walk: Preorder::new(&self.nodes, self.root),
        }
    }

    fn resolve(&self, node: NodeRef) -> Result<Index, InvalidHandle> {
        if self.contains(node) {
            Ok(node.index)
        } else {
            debug!("rejected {node}: not a live node of this tree");
            Err(InvalidHandle { node })
        }
    }

    /// Drops the node at `top` and everything below it. Returns how many nodes were dropped.
    fn free_subtree(&mut self, top: Index) -> usize {
        let mut stack = vec![top];
        let mut freed = 0;
        while let Some(index) = stack.pop() {
            if let Some(node) = self.nodes.remove(index) {
                stack.extend(node.left);
                stack.extend(node.right);
                freed += 1;
            }
        }
        freed
    }
}

/// Depth first walk over the arena. Yields `(depth, index, node)`.
struct Preorder<'a, T> {
    nodes: &'a Arena<Node<T>>,
    stack: Vec<(usize, Index)>,
}

impl<'a, T> Preorder<'a, T> {
    fn new(nodes: &'a Arena<Node<T>>, root: Index) -> Self {
        Self {
            nodes,
            stack: vec![(0, root)],
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = (usize, Index, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, index) = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[index];
        // Right goes on the stack first so the left subtree is walked first.
        self.stack.extend(node.right.map(|right| (depth + 1, right)));
        self.stack.extend(node.left.map(|left| (depth + 1, left)));
        Some((depth, index, node))
    }
}

/// Iterator returned by [`BinaryTree::traverse`].
pub struct Traverse<'a, T>(Preorder<'a, T>);

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(depth, _, node)| (depth, &node.value))
    }
}

impl<'a, T> FusedIterator for Traverse<'a, T> {}

/// Iterator returned by [`BinaryTree::nodes`].
pub struct Nodes<'a, T> {
    id: TreeId,
    walk: Preorder<'a, T>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.id;
        self.walk.next().map(|(_, index, _)| NodeRef::new(id, index))
    }
}

impl<'a, T> FusedIterator for Nodes<'a, T> {}
