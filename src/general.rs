//! A general (n-ary) tree. Every node keeps an ordered list of children and there is no limit on
//! how many children a node may have. Think org charts, file systems or nested categories.
//!
//! Nodes live in an arena owned by the tree and are addressed through [`NodeRef`] handles.
//!
//! # Examples
//!
//! ```
//! use trees::general::GeneralTree;
//!
//! let mut tree = GeneralTree::new("Company");
//!
//! let it = tree.add_child(tree.root(), "IT").unwrap();
//! let hr = tree.add_child(tree.root(), "HR").unwrap();
//! tree.add_child(it, "Aarav").unwrap();
//! tree.add_child(hr, "Karan").unwrap();
//!
//! // Parents come before their children and siblings keep their insertion order.
//! let visited: Vec<_> = tree.traverse().collect();
//! assert_eq!(
//!     visited,
//!     [(0, &"Company"), (1, &"IT"), (2, &"Aarav"), (1, &"HR"), (2, &"Karan")]
//! );
//! ```

use std::iter::FusedIterator;

use generational_arena::{Arena, Index};
use log::{debug, trace};

use crate::error::InvalidHandle;
use crate::handle::NodeRef;
use crate::util::TreeId;

/// A rooted tree whose nodes may have any number of ordered children. There is no empty tree: a
/// root value is required up front.
///
/// Nodes can only be added. Removing nodes isn't supported.
#[derive(Debug)]
pub struct GeneralTree<T> {
    id: TreeId,
    root: Index,
    nodes: Arena<Node<T>>,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    children: Vec<Index>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }
}

// The tree always holds its root so it is never empty.
#[allow(clippy::len_without_is_empty)]
impl<T> GeneralTree<T> {
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

    /// Whether `node` names a node of this tree.
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

    /// Appends a new node holding `value` as the last child of `parent` and returns its handle,
    /// which can in turn be used as a parent.
    ///
    /// # Errors
    ///
    /// [`InvalidHandle`] if `parent` doesn't belong to this tree. Nothing is added in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::general::GeneralTree;
    ///
    /// let mut tree = GeneralTree::new(1);
    /// let two = tree.add_child(tree.root(), 2).unwrap();
    /// let three = tree.add_child(two, 3).unwrap();
    ///
    /// assert_eq!(tree.get(three), Some(&3));
    ///
    /// // Handles are tied to the tree that produced them.
    /// let mut other = GeneralTree::new(1);
    /// assert!(other.add_child(three, 4).is_err());
    /// ```
    pub fn add_child(&mut self, parent: NodeRef, value: T) -> Result<NodeRef, InvalidHandle> {
        let parent_index = self.resolve(parent)?;
        let child = self.nodes.insert(Node::new(value));
        self.nodes[parent_index].children.push(child);

        let child = NodeRef::new(self.id, child);
        trace!("added {child} under {parent}");
        Ok(child)
    }

    /// The handles of `parent`'s children, in insertion order.
    ///
    /// # Errors
    ///
    /// [`InvalidHandle`] if `parent` doesn't belong to this tree.
    pub fn children(
        &self,
        parent: NodeRef,
    ) -> Result<impl Iterator<Item = NodeRef> + '_, InvalidHandle> {
        let index = self.resolve(parent)?;
        let id = self.id;
        Ok(self.nodes[index]
            .children
            .iter()
            .map(move |&child| NodeRef::new(id, child)))
    }

    /// Walks the tree depth first, visiting each parent before its children, and yields every
    /// value together with its depth (the root is at depth 0). Every call starts a fresh walk.
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
        // Reversed so the first child is popped first.
        self.stack
            .extend(node.children.iter().rev().map(|&child| (depth + 1, child)));
        Some((depth, index, node))
    }
}

/// Iterator returned by [`GeneralTree::traverse`].
pub struct Traverse<'a, T>(Preorder<'a, T>);

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(depth, _, node)| (depth, &node.value))
    }
}

impl<'a, T> FusedIterator for Traverse<'a, T> {}

/// Iterator returned by [`GeneralTree::nodes`].
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
