//! A plain (unbalanced) Binary Search Tree over a set of values.
//!
//! Every node's left subtree only holds smaller values and its right subtree only holds larger
//! ones. Values that compare equal to one already in the tree are rejected. No rebalancing is
//! done so the shape depends purely on insertion order: inserting sorted input produces what is
//! effectively a linked list.
//!
//! # Examples
//!
//! ```
//! use trees::search::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new(60);
//! tree.build([60, 70, 20, 40, 50, 60, 90, 15, 35, 100]);
//!
//! // The second 60 was a duplicate and got dropped.
//! assert_eq!(tree.len(), 9);
//!
//! assert_eq!(
//!     tree.inorder().copied().collect::<Vec<_>>(),
//!     [15, 20, 35, 40, 50, 60, 70, 90, 100]
//! );
//! assert_eq!(
//!     tree.preorder().copied().collect::<Vec<_>>(),
//!     [60, 20, 15, 40, 35, 50, 70, 90, 100]
//! );
//! assert_eq!(
//!     tree.postorder().copied().collect::<Vec<_>>(),
//!     [15, 35, 50, 40, 20, 100, 90, 70, 60]
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree. There is no empty tree: a root value is required up front.
///
/// Equality is structural: two trees are equal when they hold the same values in the same shape.
pub struct BinarySearchTree<T> {
    root: Node<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Unlinks nodes one at a time. Letting `Box` drop them recursively can overflow the stack on a
    // degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.root.left.take());
        stack.extend(self.root.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// `Clone`, `PartialEq` and `Debug` are written out with explicit stacks for the same reason as
// `Drop`: derived impls recurse once per level.
impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        let mut root = Node::new(self.root.value.clone());
        let mut stack = vec![(&self.root, &mut root)];
        while let Some((from, to)) = stack.pop() {
            let Node { left, right, .. } = to;
            if let Some(from_left) = from.left.as_deref() {
                let to_left = left.insert(Box::new(Node::new(from_left.value.clone())));
                stack.push((from_left, &mut **to_left));
            }
            if let Some(from_right) = from.right.as_deref() {
                let to_right = right.insert(Box::new(Node::new(from_right.value.clone())));
                stack.push((from_right, &mut **to_right));
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut stack = vec![(&self.root, &other.root)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for pair in [(&a.left, &b.left), (&a.right, &b.right)] {
                match pair {
                    (Some(a), Some(b)) => stack.push((&**a, &**b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

/// Lists the values in order, like a set.
impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

// The tree always holds its root so it is never empty.
#[allow(clippy::len_without_is_empty)]
impl<T> BinarySearchTree<T> {
    /// Creates a tree holding only a root node with the given value.
    pub fn new(value: T) -> Self {
        Self {
            root: Node::new(value),
            len: 1,
        }
    }

    /// Creates a tree whose root is the first value and inserts the rest in order, dropping
    /// duplicates. Returns `None` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::search::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_values([2, 1, 3, 1]).unwrap();
    /// assert_eq!(tree.root(), &2);
    /// assert_eq!(tree.len(), 3);
    ///
    /// assert!(BinarySearchTree::<i32>::from_values([]).is_none());
    /// ```
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values = values.into_iter();
        let mut tree = Self::new(values.next()?);
        tree.extend(values);
        Some(tree)
    }

    /// The value at the root.
    pub fn root(&self) -> &T {
        &self.root.value
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of levels in the tree. A tree holding only its root has a height of 1.
    pub fn height(&self) -> usize {
        self.traverse().map(|(depth, _)| depth + 1).max().unwrap_or(1)
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree untouched, if an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::search::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new(5);
    ///
    /// assert!(tree.insert(3));
    /// assert!(tree.insert(8));
    /// assert!(!tree.insert(3));
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&3, &5, &8]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = insert_below(&mut self.root, value);
        if inserted {
            self.len += 1;
            trace!("inserted value, tree now holds {} values", self.len);
        } else {
            debug!("rejected duplicate value");
        }
        inserted
    }

    /// Inserts every value after the first one, in order, dropping duplicates. The first value is
    /// taken to be the one the tree was created with, mirroring how the root is usually picked from
    /// the same sequence.
    ///
    /// Use [`Extend`] to insert every value of a sequence.
    pub fn build<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        self.extend(values.into_iter().skip(1));
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = Some(&self.root);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> &T {
        let mut node = &self.root;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.value
    }

    /// The largest value in the tree.
    pub fn max(&self) -> &T {
        let mut node = &self.root;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.value
    }

    /// Visits the left subtree, then the node, then the right subtree. Yields the values in
    /// ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        let mut iter = Inorder { stack: Vec::new() };
        iter.push_left_spine(Some(&self.root));
        iter
    }

    /// Visits the node, then the left subtree, then the right subtree. Inserting the yielded
    /// values into a new tree, in order, rebuilds exactly the same shape.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            stack: vec![&self.root],
        }
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder {
            stack: vec![(&self.root, false)],
        }
    }

    /// Same order as [`preorder`](Self::preorder) but yields each value together with its depth
    /// (the root is at depth 0).
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse {
            stack: vec![(0, &self.root)],
        }
    }
}

/// Inserts `value` somewhere below `node`. Returns `false` if an equal value is found on the way.
fn insert_below<T: Ord>(mut node: &mut Node<T>, value: T) -> bool {
    loop {
        let ordering = value.cmp(&node.value);
        let slot = match ordering {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut node.right,
        };
        match slot {
            Some(child) => node = child,
            None => {
                let child = slot.insert(Box::new(Node::new(value)));
                if cfg!(debug_assertions) {
                    assert_eq!(child.value.cmp(&node.value), ordering);
                }
                return true;
            }
        }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Iterator returned by [`BinarySearchTree::inorder`].
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for Inorder<'a, T> {}

/// Iterator returned by [`BinarySearchTree::preorder`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for Preorder<'a, T> {}

/// Iterator returned by [`BinarySearchTree::postorder`].
pub struct Postorder<'a, T> {
    // The flag is set once the node's children have been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

impl<'a, T> FusedIterator for Postorder<'a, T> {}

/// Iterator returned by [`BinarySearchTree::traverse`].
pub struct Traverse<'a, T> {
    stack: Vec<(usize, &'a Node<T>)>,
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.right.as_deref().map(|right| (depth + 1, right)));
        self.stack
            .extend(node.left.as_deref().map(|left| (depth + 1, left)));
        Some((depth, &node.value))
    }
}

impl<'a, T> FusedIterator for Traverse<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_only() {
        let tree = BinarySearchTree::new(1);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.min(), &1);
        assert_eq!(tree.max(), &1);
        assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1]);
        assert_eq!(tree.preorder().collect::<Vec<_>>(), [&1]);
        assert_eq!(tree.postorder().collect::<Vec<_>>(), [&1]);
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut tree = BinarySearchTree::new(5);
        tree.extend([3, 8]);
        let before = tree.clone();

        assert!(!tree.insert(5));
        assert!(!tree.insert(8));
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn always_adding_left() {
        let keys = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut tree = BinarySearchTree::new(11);

        for key in keys {
            assert!(tree.insert(key));
            assert!(tree.contains(&key));
        }

        assert_eq!(tree.height(), 11);
        assert_eq!(tree.min(), &1);
        assert_eq!(tree.max(), &11);
    }

    #[test]
    fn always_adding_right() {
        let keys = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut tree = BinarySearchTree::new(0);

        for key in keys {
            assert!(tree.insert(key));
        }

        assert_eq!(tree.height(), 11);
        assert_eq!(
            tree.postorder().copied().collect::<Vec<_>>(),
            [10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
        );
    }

    #[test]
    fn contains_not() {
        let tree = BinarySearchTree::from_values([5, 3, 8, 1, 4]).unwrap();

        assert!(tree.contains(&4));
        assert!(!tree.contains(&2));
        assert!(!tree.contains(&9));
    }

    #[test]
    fn traverse_reports_depths() {
        let tree = BinarySearchTree::from_values([5, 3, 8, 4]).unwrap();

        assert_eq!(
            tree.traverse().collect::<Vec<_>>(),
            [(0, &5), (1, &3), (2, &4), (1, &8)]
        );
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn build_skips_first_value() {
        let mut tree = BinarySearchTree::new(10);
        // The leading 99 stands in for the root and is not inserted.
        tree.build([99, 5, 15]);

        assert!(!tree.contains(&99));
        assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [5, 10, 15]);
    }

    #[test]
    fn into_iterator_is_inorder() {
        let tree = BinarySearchTree::from_values([2, 3, 1]).unwrap();
        let mut seen = Vec::new();
        for value in &tree {
            seen.push(*value);
        }

        assert_eq!(seen, [1, 2, 3]);
    }

    #[test]
    fn degenerate_tree() {
        let mut tree = BinarySearchTree::new(0);
        tree.extend(1..10_000);

        assert_eq!(tree.len(), 10_000);
        assert_eq!(tree.height(), 10_000);
        assert_eq!(tree.max(), &9_999);
        drop(tree);
    }

    /// The tree `extend(0..n)` would build, linked directly since inserting sorted values one by
    /// one takes quadratic time.
    fn right_spine(n: u32) -> BinarySearchTree<u32> {
        let mut below: Link<u32> = None;
        for value in (1..n).rev() {
            below = Some(Box::new(Node {
                value,
                left: None,
                right: below,
            }));
        }
        BinarySearchTree {
            root: Node {
                value: 0,
                left: None,
                right: below,
            },
            len: n as usize,
        }
    }

    #[test]
    fn degenerate_clone_and_eq() {
        let tree = right_spine(200_000);

        let copy = tree.clone();
        assert!(copy == tree);
        assert_eq!(copy.len(), 200_000);
        assert_eq!(copy.height(), 200_000);
        assert_eq!(copy.max(), &199_999);

        assert!(right_spine(199_999) != tree);
    }

    #[test]
    fn same_values_different_shape() {
        let a = BinarySearchTree::from_values([2, 1, 3]).unwrap();
        let b = BinarySearchTree::from_values([1, 2, 3]).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn debug_lists_values_in_order() {
        let tree = BinarySearchTree::from_values([2, 3, 1]).unwrap();

        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    /// Every left child is smaller than its parent and every right child is larger.
    fn ordered_at_every_node<T: Ord>(tree: &BinarySearchTree<T>) -> bool {
        let mut stack = vec![&tree.root];
        while let Some(node) = stack.pop() {
            if let Some(left) = node.left.as_deref() {
                if left.value >= node.value {
                    return false;
                }
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                if right.value <= node.value {
                    return false;
                }
                stack.push(right);
            }
        }
        true
    }

    #[test]
    fn insert_keeps_children_on_their_side() {
        let mut tree = BinarySearchTree::new(60);
        for value in [70, 20, 40, 50, 60, 90, 15, 35, 100] {
            tree.insert(value);
            assert!(ordered_at_every_node(&tree));
        }
    }

    #[test]
    fn strings() {
        let tree = BinarySearchTree::from_values(
            ["pear", "apple", "fig", "apple", "quince"].map(String::from),
        )
        .unwrap();

        assert_eq!(
            tree.inorder().map(String::as_str).collect::<Vec<_>>(),
            ["apple", "fig", "pear", "quince"]
        );
    }
}
