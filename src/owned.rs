//! An owned BST. Every [`Node`] is owned by exactly one parent through a `Box` and the [`Tree`]
//! owns the root. There are no parent pointers and no shared ownership, so the only structural
//! edits are attaching a new leaf (in [`Tree::insert`]) and swapping a node's two children (in
//! [`invert`]).
//!
//! None of the operations here recurse. Trees built from sorted input are as deep as they are
//! long, so everything that walks the tree keeps its own stack instead of using the call stack.
//!
//! # Examples
//!
//! ```
//! use bst::owned::{Inversion, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing to invert yet.
//! assert_eq!(tree.invert(), Inversion::Empty);
//!
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//! let root = tree.root().unwrap();
//! assert_eq!(root.value(), &5);
//! assert_eq!(root.left().map(|n| n.value()), Some(&3));
//! assert_eq!(root.right().map(|n| n.value()), Some(&8));
//!
//! // Inverting mirrors every level of the tree.
//! assert_eq!(tree.invert(), Inversion::Inverted);
//! let root = tree.root().unwrap();
//! assert_eq!(root.left().map(|n| n.value()), Some(&8));
//! assert_eq!(root.right().map(|n| n.value()), Some(&3));
//! ```

use std::fmt;
use std::mem;

use tracing::{instrument, trace};

type Link<T> = Option<Box<Node<T>>>;

/// The outcome of an inversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Inversion {
    /// There was no subtree to invert so nothing changed.
    Empty,
    /// Every node in the subtree had its children swapped.
    Inverted,
}

impl Inversion {
    /// Returns `true` if any nodes were actually inverted.
    pub fn is_inverted(self) -> bool {
        matches!(self, Self::Inverted)
    }
}

/// Inverts the subtree rooted at `node` by swapping the left and right children of it and of
/// every one of its descendants. Nodes outside of that subtree are untouched.
///
/// Passing `None` is allowed and changes nothing. That case is reported as [`Inversion::Empty`].
///
/// # Examples
///
/// ```
/// use bst::owned::{invert, Inversion, Node, Tree};
///
/// let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
///
/// // Only mirror the left subtree.
/// let left = tree.root_mut().and_then(Node::left_mut);
/// assert_eq!(invert(left), Inversion::Inverted);
///
/// let three = tree.root().and_then(Node::left).unwrap();
/// assert_eq!(three.left().map(|n| n.value()), Some(&4));
/// assert_eq!(three.right().map(|n| n.value()), Some(&1));
/// assert_eq!(tree.root().and_then(Node::right).map(|n| n.value()), Some(&8));
///
/// assert_eq!(invert::<i32>(None), Inversion::Empty);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn invert<T>(node: Option<&mut Node<T>>) -> Inversion {
    let Some(node) = node else {
        trace!("no subtree to invert");
        return Inversion::Empty;
    };

    let swapped = node.invert_subtree();
    trace!(swapped = swapped, "inverted subtree");
    Inversion::Inverted
}

/// An unbalanced Binary Search Tree. Values smaller than a node go to its left and everything
/// else, including duplicates, goes to its right.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink children before each node is dropped so dropping a long chain doesn't recurse.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();

        // Pairs of (node to copy, empty slot the copy goes into).
        let mut stack = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, &mut tree.root));
        }
        while let Some((node, slot)) = stack.pop() {
            let Node { left, right, .. } = &mut **slot.insert(Node::new_boxed(node.value.clone()));
            if let Some(original) = node.left() {
                stack.push((original, left));
            }
            if let Some(original) = node.right() {
                stack.push((original, right));
            }
        }

        tree
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given value into the tree as a new leaf. The tree is never rebalanced so its
    /// shape is entirely determined by the order of insertion.
    ///
    /// A value equal to one already in the tree is kept and is placed in the right subtree of
    /// the first equal node found on the way down.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::owned::{Node, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().and_then(Node::right).map(|n| n.value()), Some(&2));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        // The value of the last node we passed and whether we went left from it.
        let mut parent = None;
        while let Some(node) = slot {
            let Node {
                value: node_value,
                left,
                right,
            } = &mut **node;
            let goes_left = value < *node_value;
            slot = if goes_left { left } else { right };
            parent = Some((&*node_value, goes_left));
        }

        let new_node = slot.insert(Node::new_boxed(value));
        match parent {
            Some((parent_value, true)) => {
                debug_assert!(new_node.value < *parent_value);
                trace!("attached new leaf as a left child");
            }
            Some((parent_value, false)) => {
                debug_assert!(new_node.value >= *parent_value);
                trace!("attached new leaf as a right child");
            }
            None => trace!("tree was empty, new leaf is the root"),
        }
    }

    /// Inverts the whole tree. See [`invert`].
    pub fn invert(&mut self) -> Inversion {
        invert(self.root_mut())
    }

    /// The root of the tree, if it has any nodes.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable access to the root of the tree. The only thing that can be changed through it is
    /// the arrangement of children by [`invert`].
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }
}

/// A `Node` holds one inserted value and up to two children.
// TODO stack based Debug
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value this node was created with.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child of this node, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child of this node, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable access to the left child of this node, e.g. to [`invert`] only that subtree.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child of this node, e.g. to [`invert`] only that subtree.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Inverts the subtree rooted at this node. See [`invert`].
    pub fn invert(&mut self) {
        self.invert_subtree();
    }

    /// The number of nodes on the longest path from this node down to a leaf, counting this
    /// node.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        height
    }

    /// The number of nodes in the subtree rooted at this node.
    fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            size += 1;
            stack.extend(node.children());
        }
        size
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Swaps the children of every node in this subtree, visiting each node before its children
    /// and the (already swapped) left child before the right one. Returns how many nodes were
    /// visited.
    fn invert_subtree(&mut self) -> usize {
        let mut swapped = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            mem::swap(&mut node.left, &mut node.right);
            swapped += 1;

            let Node { left, right, .. } = node;
            stack.extend(right.as_deref_mut());
            stack.extend(left.as_deref_mut());
        }
        swapped
    }
}
