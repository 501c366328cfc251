//! The `Node` record a [`BinarySearchTree`][crate::BinarySearchTree] is built from.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::Node;
//!
//! let node = Node::with_children(5, Some(Node::new(3)), Some(Node::new(7)));
//!
//! assert_eq!(node.val(), &5);
//! assert_eq!(node.left().map(Node::val), Some(&3));
//! assert_eq!(node.find_recursively(&7).map(Node::val), Some(&7));
//! assert!(node.find_recursively(&4).is_none());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use log::trace;

/// A single element of the tree. A `Node` owns its children outright so the
/// whole tree is owned, transitively, by its root.
pub struct Node<T> {
    val: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a leaf `Node` holding `val`.
    pub fn new(val: T) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Creates a `Node` with the given children. This is how a tree is
    /// pre-seeded with an existing root, see
    /// [`BinarySearchTree::with_root`][crate::BinarySearchTree::with_root].
    ///
    /// The caller is responsible for the ordering: everything under `left`
    /// must be less than `val` and everything under `right` must not be.
    pub fn with_children(val: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn val(&self) -> &T {
        &self.val
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn left_mut(&mut self) -> &mut Option<Box<Self>> {
        &mut self.left
    }

    pub(crate) fn right_mut(&mut self) -> &mut Option<Box<Self>> {
        &mut self.right
    }

    /// Searches the subtree rooted at this node for a node holding `val`,
    /// recursing once per level. Returns the shallowest match.
    ///
    /// The recursion depth is the height of the subtree, so prefer
    /// [`BinarySearchTree::find`][crate::BinarySearchTree::find] for trees
    /// built from sorted input.
    pub fn find_recursively<Q>(&self, val: &Q) -> Option<&Self>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match val.cmp(self.val.borrow()) {
            Ordering::Less => self.left()?.find_recursively(val),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.find_recursively(val),
        }
    }

    /// Attaches `val` somewhere below this node, recursing once per level.
    /// Values equal to a node go to its right. `depth` is this node's depth
    /// and is only used for logging.
    pub(crate) fn insert_recursively(&mut self, val: T, depth: usize)
    where
        T: Ord,
    {
        let child = if val < self.val {
            &mut self.left
        } else {
            &mut self.right
        };

        match child {
            Some(node) => node.insert_recursively(val, depth + 1),
            None => {
                trace!("attaching node at depth {}", depth + 1);
                *child = Some(Box::new(Node::new(val)));
            }
        }
    }
}

/// Structural equality: same values in the same shape. Compared with a work
/// stack of node pairs rather than one nested call per level.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.val != b.val {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for Node<T> {}

// Only one level is shown so formatting never walks the subtree.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("val", &self.val)
            .field("left", &self.left().map(Node::val))
            .field("right", &self.right().map(Node::val))
            .finish()
    }
}

impl<T> Drop for Node<T> {
    // Children are detached onto a work stack so a degenerate subtree is
    // released in a loop instead of one nested drop per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
