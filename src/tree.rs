//! The [`BinarySearchTree`] itself: construction, insertion and lookup.
//! Traversals live in their own module but are methods on the same type.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//! assert!(tree.dfs_in_order().is_empty());
//!
//! // Both insertion flavours return the tree so calls can be chained.
//! tree.insert(2).insert_recursively(1).insert(3);
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.find(&1).map(|node| node.val()), Some(&1));
//! assert_eq!(tree.find_recursively(&3).map(|node| node.val()), Some(&3));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::node::Node;

/// An unbalanced Binary Search Tree. Values are ordered by their `Ord`
/// implementation; a value equal to one already stored is added to the
/// right of it.
#[derive(PartialEq, Eq)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Level order keeps formatting flat however deep the tree is.
impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bfs()).finish()
    }
}

impl<T> From<Node<T>> for BinarySearchTree<T> {
    fn from(root: Node<T>) -> Self {
        Self::with_root(root)
    }
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Creates a tree pre-seeded with `root` and everything below it.
    ///
    /// The nodes are taken as given: it is up to the caller to have built
    /// them in search order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::{BinarySearchTree, Node};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), None);
    /// let mut tree = BinarySearchTree::with_root(root);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.dfs_in_order(), [&1, &2, &3]);
    /// ```
    pub fn with_root(root: Node<T>) -> Self {
        let len = count(&root);
        debug!("seeding tree with {} existing nodes", len);
        Self {
            root: Some(Box::new(root)),
            len,
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of levels in the tree: `0` when empty, `1` for a lone
    /// root, and `len()` for a tree built from sorted input.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    /// Inserts `val` into the tree by walking down from the root in a loop.
    /// Values equal to an existing node go to its right subtree. Returns the
    /// tree so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5).insert(3).insert(5);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.bfs(), [&5, &3, &5]);
    /// ```
    pub fn insert(&mut self, val: T) -> &mut Self
    where
        T: Ord,
    {
        self.len += 1;

        if self.root.is_none() {
            debug!("inserting root node");
            self.root = Some(Box::new(Node::new(val)));
            return self;
        }

        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if val < *node.val() {
                node.left_mut()
            } else {
                node.right_mut()
            };
            depth += 1;
        }

        trace!("attaching node at depth {}", depth);
        *link = Some(Box::new(Node::new(val)));
        self
    }

    /// Inserts `val` into the tree by recursing from the root, one call per
    /// level. Produces exactly the same shape as [`insert`][Self::insert]
    /// for the same sequence of values.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut iterative = BinarySearchTree::new();
    /// let mut recursive = BinarySearchTree::new();
    /// for x in [4, 2, 6, 2] {
    ///     iterative.insert(x);
    ///     recursive.insert_recursively(x);
    /// }
    ///
    /// assert_eq!(iterative, recursive);
    /// ```
    pub fn insert_recursively(&mut self, val: T) -> &mut Self
    where
        T: Ord,
    {
        self.len += 1;

        match self.root.as_mut() {
            Some(root) => root.insert_recursively(val, 0),
            None => {
                debug!("inserting root node");
                self.root = Some(Box::new(Node::new(val)));
            }
        }
        self
    }

    /// Finds the node holding `val` by walking down from the root in a loop.
    /// If several nodes hold an equal value the shallowest one is returned.
    ///
    /// The key may be any borrowed form of the tree's value type, but the
    /// ordering on the borrowed form must match the ordering on the value
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(String::from("b")).insert(String::from("a"));
    ///
    /// assert_eq!(tree.find("a").map(|node| node.val().as_str()), Some("a"));
    /// assert!(tree.find("c").is_none());
    /// ```
    pub fn find<Q>(&self, val: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match val.cmp(node.val().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Finds the node holding `val` by recursing from the root, one call per
    /// level. Always agrees with [`find`][Self::find]. To search from a node
    /// other than the root, use [`Node::find_recursively`].
    pub fn find_recursively<Q>(&self, val: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root()?.find_recursively(val)
    }

    /// Returns `true` if some node holds a value equal to `val`.
    pub fn contains<Q>(&self, val: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(val).is_some()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// Builds a tree by inserting each value in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.insert(val);
        }
    }
}

/// Counts the nodes under (and including) `root` without recursing.
fn count<T>(root: &Node<T>) -> usize {
    let mut len = 0;
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        len += 1;
        queue.extend(node.left());
        queue.extend(node.right());
    }

    len
}
