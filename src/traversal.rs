//! Depth-first and breadth-first traversals of a [`BinarySearchTree`].
//!
//! Each traversal walks the whole tree afresh and returns the visited
//! values in a `Vec`. None of them recurse: the depth-first orders keep an
//! explicit stack and the breadth-first order keeps a queue, so a tree built
//! from sorted input is as safe to walk as a balanced one.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::BinarySearchTree;

impl<T> BinarySearchTree<T> {
    /// Visits each node before its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_pre_order(), [&10, &5, &3, &7, &15]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut data = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            data.push(node.val());
            // Right goes on first so left comes off first.
            stack.extend(node.right());
            stack.extend(node.left());
        }

        data
    }

    /// Visits each node's left subtree, then the node, then its right
    /// subtree. For a search tree this yields the values in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut data = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }

            match stack.pop() {
                Some(node) => {
                    data.push(node.val());
                    current = node.right();
                }
                None => break,
            }
        }

        data
    }

    /// Visits each node's left subtree, then its right subtree, then the
    /// node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.dfs_post_order(), [&3, &7, &5, &15, &10]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut data = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        // Node, right, left is exactly post-order backwards.
        while let Some(node) = stack.pop() {
            data.push(node.val());
            stack.extend(node.left());
            stack.extend(node.right());
        }

        data.reverse();
        data
    }

    /// Visits nodes level by level from the root down, left to right within
    /// a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![10, 5, 15, 3, 7].into_iter().collect();
    /// assert_eq!(tree.bfs(), [&10, &5, &15, &3, &7]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut data = Vec::with_capacity(self.len());
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            data.push(node.val());
            queue.extend(node.left());
            queue.extend(node.right());
        }

        data
    }
}
