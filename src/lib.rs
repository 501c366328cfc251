//! An unbalanced Binary Search Tree over any totally ordered value type,
//! with iterative and recursive insertion and lookup plus the classic
//! depth-first and breadth-first traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is built from `Node`s. Each `Node` stores one value
//! and up to two child `Node`s. The invariants of this tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value. Inserting a value that is
//!    already present adds another node to the right.
//!
//! No rebalancing is done. Inserting sorted input gives a tree shaped like a
//! linked list and every operation degrades to `O(n)`. The iterative
//! operations and all traversals keep working on such trees without growing
//! the call stack.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert(10).insert(5).insert(15).insert(3).insert(7);
//!
//! assert_eq!(tree.bfs(), [&10, &5, &15, &3, &7]);
//! assert_eq!(tree.dfs_pre_order(), [&10, &5, &3, &7, &15]);
//! assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
//! assert_eq!(tree.dfs_post_order(), [&3, &7, &5, &15, &10]);
//!
//! assert_eq!(tree.find(&7).map(|node| node.val()), Some(&7));
//! assert!(tree.find(&8).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
mod traversal;
pub mod tree;

pub use node::Node;
pub use tree::BinarySearchTree;
