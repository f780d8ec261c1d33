//! An unbalanced Binary Search Tree (BST) over a set of unique keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean no key is ever stored twice: inserting a key that is
//! already present does nothing.
//!
//! Searching for a key takes `O(height)` comparisons where `height` counts the
//! nodes on the longest path from the root `Node` down to a leaf `Node` (so a
//! single node has a height of 1). This tree never rebalances, so inserting keys
//! in sorted order degrades it into a chain with `height == N`. Visiting the left
//! subtree, then the subtree root, then the right subtree yields the keys in
//! sorted order.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! assert!(tree.inorder().eq(&[20, 30, 40, 50, 60, 70, 80]));
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.count_nodes(), 7);
//!
//! tree.delete(&30);
//! assert!(tree.inorder().eq(&[20, 40, 50, 60, 70, 80]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod traversal;
mod tree;

pub use tree::Tree;
