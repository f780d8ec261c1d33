//! An unbalanced BST over a set of unique keys. Every node exclusively owns its two children so
//! the tree is acyclic by construction and dropping the [`Tree`] frees every node.
//!
//! Nothing here rebalances. Inserting keys in ascending order produces a chain whose height
//! equals its node count, so every walk over the tree is a loop rather than a recursive call.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Inserting the same key again is a no-op.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.count_nodes(), 1);
//!
//! // Deleting a key hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(!tree.search(&1));
//!
//! // Deleting a missing key is a no-op as well.
//! assert_eq!(tree.delete(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::traversal::{Inorder, LevelOrder, Postorder, Preorder};

/// An owned, possibly absent, child.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree holding unique, totally ordered keys. It supports inserting, searching
/// for, and deleting keys as well as the three depth first traversals and a level order
/// traversal.
pub struct Tree<K> {
    root: Link<K>,
}

/// A single stored key and its two owned children.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The present children of this node, left before right.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// The smallest key in the subtree rooted at this node, found by following left children
    /// until there are none.
    fn min_value(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.key
    }

    /// The largest key in the subtree rooted at this node.
    fn max_value(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.key
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Tear down with an explicit stack. Letting each `Box` drop its children would recurse
        // once per level and a long chain could overflow the call stack.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Copies the tree node by node. Like `drop`, this walks with an explicit stack of
    /// (source node, destination slot) pairs instead of recursing.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<(&Node<K>, &mut Link<K>)> = self
            .root
            .as_deref()
            .map(|root| (root, &mut tree.root))
            .into_iter()
            .collect();
        while let Some((node, slot)) = stack.pop() {
            let copy = slot.insert(Node::new_boxed(node.key.clone()));
            if let Some(left) = node.left.as_deref() {
                stack.push((left, &mut copy.left));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, &mut copy.right));
            }
        }
        tree
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts `key` into the tree. Returns `true` if a new node was created and `false` if the
    /// key was already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(50));
    /// assert!(tree.insert(30));
    /// assert!(!tree.insert(50));
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [30, 50]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 1;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(depth, "key already present, insert ignored");
                    return false;
                }
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(key));
        trace!(depth, "inserted leaf");
        true
    }

    /// Whether the tree contains `key`. Takes `O(height)` comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert!(tree.search(&30));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Same as [`Tree::search`].
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1].into_iter().collect();
    /// assert!(tree.contains(&1) && !tree.contains(&3));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key)
    }

    /// Deletes the node holding `key` and returns the removed key. If the tree does not contain
    /// `key`, nothing happens and `None` is returned.
    ///
    /// A node with two children is not unlinked itself. Instead its inorder successor (the
    /// smallest key of its right subtree) moves into it and the successor's old node, which has
    /// no left child, is spliced out.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70, 20, 40, 35].into_iter().collect();
    ///
    /// // 30 has two children so its successor 35 takes its place.
    /// assert_eq!(tree.delete(&30), Some(30));
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [50, 35, 20, 40, 70]);
    ///
    /// assert_eq!(tree.delete(&30), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = key.cmp(&slot.as_deref()?.key);
            slot = match ordering {
                Ordering::Less => &mut slot.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => &mut slot.as_mut()?.right,
            };
        }

        Self::unlink(slot)
    }

    /// Removes the node in `slot`, rewiring the slot to whatever should replace it.
    fn unlink(slot: &mut Link<K>) -> Option<K> {
        let mut node = slot.take()?;
        match (node.left.is_some(), node.right.is_some()) {
            (true, true) => {
                let Some(successor) = Self::take_min(&mut node.right) else {
                    unreachable!("a present right subtree has a minimum");
                };
                trace!("deleted node with two children, successor moved up");
                let removed = mem::replace(&mut node.key, successor.key);
                *slot = Some(node);
                Some(removed)
            }
            (false, false) => {
                trace!("deleted leaf");
                Some(node.key)
            }
            _ => {
                trace!("deleted node with one child, child spliced up");
                *slot = node.left.take().or_else(|| node.right.take());
                Some(node.key)
            }
        }
    }

    /// Detaches the node holding the smallest key under `slot`. That node has no left child so
    /// its right child, if any, takes over its slot.
    fn take_min(mut slot: &mut Link<K>) -> Option<Box<Node<K>>> {
        while slot.as_deref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min)
    }

    /// The smallest key in the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&K> {
        self.root.as_deref().map(Node::min_value)
    }

    /// The largest key in the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&K> {
        self.root.as_deref().map(Node::max_value)
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree holding a single node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_deref())
    }

    /// Counts levels breadth first so a long chain costs no call stack.
    fn height_of(root: Option<&Node<K>>) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<K>> = root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.into_iter().flat_map(Node::children).collect();
        }
        height
    }

    /// The total number of nodes in the tree. This walks every node.
    pub fn count_nodes(&self) -> usize {
        self.preorder().count()
    }

    /// Iterates over the keys in ascending order: left subtree, then node, then right subtree.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(self.root.as_deref())
    }

    /// Iterates over the keys node first, then left subtree, then right subtree. Inserting the
    /// keys into an empty tree in this order rebuilds the same shape.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(self.root.as_deref())
    }

    /// Iterates over the keys left subtree first, then right subtree, then node. Every key
    /// comes after all the keys below it.
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(self.root.as_deref())
    }

    /// Iterates over the keys breadth first: level by level from the root, left to right within
    /// a level.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root.as_deref())
    }

    /// The keys grouped by depth, root level first. Each inner `Vec` holds one level from left
    /// to right. An empty tree has no levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70, 20].into_iter().collect();
    ///
    /// assert_eq!(tree.levels(), [vec![&50], vec![&30, &70], vec![&20]]);
    /// assert!(Tree::<i32>::new().levels().is_empty());
    /// ```
    pub fn levels(&self) -> Vec<Vec<&K>> {
        let mut levels = Vec::new();
        let mut level: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            levels.push(level.iter().map(|&node| &node.key).collect());
            level = level.into_iter().flat_map(Node::children).collect();
        }
        levels
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
