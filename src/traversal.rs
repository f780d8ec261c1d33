//! Lazy traversals over a [`Tree`][crate::Tree]. Each iterator borrows the tree and walks it with
//! an explicit stack or queue, so it yields keys one at a time without recursing. Asking the tree
//! for a new iterator starts the walk over.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert!(tree.inorder().eq(&[1, 2, 3]));
//! assert!(tree.preorder().eq(&[2, 1, 3]));
//! assert!(tree.postorder().eq(&[1, 3, 2]));
//! assert!(tree.level_order().eq(&[2, 1, 3]));
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::Node;

/// Ascending order iterator. Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, K> {
    /// The nodes whose left subtree is being (or has been) visited but which haven't been
    /// yielded yet. The top of the stack is always the next key.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Inorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for Inorder<'_, K> {}

/// Node first, then left subtree, then right subtree. Created by
/// [`Tree::preorder`][crate::Tree::preorder].
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Preorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for Preorder<'_, K> {}

/// Left subtree, then right subtree, then node. Created by
/// [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, K> {
    /// Each node is pushed twice: once unexpanded, and once more with `true` after its children
    /// have been pushed above it. Popping an expanded node means both subtrees are done.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Postorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

impl<K> FusedIterator for Postorder<'_, K> {}

/// Breadth first iterator. Created by [`Tree::level_order`][crate::Tree::level_order].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(&node.key)
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}
