//! Depth-first and breadth-first walks over a [`Tree`] or any of its subtrees.
//!
//! Every order is available two ways: as a lazy iterator of `(&K, &V)` pairs (e.g.
//! [`Tree::in_order`]) and as an operation appending the visited values to an accumulator (e.g.
//! [`Tree::dfs_in_order`]). None of them recurse, so degenerate trees are walked in constant
//! stack space.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for (key, value) in [(5, 'e'), (3, 'c'), (8, 'h'), (1, 'a'), (4, 'd')] {
//!     tree.insert(key, value);
//! }
//!
//! let mut values: Vec<char> = Vec::new();
//! tree.dfs_pre_order(&mut values);
//! assert_eq!(values, ['e', 'c', 'a', 'd', 'h']);
//!
//! let mut values: Vec<char> = Vec::new();
//! tree.bfs(&mut values);
//! assert_eq!(values, ['e', 'c', 'h', 'a', 'd']);
//!
//! // Walks can start anywhere in the tree.
//! let left = tree.root().and_then(|root| root.left()).unwrap();
//! let keys: Vec<_> = left.in_order().map(|(key, _)| *key).collect();
//! assert_eq!(keys, [1, 3, 4]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use crate::queue::Queue;
use crate::tree::{Node, Tree};

/// A read-only handle to a node of a [`Tree`] and, through it, to the subtree rooted there.
pub struct Subtree<'a, K, V> {
    node: &'a Node<K, V>,
}

impl<'a, K, V> Clone for Subtree<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, K, V> Copy for Subtree<'a, K, V> {}

impl<'a, K, V> fmt::Debug for Subtree<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree")
            .field("key", self.key())
            .field("value", self.value())
            .finish()
    }
}

impl<'a, K, V> Subtree<'a, K, V> {
    pub(crate) fn new(node: &'a Node<K, V>) -> Self {
        Self { node }
    }

    /// The key stored at this node.
    pub fn key(&self) -> &'a K {
        self.node.key()
    }

    /// The value stored at this node.
    pub fn value(&self) -> &'a V {
        self.node.value()
    }

    /// The left child, whose keys are all smaller than this node's.
    pub fn left(&self) -> Option<Self> {
        self.node.left().map(Self::new)
    }

    /// The right child, whose keys are all at least this node's.
    pub fn right(&self) -> Option<Self> {
        self.node.right().map(Self::new)
    }

    /// Iterates this subtree left, then current, then right. Keys come out sorted.
    pub fn in_order(self) -> InOrder<'a, K, V> {
        InOrder::new(Some(self))
    }

    /// Iterates this subtree current, then left, then right.
    pub fn pre_order(self) -> PreOrder<'a, K, V> {
        PreOrder::new(Some(self))
    }

    /// Iterates this subtree left, then right, then current.
    pub fn post_order(self) -> PostOrder<'a, K, V> {
        PostOrder::new(Some(self))
    }

    /// Iterates this subtree level by level, left to right within a level.
    pub fn level_order(self) -> LevelOrder<'a, K, V> {
        self.level_order_with(VecDeque::new())
    }

    /// Like [`level_order`][Self::level_order], but queueing pending nodes in `queue`.
    pub fn level_order_with<Q>(self, queue: Q) -> LevelOrder<'a, K, V, Q>
    where
        Q: Queue<Self>,
    {
        LevelOrder::new(Some(self), queue)
    }

    /// Appends the values of this subtree to `values` in order (left, current, right).
    pub fn dfs_in_order<E>(self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        values.extend(self.in_order().map(|(_, value)| value));
    }

    /// Appends the values of this subtree to `values` in pre-order (current, left, right).
    pub fn dfs_pre_order<E>(self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        values.extend(self.pre_order().map(|(_, value)| value));
    }

    /// Appends the values of this subtree to `values` in post-order (left, right, current).
    pub fn dfs_post_order<E>(self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        values.extend(self.post_order().map(|(_, value)| value));
    }

    /// Appends the values of this subtree to `values` level by level.
    pub fn bfs<E>(self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        self.bfs_with(VecDeque::new(), values);
    }

    /// Like [`bfs`][Self::bfs], but queueing pending nodes in `queue`.
    pub fn bfs_with<Q, E>(self, queue: Q, values: &mut E)
    where
        Q: Queue<Self>,
        E: Extend<&'a V>,
    {
        values.extend(self.level_order_with(queue).map(|(_, value)| value));
    }
}

/// Whole-tree traversals. Each starts at the root and yields nothing for an empty tree.
impl<K, V> Tree<K, V> {
    /// Iterates the tree in key order. The same as [`in_order`][Self::in_order].
    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.in_order()
    }

    /// Iterates the tree left, then current, then right: in key order, with equal keys in the
    /// order they were inserted.
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        InOrder::new(self.root())
    }

    /// Iterates the tree current, then left, then right.
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder::new(self.root())
    }

    /// Iterates the tree left, then right, then current.
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        PostOrder::new(self.root())
    }

    /// Iterates the tree level by level, left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        self.level_order_with(VecDeque::new())
    }

    /// Like [`level_order`][Self::level_order], but queueing pending nodes in `queue`.
    pub fn level_order_with<'a, Q>(&'a self, queue: Q) -> LevelOrder<'a, K, V, Q>
    where
        Q: Queue<Subtree<'a, K, V>>,
    {
        LevelOrder::new(self.root(), queue)
    }

    /// Appends the tree's values to `values` in order (left, current, right). To collect into a
    /// fresh container instead, use `tree.in_order().map(|(_, value)| value).collect()`; the
    /// other orders work the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    /// tree.insert(3, "three");
    ///
    /// let mut values: Vec<&str> = Vec::new();
    /// tree.dfs_in_order(&mut values);
    /// assert_eq!(values, ["one", "two", "three"]);
    ///
    /// // Accumulators are appended to, not replaced.
    /// tree.dfs_in_order(&mut values);
    /// assert_eq!(values.len(), 6);
    ///
    /// // A fresh accumulator.
    /// let fresh: Vec<&&str> = tree.in_order().map(|(_, value)| value).collect();
    /// assert_eq!(fresh, [&"one", &"two", &"three"]);
    /// ```
    pub fn dfs_in_order<'a, E>(&'a self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        values.extend(self.in_order().map(|(_, value)| value));
    }

    /// Appends the tree's values to `values` in pre-order (current, left, right).
    pub fn dfs_pre_order<'a, E>(&'a self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        values.extend(self.pre_order().map(|(_, value)| value));
    }

    /// Appends the tree's values to `values` in post-order (left, right, current).
    pub fn dfs_post_order<'a, E>(&'a self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        values.extend(self.post_order().map(|(_, value)| value));
    }

    /// Appends the tree's values to `values` level by level, left to right within a level.
    pub fn bfs<'a, E>(&'a self, values: &mut E)
    where
        E: Extend<&'a V>,
    {
        self.bfs_with(VecDeque::new(), values);
    }

    /// Like [`bfs`][Self::bfs], but queueing pending nodes in the given `queue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::VecDeque;
    ///
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, 'b');
    /// tree.insert(1, 'a');
    /// tree.insert(3, 'c');
    ///
    /// let mut values: Vec<char> = Vec::new();
    /// tree.bfs_with(VecDeque::with_capacity(2), &mut values);
    /// assert_eq!(values, ['b', 'a', 'c']);
    /// ```
    pub fn bfs_with<'a, Q, E>(&'a self, queue: Q, values: &mut E)
    where
        Q: Queue<Subtree<'a, K, V>>,
        E: Extend<&'a V>,
    {
        values.extend(self.level_order_with(queue).map(|(_, value)| value));
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order iterator. See [`Tree::in_order`].
pub struct InOrder<'a, K, V> {
    // Nodes whose left subtree is being walked, deepest last.
    stack: Vec<Subtree<'a, K, V>>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    fn new(root: Option<Subtree<'a, K, V>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<Subtree<'a, K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((node.key(), node.value()))
    }
}

/// Pre-order iterator. See [`Tree::pre_order`].
pub struct PreOrder<'a, K, V> {
    stack: Vec<Subtree<'a, K, V>>,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    fn new(root: Option<Subtree<'a, K, V>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so left comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some((node.key(), node.value()))
    }
}

/// Post-order iterator. See [`Tree::post_order`].
pub struct PostOrder<'a, K, V> {
    // Each node is pushed once unexpanded and, once its children are queued up above it, once
    // more ready to be yielded.
    stack: Vec<(Subtree<'a, K, V>, bool)>,
}

impl<'a, K, V> PostOrder<'a, K, V> {
    fn new(root: Option<Subtree<'a, K, V>>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some((node.key(), node.value()));
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

/// Level-order (breadth-first) iterator. See [`Tree::level_order`].
pub struct LevelOrder<'a, K, V, Q = VecDeque<Subtree<'a, K, V>>> {
    queue: Q,
    _subtree: PhantomData<Subtree<'a, K, V>>,
}

impl<'a, K, V, Q> LevelOrder<'a, K, V, Q>
where
    Q: Queue<Subtree<'a, K, V>>,
{
    fn new(root: Option<Subtree<'a, K, V>>, mut queue: Q) -> Self {
        if let Some(root) = root {
            queue.enqueue(root);
        }
        Self {
            queue,
            _subtree: PhantomData,
        }
    }
}

impl<'a, K, V, Q> Iterator for LevelOrder<'a, K, V, Q>
where
    Q: Queue<Subtree<'a, K, V>>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.dequeue()?;
        if let Some(left) = node.left() {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right() {
            self.queue.enqueue(right);
        }
        Some((node.key(), node.value()))
    }
}
