//! An unbalanced BST whose nodes keep a pointer back to their parent. Nodes own their children;
//! the parent pointer is only used to find and rewire the slot a node occupies when it is
//! removed.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // Equal keys go to the right, so the first value inserted is the one found.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // Removing a node returns its value and uncovers the next one.
//! assert_eq!(tree.remove(&1), Ok(2));
//! assert_eq!(tree.find(&1), Ok(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::traversal::Subtree;

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and removing keys
/// and values, and for walking them in depth-first or breadth-first order.
///
/// Keys that compare equal are all kept: an equal key is inserted into the right subtree, and
/// lookups stop at the first match on the way down.
pub struct Tree<K, V> {
    // This is a `Link` instead of an `Option<Box<Node>>` so that nodes never move and their
    // children's parent pointers stay valid.
    root: Link<K, V>,
    len: usize,
    _owns: PhantomData<Box<Node<K, V>>>,
}

// SAFETY: A `Tree` owns every node it links to and parent pointers never leave the tree, so
// sending or sharing it is exactly as safe as sending or sharing its keys and values.
unsafe impl<K: Send, V: Send> Send for Tree<K, V> {}
// SAFETY: See above. Shared access never mutates a node.
unsafe impl<K: Sync, V: Sync> Sync for Tree<K, V> {}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let Some(root) = self.root.node() else {
            return copy;
        };
        copy.root = Link::leaf(root.key.clone(), root.value.clone(), Link(None));
        copy.len = self.len;

        // Pairs of (node being copied, its already allocated copy).
        let mut pending: Vec<(&Node<K, V>, NonNull<Node<K, V>>)> = Vec::new();
        pending.extend(copy.root.0.map(|ptr| (root, ptr)));
        while let Some((source, mut target)) = pending.pop() {
            let parent = Link(Some(target));
            // SAFETY: `target` was allocated by this loop (or just above) and is only reachable
            // through `copy`, which nothing else can see yet.
            let target = unsafe { target.as_mut() };
            if let Some(left) = source.left() {
                target.left = Link::leaf(left.key.clone(), left.value.clone(), parent);
                pending.extend(target.left.0.map(|ptr| (left, ptr)));
            }
            if let Some(right) = source.right() {
                target.right = Link::leaf(right.key.clone(), right.value.clone(), parent);
                pending.extend(target.right.0.map(|ptr| (right, ptr)));
            }
        }

        copy
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// The number of nodes in the tree, counting every duplicate key.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// A read-only handle to the root node, or `None` for an empty tree. Traversals can be
    /// started from it or from any of its descendants.
    pub fn root(&self) -> Option<Subtree<'_, K, V>> {
        self.root.node().map(Subtree::new)
    }

    /// Finds the value associated with the given key. With duplicate keys, this is the value
    /// that was inserted first.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.find(&42), Err(Error::KeyNotFound));
    /// ```
    pub fn find(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        match self.locate(key).0 {
            // SAFETY: `locate` only returns links reachable from the root and `&self` keeps
            // the tree from being mutated while the returned reference lives.
            Some(node) => Ok(unsafe { &node.as_ref().value }),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Whether any node holds `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.locate(key).0.is_some()
    }

    /// Inserts the given value into the tree under the given key. The tree is not rebalanced,
    /// and a key that is already present is inserted again to the right of the existing node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(2, 'b');
    /// tree.insert(1, 'a');
    /// tree.insert(2, 'c');
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.find(&1), Ok(&'a'));
    /// assert_eq!(tree.find(&2), Ok(&'b'));
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let Some(mut current) = self.root.0 else {
            trace!("inserting the root of an empty tree");
            self.root = Link::leaf(key, value, Link(None));
            self.len = 1;
            return;
        };

        loop {
            // SAFETY: `current` starts at the root and only follows child links, so it is a live
            // node owned by this tree. `&mut self` means no other reference into it exists.
            let node = unsafe { current.as_mut() };
            let slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            match slot.0 {
                Some(child) => current = child,
                None => {
                    *slot = Link::leaf(key, value, Link(Some(current)));
                    break;
                }
            }
        }
        self.len += 1;

        if cfg!(debug_assertions) {
            // SAFETY: `current` is the new leaf's parent, still owned by this tree.
            unsafe { current.as_ref() }.assert_local_invariants();
        }
    }

    /// Removes the node holding the given key from the tree and returns its value. With
    /// duplicate keys, the node found by [`find`][Self::find] is the one removed.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node holds `key`. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Ok(2));
    /// assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let Some(target) = self.locate(key).0 else {
            debug!("remove missed: key is not in the tree");
            return Err(Error::KeyNotFound);
        };

        // SAFETY: `locate` only returns links reachable from the root, so `target` is a live node
        // owned by this tree, and `&mut self` means nothing else references it.
        let value = unsafe { self.remove_node(target) };
        self.len -= 1;
        Ok(value)
    }

    /// Drops every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.len = 0;
        let mut pending: Vec<_> = self.root.take().0.into_iter().collect();
        while let Some(ptr) = pending.pop() {
            // SAFETY: Every node was allocated with `Box::new` in `Link::leaf` and is owned by
            // exactly one child link (or the root). That link was already taken so nothing can
            // reach the node after this, and it is freed exactly once.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            pending.extend(node.left.0);
            pending.extend(node.right.0);
        }
    }

    /// Walks down from the root comparing against `key` and returns the first node holding it,
    /// or an empty link if the walk falls off the bottom of the tree.
    fn locate(&self, key: &K) -> Link<K, V>
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(node) = current.node() {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return current,
                Ordering::Greater => node.right,
            };
        }
        current
    }

    /// Removes `target` from the tree and returns its value.
    ///
    /// # Safety
    ///
    /// `target` must be a live node owned by `self`.
    unsafe fn remove_node(&mut self, mut target: NonNull<Node<K, V>>) -> V
    where
        K: Ord,
    {
        let (left, right) = {
            let node = target.as_ref();
            (node.left.0, node.right.0)
        };
        match (left, right) {
            (Some(_), Some(right)) => {
                trace!("removing a node with two children, promoting its in-order successor");
                let successor = Node::leftmost(right);
                // The successor has no left child so it can always be unlinked directly.
                let Node { key, value, .. } = *self.unlink(successor);

                let node = target.as_mut();
                node.key = key;
                let removed = std::mem::replace(&mut node.value, value);
                if cfg!(debug_assertions) {
                    node.assert_local_invariants();
                }
                removed
            }
            _ => {
                trace!("removing a node with at most one child");
                let node = self.unlink(target);
                node.value
            }
        }
    }

    /// Detaches `target`, which must have at most one child, and puts that child in its place.
    /// The detached node is handed back with all of its links cleared.
    ///
    /// # Safety
    ///
    /// `target` must be a live node owned by `self`.
    unsafe fn unlink(&mut self, mut target: NonNull<Node<K, V>>) -> Box<Node<K, V>>
    where
        K: Ord,
    {
        let node = target.as_mut();
        debug_assert!(
            node.left.0.is_none() || node.right.0.is_none(),
            "unlinking a node with two children"
        );
        let child = match node.left.take() {
            Link(None) => node.right.take(),
            left => left,
        };
        let parent = node.parent.take();
        self.replace_with(target, parent, child);

        // SAFETY: `replace_with` removed the only owning link to `target` and the node has no
        // children left to point back at it. It was allocated with `Box::new` in `Link::leaf`.
        Box::from_raw(target.as_ptr())
    }

    /// Points whichever slot held `target` at `replacement`: the left or right child link of
    /// `parent`, or the root when there is no parent. `replacement` is re-parented to `parent`.
    ///
    /// # Safety
    ///
    /// `target` must be a live node owned by `self` whose parent is `parent`, and
    /// `replacement` must be empty or a node that is no longer linked from anywhere else.
    unsafe fn replace_with(
        &mut self,
        target: NonNull<Node<K, V>>,
        parent: Link<K, V>,
        mut replacement: Link<K, V>,
    ) where
        K: Ord,
    {
        if let Some(child) = replacement.node_mut() {
            child.parent = parent;
        }

        match parent.0 {
            Some(mut parent_ptr) => {
                let parent_node = parent_ptr.as_mut();
                if parent_node.left.0 == Some(target) {
                    parent_node.left = replacement;
                } else {
                    debug_assert_eq!(
                        parent_node.right.0,
                        Some(target),
                        "parent does not link back to its child"
                    );
                    parent_node.right = replacement;
                }
            }
            None => self.root = replacement,
        }

        if cfg!(debug_assertions) {
            match parent.node() {
                Some(parent_node) => parent_node.assert_local_invariants(),
                None => {
                    if let Some(root) = self.root.node() {
                        assert!(root.parent.0.is_none(), "root has a parent");
                        root.assert_local_invariants();
                    }
                }
            }
        }
    }
}

/// A pointer to a [`Node`]. Child links own the node they point at; parent links don't.
pub(crate) struct Link<K, V>(Option<NonNull<Node<K, V>>>);

impl<K, V> Clone for Link<K, V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<K, V> Copy for Link<K, V> {}

impl<K, V> Link<K, V> {
    /// Allocates a childless node and returns an owning link to it.
    fn leaf(key: K, value: V, parent: Link<K, V>) -> Self {
        let node = Box::new(Node {
            key,
            value,
            left: Link(None),
            right: Link(None),
            parent,
        });
        Link(Some(NonNull::from(Box::leak(node))))
    }

    fn node(&self) -> Option<&Node<K, V>> {
        // SAFETY: A non-empty link always points at a live node of the tree it belongs to. The
        // returned borrow is tied to the borrow of the link, and through it to the borrow of the
        // tree, so the tree can't be mutated while it lives.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn node_mut(&mut self) -> Option<&mut Node<K, V>> {
        // SAFETY: See `node`. Callers only use this while holding the tree mutably.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    parent: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// Follows left children down from `node` until there are none.
    ///
    /// # Safety
    ///
    /// `node` must be a live node.
    unsafe fn leftmost(mut node: NonNull<Self>) -> NonNull<Self> {
        while let Some(left) = node.as_ref().left.0 {
            node = left;
        }
        node
    }

    /// Asserts that this node's children are ordered around it and point back at it.
    fn assert_local_invariants(&self)
    where
        K: Ord,
    {
        let this = Some(NonNull::from(self));
        if let Some(left) = self.left() {
            assert!(left.key < self.key, "left child is not smaller than its parent");
            assert_eq!(left.parent.0, this, "left child has the wrong parent");
        }
        if let Some(right) = self.right() {
            assert!(right.key >= self.key, "right child is smaller than its parent");
            assert_eq!(right.parent.0, this, "right child has the wrong parent");
        }
    }
}
