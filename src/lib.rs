//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes keep a pointer back
//! to their parent, along with depth-first and breadth-first traversals over it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key. Duplicate keys are kept, not overwritten.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does nothing to limit its height, so
//! inserting keys in sorted order produces a tree that is really a linked list and every
//! operation becomes `O(N)`. BSTs naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! for (key, value) in [(5, 'e'), (3, 'c'), (8, 'h'), (1, 'a'), (4, 'd')] {
//!     tree.insert(key, value);
//! }
//!
//! let mut values: Vec<char> = Vec::new();
//! tree.dfs_in_order(&mut values);
//! assert_eq!(values, ['a', 'c', 'd', 'e', 'h']);
//!
//! assert_eq!(tree.remove(&3), Ok('c'));
//! assert_eq!(tree.find(&3), Err(Error::KeyNotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod queue;
pub mod traversal;
mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use queue::Queue;
pub use traversal::Subtree;
pub use tree::Tree;
