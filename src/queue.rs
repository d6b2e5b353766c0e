//! The FIFO collaborator used by breadth-first traversal.
//!
//! Any type implementing [`Queue`] can drive [`Tree::bfs_with`][crate::Tree::bfs_with] and
//! [`Tree::level_order_with`][crate::Tree::level_order_with]. [`VecDeque`] is the default.

use std::collections::VecDeque;

/// A first-in, first-out queue.
///
/// Implementations must be unbounded and should enqueue and dequeue in amortized `O(1)`.
pub trait Queue<T> {
    /// Appends `item` to the back of the queue.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the item at the front of the queue, or `None` when it is empty.
    fn dequeue(&mut self) -> Option<T>;
}

impl<T> Queue<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }
}
