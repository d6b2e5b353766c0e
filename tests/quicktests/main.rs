//! Property tests run against the public API only.

mod removal;
mod traversal;
