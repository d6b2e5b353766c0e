/// Errors returned by [`Tree`][crate::Tree] lookups and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The search path for the key ended without reaching a node holding it.
    #[error("key not found")]
    KeyNotFound,
}

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
