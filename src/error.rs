//! Error type shared by [`crate::list`] and [`crate::vtree`].
//!
//! Both components signal exactly one failure kind — an out-of-range access —
//! split into variants so the message names the precondition that actually
//! failed.

/// The single failure kind of this crate: an out-of-range access.
///
/// No operation that returns `Err` mutates the data structure it was called
/// on; either a new version is appended in full, or nothing changes.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// `PersistentList` operation referenced a version id outside the registry.
    #[error("version {0} is not registered")]
    UnknownVersion(u64),
    /// `front`/`back`/`pop_front`/`pop_back` called on a version with size 0.
    #[error("version {0} is empty")]
    EmptyVersion(u64),
    /// Dereferenced the terminal (`end()`) cursor.
    #[error("dereferenced the end iterator")]
    EndIterator,
    /// `VersionTree::insert` named a parent id with no registered event.
    #[error("parent version {0} is not registered")]
    UnknownParent(i64),
    /// `VersionTree::before` referenced a version id with no registered event.
    #[error("version {0} is not registered")]
    UnknownVtreeVersion(i64),
    /// `VersionTree::insert` named a version id that is already registered.
    #[error("version {0} is already registered")]
    DuplicateVersion(i64),
}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = std::result::Result<T, Error>;
