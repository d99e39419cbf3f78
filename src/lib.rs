//! # persist — a fully persistent sequence, and an order-maintenance index
//!
//! `persist` provides two data structures used together to keep history
//! queryable without paying for copies:
//!
//! - [`list::PersistentList`]: a fully persistent singly-linked sequence.
//!   Every mutation produces a new version; every prior version remains
//!   intact and independently readable. Structural sharing via path copying
//!   means a mutation near the front is cheap, regardless of how many
//!   versions already exist.
//! - [`vtree::VersionTree`]: an order-maintenance index over a forest of
//!   version identifiers, answering "is `a` an ancestor of `b`?" in O(1)
//!   amortized, without walking the tree.
//!
//! Neither structure depends on the other; `VersionTree` is the tool you
//! reach for when a consumer of `PersistentList` (or any other versioned
//! structure) needs to reason about branch ancestry — e.g. to decide whether
//! one version is derived from another — without storing and walking parent
//! pointers by hand.
//!
//! ## Quick start
//!
//! ```
//! use persist::list::PersistentList;
//! use persist::vtree::VersionTree;
//!
//! let mut list = PersistentList::new();
//! let v1 = list.push_back(0, "a").unwrap();
//! let v2 = list.push_back(v1, "b").unwrap();
//! assert_eq!(list.size(v1).unwrap(), 1);
//! assert_eq!(list.size(v2).unwrap(), 2);
//!
//! let mut versions = VersionTree::new();
//! versions.insert(v1 as i64, 0).unwrap();
//! versions.insert(v2 as i64, v1 as i64).unwrap();
//! assert!(versions.before(0, v2 as i64).unwrap());
//! ```

pub mod error;
pub mod list;
pub mod vtree;

pub use error::{Error, Result};
pub use list::PersistentList;
pub use vtree::VersionTree;
