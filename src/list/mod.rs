//! A fully persistent singly-linked sequence.
//!
//! Every mutation appends a new *version* to an append-only registry while
//! leaving all previous versions intact and independently queryable. Nodes
//! are shared between versions via path copying: a mutation at position `k`
//! allocates `O(k)` fresh nodes for the prefix up to the edit point and
//! reuses the existing suffix.
//!
//! ```
//! use persist::list::PersistentList;
//!
//! let mut list = PersistentList::new();
//! let v1 = list.push_back(0, 1).unwrap();
//! let v2 = list.push_back(v1, 2).unwrap();
//! let v3 = list.push_front(v1, 0).unwrap();
//!
//! assert_eq!(list.size(0).unwrap(), 0);
//! assert_eq!(list.size(v1).unwrap(), 1);
//! assert_eq!(list.size(v2).unwrap(), 2);
//! assert_eq!(list.size(v3).unwrap(), 2);
//! assert_eq!(list.front(v3).unwrap(), 0);
//! assert_eq!(list.back(v2).unwrap(), 2);
//! ```

mod cursor;
mod node;

pub use cursor::ListCursor;

use std::sync::Arc;

use node::Node;

use crate::error::{Error, Result};

/// A snapshot of the sequence: a head pointer plus its length.
struct VersionDescriptor<T> {
    head: Option<Arc<Node<T>>>,
    size: usize,
}

/// Cloning only bumps the head `Arc`'s refcount, regardless of `T` — there is
/// no reason to require `T: Clone` for what is just a cheap handle copy.
impl<T> Clone for VersionDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            size: self.size,
        }
    }
}

/// A fully persistent singly-linked sequence of `T`.
///
/// Construction creates version 0, the empty sequence. Every mutator appends
/// exactly one new version descriptor and returns (directly or via the
/// returned cursor) the new version's identifier, `versions() - 1` after the
/// call. No mutator ever modifies a version already in the registry.
pub struct PersistentList<T> {
    versions: Vec<VersionDescriptor<T>>,
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap: every version descriptor's head is an `Arc`, so cloning a list of
/// any length and history only bumps refcounts, never copies node data.
impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            versions: self.versions.clone(),
        }
    }
}

/// Two lists are equal iff their version registries are element-wise equal:
/// same size per version, and chains sharing the same physical nodes
/// (pointer identity, not value equality — this is the same notion of
/// equality [`ListCursor`]'s `PartialEq` uses).
impl<T> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.versions.len() == other.versions.len()
            && self
                .versions
                .iter()
                .zip(other.versions.iter())
                .all(|(a, b)| {
                    a.size == b.size
                        && match (&a.head, &b.head) {
                            (None, None) => true,
                            (Some(x), Some(y)) => Arc::ptr_eq(x, y),
                            _ => false,
                        }
                })
    }
}

impl<T> Eq for PersistentList<T> {}

impl<T> PersistentList<T> {
    /// Create a new list holding only version 0, the empty sequence.
    pub fn new() -> Self {
        Self {
            versions: vec![VersionDescriptor {
                head: None,
                size: 0,
            }],
        }
    }

    /// Number of registered versions (always at least 1).
    pub fn versions(&self) -> usize {
        self.versions.len()
    }

    fn descriptor(&self, v: u64) -> Result<&VersionDescriptor<T>> {
        self.versions
            .get(usize_from(v))
            .ok_or(Error::UnknownVersion(v))
    }

    /// True iff version `v` has no elements.
    pub fn empty(&self, v: u64) -> Result<bool> {
        Ok(self.descriptor(v)?.size == 0)
    }

    /// Length of version `v`.
    pub fn size(&self, v: u64) -> Result<usize> {
        Ok(self.descriptor(v)?.size)
    }

    /// The cursor one-past-the-end, shared by every version.
    pub fn end(&self) -> ListCursor<T> {
        ListCursor::new(None)
    }

    /// Cursor positioned at the head of version `v`.
    ///
    /// Equals `end()` when `v` is empty.
    pub fn begin(&self, v: u64) -> Result<ListCursor<T>> {
        Ok(ListCursor::new(self.descriptor(v)?.head.clone()))
    }
}

impl<T: Clone> PersistentList<T> {
    /// The first element of version `v`. `O(1)`.
    pub fn front(&self, v: u64) -> Result<T> {
        self.descriptor(v)?
            .head
            .as_ref()
            .map(|n| n.value.clone())
            .ok_or(Error::EmptyVersion(v))
    }

    /// The last element of version `v`. `O(n)`.
    pub fn back(&self, v: u64) -> Result<T> {
        let desc = self.descriptor(v)?;
        let mut node = desc.head.as_ref().ok_or(Error::EmptyVersion(v))?;
        while let Some(next) = &node.next {
            node = next;
        }
        Ok(node.value.clone())
    }

    /// Walks version `v`'s chain until it finds `pos`, collecting cloned
    /// prefix values along the way.
    ///
    /// Returns `(prefix, tail)` where `tail` is the node `pos` refers to
    /// (shared, not copied), or `None` if `pos` was never reached (i.e. `pos`
    /// is `end()`, or doesn't belong to `v`'s chain at all).
    fn split_at(&self, v: u64, pos: &ListCursor<T>) -> Result<(Vec<T>, Option<Arc<Node<T>>>)> {
        let mut prefix = Vec::new();
        let mut cur = self.descriptor(v)?.head.clone();
        let target = pos.node.as_ref();

        loop {
            let Some(node) = cur else {
                return Ok((prefix, None));
            };
            if let Some(target) = target {
                if Arc::ptr_eq(&node, target) {
                    return Ok((prefix, Some(node)));
                }
            }
            prefix.push(node.value.clone());
            cur = node.next.clone();
        }
    }

    /// Insert `x` immediately before `pos` in version `v`.
    ///
    /// Registers a new version and returns a cursor at the newly inserted
    /// node. Every node from `v`'s head up to (not including) `pos` is
    /// copied; the chain from `pos` onward is shared structurally with `v`.
    pub fn insert(&mut self, v: u64, pos: &ListCursor<T>, x: T) -> Result<ListCursor<T>> {
        let size = self.descriptor(v)?.size;

        if size == 0 {
            let node = Node::new(x, None);
            let cursor = ListCursor::new(Some(Arc::clone(&node)));
            self.versions.push(VersionDescriptor {
                head: Some(node),
                size: 1,
            });
            tracing::trace!(source = v, "persist::list: insert into empty version");
            return Ok(cursor);
        }

        let (prefix, suffix) = self.split_at(v, pos)?;
        let new_node = Node::new(x, suffix);
        let cursor = ListCursor::new(Some(Arc::clone(&new_node)));

        let mut tail = new_node;
        let copied = prefix.len();
        for value in prefix.into_iter().rev() {
            tail = Node::new(value, Some(tail));
        }

        self.versions.push(VersionDescriptor {
            head: Some(tail),
            size: size + 1,
        });
        tracing::trace!(
            source = v,
            nodes_copied = copied,
            "persist::list: insert"
        );
        Ok(cursor)
    }

    /// Remove the node at `pos` from version `v`.
    ///
    /// Returns a cursor at the node following the removed one. No-op
    /// (returns `end()`, appends no version) if `v` is empty, `pos` is
    /// `end()`, or `pos` does not belong to `v`'s chain.
    pub fn erase(&mut self, v: u64, pos: &ListCursor<T>) -> Result<ListCursor<T>> {
        let size = self.descriptor(v)?.size;
        if size == 0 || pos.is_end() {
            return Ok(self.end());
        }

        let mut prefix = Vec::new();
        let mut cur = self.descriptor(v)?.head.clone();
        let target = pos.node.as_ref().expect("checked is_end above");
        let suffix = loop {
            let Some(node) = cur else {
                // `pos` does not belong to this version's chain.
                return Ok(self.end());
            };
            if Arc::ptr_eq(&node, target) {
                break node.next.clone();
            }
            prefix.push(node.value.clone());
            cur = node.next.clone();
        };

        let cursor = ListCursor::new(suffix.clone());
        let mut tail = suffix;
        let copied = prefix.len();
        for value in prefix.into_iter().rev() {
            tail = Some(Node::new(value, tail));
        }

        self.versions.push(VersionDescriptor {
            head: tail,
            size: size - 1,
        });
        tracing::trace!(source = v, nodes_copied = copied, "persist::list: erase");
        Ok(cursor)
    }

    /// Insert `x` before the head of version `v`. Returns the new version id.
    pub fn push_front(&mut self, v: u64, x: T) -> Result<u64> {
        let pos = self.begin(v)?;
        self.insert(v, &pos, x)?;
        Ok(self.versions() as u64 - 1)
    }

    /// Remove the head of version `v`. Returns the new version id.
    ///
    /// Fails if `v` is empty.
    pub fn pop_front(&mut self, v: u64) -> Result<u64> {
        if self.empty(v)? {
            return Err(Error::EmptyVersion(v));
        }
        let pos = self.begin(v)?;
        self.erase(v, &pos)?;
        Ok(self.versions() as u64 - 1)
    }

    /// Insert `x` after the last element of version `v`. Returns the new
    /// version id.
    pub fn push_back(&mut self, v: u64, x: T) -> Result<u64> {
        let pos = self.end();
        self.insert(v, &pos, x)?;
        Ok(self.versions() as u64 - 1)
    }

    /// Remove the last element of version `v`. Returns the new version id.
    ///
    /// Fails if `v` is empty.
    pub fn pop_back(&mut self, v: u64) -> Result<u64> {
        if self.empty(v)? {
            return Err(Error::EmptyVersion(v));
        }
        let pos = self.last_cursor(v)?;
        self.erase(v, &pos)?;
        Ok(self.versions() as u64 - 1)
    }

    fn last_cursor(&self, v: u64) -> Result<ListCursor<T>> {
        let mut node = self.descriptor(v)?.head.clone().ok_or(Error::EmptyVersion(v))?;
        while let Some(next) = node.next.clone() {
            node = next;
        }
        Ok(ListCursor::new(Some(node)))
    }
}

fn usize_from(v: u64) -> usize {
    v as usize
}
