use std::sync::Arc;

use super::node::Node;
use crate::error::{Error, Result};

/// A cursor into a [`super::PersistentList`]'s node graph.
///
/// A cursor holds one strong reference into the node graph (or none, for the
/// terminal `end()` cursor) and is thereby itself an owner of the node and,
/// transitively, of its suffix. This lets a cursor outlive the version it was
/// obtained from: mutating that version afterwards cannot invalidate it,
/// since path-copying never touches nodes already shared with the cursor.
pub struct ListCursor<T> {
    pub(crate) node: Option<Arc<Node<T>>>,
}

impl<T> ListCursor<T> {
    pub(crate) fn new(node: Option<Arc<Node<T>>>) -> Self {
        Self { node }
    }

    /// True iff this is the terminal cursor (`end()`).
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Borrow the value at this cursor.
    ///
    /// Fails with [`Error::EndIterator`] if this is the terminal cursor.
    pub fn get(&self) -> Result<&T> {
        self.node.as_ref().map(|n| &n.value).ok_or(Error::EndIterator)
    }

    /// The cursor one position further along the chain.
    ///
    /// Advancing past the last element yields `end()`.
    pub fn advance(&self) -> Self {
        Self::new(self.node.as_ref().and_then(|n| n.next.clone()))
    }
}

impl<T> Clone for ListCursor<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

/// The end cursor compares equal across versions, and is represented by the
/// absence of a node reference, per the data model's invariant.
impl<T> PartialEq for ListCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> Eq for ListCursor<T> {}

/// Consumes the cursor, yielding cloned values from this position onward.
///
/// Convenient for collecting a version's contents: `list.begin(v)?.collect()`.
impl<T: Clone> Iterator for ListCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.node.take()?;
        self.node = node.next.clone();
        Some(node.value.clone())
    }
}
