use std::sync::Arc;

/// An immutable list cell, shared by reference between versions.
///
/// `Node`s form a DAG, not a tree: several versions' chains can converge on
/// the same suffix. A node is freed once the last [`Arc`] pointing at it —
/// whether held by a version descriptor or by a live [`super::ListCursor`] —
/// is dropped.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Arc<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<Arc<Node<T>>>) -> Arc<Self> {
        Arc::new(Self { value, next })
    }
}
