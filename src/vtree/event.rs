/// A single entry in the preorder event list: either the open or the close
/// bracket of a registered version.
///
/// Events live in an append-only arena (`VersionTree::events`); `prev`/`next`
/// thread them into the doubly-linked preorder sequence the algorithm
/// description calls the "event list". An event's arena index is permanent —
/// only its `label` changes, when relabeling redistributes a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Event {
    /// `v` for an open event, `-v` (or `NONE` for the root) for a close event.
    pub(crate) key: i64,
    pub(crate) label: usize,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// The reserved sentinel version-key.
///
/// The root version's identifier is `0`, and its close event would naturally
/// carry key `-0`, which is the same integer as its own open event's key
/// `0`. `NONE` breaks that collision: the root's close event is keyed by
/// `NONE` instead of by negation. Because the root's close event is always
/// the last event in the whole preorder sequence, label `M - 1` — the right
/// sentinel — permanently maps to it. User version identifiers must not
/// equal `NONE`.
pub const NONE: i64 = i64::MIN;

/// The version-key carried by `v`'s close event.
pub(crate) fn close_key(v: i64) -> i64 {
    if v == 0 { NONE } else { -v }
}
