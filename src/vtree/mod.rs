//! An order-maintenance index over a forest of versions.
//!
//! `VersionTree` implements the Bender–Cole–Demaine–Farach-Colton–Zito
//! scheme for the "list order" problem, specialized to preorder ancestry: a
//! version is registered once, under a previously-registered parent, and
//! from then on `before(a, b)` answers "is `a` an ancestor of `b`?" in O(1)
//! by comparing dense integer labels — no tree walk required.
//!
//! Every version gets two events in a single shared preorder sequence: an
//! open event (keyed by the version itself) and a close event (keyed by its
//! negation, with [`event::NONE`] standing in for the root's `-0`). `a` is an
//! ancestor of `b` exactly when `b`'s open event's label falls strictly
//! between `a`'s open and close labels.
//!
//! Unlike [`crate::list::PersistentList`], this structure is not persistent:
//! `insert` mutates in place, and there is exactly one current forest.

mod config;
mod event;
mod label;

pub use config::VersionTreeConfig;

use std::collections::HashMap;

use event::{close_key, Event, NONE};

use crate::error::{Error, Result};

/// Root version identifier, always pre-registered.
pub const ROOT: i64 = 0;

/// An order-maintenance index over a version forest, supporting O(1)
/// amortized insertion and O(1) ancestor queries.
///
/// See the [module documentation](self) for the algorithm this implements.
pub struct VersionTree {
    config: VersionTreeConfig,
    capacity: usize,
    events: Vec<Event>,
    label_to_event: Vec<Option<usize>>,
    key_to_event: HashMap<i64, usize>,
    root_open: usize,
    count: usize,
}

impl Default for VersionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for VersionTree {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            capacity: self.capacity,
            events: self.events.clone(),
            label_to_event: self.label_to_event.clone(),
            key_to_event: self.key_to_event.clone(),
            root_open: self.root_open,
            count: self.count,
        }
    }
}

/// Equal iff the event sequence, label table, and reverse map are all equal.
impl PartialEq for VersionTree {
    fn eq(&self, other: &Self) -> bool {
        self.events == other.events
            && self.label_to_event == other.label_to_event
            && self.key_to_event == other.key_to_event
    }
}

impl Eq for VersionTree {}

impl VersionTree {
    /// A fresh tree containing only the root version (`0`).
    pub fn new() -> Self {
        Self::with_config(VersionTreeConfig::default())
    }

    /// A fresh tree with a non-default density threshold / initial capacity.
    pub fn with_config(config: VersionTreeConfig) -> Self {
        config.validate();
        let capacity = config.initial_capacity;

        let events = vec![
            Event {
                key: ROOT,
                label: 0,
                prev: None,
                next: Some(1),
            },
            Event {
                key: NONE,
                label: capacity - 1,
                prev: Some(0),
                next: None,
            },
        ];

        let mut label_to_event = vec![None; capacity];
        label_to_event[0] = Some(0);
        label_to_event[capacity - 1] = Some(1);

        let mut key_to_event = HashMap::new();
        key_to_event.insert(ROOT, 0);
        key_to_event.insert(NONE, 1);

        Self {
            config,
            capacity,
            events,
            label_to_event,
            key_to_event,
            root_open: 0,
            count: 1,
        }
    }

    /// Number of registered versions, including the root.
    pub fn size(&self) -> usize {
        self.count
    }

    /// True iff no version besides the root has been registered.
    pub fn empty(&self) -> bool {
        self.count == 1
    }

    /// Current size of the dense label space. Exposed for tests and
    /// diagnostics; grows in powers of two as relabeling runs out of room.
    pub fn label_capacity(&self) -> usize {
        self.capacity
    }

    /// Discard every version but the root, resetting the label space.
    ///
    /// Unlike [`crate::list::PersistentList`], `VersionTree` keeps no history:
    /// this destroys the forest built so far.
    pub fn clear(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// Register `v` as a new child of `parent`.
    ///
    /// `v` becomes the last (rightmost) child of `parent` in preorder.
    ///
    /// # Errors
    /// [`Error::UnknownParent`] if `parent` hasn't been registered.
    /// [`Error::DuplicateVersion`] if `v` is already registered.
    pub fn insert(&mut self, v: i64, parent: i64) -> Result<()> {
        if self.key_to_event.contains_key(&v) {
            return Err(Error::DuplicateVersion(v));
        }
        let parent_close_key = close_key(parent);
        let parent_close = *self
            .key_to_event
            .get(&parent_close_key)
            .ok_or(Error::UnknownParent(parent))?;

        let insert_after = self.events[parent_close]
            .prev
            .expect("a close event always has a predecessor, at least its own open event");

        let open_idx = self.splice_after(insert_after, v);
        self.assign_label(open_idx);

        let close_idx = self.splice_after(open_idx, close_key(v));
        self.assign_label(close_idx);

        self.key_to_event.insert(v, open_idx);
        self.key_to_event.insert(close_key(v), close_idx);
        self.count += 1;

        tracing::trace!(version = v, parent, "vtree: registered version");
        Ok(())
    }

    /// Is `a` an ancestor of `b` (inclusive) in the registered forest?
    ///
    /// `before(v, v)` is `true`: a version is its own ancestor under this
    /// comparator, per the non-strict `L_aₒ ≤ L_bₒ ∧ L_bᶜ ≤ L_aᶜ` definition.
    ///
    /// # Errors
    /// [`Error::UnknownVtreeVersion`] if either `a` or `b` is unregistered.
    pub fn before(&self, a: i64, b: i64) -> Result<bool> {
        let a_open = self.event_for(a)?;
        let a_close = self.event_for(close_key(a))?;
        let b_open = self.event_for(b)?;

        let a_open_label = self.events[a_open].label;
        let a_close_label = self.events[a_close].label;
        let b_open_label = self.events[b_open].label;

        Ok(a_open_label <= b_open_label && b_open_label <= a_close_label)
    }

    fn event_for(&self, key: i64) -> Result<usize> {
        self.key_to_event
            .get(&key)
            .copied()
            .ok_or(Error::UnknownVtreeVersion(key))
    }

    /// Splice a new event with the given key directly after `after`, wiring
    /// up its neighbours. The new event's label is left at `0`; the caller
    /// must follow up with [`Self::assign_label`].
    fn splice_after(&mut self, after: usize, key: i64) -> usize {
        let old_next = self.events[after].next;
        let idx = self.events.len();
        self.events.push(Event {
            key,
            label: 0,
            prev: Some(after),
            next: old_next,
        });
        self.events[after].next = Some(idx);
        if let Some(n) = old_next {
            self.events[n].prev = Some(idx);
        }
        idx
    }
}
