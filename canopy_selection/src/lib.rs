// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Selection: at-most-one selection state.
//!
//! A hierarchy diagram highlights at most one box at a time. [`Selection`]
//! models exactly that — one selected key or none — as a plain value with no
//! ownership implications: selecting a box does not keep it alive, and
//! removing a box from the data model does not automatically deselect it.
//! Hosts bridge the two by feeding the ids returned from a removal through
//! [`Selection::retain`].
//!
//! The type is generic over the node key `K` (for example
//! `canopy_graph::BoxId`), so it composes with any data model. Whether a
//! selection is actually painted is a host concern (see the
//! `highlight_selected` flag in `canopy_graph::FlowConfig`).
//!
//! ```
//! use canopy_selection::Selection;
//!
//! let mut selection: Selection<u32> = Selection::new();
//!
//! selection.select(7);
//! assert!(selection.is_selected(&7));
//!
//! // Toggling the selected key clears it; toggling another key moves it.
//! assert!(!selection.toggle(7));
//! assert!(selection.toggle(9));
//! assert_eq!(selection.selected(), Some(&9));
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// Tracks at most one selected node key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection<K> {
    current: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Selection<K> {
    /// Create an empty selection.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Select `key`, returning the previously selected key, if any.
    pub fn select(&mut self, key: K) -> Option<K> {
        self.current.replace(key)
    }

    /// Clear the selection, returning what was selected.
    pub fn clear(&mut self) -> Option<K> {
        self.current.take()
    }

    /// The selected key, if any.
    pub fn selected(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Keep the selection only if `keep` approves it.
    ///
    /// Typically called after a subtree removal with
    /// `|k| !removed.contains(k)`.
    pub fn retain(&mut self, keep: impl FnOnce(&K) -> bool) {
        if let Some(current) = &self.current
            && !keep(current)
        {
            self.current = None;
        }
    }
}

impl<K: PartialEq> Selection<K> {
    /// Whether `key` is the selected key.
    pub fn is_selected(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }

    /// Toggle `key`: select it if it is not selected, clear the selection if
    /// it is. Returns whether `key` ended up selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.is_selected(&key) {
            self.current = None;
            false
        } else {
            self.current = Some(key);
            true
        }
    }

    /// Clear the selection only if `key` is selected.
    ///
    /// Returns whether the selection was cleared.
    pub fn deselect(&mut self, key: &K) -> bool {
        if self.is_selected(key) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
