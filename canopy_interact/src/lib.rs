// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Interact: finite-state machines for direct manipulation of diagram
//! boxes.
//!
//! This crate models the two interactive gestures of a hierarchy diagram as
//! explicit state machines, decoupled from any event system or rendering
//! layer:
//!
//! - [`drag::DragState`] — `Idle | Dragging`. Translates pointer positions
//!   into box positions while preserving the grab offset, and yields a
//!   [`drag::DragCommit`] exactly once on release.
//! - [`edit::LabelEdit`] — `Viewing | Editing`. Holds an in-progress label
//!   draft and yields a trimmed [`edit::LabelCommit`] only when the draft
//!   meaningfully changed.
//!
//! Both machines are generic over the node key `K`, so callers can use any
//! handle (`canopy_graph::BoxId`, an integer, a string slice). Neither
//! machine ever mutates a graph: the host's composition root funnels the
//! commit values into the data model, keeping all state ownership in one
//! place.
//!
//! The machines receive events as plain method calls — pointer positions as
//! [`kurbo::Point`], key presses as [`edit::EditKey`] — and report what the
//! host should do through their return values. Attach/detach of the host's
//! global listeners is tied to the state transitions; see the listener
//! discipline notes on [`drag::DragState`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod edit;

pub use drag::{DragCommit, DragState};
pub use edit::{EditKey, LabelCommit, LabelEdit};
