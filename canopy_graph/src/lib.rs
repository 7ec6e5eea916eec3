// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Graph: the box-and-connector data model behind a hierarchy diagram.
//!
//! Canopy Graph owns the mutable state of an interactive hierarchy diagram:
//! a flat collection of boxes (nodes with an id, a label, and a position) and
//! directed connections between them. It is a pure data model — no painting,
//! no event handling — intended to be driven by a host UI layer.
//!
//! - [`FlowGraph`] holds boxes, connections, and volatile render-handle
//!   bindings, and exposes the mutation and query surface.
//! - [`FlowSnapshot`] seeds a graph at construction and is available as a
//!   derived copy at any time.
//! - [`FlowConfig`] carries box dimensions, collision-avoidance and
//!   diagnostic-logging switches, and a presentation hint for hosts.
//! - [`IdGenerator`] produces session-unique box ids.
//!
//! ## Where this fits
//!
//! The graph is the single owner of diagram state. Interaction state machines
//! (see `canopy_interact`) never touch it directly: they report committed
//! values, and the composition root funnels those into
//! [`FlowGraph::set_position`] and [`FlowGraph::set_label`]. Placement
//! geometry lives in `canopy_placement`; the graph calls into it when adding
//! children.
//!
//! ## Soft failure
//!
//! Operations on ids that name nothing do not error: they are documented
//! no-ops whose return value says whether anything happened. The one implicit
//! precondition — [`FlowGraph::add_child`] expects an existing parent —
//! degrades to a default placement rather than failing. There are no `Result`
//! surfaces in this crate.
//!
//! ## Key operations
//!
//! - [`FlowGraph::add_child`] → new [`BoxId`]; appends a box and its incoming
//!   connection, with fan-out placement and optional collision avoidance.
//! - [`FlowGraph::set_label`] / [`FlowGraph::set_position`] /
//!   [`FlowGraph::set_size`]: find-and-overwrite mutations.
//! - [`FlowGraph::remove`]: deletes a box and its entire subtree, every
//!   connection touching the removal set, and their handle bindings.
//! - [`FlowGraph::set_handle`] / [`FlowGraph::clear_handle`]: render-handle
//!   binding tied to mount/unmount of visual elements.
//! - [`FlowGraph::valid_connections`]: derived on-demand view of connections
//!   whose endpoints are both currently bound.
//! - [`FlowGraph::descendants`] / [`FlowGraph::children_of`]: hierarchy
//!   queries over the connection list.
//!
//! Every mutation can emit a diagnostic snapshot through the [`log`] facade
//! when [`FlowConfig::log_snapshots`] is enabled; the crate never installs a
//! logger itself.
//!
//! This crate is `no_std` and uses `alloc`; the default `std` feature sources
//! the id epoch from the system clock.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod config;
mod graph;
mod ids;
mod types;

pub use config::FlowConfig;
pub use graph::FlowGraph;
pub use ids::IdGenerator;
pub use types::{BoxData, BoxId, Connection, FlowSnapshot};
