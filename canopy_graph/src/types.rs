// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the flow graph: box identifiers, boxes, connections, and
//! snapshots.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size};

/// Identifier for a box in the graph.
///
/// Ids are unique within a session and immutable after creation. The graph
/// mints them via [`IdGenerator`](crate::IdGenerator); snapshots may carry
/// arbitrary host-chosen ids (for example `"root"`).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxId(String);

impl BoxId {
    /// Wrap an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoxId {
    fn from(id: &str) -> Self {
        Self(String::from(id))
    }
}

impl From<String> for BoxId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single box ("node") in the diagram.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxData {
    /// Unique identifier; immutable after creation.
    pub id: BoxId,
    /// Display label. Mutable; empty strings and duplicates are permitted.
    pub label: String,
    /// Position in diagram coordinates.
    pub position: Point,
    /// Optional per-box override of the default box dimensions.
    pub size: Option<Size>,
}

/// A directed connection from a parent box to a child box.
///
/// Under intended usage both endpoints reference existing boxes while the
/// connection exists, and the connection set forms a forest. The graph does
/// not enforce this; see [`FlowGraph::remove`](crate::FlowGraph::remove) for
/// how malformed sets are tolerated.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    /// Parent end.
    pub start: BoxId,
    /// Child end.
    pub end: BoxId,
}

impl Connection {
    /// Create a connection from `start` to `end`.
    pub fn new(start: impl Into<BoxId>, end: impl Into<BoxId>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A plain copy of a graph's contents.
///
/// Used to seed a new [`FlowGraph`](crate::FlowGraph) at construction (the
/// graph takes the snapshot by value and owns it from then on) and produced
/// on demand by [`FlowGraph::snapshot`](crate::FlowGraph::snapshot), which is
/// also what the diagnostic logger formats.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSnapshot {
    /// Boxes, in insertion order.
    pub boxes: Vec<BoxData>,
    /// Connections, in insertion order.
    pub connections: Vec<Connection>,
}
