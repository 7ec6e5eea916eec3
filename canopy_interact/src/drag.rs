// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-drag state machine for repositioning boxes.
//!
//! A drag is a pure translation: on press the machine captures the offset
//! between the pointer and the box position, and every subsequent pointer
//! position maps to `pointer - offset`. The box therefore never jumps to the
//! pointer on press, no matter where inside the box the press landed.
//!
//! ## Usage
//!
//! ```
//! use canopy_interact::drag::DragState;
//! use kurbo::Point;
//!
//! let mut drag: DragState<&str> = DragState::new();
//!
//! // Press at (50, 50) on a box whose position is (10, 10).
//! assert!(drag.begin("node", Point::new(50.0, 50.0), Point::new(10.0, 10.0)));
//!
//! // Pointer moves to (60, 70): the box follows, offset preserved.
//! assert_eq!(drag.update(Point::new(60.0, 70.0)), Some(Point::new(20.0, 30.0)));
//!
//! // Release: the final position is committed exactly once.
//! let commit = drag.finish().expect("release ends the drag");
//! assert_eq!(commit.target, "node");
//! assert_eq!(commit.position, Point::new(20.0, 30.0));
//! assert!(drag.finish().is_none());
//! ```
//!
//! ## Listener discipline
//!
//! While a drag is active the host must track the pointer globally (document
//! level), not on the box's own element — releases outside the box bounds
//! still end the drag. The machine's transitions give the host an exact
//! attach/detach contract:
//!
//! - attach global move/release listeners when [`DragState::begin`] returns
//!   `true` (it returns `false` while a drag is already active, so a `true`
//!   return is a genuine `Idle -> Dragging` entry);
//! - detach them when [`DragState::finish`] returns `Some` (the only
//!   `Dragging -> Idle` exit).
//!
//! Every entry therefore has exactly one matching detach. There is no cancel
//! path: release is the only way out of `Dragging`.

use kurbo::{Point, Vec2};

/// Phase of the drag machine.
#[derive(Clone, Debug, PartialEq)]
enum Phase<K> {
    Idle,
    Dragging {
        target: K,
        /// Pointer offset relative to the box position, captured at press.
        grab: Vec2,
        position: Point,
    },
}

/// Final value of a completed drag, produced once per drag by
/// [`DragState::finish`].
///
/// The host funnels this into its data model (for example
/// `canopy_graph::FlowGraph::set_position`); the machine itself never mutates
/// a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct DragCommit<K> {
    /// The box that was dragged.
    pub target: K,
    /// Its final position.
    pub position: Point,
}

/// Drag state machine: `Idle | Dragging`, generic over the node key `K`.
///
/// At most one drag is active at a time; see the [module docs](self) for the
/// listener attach/detach contract tied to the transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState<K> {
    phase: Phase<K>,
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DragState<K> {
    /// Create an idle drag machine.
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Start dragging `target`: the `Idle -> Dragging` transition.
    ///
    /// `pointer` is the press position and `origin` the box's current
    /// position; their difference is the grab offset preserved for the rest
    /// of the drag.
    ///
    /// Returns `true` on a genuine transition. While a drag is already
    /// active this is a no-op returning `false` — the active drag keeps its
    /// target and offset.
    pub fn begin(&mut self, target: K, pointer: Point, origin: Point) -> bool {
        if matches!(self.phase, Phase::Dragging { .. }) {
            return false;
        }
        self.phase = Phase::Dragging {
            target,
            grab: pointer - origin,
            position: origin,
        };
        true
    }

    /// Feed a pointer position; returns the box's new position while
    /// `Dragging`.
    ///
    /// Stray moves while `Idle` are ignored and return `None`.
    pub fn update(&mut self, pointer: Point) -> Option<Point> {
        let Phase::Dragging { grab, position, .. } = &mut self.phase else {
            return None;
        };
        *position = pointer - *grab;
        Some(*position)
    }

    /// End the drag: the `Dragging -> Idle` transition.
    ///
    /// Yields the commit for the completed drag exactly once; calling
    /// `finish` while `Idle` returns `None`.
    pub fn finish(&mut self) -> Option<DragCommit<K>> {
        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging {
                target, position, ..
            } => Some(DragCommit { target, position }),
            Phase::Idle => None,
        }
    }

    /// Whether a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The box being dragged, if any.
    pub fn target(&self) -> Option<&K> {
        match &self.phase {
            Phase::Dragging { target, .. } => Some(target),
            Phase::Idle => None,
        }
    }

    /// The in-progress position of the dragged box, if any.
    pub fn position(&self) -> Option<Point> {
        match &self.phase {
            Phase::Dragging { position, .. } => Some(*position),
            Phase::Idle => None,
        }
    }
}
