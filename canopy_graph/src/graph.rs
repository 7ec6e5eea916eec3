// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core graph implementation: structure, mutations, derived views.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use canopy_placement::{DEFAULT_ORIGIN, Footprint, child_anchor, find_clear_position};
use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Size};
use smallvec::SmallVec;

use crate::config::FlowConfig;
use crate::ids::IdGenerator;
use crate::types::{BoxData, BoxId, Connection, FlowSnapshot};

/// The mutable box-and-connector model backing a hierarchy diagram.
///
/// The type parameter `H` is the host's opaque render handle — whatever the
/// rendering layer uses to identify a mounted visual element. The graph never
/// inspects handles; their presence in the binding is the only thing that
/// matters (see [`FlowGraph::valid_connections`]). `H` defaults to `()` so
/// headless callers can ignore the machinery entirely.
///
/// All state lives in memory for the duration of the owning UI session.
/// Mutations complete fully before control returns to the caller, so
/// consumers observe either the pre- or post-mutation graph, never a box
/// without its connection.
///
/// ## Example
///
/// ```
/// use canopy_graph::{BoxId, FlowConfig, FlowGraph, FlowSnapshot};
///
/// let mut graph: FlowGraph = FlowGraph::with_epoch(
///     FlowSnapshot::default(),
///     FlowConfig::default(),
///     1_700_000_000_000,
/// );
///
/// // The designated parent does not exist, so the child lands at the
/// // default origin; the connection still records the phantom parent.
/// let child = graph.add_child(&BoxId::from("root"));
/// assert_eq!(graph.len(), 1);
/// assert_eq!(graph.connections()[0].end, child);
/// ```
pub struct FlowGraph<H = ()> {
    boxes: Vec<BoxData>,
    connections: Vec<Connection>,
    /// live render handles, keyed by box id
    handles: HashMap<BoxId, H>,
    ids: IdGenerator,
    config: FlowConfig,
}

impl<H> fmt::Debug for FlowGraph<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowGraph")
            .field("boxes", &self.boxes.len())
            .field("connections", &self.connections.len())
            .field("handles", &self.handles.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<H> FlowGraph<H> {
    /// Create a graph seeded from `snapshot`, with a caller-supplied session
    /// epoch (milliseconds) for id generation.
    ///
    /// The snapshot is taken by value: the graph owns its copy and never
    /// retains a reference to caller storage. This constructor is fully
    /// deterministic and is what tests and `no_std` hosts use.
    pub fn with_epoch(snapshot: FlowSnapshot, config: FlowConfig, epoch_ms: u64) -> Self {
        Self {
            boxes: snapshot.boxes,
            connections: snapshot.connections,
            handles: HashMap::new(),
            ids: IdGenerator::new(epoch_ms),
            config,
        }
    }

    /// Create a graph seeded from `snapshot`, reading the session epoch from
    /// the system clock.
    #[cfg(feature = "std")]
    pub fn new(snapshot: FlowSnapshot, config: FlowConfig) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "millisecond epochs fit in u64 far beyond any session lifetime"
        )]
        let epoch_ms = since_epoch.as_millis() as u64;
        Self::with_epoch(snapshot, config, epoch_ms)
    }

    // --- queries ---

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the graph holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Look up a box by id.
    pub fn get(&self, id: &BoxId) -> Option<&BoxData> {
        self.boxes.iter().find(|b| b.id == *id)
    }

    /// Whether a box with this id exists.
    pub fn contains(&self, id: &BoxId) -> bool {
        self.get(id).is_some()
    }

    /// All boxes, in insertion order.
    pub fn boxes(&self) -> &[BoxData] {
        &self.boxes
    }

    /// All connections, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Ids of the direct children of `id`, in connection order.
    pub fn children_of<'a>(&'a self, id: &'a BoxId) -> impl Iterator<Item = &'a BoxId> + 'a {
        self.connections
            .iter()
            .filter(move |c| c.start == *id)
            .map(|c| &c.end)
    }

    /// Number of direct children of `id`.
    pub fn child_count(&self, id: &BoxId) -> usize {
        self.children_of(id).count()
    }

    /// Ids of every transitive descendant of `id`, excluding `id` itself.
    ///
    /// The walk follows connections from `start` to `end` iteratively with an
    /// explicit visited set, so it terminates even on malformed (cyclic)
    /// connection sets that cannot arise through [`FlowGraph::add_child`].
    /// The returned order is unspecified.
    pub fn descendants(&self, id: &BoxId) -> Vec<BoxId> {
        let mut subtree = self.collect_subtree(id);
        subtree.remove(id);
        subtree.into_iter().collect()
    }

    /// The configuration the graph was built with.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// A plain copy of the graph's current contents.
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            boxes: self.boxes.clone(),
            connections: self.connections.clone(),
        }
    }

    // --- mutations ---

    /// Add a new child box under `parent` and connect them.
    ///
    /// The parent's existence is not a precondition. When it exists, the
    /// child's candidate position fans out from the parent by its current
    /// child count (see [`child_anchor`]); when it does not, the candidate is
    /// [`DEFAULT_ORIGIN`] and the parent is *not* auto-created — the new
    /// connection still records `parent` as its start. With
    /// [`FlowConfig::collision_avoidance`] enabled, the candidate is then
    /// pushed through [`find_clear_position`] against every existing box.
    ///
    /// The box and its incoming connection are appended back-to-back before
    /// the call returns. Returns the new box's id.
    pub fn add_child(&mut self, parent: &BoxId) -> BoxId {
        let id = self.ids.next_id();
        let base = match self.get(parent) {
            Some(p) => child_anchor(p.position, self.child_count(parent)),
            None => DEFAULT_ORIGIN,
        };
        let position = if self.config.collision_avoidance {
            let occupied: Vec<Point> = self.boxes.iter().map(|b| b.position).collect();
            find_clear_position(base, &occupied, self.footprint())
        } else {
            base
        };

        self.boxes.push(BoxData {
            id: id.clone(),
            label: format!("Child {id}"),
            position,
            size: None,
        });
        self.connections.push(Connection {
            start: parent.clone(),
            end: id.clone(),
        });
        self.log_snapshot("child added");
        id
    }

    /// Overwrite the label of `id`. Empty and duplicate labels are permitted.
    ///
    /// Missing ids fail softly: the call is a no-op and returns `false`.
    pub fn set_label(&mut self, id: &BoxId, label: &str) -> bool {
        let Some(b) = self.boxes.iter_mut().find(|b| b.id == *id) else {
            return false;
        };
        b.label = String::from(label);
        self.log_snapshot("label updated");
        true
    }

    /// Overwrite the position of `id`.
    ///
    /// Missing ids fail softly: the call is a no-op and returns `false`.
    pub fn set_position(&mut self, id: &BoxId, position: Point) -> bool {
        let Some(b) = self.boxes.iter_mut().find(|b| b.id == *id) else {
            return false;
        };
        b.position = position;
        self.log_snapshot("position updated");
        true
    }

    /// Overwrite the per-box size override of `id` (`None` restores the
    /// default dimensions).
    ///
    /// Missing ids fail softly: the call is a no-op and returns `false`.
    pub fn set_size(&mut self, id: &BoxId, size: Option<Size>) -> bool {
        let Some(b) = self.boxes.iter_mut().find(|b| b.id == *id) else {
            return false;
        };
        b.size = size;
        self.log_snapshot("size updated");
        true
    }

    /// Remove `id` and its entire subtree.
    ///
    /// The removal set is `id` plus every transitive descendant reached by
    /// following connections from `start` to `end`. Every box in the set,
    /// every connection touching the set at either end, and every render
    /// handle bound to the set is removed. The walk is driven by the
    /// connection list alone, so removing an id that has outgoing connections
    /// but no box of its own still removes the orphaned subtree underneath it.
    ///
    /// Returns the ids of the boxes that were removed; empty when the id
    /// named nothing.
    pub fn remove(&mut self, id: &BoxId) -> Vec<BoxId> {
        let doomed = self.collect_subtree(id);
        let removed: Vec<BoxId> = self
            .boxes
            .iter()
            .filter(|b| doomed.contains(&b.id))
            .map(|b| b.id.clone())
            .collect();
        let touches_connection = self
            .connections
            .iter()
            .any(|c| doomed.contains(&c.start) || doomed.contains(&c.end));
        if removed.is_empty() && !touches_connection {
            return removed;
        }

        self.connections
            .retain(|c| !doomed.contains(&c.start) && !doomed.contains(&c.end));
        self.boxes.retain(|b| !doomed.contains(&b.id));
        for gone in &doomed {
            self.handles.remove(gone);
        }
        self.log_snapshot("box removed");
        removed
    }

    // --- render-handle binding ---

    /// Bind the render handle for `id`'s mounted visual element.
    ///
    /// Rebinding replaces the previous handle. The handle is opaque: its
    /// presence is the only thing the graph ever checks.
    pub fn set_handle(&mut self, id: &BoxId, handle: H) {
        self.handles.insert(id.clone(), handle);
    }

    /// Drop the render handle for `id`, e.g. when its element unmounts.
    ///
    /// Returns whether a handle was bound.
    pub fn clear_handle(&mut self, id: &BoxId) -> bool {
        self.handles.remove(id).is_some()
    }

    /// Whether `id` currently has a bound render handle.
    pub fn has_handle(&self, id: &BoxId) -> bool {
        self.handles.contains_key(id)
    }

    /// Borrow the render handle bound to `id`, if any.
    pub fn handle(&self, id: &BoxId) -> Option<&H> {
        self.handles.get(id)
    }

    /// Connections whose endpoints both have a bound render handle.
    ///
    /// This is a derived view recomputed on demand from the current
    /// connection list and handle bindings; there is no cached state to
    /// invalidate.
    pub fn valid_connections<'a>(&'a self) -> impl Iterator<Item = &'a Connection> + 'a {
        let handles = &self.handles;
        self.connections
            .iter()
            .filter(move |c| handles.contains_key(&c.start) && handles.contains_key(&c.end))
    }

    // --- internals ---

    /// Collect `id` plus its transitive descendants by walking the connection
    /// list iteratively.
    fn collect_subtree(&self, id: &BoxId) -> HashSet<BoxId> {
        let mut visited: HashSet<BoxId> = HashSet::new();
        let mut stack: SmallVec<[&BoxId; 8]> = SmallVec::new();
        stack.push(id);
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for c in self.connections.iter().filter(|c| c.start == *current) {
                if !visited.contains(&c.end) {
                    stack.push(&c.end);
                }
            }
        }
        visited
    }

    fn footprint(&self) -> Footprint {
        Footprint::new(self.config.box_width, self.config.box_height)
    }

    fn log_snapshot(&self, action: &str) {
        if self.config.log_snapshots {
            log::debug!("{action}: {:?}", self.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const EPOCH: u64 = 1_700_000_000_000;

    fn seeded() -> FlowSnapshot {
        FlowSnapshot {
            boxes: vec![BoxData {
                id: "root".into(),
                label: String::from("Root"),
                position: Point::new(300.0, 100.0),
                size: None,
            }],
            connections: Vec::new(),
        }
    }

    fn graph(snapshot: FlowSnapshot) -> FlowGraph {
        FlowGraph::with_epoch(snapshot, FlowConfig::default(), EPOCH)
    }

    fn graph_without_avoidance(snapshot: FlowSnapshot) -> FlowGraph {
        let config = FlowConfig {
            collision_avoidance: false,
            ..FlowConfig::default()
        };
        FlowGraph::with_epoch(snapshot, config, EPOCH)
    }

    #[test]
    fn add_child_appends_box_and_connection() {
        let mut g = graph(seeded());
        let root = BoxId::from("root");

        let child = g.add_child(&root);

        assert_eq!(g.len(), 2);
        assert_eq!(g.connections().len(), 1);
        assert_eq!(g.connections()[0], Connection::new("root", child.as_str()));

        let data = g.get(&child).expect("child should exist");
        assert_eq!(data.label, format!("Child {child}"));
        assert_eq!(data.size, None);
    }

    #[test]
    fn add_child_fans_out_by_child_count() {
        let mut g = graph_without_avoidance(seeded());
        let root = BoxId::from("root");

        let first = g.add_child(&root);
        let second = g.add_child(&root);
        let third = g.add_child(&root);

        // parent.x + n*180 - 90, parent.y + 150
        assert_eq!(g.get(&first).unwrap().position, Point::new(210.0, 250.0));
        assert_eq!(g.get(&second).unwrap().position, Point::new(390.0, 250.0));
        assert_eq!(g.get(&third).unwrap().position, Point::new(570.0, 250.0));
    }

    #[test]
    fn add_child_missing_parent_defaults_to_origin() {
        let mut g = graph(FlowSnapshot::default());
        let phantom = BoxId::from("root");

        let child = g.add_child(&phantom);

        // The phantom parent is not auto-created.
        assert_eq!(g.len(), 1);
        assert!(!g.contains(&phantom));
        assert_eq!(g.get(&child).unwrap().position, Point::new(100.0, 100.0));
        assert_eq!(
            g.connections(),
            &[Connection::new("root", child.as_str())],
            "connection must still record the phantom parent"
        );
    }

    #[test]
    fn add_child_avoids_occupied_anchor() {
        let mut snapshot = seeded();
        // Park a box exactly on the first child anchor of "root".
        snapshot.boxes.push(BoxData {
            id: "squatter".into(),
            label: String::from("Squatter"),
            position: Point::new(210.0, 250.0),
            size: None,
        });
        let mut g = graph(snapshot);
        let root = BoxId::from("root");

        let child = g.add_child(&root);
        let placed = g.get(&child).unwrap().position;

        assert_ne!(placed, Point::new(210.0, 250.0));
        let fp = Footprint::new(160.0, 80.0);
        for existing in g.boxes().iter().filter(|b| b.id != child) {
            assert!(
                !fp.collides(placed, existing.position),
                "placed child overlaps {}",
                existing.id
            );
        }
    }

    #[test]
    fn add_child_without_avoidance_keeps_occupied_anchor() {
        let mut snapshot = seeded();
        snapshot.boxes.push(BoxData {
            id: "squatter".into(),
            label: String::from("Squatter"),
            position: Point::new(210.0, 250.0),
            size: None,
        });
        let mut g = graph_without_avoidance(snapshot);

        let child = g.add_child(&BoxId::from("root"));
        assert_eq!(g.get(&child).unwrap().position, Point::new(210.0, 250.0));
    }

    #[test]
    fn set_label_overwrites_and_reports_found() {
        let mut g = graph(seeded());
        let root = BoxId::from("root");

        assert!(g.set_label(&root, "Renamed"));
        assert_eq!(g.get(&root).unwrap().label, "Renamed");

        // Empty labels are permitted.
        assert!(g.set_label(&root, ""));
        assert_eq!(g.get(&root).unwrap().label, "");

        assert!(!g.set_label(&BoxId::from("nope"), "x"));
    }

    #[test]
    fn set_position_overwrites_and_reports_found() {
        let mut g = graph(seeded());
        let root = BoxId::from("root");

        assert!(g.set_position(&root, Point::new(5.0, 7.0)));
        assert_eq!(g.get(&root).unwrap().position, Point::new(5.0, 7.0));

        assert!(!g.set_position(&BoxId::from("nope"), Point::ZERO));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn set_size_overrides_and_clears() {
        let mut g = graph(seeded());
        let root = BoxId::from("root");

        assert!(g.set_size(&root, Some(Size::new(200.0, 120.0))));
        assert_eq!(g.get(&root).unwrap().size, Some(Size::new(200.0, 120.0)));

        assert!(g.set_size(&root, None));
        assert_eq!(g.get(&root).unwrap().size, None);

        assert!(!g.set_size(&BoxId::from("nope"), None));
    }

    #[test]
    fn remove_deletes_exactly_the_subtree() {
        let mut g = graph(seeded());
        let root = BoxId::from("root");
        let a = g.add_child(&root);
        let b = g.add_child(&root);
        let c = g.add_child(&a);
        g.set_handle(&a, ());
        g.set_handle(&c, ());
        g.set_handle(&b, ());

        let mut removed = g.remove(&a);
        removed.sort();
        let mut expected = vec![a.clone(), c.clone()];
        expected.sort();
        assert_eq!(removed, expected);

        // Survivors: root and b, connected as before.
        assert!(g.contains(&root));
        assert!(g.contains(&b));
        assert!(!g.contains(&a));
        assert!(!g.contains(&c));
        assert_eq!(g.connections(), &[Connection::new("root", b.as_str())]);

        // Handle bindings for the removal set are gone; others survive.
        assert!(!g.has_handle(&a));
        assert!(!g.has_handle(&c));
        assert!(g.has_handle(&b));
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut g = graph(seeded());
        let removed = g.remove(&BoxId::from("nope"));
        assert!(removed.is_empty());
        assert_eq!(g.len(), 1);
        assert!(g.connections().is_empty());
    }

    #[test]
    fn remove_phantom_parent_removes_orphaned_subtree() {
        let mut g = graph(FlowSnapshot::default());
        let phantom = BoxId::from("root");
        let a = g.add_child(&phantom);
        let b = g.add_child(&phantom);

        let mut removed = g.remove(&phantom);
        removed.sort();
        let mut expected = vec![a, b];
        expected.sort();

        // The phantom had no box of its own, but the walk still reaches and
        // removes the children hanging off its connections.
        assert_eq!(removed, expected);
        assert!(g.is_empty());
        assert!(g.connections().is_empty());
    }

    #[test]
    fn remove_tolerates_cyclic_connections() {
        // A cycle cannot arise through add_child, but a malformed seed must
        // not hang or overflow the walk.
        let snapshot = FlowSnapshot {
            boxes: vec![
                BoxData {
                    id: "a".into(),
                    label: String::from("A"),
                    position: Point::ZERO,
                    size: None,
                },
                BoxData {
                    id: "b".into(),
                    label: String::from("B"),
                    position: Point::new(10.0, 10.0),
                    size: None,
                },
            ],
            connections: vec![Connection::new("a", "b"), Connection::new("b", "a")],
        };
        let mut g = graph(snapshot);

        let removed = g.remove(&BoxId::from("a"));
        assert_eq!(removed.len(), 2);
        assert!(g.is_empty());
        assert!(g.connections().is_empty());
    }

    #[test]
    fn descendants_and_children_queries() {
        let mut g = graph(seeded());
        let root = BoxId::from("root");
        let a = g.add_child(&root);
        let b = g.add_child(&root);
        let c = g.add_child(&a);

        assert_eq!(g.child_count(&root), 2);
        let children: Vec<&BoxId> = g.children_of(&root).collect();
        assert_eq!(children, vec![&a, &b]);

        let mut descendants = g.descendants(&root);
        descendants.sort();
        let mut expected = vec![a.clone(), b, c];
        expected.sort();
        assert_eq!(descendants, expected);

        assert!(g.descendants(&BoxId::from("nope")).is_empty());
    }

    #[test]
    fn valid_connections_requires_both_handles() {
        let mut g = graph(seeded());
        let root = BoxId::from("root");
        let child = g.add_child(&root);

        assert_eq!(g.valid_connections().count(), 0);

        g.set_handle(&root, ());
        assert_eq!(g.valid_connections().count(), 0);

        g.set_handle(&child, ());
        let valid: Vec<&Connection> = g.valid_connections().collect();
        assert_eq!(valid, vec![&g.connections()[0]]);

        assert!(g.clear_handle(&child));
        assert_eq!(g.valid_connections().count(), 0);
    }

    #[test]
    fn snapshot_is_an_independent_copy() {
        let mut g = graph(seeded());
        let before = g.snapshot();

        g.add_child(&BoxId::from("root"));

        assert_eq!(before.boxes.len(), 1);
        assert_eq!(g.snapshot().boxes.len(), 2);
    }

    #[test]
    fn handle_accessors() {
        let mut g: FlowGraph<u32> =
            FlowGraph::with_epoch(seeded(), FlowConfig::default(), EPOCH);
        let root = BoxId::from("root");

        assert!(g.handle(&root).is_none());
        g.set_handle(&root, 7);
        assert_eq!(g.handle(&root), Some(&7));

        // Rebinding replaces.
        g.set_handle(&root, 9);
        assert_eq!(g.handle(&root), Some(&9));

        assert!(g.clear_handle(&root));
        assert!(!g.clear_handle(&root));
    }
}
