// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless composition root: graph + drag + edit + selection.
//!
//! This example plays the role a real UI layer would: it owns the
//! [`FlowGraph`] and the interaction state machines, feeds simulated pointer
//! and key events into the machines, and funnels their commit values back
//! into the graph. It also installs a minimal `log::Log` so the graph's
//! diagnostic snapshots are visible.
//!
//! Run:
//! - `cargo run -p canopy_demos --example hierarchy_editor`

use canopy_graph::{BoxData, BoxId, FlowConfig, FlowGraph, FlowSnapshot};
use canopy_interact::{DragState, EditKey, LabelEdit};
use canopy_placement::Footprint;
use canopy_selection::Selection;
use kurbo::Point;

/// Prints every log record to stdout.
struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        println!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

fn main() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Debug);

    // Seed the graph with a single root box, snapshot logging enabled.
    let snapshot = FlowSnapshot {
        boxes: vec![BoxData {
            id: "root".into(),
            label: String::from("Root"),
            position: Point::new(300.0, 100.0),
            size: None,
        }],
        connections: Vec::new(),
    };
    let config = FlowConfig {
        log_snapshots: true,
        ..FlowConfig::default()
    };
    // The handle type stands in for whatever the renderer uses to identify
    // mounted elements; the graph only checks for presence.
    let mut graph: FlowGraph<u32> = FlowGraph::new(snapshot, config);

    let root = BoxId::from("root");
    graph.set_handle(&root, 0);

    // Add two children under the root; each gets "mounted" right away.
    let left = graph.add_child(&root);
    let right = graph.add_child(&root);
    graph.set_handle(&left, 1);
    graph.set_handle(&right, 2);

    println!(
        "{} boxes, {} renderable connections",
        graph.len(),
        graph.valid_connections().count()
    );

    // Collision avoidance placed every box clear of every other.
    let footprint = Footprint::new(graph.config().box_width, graph.config().box_height);
    let all_clear = graph.boxes().iter().all(|a| {
        graph
            .boxes()
            .iter()
            .filter(|b| b.id != a.id)
            .all(|b| !footprint.collides(a.position, b.position))
    });
    println!("layout clear of overlaps: {all_clear}");

    // Drag the left child 40 units right and 25 down. The machine reports
    // positions; only the commit on release touches the graph.
    let mut drag: DragState<BoxId> = DragState::new();
    let origin = graph.get(&left).expect("left child exists").position;
    let press = origin + kurbo::Vec2::new(12.0, 8.0);

    drag.begin(left.clone(), press, origin);
    drag.update(press + kurbo::Vec2::new(20.0, 10.0));
    drag.update(press + kurbo::Vec2::new(40.0, 25.0));
    if let Some(commit) = drag.finish() {
        graph.set_position(&commit.target, commit.position);
        println!("dragged {} to {:?}", commit.target, commit.position);
    }

    // Rename the right child through the edit machine. A real host would
    // focus its input after the next render pass once begin returns true.
    let mut edit: LabelEdit<BoxId> = LabelEdit::new();
    let current = graph.get(&right).expect("right child exists").label.clone();
    edit.begin(right.clone(), &current);
    edit.set_draft("  Billing  ");
    if let Some(commit) = edit.handle_key(EditKey::Confirm) {
        graph.set_label(&commit.target, &commit.label);
        println!("renamed {} to {:?}", commit.target, commit.label);
    }

    // Select the left child, then delete its subtree and prune the
    // selection against the removed ids.
    let mut selection: Selection<BoxId> = Selection::new();
    selection.toggle(left.clone());

    let removed = graph.remove(&left);
    selection.retain(|k| !removed.contains(k));
    println!(
        "removed {} boxes; selection now {:?}",
        removed.len(),
        selection.selected()
    );

    println!("final snapshot: {:?}", graph.snapshot());
}
