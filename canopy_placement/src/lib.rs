// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Placement: geometry helpers for placing boxes in a hierarchy diagram.
//!
//! This crate provides the small, pure pieces of placement logic used by
//! `canopy_graph` when a new child box is inserted. It is intentionally
//! decoupled from the graph itself and from any rendering layer.
//!
//! - [`Footprint`] describes the collision footprint of a box (its nominal
//!   width/height plus a fixed [`CLEARANCE`] margin) and answers
//!   center-proximity overlap queries via [`Footprint::collides`].
//! - [`child_anchor`] computes the fan-out anchor for the n-th child of a
//!   parent box: a fixed horizontal spacing per sibling and a fixed vertical
//!   offset per depth level.
//! - [`spiral::find_clear_position`] performs a bounded spiral search around a
//!   base position for a spot clear of every occupied position.
//!
//! ## Overlap is approximate
//!
//! [`Footprint::collides`] compares center points per axis rather than
//! intersecting rectangles. Two positions collide when they are closer than
//! `width + CLEARANCE` horizontally **and** `height + CLEARANCE` vertically.
//! This is deliberate: callers size the clearance with this test in mind, and
//! the approximation keeps the search cheap and symmetric. Do not replace it
//! with exact rectangle intersection.
//!
//! This crate is `no_std`; enable the `libm` feature for builds without `std`.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

pub mod spiral;

pub use spiral::find_clear_position;

/// Extra margin, in diagram units, added to both axes of a footprint when
/// testing for overlap.
pub const CLEARANCE: f64 = 20.0;

/// Horizontal distance between sibling anchors under the same parent.
pub const SIBLING_SPACING: f64 = 180.0;

/// Vertical distance between a parent and its children's anchors.
pub const LEVEL_SPACING: f64 = 150.0;

/// Fallback position used when a child is added under a parent that does not
/// exist in the graph.
pub const DEFAULT_ORIGIN: Point = Point::new(100.0, 100.0);

/// Collision footprint of a box, in diagram units.
///
/// The footprint is the nominal box size; [`CLEARANCE`] is added on top during
/// overlap tests so that boxes keep visual breathing room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    /// Nominal box width.
    pub width: f64,
    /// Nominal box height.
    pub height: f64,
}

impl Footprint {
    /// Create a footprint from nominal box dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return whether two box centers are close enough to overlap.
    ///
    /// Centers collide when they are closer than `width + CLEARANCE` on the
    /// x axis **and** `height + CLEARANCE` on the y axis. The test is
    /// symmetric in its arguments.
    pub fn collides(&self, a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < self.width + CLEARANCE && (a.y - b.y).abs() < self.height + CLEARANCE
    }
}

/// Anchor position for the next child of a parent box.
///
/// Children fan out horizontally: the n-th child (counting existing children)
/// sits `n * SIBLING_SPACING - SIBLING_SPACING / 2` to the right of the parent
/// and [`LEVEL_SPACING`] below it. The half-spacing shift keeps the fan
/// roughly centered under the parent as children accumulate.
pub fn child_anchor(parent: Point, existing_children: usize) -> Point {
    Point::new(
        parent.x + existing_children as f64 * SIBLING_SPACING - SIBLING_SPACING / 2.0,
        parent.y + LEVEL_SPACING,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collides_is_symmetric() {
        let fp = Footprint::new(160.0, 80.0);
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 30.0);
        assert_eq!(fp.collides(a, b), fp.collides(b, a));

        let far = Point::new(500.0, 500.0);
        assert_eq!(fp.collides(a, far), fp.collides(far, a));
    }

    #[test]
    fn identical_positions_collide() {
        let fp = Footprint::new(160.0, 80.0);
        let p = Point::new(42.0, 17.0);
        assert!(fp.collides(p, p));
    }

    #[test]
    fn overlap_requires_both_axes() {
        let fp = Footprint::new(160.0, 80.0);
        let a = Point::new(0.0, 0.0);

        // Close on x, far on y: no collision.
        assert!(!fp.collides(a, Point::new(50.0, 400.0)));
        // Far on x, close on y: no collision.
        assert!(!fp.collides(a, Point::new(400.0, 50.0)));
        // Close on both: collision.
        assert!(fp.collides(a, Point::new(50.0, 50.0)));
    }

    #[test]
    fn threshold_is_exclusive() {
        let fp = Footprint::new(160.0, 80.0);
        let a = Point::new(0.0, 0.0);

        // Exactly at width + CLEARANCE on x: not a collision (strict less-than).
        assert!(!fp.collides(a, Point::new(180.0, 0.0)));
        // Just inside the threshold on both axes: collision.
        assert!(fp.collides(a, Point::new(179.9, 99.9)));
    }

    #[test]
    fn child_anchor_fans_out_horizontally() {
        let parent = Point::new(300.0, 200.0);

        let first = child_anchor(parent, 0);
        assert_eq!(first, Point::new(210.0, 350.0));

        let second = child_anchor(parent, 1);
        assert_eq!(second, Point::new(390.0, 350.0));

        // Siblings are spaced exactly SIBLING_SPACING apart.
        assert_eq!(second.x - first.x, SIBLING_SPACING);
        // All children share the same level below the parent.
        assert_eq!(first.y, parent.y + LEVEL_SPACING);
        assert_eq!(second.y, first.y);
    }
}
