// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded spiral search for a collision-free position.

use core::f64::consts::FRAC_PI_4;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::Footprint;

/// Maximum number of candidate positions tried before the search gives up.
pub const MAX_ATTEMPTS: usize = 24;

/// Radius, in diagram units, added per completed turn of the spiral.
pub const RADIUS_STEP: f64 = 60.0;

/// Number of candidates per turn; the angle advances 45 degrees per attempt.
const ATTEMPTS_PER_TURN: usize = 8;

/// Search outward from `base` for a position clear of every point in
/// `occupied`.
///
/// The base position itself is tried first. After that, candidates walk a
/// spiral: the angle advances 45 degrees per attempt and the radius grows by
/// [`RADIUS_STEP`] every 8 attempts (one full turn), for at most
/// [`MAX_ATTEMPTS`] attempts. Every candidate is tested against every
/// occupied position with [`Footprint::collides`].
///
/// Returns the first clear candidate found. If the attempt budget runs out,
/// the last candidate tried is returned even though it may still collide;
/// this is a best-effort policy, not a guarantee.
pub fn find_clear_position(base: Point, occupied: &[Point], footprint: Footprint) -> Point {
    let is_clear = |candidate: Point| occupied.iter().all(|&p| !footprint.collides(candidate, p));

    if is_clear(base) {
        return base;
    }

    let mut candidate = base;
    for attempt in 0..MAX_ATTEMPTS {
        let angle = FRAC_PI_4 * (attempt % ATTEMPTS_PER_TURN) as f64;
        let radius = RADIUS_STEP * (attempt / ATTEMPTS_PER_TURN + 1) as f64;
        candidate = base + Vec2::new(radius * angle.cos(), radius * angle.sin());
        if is_clear(candidate) {
            return candidate;
        }
    }
    candidate
}
