// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graph configuration.

/// Configuration recognized by [`FlowGraph`](crate::FlowGraph).
///
/// Construct with struct-update syntax over [`FlowConfig::default`]:
///
/// ```
/// use canopy_graph::FlowConfig;
///
/// let config = FlowConfig {
///     collision_avoidance: false,
///     ..FlowConfig::default()
/// };
/// assert_eq!(config.box_width, 160.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FlowConfig {
    /// Nominal box width, feeding the collision footprint.
    pub box_width: f64,
    /// Nominal box height, feeding the collision footprint.
    pub box_height: f64,
    /// Search for a collision-free spot when placing new children.
    pub collision_avoidance: bool,
    /// Emit a `log::debug!` snapshot of the whole graph after every mutation.
    pub log_snapshots: bool,
    /// Presentation hint: hosts that can render a selection highlight consult
    /// this flag. The model itself never reads it.
    pub highlight_selected: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            box_width: 160.0,
            box_height: 80.0,
            collision_avoidance: true,
            log_snapshots: false,
            highlight_selected: true,
        }
    }
}
