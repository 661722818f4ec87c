//! Click-to-toggle tile editing
//!
//! The host engine owns the camera and the physics scene, so the
//! screen-to-world raycast arrives through the [`RayPicker`] seam. The grid
//! only resolves the hit point to a node and flips its walkability. A
//! missing picker (no camera this frame) or a missed ray is a no-op, not an
//! error.

use glam::{Vec2, Vec3};

use crate::grid::Grid;

/// Screen-to-world raycast supplied by the host engine.
pub trait RayPicker {
    /// Resolve a screen-space point to a world-space hit on the grid plane.
    ///
    /// Returns `None` when the ray hits nothing.
    fn pick(&self, screen: Vec2) -> Option<Vec3>;
}

/// Handle a pointer click: raycast, resolve to a node, toggle walkability.
///
/// Returns the toggled node's coordinates, or `None` when there was no
/// picker, the ray missed, or the hit point fell off the grid.
pub fn toggle_picked(
    grid: &mut Grid,
    picker: Option<&dyn RayPicker>,
    screen: Vec2,
) -> Option<(i32, i32)> {
    let Some(picker) = picker else {
        log::debug!("Click at {screen:?} ignored: no picker available");
        return None;
    };
    let world = picker.pick(screen)?;
    let (x, y) = {
        let node = grid.node_at_world(world)?;
        (node.x, node.y)
    };

    grid.toggle_walkable(x, y);
    log::debug!("Toggled walkability of ({x}, {y}) from click at {screen:?}");
    Some((x, y))
}
