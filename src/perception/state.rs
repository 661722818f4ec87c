//! Shared perception memory for a guard

use glam::Vec3;
use hecs::Entity;

/// Sentinel for "never seen the target" on the sighting timer.
pub const NEVER_SEEN: f32 = 9999.0;

/// What a guard currently remembers about its target.
///
/// One instance per guard, passed by mutable reference into each perception
/// leaf's tick. Losing line of sight keeps `target` and
/// `last_known_position` intact - the guard remembers who it was chasing
/// and where it last saw them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptionState {
    /// Identity of the tracked target, retained across sight loss
    pub target: Option<Entity>,
    /// Whether the guard can see the target right now
    pub has_line_of_sight: bool,
    /// Where the target was last sighted
    pub last_known_position: Vec3,
    /// Seconds since the last sighting, [`NEVER_SEEN`] if there was none
    pub time_since_seen: f32,
}

impl Default for PerceptionState {
    fn default() -> Self {
        Self {
            target: None,
            has_line_of_sight: false,
            last_known_position: Vec3::ZERO,
            time_since_seen: NEVER_SEEN,
        }
    }
}
