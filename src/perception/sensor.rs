//! The sensing seam between a guard and the host engine

use glam::Vec3;
use hecs::Entity;

/// One tick's positive sensing result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensing {
    /// Identity of the sensed target
    pub target: Entity,
    /// World position of the sensed target
    pub position: Vec3,
    /// Whether there is an unobstructed line of sight
    pub line_of_sight: bool,
}

/// A guard's senses, implemented by the host engine (vision cones,
/// proximity volumes, sound queries).
///
/// Queried once per tick by the perception update. Sensing something
/// without line of sight is possible (heard, not seen) and is treated as a
/// negative sighting by the perception policy.
pub trait Sensor {
    /// Attempt to sense the target this tick.
    fn try_sense(&self) -> Option<Sensing>;
}
