//! Guard perception state and behavior-tree leaf actions
//!
//! Perception memory lives in an explicit [`PerceptionState`] struct shared
//! by reference between leaves, instead of loose blackboard variables. The
//! sensing itself is a collaborator behind the [`Sensor`] trait, queried
//! once per tick.

mod actions;
mod sensor;
mod state;

pub use actions::{ClearTarget, Leaf, PerceptionContext, Status, UpdatePerception};
pub use sensor::{Sensing, Sensor};
pub use state::{NEVER_SEEN, PerceptionState};
