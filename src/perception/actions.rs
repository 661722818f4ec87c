//! Behavior-tree leaf actions over perception state
//!
//! Two leaves: [`UpdatePerception`] folds this tick's sensing into the
//! shared state, [`ClearTarget`] wipes it back to defaults. Both are plain
//! state transitions that finish in a single tick; the surrounding tree
//! decides when they run.

use crate::perception::sensor::Sensor;
use crate::perception::state::{NEVER_SEEN, PerceptionState};

/// Result of a leaf tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The leaf completed its work this tick
    Success,
    /// The leaf could not do its work
    Failure,
    /// The leaf needs more ticks
    Running,
}

/// Everything a perception leaf sees for one tick.
pub struct PerceptionContext<'a> {
    /// The guard's shared perception memory
    pub state: &'a mut PerceptionState,
    /// The guard's senses; `None` when no sensor is attached
    pub sensor: Option<&'a dyn Sensor>,
    /// Tick duration in seconds
    pub dt: f32,
}

/// A behavior-tree leaf action.
///
/// Leaves are named for logging and tree debugging, and mutate only what
/// the context hands them.
pub trait Leaf {
    /// Leaf name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Run one tick of the leaf.
    fn tick(&mut self, ctx: &mut PerceptionContext<'_>) -> Status;
}

/// Folds the sensor's per-tick result into the perception state.
///
/// Policy:
/// - sensed with line of sight: overwrite target, position and LOS, reset
///   the sighting timer to zero;
/// - anything else (nothing sensed, sensed without LOS, or no sensor at
///   all): keep the remembered target, clear LOS, accumulate elapsed time.
///
/// A missing sensor degrades to the negative branch rather than failing
/// the tree.
#[derive(Debug, Default)]
pub struct UpdatePerception;

impl Leaf for UpdatePerception {
    fn name(&self) -> &'static str {
        "UpdatePerception"
    }

    fn tick(&mut self, ctx: &mut PerceptionContext<'_>) -> Status {
        let state = &mut *ctx.state;

        // Sanitize a timer that was never initialized
        if state.time_since_seen < 0.0 {
            state.time_since_seen = NEVER_SEEN;
        }

        let sensing = ctx.sensor.and_then(|sensor| sensor.try_sense());

        match sensing {
            Some(sensing) if sensing.line_of_sight => {
                if !state.has_line_of_sight {
                    log::debug!("Sighted target {:?} at {:?}", sensing.target, sensing.position);
                }
                state.target = Some(sensing.target);
                state.has_line_of_sight = true;
                state.last_known_position = sensing.position;
                state.time_since_seen = 0.0;
            }
            _ => {
                // Remember who we were chasing, but mark sight as lost
                state.has_line_of_sight = false;
                state.time_since_seen += ctx.dt;
            }
        }

        Status::Success
    }
}

/// Forgets the target and resets all perception flags.
#[derive(Debug, Default)]
pub struct ClearTarget;

impl Leaf for ClearTarget {
    fn name(&self) -> &'static str {
        "ClearTarget"
    }

    fn tick(&mut self, ctx: &mut PerceptionContext<'_>) -> Status {
        *ctx.state = PerceptionState::default();
        Status::Success
    }
}
