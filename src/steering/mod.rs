//! Steering behaviors and the agent simulation
//!
//! Classic force-based steering: each behavior returns the force needed to
//! reach a desired velocity, forces are weighted and summed under a force
//! cap, and the agent integrates velocity and position each tick.

mod agent;
mod behaviors;
mod simulation;

pub use agent::{SteeringAgent, SteeringConfig};
pub use behaviors::{Arrive, Seek, Separation, SteeringBehavior};
pub use simulation::Simulation;
