//! A game-AI toolkit for grid-based worlds
//!
//! This crate provides:
//! - A pathfinding grid substrate with walkability and cost fields
//! - Steering behaviors (seek, arrive, separation) with per-agent integration
//! - Guard perception leaves for a behavior tree
//!
//! Rendering, input devices, and physics raycasts stay in the host engine;
//! the toolkit talks to them through small trait seams and event queues.

pub mod grid;
pub mod perception;
pub mod steering;

// Re-exports for convenience
pub use glam;
pub use hecs;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::grid::{
        Grid, GridEvent, GridEvents, Node, NodeIndex, RayPicker, TileVisual, toggle_picked,
    };
    pub use crate::perception::{
        ClearTarget, Leaf, PerceptionContext, PerceptionState, Sensing, Sensor, Status,
        UpdatePerception,
    };
    pub use crate::steering::{
        Arrive, Seek, Separation, Simulation, SteeringAgent, SteeringBehavior, SteeringConfig,
    };
    pub use glam::{Vec2, Vec3};
    pub use hecs::Entity;
}
