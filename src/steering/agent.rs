//! Per-agent steering state and tick integration

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::steering::behaviors::{Arrive, Separation, SteeringBehavior};

/// Squared speed below which the facing direction is left unchanged.
const FACING_EPSILON_SQ: f32 = 1e-4;

/// Tuning scalars for a steering agent, loadable from config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Top speed
    pub max_speed: f32,
    /// Cap on the summed steering force (limits turning sharpness)
    pub max_force: f32,
    /// Arrive deceleration radius
    pub slowing_radius: f32,
    /// Separation query radius
    pub separation_radius: f32,
    /// Separation force multiplier
    pub separation_strength: f32,
    /// Weight of the arrive force in the sum
    pub arrive_weight: f32,
    /// Weight of the separation force in the sum
    pub separation_weight: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            max_force: 10.0,
            slowing_radius: 3.0,
            separation_radius: 1.5,
            separation_strength: 5.0,
            arrive_weight: 1.0,
            separation_weight: 1.0,
        }
    }
}

/// An autonomous agent driven by weighted steering forces.
///
/// Velocity is the only motion state persisted between ticks; position and
/// facing are derived from it by integration.
#[derive(Debug, Clone)]
pub struct SteeringAgent {
    /// World position
    pub position: Vec3,
    /// Current velocity
    pub velocity: Vec3,
    /// Unit facing direction, updated only while moving
    pub facing: Vec3,
    /// Optional arrive target
    pub target: Option<Vec3>,
    /// Tuning scalars
    pub config: SteeringConfig,
}

impl SteeringAgent {
    /// Create a stationary agent at `position`.
    #[must_use]
    pub fn new(position: Vec3, config: SteeringConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            facing: Vec3::Z,
            target: None,
            config,
        }
    }

    /// Set the arrive target, builder-style.
    #[must_use]
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = Some(target);
        self
    }

    /// Advance the agent by one tick.
    ///
    /// `neighbours` is this tick's snapshot of every registered agent's
    /// position, including this agent's own entry; separation only runs
    /// when more than one agent is registered.
    pub fn update(&mut self, dt: f32, neighbours: &[Vec3]) {
        let cfg = self.config;
        let mut total = Vec3::ZERO;

        if let Some(target) = self.target {
            let arrive = Arrive {
                target,
                slowing_radius: cfg.slowing_radius,
                max_speed: cfg.max_speed,
            };
            total += arrive.steering(self.position, self.velocity) * cfg.arrive_weight;
        }

        if neighbours.len() > 1 {
            let separation = Separation {
                neighbours,
                radius: cfg.separation_radius,
                strength: cfg.separation_strength,
                max_speed: cfg.max_speed,
            };
            total += separation.steering(self.position, self.velocity) * cfg.separation_weight;
        }

        total = total.clamp_length_max(cfg.max_force);
        self.velocity = (self.velocity + total * dt).clamp_length_max(cfg.max_speed);
        self.position += self.velocity * dt;

        if self.velocity.length_squared() > FACING_EPSILON_SQ {
            self.facing = self.velocity.normalize();
        }
    }
}
