//! Steering behaviors for autonomous agents
//!
//! Every behavior returns a steering force in the classic formulation:
//! the difference between a desired velocity and the agent's current
//! velocity, to be capped by the agent's `max_force` after weighting.
//! Degenerate geometry (zero-length vectors) yields a zero force, never an
//! error.

use glam::Vec3;

/// Distance below which seek/arrive consider the agent already there.
///
/// Seek compares the *squared* distance against this, arrive the plain
/// distance; both thresholds match long-standing tuning.
const ARRIVAL_EPSILON: f32 = 1e-3;

/// Trait for steering behaviors.
pub trait SteeringBehavior {
    /// Steering force for an agent at `position` moving with `velocity`.
    fn steering(&self, position: Vec3, velocity: Vec3) -> Vec3;
}

/// Seek - head for the target at full speed.
#[derive(Debug, Clone, Copy)]
pub struct Seek {
    /// Target position
    pub target: Vec3,
    /// Top speed the desired velocity is scaled to
    pub max_speed: f32,
}

impl SteeringBehavior for Seek {
    fn steering(&self, position: Vec3, velocity: Vec3) -> Vec3 {
        let to_target = self.target - position;
        if to_target.length_squared() < ARRIVAL_EPSILON {
            return Vec3::ZERO;
        }

        let desired = to_target.normalize() * self.max_speed;
        desired - velocity
    }
}

/// Arrive - head for the target, slowing inside a radius.
///
/// Desired speed ramps linearly from `max_speed` at the slowing radius down
/// to zero at the target. The boundary itself is non-slowed: exactly at the
/// radius the desired speed is still `max_speed`.
#[derive(Debug, Clone, Copy)]
pub struct Arrive {
    /// Target position
    pub target: Vec3,
    /// Distance at which deceleration begins
    pub slowing_radius: f32,
    /// Top speed outside the slowing radius
    pub max_speed: f32,
}

impl SteeringBehavior for Arrive {
    fn steering(&self, position: Vec3, velocity: Vec3) -> Vec3 {
        let to_target = self.target - position;
        let dist = to_target.length();

        if dist < ARRIVAL_EPSILON {
            return Vec3::ZERO;
        }

        let desired_speed = if dist < self.slowing_radius {
            self.max_speed * (dist / self.slowing_radius)
        } else {
            self.max_speed
        };

        let desired = to_target / dist * desired_speed;
        desired - velocity
    }
}

/// Separation - push away from nearby agents.
///
/// Neighbours within `radius` contribute inverse-distance weighted
/// repulsion, so closer agents push harder. Coincident positions
/// (`dist == 0`, including the agent's own snapshot entry) are excluded.
#[derive(Debug, Clone, Copy)]
pub struct Separation<'a> {
    /// Positions of all registered agents this tick
    pub neighbours: &'a [Vec3],
    /// Only agents closer than this repel
    pub radius: f32,
    /// Multiplier on the final force
    pub strength: f32,
    /// Top speed the averaged repulsion is scaled to
    pub max_speed: f32,
}

impl SteeringBehavior for Separation<'_> {
    fn steering(&self, position: Vec3, velocity: Vec3) -> Vec3 {
        let mut force = Vec3::ZERO;
        let mut count = 0u32;

        for &other in self.neighbours {
            let to_me = position - other;
            let dist = to_me.length();

            if dist > 0.0 && dist < self.radius {
                force += to_me / dist / dist;
                count += 1;
            }
        }

        if count == 0 {
            return Vec3::ZERO;
        }

        force /= count as f32;
        force = force.normalize_or_zero() * self.max_speed;
        (force - velocity) * self.strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_full_speed_toward_target() {
        let seek = Seek {
            target: Vec3::new(10.0, 0.0, 0.0),
            max_speed: 5.0,
        };
        let force = seek.steering(Vec3::ZERO, Vec3::ZERO);

        // Desired velocity is max_speed along +X; with zero velocity the
        // force equals it
        assert!((force - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_seek_zero_at_target() {
        let seek = Seek {
            target: Vec3::new(0.02, 0.0, 0.0),
            max_speed: 5.0,
        };
        // Squared distance 0.0004 is under the 1e-3 threshold
        let force = seek.steering(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(force, Vec3::ZERO);
    }

    #[test]
    fn test_seek_subtracts_current_velocity() {
        let seek = Seek {
            target: Vec3::new(10.0, 0.0, 0.0),
            max_speed: 5.0,
        };
        let force = seek.steering(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        // Already moving at the desired velocity
        assert!(force.length() < 1e-5);
    }

    #[test]
    fn test_arrive_zero_at_target() {
        let arrive = Arrive {
            target: Vec3::ZERO,
            slowing_radius: 3.0,
            max_speed: 5.0,
        };
        let force = arrive.steering(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(force, Vec3::ZERO);
    }

    #[test]
    fn test_arrive_boundary_is_not_slowed() {
        // Distance exactly at the slowing radius: full desired speed
        let arrive = Arrive {
            target: Vec3::new(3.0, 0.0, 0.0),
            slowing_radius: 3.0,
            max_speed: 5.0,
        };
        let force = arrive.steering(Vec3::ZERO, Vec3::ZERO);
        assert!((force.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_arrive_ramps_down_inside_radius() {
        let arrive = Arrive {
            target: Vec3::new(1.5, 0.0, 0.0),
            slowing_radius: 3.0,
            max_speed: 5.0,
        };
        // Halfway into the radius: half speed
        let force = arrive.steering(Vec3::ZERO, Vec3::ZERO);
        assert!((force.length() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_arrive_full_speed_outside_radius() {
        let arrive = Arrive {
            target: Vec3::new(20.0, 0.0, 0.0),
            slowing_radius: 3.0,
            max_speed: 5.0,
        };
        let force = arrive.steering(Vec3::ZERO, Vec3::ZERO);
        assert!((force.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_separation_zero_without_neighbours() {
        let separation = Separation {
            neighbours: &[],
            radius: 1.5,
            strength: 5.0,
            max_speed: 5.0,
        };
        let force = separation.steering(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(force, Vec3::ZERO);
    }

    #[test]
    fn test_separation_zero_when_all_out_of_range() {
        let neighbours = [Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -8.0)];
        let separation = Separation {
            neighbours: &neighbours,
            radius: 1.5,
            strength: 5.0,
            max_speed: 5.0,
        };
        assert_eq!(separation.steering(Vec3::ZERO, Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_separation_points_away_from_neighbour() {
        let neighbours = [Vec3::new(1.0, 0.0, 0.0)];
        let separation = Separation {
            neighbours: &neighbours,
            radius: 1.5,
            strength: 5.0,
            max_speed: 5.0,
        };
        let force = separation.steering(Vec3::ZERO, Vec3::ZERO);

        // Neighbour is at +X, so the push is along -X
        assert!(force.x < 0.0);
        assert!(force.y.abs() < 1e-6);
        assert!(force.z.abs() < 1e-6);
    }

    #[test]
    fn test_separation_excludes_coincident_positions() {
        // Own snapshot entry sits exactly at the agent's position
        let neighbours = [Vec3::ZERO];
        let separation = Separation {
            neighbours: &neighbours,
            radius: 1.5,
            strength: 5.0,
            max_speed: 5.0,
        };
        assert_eq!(separation.steering(Vec3::ZERO, Vec3::ZERO), Vec3::ZERO);
    }
}
