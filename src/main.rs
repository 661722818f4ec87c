//! Headless demo of the toolkit
//!
//! Builds a grid, carves a wall, clicks a tile through the picking seam,
//! then runs a handful of steering agents converging on a goal while a
//! guard's perception tracks the lead agent. Pass a RON config path as the
//! first argument to override the defaults.

use glam::{Vec2, Vec3};
use hecs::Entity;
use serde::{Deserialize, Serialize};

use sentinel::grid::{Grid, GridConfig, RayPicker, toggle_picked};
use sentinel::perception::{
    ClearTarget, Leaf, PerceptionContext, PerceptionState, Sensing, Sensor, UpdatePerception,
};
use sentinel::steering::{Simulation, SteeringAgent, SteeringConfig};

/// Whole-demo configuration, loadable from RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SimConfig {
    grid: GridConfig,
    steering: SteeringConfig,
    /// Number of fixed ticks to simulate
    ticks: u32,
    /// Tick duration in seconds
    dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            steering: SteeringConfig::default(),
            ticks: 600,
            dt: 1.0 / 60.0,
        }
    }
}

/// Load a RON config, falling back to defaults on any error.
fn load_config(path: &str) -> Option<SimConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("Could not read config {path}: {err}");
            return None;
        }
    };
    match ron::from_str(&text) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("Could not parse config {path}: {err}");
            None
        }
    }
}

/// Demo picker: treats the "screen" as the grid's XZ plane.
struct PlanePicker;

impl RayPicker for PlanePicker {
    fn pick(&self, screen: Vec2) -> Option<Vec3> {
        Some(Vec3::new(screen.x, 0.0, screen.y))
    }
}

/// Demo senses: proximity sphere with a tighter vision range inside it.
struct ProximitySensor {
    target: Entity,
    target_position: Vec3,
    guard_position: Vec3,
    hearing_range: f32,
    vision_range: f32,
}

impl Sensor for ProximitySensor {
    fn try_sense(&self) -> Option<Sensing> {
        let dist = self.guard_position.distance(self.target_position);
        if dist >= self.hearing_range {
            return None;
        }
        Some(Sensing {
            target: self.target,
            position: self.target_position,
            line_of_sight: dist < self.vision_range,
        })
    }
}

fn main() {
    env_logger::init();

    let config = std::env::args()
        .nth(1)
        .and_then(|path| load_config(&path))
        .unwrap_or_default();
    log::info!("Running with {config:?}");

    // --- Grid editing -------------------------------------------------------
    let mut grid = Grid::from_config(&config.grid);
    for y in 2..=5 {
        grid.set_walkable(4, y, false);
    }
    if let Some((x, y)) = toggle_picked(&mut grid, Some(&PlanePicker), Vec2::new(7.0, 7.0)) {
        log::info!("Click toggled tile ({x}, {y})");
    }

    grid.events_mut().swap();
    for event in grid.events_mut().drain() {
        // A real renderer would swap tile materials here
        log::info!("Visual update: {event:?}");
    }

    // --- Steering agents ----------------------------------------------------
    let goal = grid.world_position(8, 8);
    let mut sim = Simulation::new();
    let agents: Vec<Entity> = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]
        .into_iter()
        .map(|(x, z)| {
            sim.spawn(
                SteeringAgent::new(Vec3::new(x, 0.0, z), config.steering).with_target(goal),
            )
        })
        .collect();
    let lead = agents[0];

    // --- Guard perception ---------------------------------------------------
    let guard_position = grid.world_position(8, 2);
    let mut perception = PerceptionState::default();
    let mut update_perception = UpdatePerception;

    for tick in 0..config.ticks {
        sim.tick(config.dt);

        let lead_position = match sim.agent(lead) {
            Some(agent) => agent.position,
            None => break,
        };
        let sensor = ProximitySensor {
            target: lead,
            target_position: lead_position,
            guard_position,
            hearing_range: 8.0,
            vision_range: 5.0,
        };
        let had_los = perception.has_line_of_sight;
        update_perception.tick(&mut PerceptionContext {
            state: &mut perception,
            sensor: Some(&sensor),
            dt: config.dt,
        });
        if perception.has_line_of_sight != had_los {
            log::info!(
                "Tick {tick}: guard {} the lead agent at {:?}",
                if perception.has_line_of_sight {
                    "spotted"
                } else {
                    "lost"
                },
                perception.last_known_position
            );
        }

        if tick % 120 == 0 {
            let agent = sim.agent(lead).map(|a| (a.position, a.velocity.length()));
            if let Some((position, speed)) = agent {
                log::info!("Tick {tick}: lead agent at {position:?}, speed {speed:.2}");
            }
        }
    }

    for entity in agents {
        let distance = sim
            .agent(entity)
            .map(|agent| agent.position.distance(goal));
        if let Some(distance) = distance {
            log::info!("Agent {entity:?} finished {distance:.2} from the goal");
        }
        sim.despawn(entity);
    }

    ClearTarget.tick(&mut PerceptionContext {
        state: &mut perception,
        sensor: None,
        dt: config.dt,
    });
    log::info!("Guard perception cleared: {perception:?}");
}
