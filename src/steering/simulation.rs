//! The agent registry and tick loop
//!
//! Agents live as entities in a [`hecs::World`] owned by [`Simulation`] -
//! an explicit simulation context instead of process-wide shared state.
//! Registry membership changes at spawn/despawn boundaries only; within a
//! tick every agent steers against the same position snapshot, so update
//! order never changes what a neighbour query sees.

use glam::Vec3;
use hecs::Entity;

use crate::steering::agent::SteeringAgent;

/// Owns every live steering agent and drives their updates.
///
/// Single-threaded and tick-driven: the host's frame loop calls
/// [`Simulation::tick`] once per frame with the frame's `dt`.
pub struct Simulation {
    world: hecs::World,
    /// Scratch buffer reused across ticks for the position snapshot
    snapshot: Vec<Vec3>,
}

impl Simulation {
    /// Create an empty simulation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            world: hecs::World::new(),
            snapshot: Vec::new(),
        }
    }

    /// Register an agent. It participates in separation from the next tick.
    pub fn spawn(&mut self, agent: SteeringAgent) -> Entity {
        let entity = self.world.spawn((agent,));
        log::debug!("Spawned agent {entity:?} ({} active)", self.len());
        entity
    }

    /// Remove an agent from the registry.
    ///
    /// Returns `false` when the entity was not a live agent.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let removed = self.world.despawn(entity).is_ok();
        if removed {
            log::debug!("Despawned agent {entity:?} ({} active)", self.len());
        }
        removed
    }

    /// Borrow an agent's state.
    #[must_use]
    pub fn agent(&self, entity: Entity) -> Option<hecs::Ref<'_, SteeringAgent>> {
        self.world.get::<&SteeringAgent>(entity).ok()
    }

    /// Borrow an agent's state mutably.
    #[must_use]
    pub fn agent_mut(&mut self, entity: Entity) -> Option<hecs::RefMut<'_, SteeringAgent>> {
        self.world.get::<&mut SteeringAgent>(entity).ok()
    }

    /// Set or clear an agent's arrive target.
    ///
    /// Returns `false` when the entity is not a live agent.
    pub fn set_target(&mut self, entity: Entity, target: Option<Vec3>) -> bool {
        match self.world.get::<&mut SteeringAgent>(entity) {
            Ok(mut agent) => {
                agent.target = target;
                true
            }
            Err(_) => false,
        }
    }

    /// Number of registered agents.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.world.len()
    }

    /// Whether no agents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.world.is_empty()
    }

    /// Advance every agent by one tick.
    ///
    /// Positions are snapshotted first, then each agent steers against the
    /// snapshot, so neighbours are observed as of the start of the tick.
    pub fn tick(&mut self, dt: f32) {
        self.snapshot.clear();
        for (_, agent) in self.world.query_mut::<&SteeringAgent>() {
            self.snapshot.push(agent.position);
        }

        for (_, agent) in self.world.query_mut::<&mut SteeringAgent>() {
            agent.update(dt, &self.snapshot);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
