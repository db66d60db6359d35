//! The position-query seam between mobility and the rest of the toolkit.

use manet_core::{AgentId, SimTime, Vec3};

use crate::models::MobilityModel;

/// Anything that can answer "where is agent `a` at time `t`?".
///
/// `None` means the position is currently unavailable (agent not yet placed,
/// no model installed, or destroyed by the hosting engine).  Callers must
/// treat that as transient and retry on a later tick, never as fatal.
pub trait PositionSource {
    fn position_of(&mut self, agent: AgentId, now: SimTime) -> Option<Vec3>;
}

/// The per-agent model store: one [`MobilityModel`] per agent, indexed by id.
pub struct AgentMobility {
    models: Vec<MobilityModel>,
}

impl AgentMobility {
    pub fn new(models: Vec<MobilityModel>) -> Self {
        Self { models }
    }

    /// A store with no models at all — every position query misses.
    pub fn empty() -> Self {
        Self { models: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Read-only access to one agent's model (for plan inspection).
    pub fn model(&self, agent: AgentId) -> Option<&MobilityModel> {
        self.models.get(agent.index())
    }

    /// Take the models back out, e.g. to re-wrap a subset into a new store.
    pub fn into_models(self) -> Vec<MobilityModel> {
        self.models
    }
}

impl PositionSource for AgentMobility {
    fn position_of(&mut self, agent: AgentId, now: SimTime) -> Option<Vec3> {
        self.models.get_mut(agent.index())?.position_at(now)
    }
}
