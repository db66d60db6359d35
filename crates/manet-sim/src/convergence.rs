//! Arrival tracking: has every agent reached its terminal target?
//!
//! The detector is a passive state machine.  It never talks to the engine
//! itself; the scheduling glue in [`scenario`](crate::scenario) feeds it one
//! position per poll and reacts to the returned [`PollOutcome`].  Keeping
//! the state here (instead of in process-wide counters) lets several
//! scenario runs coexist in one process and makes every transition testable
//! without an engine.

use manet_core::{AgentId, SimTime, Vec3};

/// An agent counts as arrived when closer than this to its target.
pub const ARRIVAL_RADIUS: f64 = 10.0;

/// Interval of both the per-agent polls and the global convergence check.
pub const POLL_INTERVAL: SimTime = SimTime::from_millis(100);

/// Hard run ceiling.  Owned by the harness, not the detector: the run stops
/// here even if convergence is never reached.
pub const HARD_STOP: SimTime = SimTime::from_secs(600);

/// Result of one per-agent poll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// First crossing into the arrival radius; the counter was incremented.
    Arrived,
    /// The agent was already marked arrived.  Never re-evaluated.
    AlreadyArrived,
    /// Still on its way; poll again next tick.
    Pending,
    /// Position lookup missed; transient — poll again next tick.
    Unavailable,
}

/// Per-run arrival state.
pub struct ConvergenceDetector {
    population: u32,
    /// Terminal target per agent; `None` for scenarios without a rendezvous.
    targets: Option<Vec<Vec3>>,
    arrived: Vec<bool>,
    arrived_count: u32,
}

impl ConvergenceDetector {
    /// # Panics
    ///
    /// Panics in debug mode if `targets` is present with a length other than
    /// `population`.
    pub fn new(population: u32, targets: Option<Vec<Vec3>>) -> Self {
        if let Some(t) = &targets {
            debug_assert_eq!(t.len(), population as usize, "one target per agent");
        }
        Self {
            population,
            targets,
            arrived: vec![false; population as usize],
            arrived_count: 0,
        }
    }

    #[inline]
    pub fn population(&self) -> u32 {
        self.population
    }

    /// `true` when the scenario defines terminal targets at all.
    pub fn has_targets(&self) -> bool {
        self.targets.is_some()
    }

    /// Monotonically non-decreasing; never exceeds the population.
    #[inline]
    pub fn arrived_count(&self) -> u32 {
        self.arrived_count
    }

    pub fn is_arrived(&self, agent: AgentId) -> bool {
        self.arrived.get(agent.index()).copied().unwrap_or(false)
    }

    /// The convergence condition: every agent has reached its target.
    pub fn all_arrived(&self) -> bool {
        self.has_targets() && self.arrived_count == self.population
    }

    /// Evaluate one agent against its target.
    ///
    /// Idempotent per agent: once `Arrived` is returned, every later call
    /// returns `AlreadyArrived` without touching the counter.
    pub fn poll(&mut self, agent: AgentId, position: Option<Vec3>) -> PollOutcome {
        if self.is_arrived(agent) {
            return PollOutcome::AlreadyArrived;
        }
        let Some(target) = self.targets.as_ref().and_then(|t| t.get(agent.index())).copied()
        else {
            return PollOutcome::Pending;
        };
        let Some(position) = position else {
            return PollOutcome::Unavailable;
        };

        if position.distance(target) < ARRIVAL_RADIUS {
            self.arrived[agent.index()] = true;
            self.arrived_count += 1;
            PollOutcome::Arrived
        } else {
            PollOutcome::Pending
        }
    }
}
