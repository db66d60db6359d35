//! Scenario wiring: world construction and the timed run.

use log::{debug, info};
use manet_core::{AgentId, ScenarioConfig, SimTime};
use manet_engine::Engine;
use manet_mobility::{AgentMobility, PositionSource, ScenarioMobility};
use manet_stats::{AppPacketCounters, FlowLedger};

use crate::convergence::{ConvergenceDetector, HARD_STOP, POLL_INTERVAL, PollOutcome};
use crate::error::SimResult;

/// All mutable state of one scenario run, threaded through every callback.
pub struct ScenarioWorld {
    pub mobility: AgentMobility,
    pub convergence: ConvergenceDetector,
    /// Live control/data tallies, driven by the traffic layer's trace hooks.
    pub counters: AppPacketCounters,
    /// Per-flow counters, driven by the traffic layer; read at run end.
    pub flows: FlowLedger,
}

impl ScenarioWorld {
    pub fn new(mobility: AgentMobility, convergence: ConvergenceDetector) -> Self {
        Self {
            mobility,
            convergence,
            counters: AppPacketCounters::new(),
            flows: FlowLedger::new(),
        }
    }
}

/// The event engine specialised to this world.
pub type ScenarioEngine = Engine<ScenarioWorld>;

/// Outcome of a completed run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Simulated instant the run ended at.
    pub end_time: SimTime,
    /// Agents that reached their terminal target.
    pub arrived: u32,
    /// `true` when the run ended because every agent arrived.
    pub converged: bool,
}

/// Builder/driver for one scenario run.
pub struct Scenario;

impl Scenario {
    /// Validate `config`, build mobility, and return a world plus an engine
    /// with the convergence callbacks pre-scheduled.
    pub fn build(config: &ScenarioConfig) -> SimResult<(ScenarioWorld, ScenarioEngine)> {
        config.validate()?;

        let ScenarioMobility { mobility, convergence_targets } = ScenarioMobility::build(config);
        let convergence = ConvergenceDetector::new(config.population, convergence_targets);
        let world = ScenarioWorld::new(mobility, convergence);

        let mut engine = ScenarioEngine::new();
        Self::install(&world, &mut engine);
        Ok((world, engine))
    }

    /// Schedule the convergence callbacks for `world` on `engine`.
    ///
    /// Per-agent polls are installed only when the scenario defines terminal
    /// targets; the global check always runs, so a target-less scenario
    /// spins until the hard ceiling — matching the scenario this reproduces.
    /// First firing of everything is one poll interval in, and polls precede
    /// the check within each tick because they are scheduled first.
    pub fn install(world: &ScenarioWorld, engine: &mut ScenarioEngine) {
        if world.convergence.has_targets() {
            for i in 0..world.convergence.population() {
                let agent = AgentId(i);
                engine.schedule_at(POLL_INTERVAL, move |w, e| poll_agent(w, e, agent));
            }
        }
        engine.schedule_at(POLL_INTERVAL, check_convergence);
    }

    /// Drive the engine until convergence stops it or the 600 s ceiling
    /// cuts it off.
    pub fn run(world: &mut ScenarioWorld, engine: &mut ScenarioEngine) -> RunSummary {
        let end_time = engine.run_until(world, HARD_STOP);
        let summary = RunSummary {
            end_time,
            arrived: world.convergence.arrived_count(),
            converged: world.convergence.all_arrived(),
        };
        if summary.converged {
            info!("run converged at {}: all {} agents arrived", end_time, summary.arrived);
        } else {
            info!(
                "run ended at {} without convergence: {}/{} agents arrived",
                end_time,
                summary.arrived,
                world.convergence.population()
            );
        }
        summary
    }
}

/// Self-rescheduling per-agent poll.  Stops rescheduling once its agent has
/// arrived; a missing position is retried on the next tick.
fn poll_agent(world: &mut ScenarioWorld, engine: &mut ScenarioEngine, agent: AgentId) {
    let now = engine.now();
    let position = world.mobility.position_of(agent, now);
    match world.convergence.poll(agent, position) {
        PollOutcome::Arrived => {
            info!(
                "{agent} arrived at {now} ({}/{} there)",
                world.convergence.arrived_count(),
                world.convergence.population()
            );
        }
        PollOutcome::AlreadyArrived => {}
        PollOutcome::Pending => {
            engine.schedule_in(POLL_INTERVAL, move |w, e| poll_agent(w, e, agent));
        }
        PollOutcome::Unavailable => {
            debug!("{agent} position unavailable at {now}; retrying");
            engine.schedule_in(POLL_INTERVAL, move |w, e| poll_agent(w, e, agent));
        }
    }
}

/// Independent global check: request a stop once everyone has arrived,
/// otherwise look again next tick.
fn check_convergence(world: &mut ScenarioWorld, engine: &mut ScenarioEngine) {
    if world.convergence.all_arrived() {
        engine.request_stop();
    } else {
        engine.schedule_in(POLL_INTERVAL, check_convergence);
    }
}
