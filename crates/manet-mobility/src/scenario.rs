//! The trajectory generator: initial placement and motion rules for a
//! population, per scenario kind.
//!
//! All three scenarios share the 200 m × 200 m arena centred on the origin.
//! Only the dynamic-group scenario produces convergence targets; the other
//! kinds wander until the harness's hard time ceiling ends the run.

use log::info;
use manet_core::{AgentId, AgentRng, Rect, ScenarioConfig, ScenarioKind, SimTime, Vec3};

use crate::models::{MobilityModel, RandomWalk2dModel, RandomWaypointModel, WaypointModel};
use crate::source::AgentMobility;
use crate::waypoint::WaypointPlan;

/// Rectangular bound of every stochastic motion model.
pub const ARENA: Rect = Rect::new(-100.0, 100.0, -100.0, 100.0);

/// Grid-anchored start of the leader agent.
const LEADER_START: Vec3 = Vec3::new(-50.0, -50.0, 0.0);

/// Followers are scattered in a disc of this radius around the leader's
/// initial position.  One-shot coupling: they do not track the leader later.
const FOLLOWER_DISC_RADIUS: f64 = 5.0;

/// Pause between the leader's random-waypoint legs.
const LEADER_PAUSE: SimTime = SimTime::from_secs(2);

/// The rendezvous sequence shared (read-only) by every agent of the
/// dynamic-group scenario, traversed in this order.
pub const MEETING_POINTS: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(100.0, 100.0, 0.0),
    Vec3::new(-100.0, -100.0, 0.0),
];

/// A built scenario: the motion models plus, where the scenario defines one,
/// the per-agent terminal target used for convergence detection.
pub struct ScenarioMobility {
    pub mobility: AgentMobility,
    pub convergence_targets: Option<Vec<Vec3>>,
}

impl ScenarioMobility {
    /// Build placement and motion for `config.population` agents.
    ///
    /// A `None` mobility selector installs nothing: every position query
    /// misses, mirroring a stack with no mobility model configured.
    pub fn build(config: &ScenarioConfig) -> Self {
        let n = config.population;
        match config.mobility {
            Some(ScenarioKind::RandomWalk2d) => random_walk(n, config.speed_mps, config.seed),
            Some(ScenarioKind::LeaderGroup) => leader_group(n, config.speed_mps, config.seed),
            Some(ScenarioKind::DynamicGroup) => dynamic_group(n, config.speed_mps, config.seed),
            None => {
                info!("no mobility scenario installed; {n} agents have no position");
                Self { mobility: AgentMobility::empty(), convergence_targets: None }
            }
        }
    }
}

// ── Uniform random walk ───────────────────────────────────────────────────────

fn random_walk(n: u32, speed: f64, seed: u64) -> ScenarioMobility {
    info!("RandomWalk2d scenario: {n} agents at {speed} m/s");
    let models = (0..n)
        .map(|i| {
            let rng = AgentRng::new(seed, AgentId(i));
            MobilityModel::RandomWalk2d(RandomWalk2dModel::new(ARENA, speed, Vec3::ORIGIN, rng))
        })
        .collect();
    ScenarioMobility { mobility: AgentMobility::new(models), convergence_targets: None }
}

// ── Leader / followers ────────────────────────────────────────────────────────

fn leader_group(n: u32, speed: f64, seed: u64) -> ScenarioMobility {
    info!("LeaderGroup scenario: 1 leader + {} followers at {speed} m/s", n.saturating_sub(1));
    let mut models = Vec::with_capacity(n as usize);

    if n > 0 {
        let rng = AgentRng::new(seed, AgentId(0));
        models.push(MobilityModel::RandomWaypoint(RandomWaypointModel::new(
            ARENA,
            speed,
            LEADER_PAUSE,
            LEADER_START,
            rng,
        )));
    }

    for i in 1..n {
        let mut rng = AgentRng::new(seed, AgentId(i));
        let start = sample_disc(&mut rng, LEADER_START, FOLLOWER_DISC_RADIUS);
        models.push(MobilityModel::RandomWalk2d(RandomWalk2dModel::new(ARENA, speed, start, rng)));
    }

    ScenarioMobility { mobility: AgentMobility::new(models), convergence_targets: None }
}

/// Uniform sample in the disc of radius `radius` around `center`.
/// The √ on the radial draw keeps the density uniform over the area.
fn sample_disc(rng: &mut AgentRng, center: Vec3, radius: f64) -> Vec3 {
    let r = radius * rng.gen_range(0.0..=1.0f64).sqrt();
    let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    Vec3::new(center.x + r * theta.cos(), center.y + r * theta.sin(), 0.0)
}

// ── Dynamic group (rendezvous) ────────────────────────────────────────────────

fn dynamic_group(n: u32, speed: f64, seed: u64) -> ScenarioMobility {
    info!("DynamicGroup scenario: {n} agents rendezvous at {} via {}", MEETING_POINTS[2], MEETING_POINTS[1]);
    let models = (0..n)
        .map(|i| {
            let plan = dynamic_group_plan(AgentId(i), speed, seed);
            MobilityModel::Waypoint(WaypointModel::new(plan))
        })
        .collect();
    ScenarioMobility {
        mobility: AgentMobility::new(models),
        convergence_targets: Some(vec![MEETING_POINTS[2]; n as usize]),
    }
}

/// The five-entry rendezvous plan for one agent:
/// mp0 → random → mp1 → random → mp2, first timestamp 0, constant speed.
///
/// The random detour points are drawn from an identity-keyed RNG, so the
/// plan is a pure function of (seed, agent id) — independent of the order
/// agents are built in.
pub fn dynamic_group_plan(agent: AgentId, speed: f64, seed: u64) -> WaypointPlan {
    let mut rng = AgentRng::new(seed, agent);
    let detour_1 = sample_square(&mut rng);
    let detour_2 = sample_square(&mut rng);
    let route = [
        MEETING_POINTS[0],
        detour_1,
        MEETING_POINTS[1],
        detour_2,
        MEETING_POINTS[2],
    ];
    WaypointPlan::from_route(&route, speed)
}

/// Uniform sample in the 200 × 200 square centred on the origin.
fn sample_square(rng: &mut AgentRng) -> Vec3 {
    Vec3::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0), 0.0)
}
