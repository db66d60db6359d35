//! Per-agent position models.
//!
//! Three kinematic models cover the scenario kinds: a bounded random walk, a
//! random-waypoint wanderer with a pause between legs, and a pure waypoint
//! follower.  The stochastic models own their agent's [`AgentRng`], so the
//! positions an agent produces depend only on (global seed, agent id), never
//! on the order agents are queried in.

use std::f64::consts::TAU;

use manet_core::{AgentRng, Rect, SimTime, Vec3};

use crate::waypoint::WaypointPlan;

/// How long a random-walk leg lasts before a new heading is drawn.
pub const WALK_LEG: SimTime = SimTime::from_secs(1);

// ── RandomWalk2dModel ─────────────────────────────────────────────────────────

/// Bounded 2-D random walk at constant speed.
///
/// The agent walks along a uniformly random heading for [`WALK_LEG`], then
/// redraws the heading.  Crossing the bound reflects the position and the
/// offending velocity component back inside.
pub struct RandomWalk2dModel {
    bounds: Rect,
    speed: f64,
    rng: AgentRng,
    pos: Vec3,
    vx: f64,
    vy: f64,
    /// Instant the current heading expires.
    leg_until: SimTime,
    /// Last instant the walk was advanced to.
    now: SimTime,
}

impl RandomWalk2dModel {
    pub fn new(bounds: Rect, speed: f64, start: Vec3, mut rng: AgentRng) -> Self {
        let heading: f64 = rng.gen_range(0.0..TAU);
        Self {
            bounds,
            speed,
            rng,
            pos: bounds.clamp(start),
            vx: heading.cos(),
            vy: heading.sin(),
            leg_until: WALK_LEG,
            now: SimTime::ZERO,
        }
    }

    /// Position at `now`.  Queries must not go backwards; an earlier instant
    /// returns the already-advanced position.
    pub fn position_at(&mut self, now: SimTime) -> Vec3 {
        while self.now < now {
            let step_end = now.min(self.leg_until);
            let dt = (step_end - self.now).as_secs_f64();

            let mut x = self.pos.x + self.vx * self.speed * dt;
            let mut y = self.pos.y + self.vy * self.speed * dt;

            if x < self.bounds.min_x {
                x = 2.0 * self.bounds.min_x - x;
                self.vx = -self.vx;
            } else if x > self.bounds.max_x {
                x = 2.0 * self.bounds.max_x - x;
                self.vx = -self.vx;
            }
            if y < self.bounds.min_y {
                y = 2.0 * self.bounds.min_y - y;
                self.vy = -self.vy;
            } else if y > self.bounds.max_y {
                y = 2.0 * self.bounds.max_y - y;
                self.vy = -self.vy;
            }
            // A reflection can only leave the rect when one step spans more
            // than the arena; clamp covers that degenerate speed.
            self.pos = self.bounds.clamp(Vec3::new(x, y, 0.0));
            self.now = step_end;

            if self.now == self.leg_until {
                let heading: f64 = self.rng.gen_range(0.0..TAU);
                self.vx = heading.cos();
                self.vy = heading.sin();
                self.leg_until = self.leg_until + WALK_LEG;
            }
        }
        self.pos
    }
}

// ── RandomWaypointModel ───────────────────────────────────────────────────────

enum WanderPhase {
    Paused { until: SimTime },
    Moving { from: Vec3, target: Vec3, depart: SimTime, arrive: SimTime },
}

/// Random-waypoint wanderer: travel at constant speed to a uniformly drawn
/// point of the bound rect, pause, repeat.
pub struct RandomWaypointModel {
    bounds: Rect,
    speed: f64,
    pause: SimTime,
    rng: AgentRng,
    pos: Vec3,
    phase: WanderPhase,
}

impl RandomWaypointModel {
    pub fn new(bounds: Rect, speed: f64, pause: SimTime, start: Vec3, rng: AgentRng) -> Self {
        let pos = bounds.clamp(start);
        let mut model = Self {
            bounds,
            speed,
            pause,
            rng,
            pos,
            phase: WanderPhase::Paused { until: SimTime::ZERO },
        };
        model.begin_leg(SimTime::ZERO);
        model
    }

    fn begin_leg(&mut self, depart: SimTime) {
        let target = Vec3::new(
            self.rng.gen_range(self.bounds.min_x..=self.bounds.max_x),
            self.rng.gen_range(self.bounds.min_y..=self.bounds.max_y),
            0.0,
        );
        let travel = SimTime::from_secs_f64(self.pos.distance(target) / self.speed);
        self.phase = WanderPhase::Moving { from: self.pos, target, depart, arrive: depart + travel };
    }

    /// Position at `now`.  Queries must not go backwards.
    pub fn position_at(&mut self, now: SimTime) -> Vec3 {
        loop {
            match self.phase {
                WanderPhase::Paused { until } => {
                    if now < until {
                        return self.pos;
                    }
                    self.begin_leg(until);
                }
                WanderPhase::Moving { from, target, depart, arrive } => {
                    if now < arrive {
                        let span = (arrive - depart).as_secs_f64();
                        if span <= 0.0 {
                            return target;
                        }
                        let frac = now.since(depart).as_secs_f64() / span;
                        return from.lerp(target, frac);
                    }
                    self.pos = target;
                    self.phase = WanderPhase::Paused { until: arrive + self.pause };
                }
            }
        }
    }
}

// ── WaypointModel ─────────────────────────────────────────────────────────────

/// Follows a fixed [`WaypointPlan`]; stateless between queries.
pub struct WaypointModel {
    plan: WaypointPlan,
}

impl WaypointModel {
    pub fn new(plan: WaypointPlan) -> Self {
        Self { plan }
    }

    #[inline]
    pub fn plan(&self) -> &WaypointPlan {
        &self.plan
    }

    pub fn position_at(&self, now: SimTime) -> Option<Vec3> {
        self.plan.position_at(now)
    }
}

// ── MobilityModel ─────────────────────────────────────────────────────────────

/// One agent's motion rule.
pub enum MobilityModel {
    RandomWalk2d(RandomWalk2dModel),
    RandomWaypoint(RandomWaypointModel),
    Waypoint(WaypointModel),
}

impl MobilityModel {
    /// Position at `now`; `None` only for an empty waypoint plan.
    pub fn position_at(&mut self, now: SimTime) -> Option<Vec3> {
        match self {
            MobilityModel::RandomWalk2d(m) => Some(m.position_at(now)),
            MobilityModel::RandomWaypoint(m) => Some(m.position_at(now)),
            MobilityModel::Waypoint(m) => m.position_at(now),
        }
    }

    /// The waypoint plan, for models that carry one.
    pub fn waypoint_plan(&self) -> Option<&WaypointPlan> {
        match self {
            MobilityModel::Waypoint(m) => Some(m.plan()),
            _ => None,
        }
    }
}
