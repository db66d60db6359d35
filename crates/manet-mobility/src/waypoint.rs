//! Timed waypoint plans.
//!
//! A `WaypointPlan` is an ordered list of (time, position) entries with
//! strictly increasing timestamps.  Plans built with
//! [`WaypointPlan::from_route`] traverse each leg at a single constant
//! speed, so the time delta between consecutive entries equals the Euclidean
//! leg length divided by that speed.

use manet_core::{SimTime, Vec3};

/// One entry of a planned trajectory.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub at: SimTime,
    pub position: Vec3,
}

/// A per-agent timed route.  Immutable once built: the generator writes the
/// plan before the run starts and nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct WaypointPlan {
    waypoints: Vec<Waypoint>,
}

impl WaypointPlan {
    /// Build a plan visiting `route` in order at constant `speed_mps`.
    ///
    /// The first waypoint is stamped t = 0; each later timestamp is the
    /// previous one plus leg distance ÷ speed.  Leg times accumulate in
    /// `f64` seconds and are rounded to microseconds per entry, so the
    /// rounding error never compounds across legs.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `route` is empty or `speed_mps` is not
    /// positive.
    pub fn from_route(route: &[Vec3], speed_mps: f64) -> Self {
        debug_assert!(!route.is_empty(), "route must have at least one point");
        debug_assert!(speed_mps > 0.0, "speed must be positive");

        let mut waypoints = Vec::with_capacity(route.len());
        let mut elapsed_secs = 0.0;
        for (i, &position) in route.iter().enumerate() {
            if i > 0 {
                elapsed_secs += route[i - 1].distance(position) / speed_mps;
            }
            waypoints.push(Waypoint { at: SimTime::from_secs_f64(elapsed_secs), position });
        }
        Self { waypoints }
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// The last waypoint of the plan — the agent's terminal target.
    pub fn terminal(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Position at `now`: clamped to the first entry before the plan starts,
    /// to the last after it ends, linear in between.
    ///
    /// Returns `None` for an empty plan.
    pub fn position_at(&self, now: SimTime) -> Option<Vec3> {
        let (first, rest) = self.waypoints.split_first()?;
        if now <= first.at {
            return Some(first.position);
        }

        let mut prev = first;
        for wp in rest {
            if now < wp.at {
                let span = (wp.at - prev.at).as_secs_f64();
                // Zero-length leg: the plan jumps; report the later point.
                if span <= 0.0 {
                    return Some(wp.position);
                }
                let frac = now.since(prev.at).as_secs_f64() / span;
                return Some(prev.position.lerp(wp.position, frac));
            }
            prev = wp;
        }
        Some(prev.position)
    }
}
