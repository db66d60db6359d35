//! `manet-mobility` — trajectory generation and position models.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`waypoint`] | `Waypoint`, `WaypointPlan` — timed routes at constant leg speed |
//! | [`models`]   | `RandomWalk2dModel`, `RandomWaypointModel`, `WaypointModel`     |
//! | [`source`]   | `PositionSource` trait, `AgentMobility` store                   |
//! | [`scenario`] | the trajectory generator for the three scenario kinds           |
//!
//! # Position model (lazy advancement)
//!
//! Every model answers "where is this agent at simulated time t?" and is
//! only ever queried with non-decreasing times (the poller ticks forward).
//! Stochastic models advance their internal state lazily to the queried
//! instant; the waypoint model is a pure piecewise-linear interpolation of
//! its plan and keeps no mutable state at all.

pub mod models;
pub mod scenario;
pub mod source;
pub mod waypoint;


pub use models::{MobilityModel, RandomWalk2dModel, RandomWaypointModel, WaypointModel};
pub use scenario::{MEETING_POINTS, ScenarioMobility};
pub use source::{AgentMobility, PositionSource};
pub use waypoint::{Waypoint, WaypointPlan};
