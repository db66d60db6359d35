//! `manet-core` — foundational types for the `manet_sim` ad-hoc network
//! scenario toolkit.
//!
//! This crate is a dependency of every other `manet-*` crate.  It has no
//! `manet-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `FlowId`                                   |
//! | [`geom`]    | `Vec3`, `Rect`, Euclidean distance                    |
//! | [`time`]    | `SimTime` — microsecond simulated-time instant        |
//! | [`rng`]     | `AgentRng` — identity-keyed deterministic RNG         |
//! | [`config`]  | `ScenarioConfig`, `ScenarioKind`, `RoutingProtocol`   |
//! | [`error`]   | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RoutingProtocol, ScenarioConfig, ScenarioKind};
pub use error::{CoreError, CoreResult};
pub use geom::{Rect, Vec3};
pub use ids::{AgentId, FlowId};
pub use rng::AgentRng;
pub use time::SimTime;
