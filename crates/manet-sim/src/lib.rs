//! `manet-sim` — convergence detection and the scenario run loop.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`convergence`] | `ConvergenceDetector`, `PollOutcome`, the tick constants  |
//! | [`scenario`]    | `ScenarioWorld`, `Scenario` (build / install / run)       |
//! | [`error`]       | `SimError`, `SimResult`                                   |
//!
//! # Run shape
//!
//! [`Scenario::build`] turns a validated configuration into a
//! [`ScenarioWorld`] (the one explicit context object holding every piece of
//! mutable run state) and an [`Engine`](manet_engine::Engine) with the
//! convergence callbacks pre-scheduled.  The caller may add its own traffic
//! events, then [`Scenario::run`] drives the engine to convergence or to the
//! 600 s hard ceiling, whichever comes first.

pub mod convergence;
pub mod error;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use convergence::{ARRIVAL_RADIUS, ConvergenceDetector, HARD_STOP, POLL_INTERVAL, PollOutcome};
pub use error::{SimError, SimResult};
pub use scenario::{RunSummary, Scenario, ScenarioEngine, ScenarioWorld};
