//! `manet-stats` — flow counters and end-of-run performance statistics.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`flow`]     | `FlowRecord`, `FlowTotals`, `FlowLedger`                      |
//! | [`counters`] | `AppPacketCounters` — live control/data tallies               |
//! | [`report`]   | `SimulationReport` — the three derived metrics + persistence  |
//! | [`csv`]      | `FlowCsvWriter` — per-flow tabular dump                       |
//! | [`error`]    | `StatsError`, `StatsResult`                                   |
//!
//! The traffic layer owns the raw counters: it drives [`FlowLedger`] and
//! [`AppPacketCounters`] through observation hooks during the run.  The
//! aggregation here only reads a snapshot once the run has stopped and
//! reduces it to three scalars, each guarded against empty denominators.

pub mod counters;
pub mod csv;
pub mod error;
pub mod flow;
pub mod report;


pub use counters::AppPacketCounters;
pub use csv::FlowCsvWriter;
pub use error::{StatsError, StatsResult};
pub use flow::{FlowLedger, FlowRecord, FlowTotals};
pub use report::SimulationReport;
