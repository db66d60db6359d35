//! `manet-engine` — a minimal single-threaded discrete-event scheduler.
//!
//! # Why this exists
//!
//! The scenario components (position polls, convergence checks, traffic
//! events) are callbacks scheduled for future simulated instants.  Scanning
//! every agent at every instant would cost O(N) per tick regardless of how
//! many callbacks are actually due; the engine inverts the problem with a
//! priority queue of pending events, so each step does O(log P) work where
//! P is the number of pending events.
//!
//! # Execution model
//!
//! Cooperative and strictly single-threaded: at most one event runs at any
//! simulated instant, and an event "suspends" by rescheduling itself for a
//! later instant rather than blocking.  Events scheduled for the same
//! instant run in schedule order (FIFO, enforced by a sequence counter).
//! Once a stop is requested — or the hard ceiling passed to
//! [`Engine::run_until`] is reached — every pending event is discarded and
//! none fires again.

pub mod engine;

#[cfg(test)]
mod tests;

pub use engine::Engine;
