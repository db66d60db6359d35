//! The event queue and its run loop.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::debug;
use manet_core::SimTime;

/// A scheduled callback.  Takes the world state and the engine itself, so an
/// event can schedule follow-up events or request a stop.
type EventFn<W> = Box<dyn FnOnce(&mut W, &mut Engine<W>)>;

struct Scheduled<W> {
    at: SimTime,
    /// Tie-breaker: events at the same instant run in schedule order.
    seq: u64,
    run: EventFn<W>,
}

// Manual ordering impls — the boxed closure has no Ord, and only the
// (at, seq) key participates in queue ordering.

impl<W> PartialEq for Scheduled<W> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl<W> Eq for Scheduled<W> {}

impl<W> PartialOrd for Scheduled<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for Scheduled<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.at, self.seq).cmp(&(other.at, other.seq))
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// A single-threaded discrete-event engine generic over the world type `W`.
///
/// The world is owned by the caller and threaded through every event, so all
/// mutable run state lives in one explicit context object instead of
/// process-wide globals.
pub struct Engine<W> {
    queue: BinaryHeap<Reverse<Scheduled<W>>>,
    next_seq: u64,
    now: SimTime,
    stop_requested: bool,
}

impl<W> Default for Engine<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Engine<W> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
            now: SimTime::ZERO,
            stop_requested: false,
        }
    }

    /// The current simulated instant.  Monotonically non-decreasing.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    #[inline]
    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// Number of events still pending.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Schedule `event` for the absolute instant `at`.
    ///
    /// An instant in the past is clamped to the current one, so the event
    /// still fires (after everything already queued for `now`).
    pub fn schedule_at<F>(&mut self, at: SimTime, event: F)
    where
        F: FnOnce(&mut W, &mut Engine<W>) + 'static,
    {
        let at = at.max(self.now);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled { at, seq, run: Box::new(event) }));
    }

    /// Schedule `event` to fire `delay` after the current instant.
    pub fn schedule_in<F>(&mut self, delay: SimTime, event: F)
    where
        F: FnOnce(&mut W, &mut Engine<W>) + 'static,
    {
        self.schedule_at(self.now + delay, event);
    }

    /// Request that the run stop.  Idempotent.  The event currently executing
    /// finishes; everything still pending is discarded when the run loop
    /// observes the flag.
    pub fn request_stop(&mut self) {
        if !self.stop_requested {
            debug!("engine stop requested at {}", self.now);
            self.stop_requested = true;
        }
    }

    /// Execute pending events in (time, schedule-order) until the queue
    /// drains, a stop is requested, or the next event lies beyond `ceiling`.
    ///
    /// The ceiling always wins over an unbounded wait: no event later than
    /// `ceiling` fires, and when the ceiling cuts the run short the clock is
    /// left at `ceiling`.  Returns the final clock value.  Pending events are
    /// discarded on any exit path that ends the run early.
    pub fn run_until(&mut self, world: &mut W, ceiling: SimTime) -> SimTime {
        while !self.stop_requested {
            let Some(Reverse(ev)) = self.queue.pop() else {
                break;
            };
            if ev.at > ceiling {
                self.now = ceiling;
                break;
            }
            self.now = ev.at;
            (ev.run)(world, self);
        }
        if !self.queue.is_empty() {
            debug!("discarding {} pending events at {}", self.queue.len(), self.now);
            self.queue.clear();
        }
        self.now
    }
}
