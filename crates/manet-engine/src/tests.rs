//! Unit tests for the event engine.

use manet_core::SimTime;

use crate::Engine;

/// World used throughout: an append-only trace of (label, time) pairs.
type Trace = Vec<(&'static str, SimTime)>;

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn events_run_in_time_order() {
        let mut engine: Engine<Trace> = Engine::new();
        engine.schedule_at(SimTime::from_secs(3), |w, e| w.push(("c", e.now())));
        engine.schedule_at(SimTime::from_secs(1), |w, e| w.push(("a", e.now())));
        engine.schedule_at(SimTime::from_secs(2), |w, e| w.push(("b", e.now())));

        let mut trace = Trace::new();
        engine.run_until(&mut trace, SimTime::from_secs(10));

        let labels: Vec<_> = trace.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        assert_eq!(trace[0].1, SimTime::from_secs(1));
    }

    #[test]
    fn same_instant_is_fifo() {
        let mut engine: Engine<Trace> = Engine::new();
        let t = SimTime::from_millis(100);
        engine.schedule_at(t, |w, e| w.push(("first", e.now())));
        engine.schedule_at(t, |w, e| w.push(("second", e.now())));
        engine.schedule_at(t, |w, e| w.push(("third", e.now())));

        let mut trace = Trace::new();
        engine.run_until(&mut trace, SimTime::from_secs(1));

        let labels: Vec<_> = trace.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["first", "second", "third"]);
    }

    #[test]
    fn past_instants_clamp_to_now() {
        let mut engine: Engine<Trace> = Engine::new();
        engine.schedule_at(SimTime::from_secs(5), |w, e| {
            // Scheduling "for the past" from inside an event fires at now.
            e.schedule_at(SimTime::from_secs(1), |w2: &mut Trace, e2| {
                w2.push(("late", e2.now()));
            });
            w.push(("outer", e.now()));
        });

        let mut trace = Trace::new();
        engine.run_until(&mut trace, SimTime::from_secs(10));

        assert_eq!(trace, vec![("outer", SimTime::from_secs(5)), ("late", SimTime::from_secs(5))]);
    }
}

#[cfg(test)]
mod rescheduling {
    use super::*;

    /// Self-rescheduling poll: fires every 100 ms until five ticks recorded.
    fn poll(w: &mut Trace, e: &mut Engine<Trace>) {
        w.push(("tick", e.now()));
        if w.len() < 5 {
            e.schedule_in(SimTime::from_millis(100), poll);
        }
    }

    #[test]
    fn self_rescheduling_event_ticks_at_fixed_interval() {
        let mut engine: Engine<Trace> = Engine::new();
        engine.schedule_at(SimTime::from_millis(100), poll);

        let mut trace = Trace::new();
        let end = engine.run_until(&mut trace, SimTime::from_secs(600));

        assert_eq!(trace.len(), 5);
        for (i, (_, at)) in trace.iter().enumerate() {
            assert_eq!(*at, SimTime::from_millis(100 * (i as u64 + 1)));
        }
        // Queue drained naturally; clock rests at the last event.
        assert_eq!(end, SimTime::from_millis(500));
    }
}

#[cfg(test)]
mod termination {
    use super::*;

    #[test]
    fn stop_discards_pending_events() {
        let mut engine: Engine<Trace> = Engine::new();
        engine.schedule_at(SimTime::from_secs(1), |w, e| {
            w.push(("stopper", e.now()));
            e.request_stop();
        });
        engine.schedule_at(SimTime::from_secs(2), |w, e| w.push(("never", e.now())));

        let mut trace = Trace::new();
        let end = engine.run_until(&mut trace, SimTime::from_secs(600));

        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].0, "stopper");
        assert_eq!(end, SimTime::from_secs(1));
        assert_eq!(engine.pending_events(), 0);
        assert!(engine.stop_requested());
    }

    #[test]
    fn stop_beats_same_instant_later_events() {
        // The stop flag is observed before the next pop, so an event queued
        // behind the stopper at the same instant never fires.
        let mut engine: Engine<Trace> = Engine::new();
        let t = SimTime::from_secs(1);
        engine.schedule_at(t, |_, e| e.request_stop());
        engine.schedule_at(t, |w, e| w.push(("shadowed", e.now())));

        let mut trace = Trace::new();
        engine.run_until(&mut trace, SimTime::from_secs(600));
        assert!(trace.is_empty());
    }

    #[test]
    fn ceiling_always_wins() {
        // An endlessly self-rescheduling event must not outlive the ceiling.
        fn forever(w: &mut Trace, e: &mut Engine<Trace>) {
            w.push(("tick", e.now()));
            e.schedule_in(SimTime::from_millis(100), forever);
        }

        let mut engine: Engine<Trace> = Engine::new();
        engine.schedule_at(SimTime::from_millis(100), forever);

        let mut trace = Trace::new();
        let end = engine.run_until(&mut trace, SimTime::from_secs(600));

        assert_eq!(end, SimTime::from_secs(600));
        assert_eq!(engine.pending_events(), 0);
        // 600 s at 10 Hz, first tick at 0.1 s, last at exactly 600 s.
        assert_eq!(trace.len(), 6_000);
        assert_eq!(trace.last().map(|(_, at)| *at), Some(SimTime::from_secs(600)));
    }

    #[test]
    fn idempotent_stop() {
        let mut engine: Engine<Trace> = Engine::new();
        engine.request_stop();
        engine.request_stop();
        assert!(engine.stop_requested());

        let mut trace = Trace::new();
        engine.schedule_at(SimTime::from_secs(1), |w, e| w.push(("never", e.now())));
        engine.run_until(&mut trace, SimTime::from_secs(10));
        assert!(trace.is_empty());
    }

    #[test]
    fn clock_is_monotone() {
        let mut engine: Engine<Trace> = Engine::new();
        engine.schedule_at(SimTime::from_secs(2), |w, e| w.push(("b", e.now())));
        engine.schedule_at(SimTime::from_secs(1), |w, e| w.push(("a", e.now())));

        let mut trace = Trace::new();
        engine.run_until(&mut trace, SimTime::from_secs(600));
        assert!(trace.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}
