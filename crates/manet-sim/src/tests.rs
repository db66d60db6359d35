//! Unit and integration tests for manet-sim.

use manet_core::{AgentId, ScenarioConfig, ScenarioKind, SimTime, Vec3};
use manet_mobility::{AgentMobility, MEETING_POINTS, MobilityModel, ScenarioMobility};

use crate::convergence::{ConvergenceDetector, PollOutcome};
use crate::scenario::{Scenario, ScenarioEngine, ScenarioWorld};

fn config(kind: ScenarioKind, n: u32, speed: f64) -> ScenarioConfig {
    ScenarioConfig {
        population: n,
        mobility: Some(kind),
        speed_mps: speed,
        seed: 1,
        ..ScenarioConfig::default()
    }
}

// ── ConvergenceDetector ───────────────────────────────────────────────────────

#[cfg(test)]
mod detector {
    use super::*;

    fn detector(n: u32) -> ConvergenceDetector {
        ConvergenceDetector::new(n, Some(vec![Vec3::ORIGIN; n as usize]))
    }

    #[test]
    fn arrival_is_marked_exactly_once() {
        let mut d = detector(2);
        let near = Some(Vec3::new(3.0, 4.0, 0.0)); // 5 m out

        assert_eq!(d.poll(AgentId(0), near), PollOutcome::Arrived);
        assert_eq!(d.arrived_count(), 1);
        // Idempotent: a re-poll never touches the counter.
        assert_eq!(d.poll(AgentId(0), near), PollOutcome::AlreadyArrived);
        assert_eq!(d.poll(AgentId(0), None), PollOutcome::AlreadyArrived);
        assert_eq!(d.arrived_count(), 1);
    }

    #[test]
    fn radius_is_strict() {
        let mut d = detector(1);
        // Exactly on the radius does not count as arrived.
        assert_eq!(d.poll(AgentId(0), Some(Vec3::new(10.0, 0.0, 0.0))), PollOutcome::Pending);
        assert_eq!(d.poll(AgentId(0), Some(Vec3::new(9.99, 0.0, 0.0))), PollOutcome::Arrived);
    }

    #[test]
    fn counter_is_monotone_and_capped() {
        let mut d = detector(3);
        let mut last = 0;
        for round in 0..4 {
            for i in 0..3 {
                // First round leaves agent 2 pending, later rounds land everyone.
                let pos = if round == 0 && i == 2 {
                    Some(Vec3::new(50.0, 0.0, 0.0))
                } else {
                    Some(Vec3::ORIGIN)
                };
                d.poll(AgentId(i), pos);
                assert!(d.arrived_count() >= last);
                assert!(d.arrived_count() <= d.population());
                last = d.arrived_count();
            }
        }
        assert_eq!(d.arrived_count(), 3);
        assert!(d.all_arrived());
    }

    #[test]
    fn missing_position_is_transient() {
        let mut d = detector(1);
        assert_eq!(d.poll(AgentId(0), None), PollOutcome::Unavailable);
        assert_eq!(d.arrived_count(), 0);
        // The retry with a position succeeds.
        assert_eq!(d.poll(AgentId(0), Some(Vec3::ORIGIN)), PollOutcome::Arrived);
    }

    #[test]
    fn no_targets_never_converges() {
        let mut d = ConvergenceDetector::new(2, None);
        assert!(!d.has_targets());
        assert_eq!(d.poll(AgentId(0), Some(Vec3::ORIGIN)), PollOutcome::Pending);
        assert_eq!(d.arrived_count(), 0);
        assert!(!d.all_arrived());
    }
}

// ── Scheduled runs ────────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;

    #[test]
    fn dynamic_group_converges_before_the_ceiling() {
        let cfg = config(ScenarioKind::DynamicGroup, 4, 35.0);
        let (mut world, mut engine) = Scenario::build(&cfg).unwrap();

        let summary = Scenario::run(&mut world, &mut engine);

        assert!(summary.converged, "all agents should rendezvous");
        assert_eq!(summary.arrived, 4);
        assert!(summary.end_time < SimTime::from_secs(600));
        assert_eq!(engine.pending_events(), 0);
    }

    #[test]
    fn convergence_stop_lands_on_the_next_tick() {
        // Targets equal to the shared start: every agent is "there" at the
        // very first poll, so the check of the same tick must stop the run.
        let cfg = config(ScenarioKind::DynamicGroup, 3, 35.0);
        let ScenarioMobility { mobility, .. } = ScenarioMobility::build(&cfg);
        let convergence = ConvergenceDetector::new(3, Some(vec![MEETING_POINTS[0]; 3]));

        let mut world = ScenarioWorld::new(mobility, convergence);
        let mut engine = ScenarioEngine::new();
        Scenario::install(&world, &mut engine);

        let summary = Scenario::run(&mut world, &mut engine);
        assert!(summary.converged);
        assert_eq!(summary.end_time, SimTime::from_millis(100));
    }

    #[test]
    fn arrival_beats_the_plan_end_by_the_radius() {
        // Crossing the 10 m radius happens strictly before the plan's final
        // timestamp, and detection lags by at most one 0.1 s tick.
        let cfg = config(ScenarioKind::DynamicGroup, 2, 35.0);
        let (mut world, mut engine) = Scenario::build(&cfg).unwrap();

        let latest_plan_end = (0..2)
            .filter_map(|i| world.mobility.model(AgentId(i)))
            .filter_map(MobilityModel::waypoint_plan)
            .filter_map(|p| p.terminal().map(|wp| wp.at))
            .max()
            .unwrap();

        let summary = Scenario::run(&mut world, &mut engine);
        assert!(summary.converged);
        assert!(summary.end_time <= latest_plan_end + SimTime::from_millis(100));
    }

    #[test]
    fn target_less_scenario_runs_to_the_ceiling() {
        let cfg = config(ScenarioKind::RandomWalk2d, 3, 35.0);
        let (mut world, mut engine) = Scenario::build(&cfg).unwrap();

        let summary = Scenario::run(&mut world, &mut engine);

        assert!(!summary.converged);
        assert_eq!(summary.arrived, 0);
        assert_eq!(summary.end_time, SimTime::from_secs(600));
    }

    #[test]
    fn unavailable_positions_are_retried_not_fatal() {
        // Two agents with targets, but only one mobility model installed:
        // agent 1's position lookup misses on every poll.
        let cfg = config(ScenarioKind::DynamicGroup, 1, 35.0);
        let ScenarioMobility { mobility, .. } = ScenarioMobility::build(&cfg);
        let convergence = ConvergenceDetector::new(2, Some(vec![MEETING_POINTS[2]; 2]));

        let mut world =
            ScenarioWorld::new(AgentMobility::new(mobility.into_models()), convergence);
        let mut engine = ScenarioEngine::new();
        Scenario::install(&world, &mut engine);

        // Bounded drive: well past agent 0's arrival, far short of 600 s.
        let end = engine.run_until(&mut world, SimTime::from_secs(30));
        assert_eq!(end, SimTime::from_secs(30));
        assert_eq!(world.convergence.arrived_count(), 1);
        assert!(world.convergence.is_arrived(AgentId(0)));
        assert!(!world.convergence.is_arrived(AgentId(1)));
        assert!(!world.convergence.all_arrived());
    }

    #[test]
    fn invalid_config_is_rejected_at_build() {
        let mut cfg = config(ScenarioKind::DynamicGroup, 0, 35.0);
        assert!(Scenario::build(&cfg).is_err());
        cfg.population = 2;
        cfg.speed_mps = -1.0;
        assert!(Scenario::build(&cfg).is_err());
    }
}
