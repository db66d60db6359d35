//! Toy echo traffic: every ordered node pair gets one flow that sends a
//! packet per second during the traffic window.
//!
//! This is demo glue standing in for the external traffic layer, not a radio
//! model: a packet is delivered after a fixed link delay when the endpoints
//! are within a fixed range at send time, and counted lost otherwise.  Its
//! only job is to drive the flow ledger and the application-layer trace
//! hooks the way a real traffic generator would.

use manet_core::{AgentId, FlowId, SimTime};
use manet_mobility::PositionSource;
use manet_sim::{ScenarioEngine, ScenarioWorld};

const TRAFFIC_START: SimTime = SimTime::from_secs(2);
const TRAFFIC_STOP: SimTime = SimTime::from_secs(10);
const SEND_INTERVAL: SimTime = SimTime::from_secs(1);

/// Endpoints farther apart than this at send time lose the packet.
const LINK_RANGE: f64 = 250.0;
const LINK_DELAY: SimTime = SimTime::from_millis(2);

/// Schedule the first send of every flow.  Flow ids are assigned in
/// (src, dst) iteration order, matching the snapshot sort.
pub fn install_traffic(engine: &mut ScenarioEngine, population: u32) {
    let mut next_flow = 0u32;
    for src in 0..population {
        for dst in 0..population {
            if src == dst {
                continue;
            }
            let flow = FlowId(next_flow);
            next_flow += 1;
            let (src, dst) = (AgentId(src), AgentId(dst));
            engine.schedule_at(TRAFFIC_START, move |w, e| send_packet(w, e, flow, src, dst));
        }
    }
}

fn send_packet(
    world: &mut ScenarioWorld,
    engine: &mut ScenarioEngine,
    flow: FlowId,
    src: AgentId,
    dst: AgentId,
) {
    let now = engine.now();
    // Trace hooks: a transmit tallies as control, a receive as data.
    world.counters.on_transmit();
    world.flows.record_tx(flow);

    let delivered = match (
        world.mobility.position_of(src, now),
        world.mobility.position_of(dst, now),
    ) {
        (Some(a), Some(b)) => a.distance(b) <= LINK_RANGE,
        // No position (no mobility installed): nothing can be delivered.
        _ => false,
    };

    if delivered {
        engine.schedule_in(LINK_DELAY, move |w, _| {
            w.counters.on_receive();
            w.flows.record_rx(flow, LINK_DELAY.as_secs_f64());
        });
    } else {
        world.flows.record_lost(flow);
    }

    let next = now + SEND_INTERVAL;
    if next < TRAFFIC_STOP {
        engine.schedule_at(next, move |w, e| send_packet(w, e, flow, src, dst));
    }
}
