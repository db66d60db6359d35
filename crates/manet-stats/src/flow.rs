//! Per-flow packet counters and their reduction.

use rustc_hash::FxHashMap;

use manet_core::FlowId;

/// Raw counters for one source→destination traffic flow.
///
/// Owned by the traffic layer during the run; the aggregation reads a
/// snapshot only after the run stops.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlowRecord {
    pub tx_packets: u64,
    pub rx_packets: u64,
    pub lost_packets: u64,
    /// Sum of end-to-end delays of every received packet, in seconds.
    pub delay_sum_secs: f64,
}

// ── FlowTotals ────────────────────────────────────────────────────────────────

/// The four counters summed across all flows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlowTotals {
    pub tx_packets: u64,
    pub rx_packets: u64,
    pub lost_packets: u64,
    pub delay_sum_secs: f64,
}

impl FlowTotals {
    /// Reduce a snapshot of flow records to their totals.
    pub fn aggregate<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FlowRecord>,
    {
        let mut totals = FlowTotals::default();
        for r in records {
            totals.tx_packets += r.tx_packets;
            totals.rx_packets += r.rx_packets;
            totals.lost_packets += r.lost_packets;
            totals.delay_sum_secs += r.delay_sum_secs;
        }
        totals
    }
}

// ── FlowLedger ────────────────────────────────────────────────────────────────

/// Live accumulation surface the traffic layer drives, one record per flow.
///
/// Integer-keyed, so the map uses FxHash.
#[derive(Default)]
pub struct FlowLedger {
    flows: FxHashMap<FlowId, FlowRecord>,
}

impl FlowLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tx(&mut self, flow: FlowId) {
        self.flows.entry(flow).or_default().tx_packets += 1;
    }

    pub fn record_rx(&mut self, flow: FlowId, delay_secs: f64) {
        let record = self.flows.entry(flow).or_default();
        record.rx_packets += 1;
        record.delay_sum_secs += delay_secs;
    }

    pub fn record_lost(&mut self, flow: FlowId) {
        self.flows.entry(flow).or_default().lost_packets += 1;
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn get(&self, flow: FlowId) -> Option<&FlowRecord> {
        self.flows.get(&flow)
    }

    /// End-of-run snapshot, sorted by flow id for stable output.
    pub fn snapshot(&self) -> Vec<(FlowId, FlowRecord)> {
        let mut flows: Vec<_> = self.flows.iter().map(|(&id, &r)| (id, r)).collect();
        flows.sort_by_key(|(id, _)| *id);
        flows
    }

    /// Totals across all flows without materialising a snapshot.
    pub fn totals(&self) -> FlowTotals {
        FlowTotals::aggregate(self.flows.values())
    }
}
