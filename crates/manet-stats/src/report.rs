//! The final per-run report: three derived metrics, appended to a text file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::counters::AppPacketCounters;
use crate::error::StatsResult;
use crate::flow::FlowTotals;

/// The three aggregate metrics of one run.  Immutable once computed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationReport {
    /// 100 × Σlost ÷ Σtx; 0 when nothing was transmitted.
    pub packet_loss_ratio_pct: f64,
    /// Σdelay ÷ Σrx, in seconds; 0 when nothing was received.
    pub avg_delay_secs: f64,
    /// control ÷ (control + data); 0 when no packet was observed at all —
    /// the zero is a sentinel, not a measurement.
    pub control_overhead_ratio: f64,
}

impl SimulationReport {
    /// Reduce the flow totals and live counters to the final metrics.
    /// Every ratio is guarded against an empty denominator.
    pub fn compute(totals: &FlowTotals, counters: &AppPacketCounters) -> Self {
        let packet_loss_ratio_pct = if totals.tx_packets > 0 {
            100.0 * totals.lost_packets as f64 / totals.tx_packets as f64
        } else {
            0.0
        };

        let avg_delay_secs = if totals.rx_packets > 0 {
            totals.delay_sum_secs / totals.rx_packets as f64
        } else {
            0.0
        };

        let control_overhead_ratio = if counters.total() > 0 {
            counters.control() as f64 / counters.total() as f64
        } else {
            0.0
        };

        Self { packet_loss_ratio_pct, avg_delay_secs, control_overhead_ratio }
    }

    /// Render the three labelled report lines plus the trailing blank line.
    pub fn to_text(&self) -> String {
        format!(
            "PacketLossRatio: {}%\nAvgDelay: {} s\nControlOverhead: {}%\n\n",
            self.packet_loss_ratio_pct,
            self.avg_delay_secs,
            self.control_overhead_ratio * 100.0,
        )
    }

    /// Append the report block to `path`, creating the file if needed.
    ///
    /// Append, never truncate: consecutive runs of the same configuration
    /// accumulate their blocks in one file.  An open failure is returned to
    /// the caller, who logs it and lets the run finish unpersisted.
    pub fn append_to(&self, path: &Path) -> StatsResult<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(self.to_text().as_bytes())?;
        debug!("report block appended to {}", path.display());
        Ok(())
    }
}
