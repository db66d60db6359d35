//! Per-flow CSV dump for offline analysis.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use manet_core::FlowId;

use crate::error::StatsResult;
use crate::flow::FlowRecord;

/// Writes one `flows.csv` row per traffic flow.
pub struct FlowCsvWriter {
    writer: Writer<File>,
    finished: bool,
}

impl FlowCsvWriter {
    /// Create the file at `path` and write the header row.
    pub fn new(path: &Path) -> StatsResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["flow_id", "tx_packets", "rx_packets", "lost_packets", "delay_sum_secs"])?;
        Ok(Self { writer, finished: false })
    }

    /// Write a snapshot of flow records.
    pub fn write_flows(&mut self, flows: &[(FlowId, FlowRecord)]) -> StatsResult<()> {
        for (id, record) in flows {
            self.writer.write_record(&[
                id.0.to_string(),
                record.tx_packets.to_string(),
                record.rx_packets.to_string(),
                record.lost_packets.to_string(),
                record.delay_sum_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush the underlying file.  Idempotent.
    pub fn finish(&mut self) -> StatsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
