//! Live application-layer packet tallies.

/// Control/data packet counts observed during the run.
///
/// The traffic layer calls the two hooks from its trace callbacks: every
/// observed application-layer *transmit* event counts toward the control
/// total and every observed *receive* event toward the data total.  The
/// classification is by event direction, exactly as wired in the scenario
/// this toolkit reproduces.
///
/// Fields of an explicit context object, not globals — single writer per
/// simulated instant, so no synchronisation is needed in the cooperative
/// engine.  A multi-threaded host must serialise access.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AppPacketCounters {
    control: u64,
    data: u64,
}

impl AppPacketCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trace hook: an application transmitted a packet.
    #[inline]
    pub fn on_transmit(&mut self) {
        self.control += 1;
    }

    /// Trace hook: an application received a packet.
    #[inline]
    pub fn on_receive(&mut self) {
        self.data += 1;
    }

    #[inline]
    pub fn control(&self) -> u64 {
        self.control
    }

    #[inline]
    pub fn data(&self) -> u64 {
        self.data
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.control + self.data
    }
}
