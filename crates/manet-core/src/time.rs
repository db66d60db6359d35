//! Simulated time.
//!
//! # Design
//!
//! Time is a monotonically increasing instant measured in **integer
//! microseconds** since the start of the run.  Using an integer as the
//! canonical unit keeps all schedule arithmetic exact (no floating-point
//! drift in the event queue) and gives `SimTime` a total order, which the
//! engine's priority queue requires.
//!
//! Waypoint arithmetic (distance ÷ speed) naturally produces fractional
//! seconds; `from_secs_f64` rounds to the nearest microsecond, which is far
//! below the 0.1 s resolution anything in the scenario observes.
//!
//! `SimTime` doubles as a duration: the difference of two instants is again
//! a `SimTime`, mirroring how simulation engines treat `Time` values.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

const MICROS_PER_SEC: u64 = 1_000_000;

/// A simulated instant (or duration), in integer microseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub const fn from_micros(us: u64) -> Self {
        SimTime(us)
    }

    #[inline]
    pub const fn from_millis(ms: u64) -> Self {
        SimTime(ms * 1_000)
    }

    #[inline]
    pub const fn from_secs(s: u64) -> Self {
        SimTime(s * MICROS_PER_SEC)
    }

    /// Convert from fractional seconds, rounding to the nearest microsecond.
    /// Negative or non-finite inputs map to `SimTime::ZERO`.
    pub fn from_secs_f64(s: f64) -> Self {
        if !s.is_finite() || s <= 0.0 {
            return SimTime::ZERO;
        }
        SimTime((s * MICROS_PER_SEC as f64).round() as u64)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / MICROS_PER_SEC as f64
    }

    /// Duration elapsed since `earlier`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(earlier.0))
    }
}

impl Add for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl AddAssign for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: SimTime) {
        self.0 += rhs.0;
    }
}

impl Sub for SimTime {
    type Output = SimTime;
    /// Saturating: an earlier minus a later instant is `ZERO`, not a panic.
    #[inline]
    fn sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}
