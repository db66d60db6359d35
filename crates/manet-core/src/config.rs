//! Scenario configuration surface.
//!
//! Read once at startup — typically from a TOML file and/or command-line
//! flags by the application crate — and passed by reference everywhere else.
//!
//! # Selector leniency
//!
//! The mobility and routing selectors are `Option`s: an unrecognised name on
//! the command line maps to `None` (no mobility installed / no routing
//! recorded) rather than an abort.  Callers are expected to log a warning
//! when they downgrade an unknown name; see `ScenarioKind::from_str`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::CoreError;

// ── ScenarioKind ──────────────────────────────────────────────────────────────

/// Which mobility scenario the trajectory generator builds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum ScenarioKind {
    /// Every agent under an independent bounded random walk.
    RandomWalk2d,
    /// Agent 0 random-waypoint "leader"; the rest placed in a disc around
    /// its start and walking independently.
    LeaderGroup,
    /// Shared rendezvous plan: meeting point 0 → random → meeting point 1 →
    /// random → meeting point 2.
    DynamicGroup,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScenarioKind::RandomWalk2d => "RandomWalk2d",
            ScenarioKind::LeaderGroup => "LeaderGroup",
            ScenarioKind::DynamicGroup => "DynamicGroup",
        };
        f.write_str(s)
    }
}

impl FromStr for ScenarioKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RandomWalk2d" => Ok(ScenarioKind::RandomWalk2d),
            "LeaderGroup" => Ok(ScenarioKind::LeaderGroup),
            "DynamicGroup" => Ok(ScenarioKind::DynamicGroup),
            other => Err(CoreError::UnknownSelector(other.to_string())),
        }
    }
}

// ── RoutingProtocol ───────────────────────────────────────────────────────────

/// Routing protocol installed on the stack.  Pure configuration glue: the
/// toolkit records the choice (log line, report file name) and delegates the
/// protocol itself to the hosting network engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum RoutingProtocol {
    Aodv,
    Olsr,
    Dsdv,
}

impl fmt::Display for RoutingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoutingProtocol::Aodv => "AODV",
            RoutingProtocol::Olsr => "OLSR",
            RoutingProtocol::Dsdv => "DSDV",
        };
        f.write_str(s)
    }
}

impl FromStr for RoutingProtocol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AODV" => Ok(RoutingProtocol::Aodv),
            "OLSR" => Ok(RoutingProtocol::Olsr),
            "DSDV" => Ok(RoutingProtocol::Dsdv),
            other => Err(CoreError::UnknownSelector(other.to_string())),
        }
    }
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// Top-level scenario configuration.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of mobile agents.  Must be > 0.
    pub population: u32,

    /// Mobility scenario; `None` installs no mobility (agents never move).
    pub mobility: Option<ScenarioKind>,

    /// Constant node speed in metres per second.  Must be positive.
    pub speed_mps: f64,

    /// Routing protocol; `None` records no protocol.
    pub routing: Option<RoutingProtocol>,

    /// Master RNG seed.  The same seed always produces the same trajectories.
    pub seed: u64,

    /// Directory the report and flow dump are written to.
    pub output_dir: PathBuf,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            population: 80,
            mobility: Some(ScenarioKind::RandomWalk2d),
            speed_mps: 35.0,
            routing: None,
            seed: 1,
            output_dir: PathBuf::from("results"),
        }
    }
}

impl ScenarioConfig {
    /// Reject configurations the rest of the toolkit assumes away.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.population == 0 {
            return Err(CoreError::Config("population must be > 0".into()));
        }
        if !(self.speed_mps > 0.0) {
            return Err(CoreError::Config(format!(
                "speed_mps must be positive, got {}",
                self.speed_mps
            )));
        }
        Ok(())
    }

    /// Report file name, deterministic given the configuration:
    /// `"{n}nodes_{scenario}_{speed}mps_{protocol}.txt"`.
    ///
    /// A missing routing protocol leaves its component empty, and a missing
    /// mobility selector renders as `None`, so distinct configurations never
    /// collide on the same file.
    pub fn report_file_name(&self) -> String {
        let mobility = match self.mobility {
            Some(kind) => kind.to_string(),
            None => "None".to_string(),
        };
        let routing = match self.routing {
            Some(proto) => proto.to_string(),
            None => String::new(),
        };
        format!(
            "{}nodes_{}_{:.0}mps_{}.txt",
            self.population, mobility, self.speed_mps, routing
        )
    }

    /// Full report path under `output_dir`.
    pub fn report_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(self.report_file_name())
    }
}
