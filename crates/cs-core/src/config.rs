//! Simulation configuration.
//!
//! `CheckoutConfig::default()` reproduces the store being modelled: a
//! 600-minute day, 12 stations of which 2 open at the start, roughly one
//! customer per minute and three to five minutes at the register.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Queueing discipline under test.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Mode {
    /// One shared line; open stations pull from its head.
    #[default]
    SingleQueue,
    /// One line per station; arrivals join the shortest one.
    PerStation,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::SingleQueue, Mode::PerStation];

    #[inline]
    pub fn has_shared_queue(self) -> bool {
        matches!(self, Mode::SingleQueue)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Mode::SingleQueue => "single-queue",
            Mode::PerStation  => "per-station",
        })
    }
}

// ── TimeRange ─────────────────────────────────────────────────────────────────

/// Half-open interval `[min, max)` of real-valued minutes.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

impl TimeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whole ticks needed to cover the longest possible draw.
    #[inline]
    pub fn max_ticks(&self) -> u64 {
        self.max.ceil().max(0.0) as u64
    }

    fn validate(&self, what: &str) -> CoreResult<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(CoreError::Config(format!("{what} bounds must be finite")));
        }
        if self.min <= 0.0 || self.min >= self.max {
            return Err(CoreError::Config(format!(
                "{what} must satisfy 0 < min < max, got [{}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

// ── StaircaseStep ─────────────────────────────────────────────────────────────

/// One step of the single-queue opening staircase: once the backlog reaches
/// `backlog`, keep opening stations until `open_up_to` are open.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaircaseStep {
    pub backlog:    usize,
    pub open_up_to: usize,
}

impl StaircaseStep {
    pub const fn new(backlog: usize, open_up_to: usize) -> Self {
        Self { backlog, open_up_to }
    }
}

// ── CheckoutConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built with `..Default::default()` or loaded from a JSON file by
/// the host and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckoutConfig {
    /// Queueing discipline.  Default: single queue.
    pub mode: Mode,

    /// Minutes during which arrivals are admitted.  Default: 600.
    pub horizon: u64,

    /// Stations in the fleet, open or not.  Default: 12.
    pub station_count: usize,

    /// Stations opened by `start()`.  Default: 2.
    pub initial_open: usize,

    /// The close rule never takes the fleet below this.  Default: 2.
    pub min_open: usize,

    /// Gap between arrivals, in minutes.  Default: [0.5, 1.0).
    pub interarrival: TimeRange,

    /// Time at the register, in minutes.  Default: [3.0, 5.0).
    pub service_time: TimeRange,

    /// Capacity of each station's own line.  Default: 50.
    pub station_queue_capacity: usize,

    /// Capacity of the shared line (single-queue mode).  Default: 100.
    pub shared_queue_capacity: usize,

    /// Single-queue mode: a station stops pulling from the shared line once
    /// it holds this many customers (waiting + in service).  Default: 3.
    pub shared_station_cap: usize,

    /// Single-queue mode: backlog thresholds, ascending.  Default:
    /// 8→4, 16→6, 24→8, 32→10, 40→12.
    pub staircase: Vec<StaircaseStep>,

    /// Per-station mode: open another station when any open station holds
    /// more than this many customers.  Default: 4.
    pub open_threshold: usize,

    /// Close an empty station when the average occupancy of open stations
    /// is at or below this.  Default: 3.
    pub close_threshold: f64,

    /// RNG seed.  `None` draws from OS entropy, so runs differ.
    pub seed: Option<u64>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            mode:                   Mode::SingleQueue,
            horizon:                600,
            station_count:          12,
            initial_open:           2,
            min_open:               2,
            interarrival:           TimeRange::new(0.5, 1.0),
            service_time:           TimeRange::new(3.0, 5.0),
            station_queue_capacity: 50,
            shared_queue_capacity:  100,
            shared_station_cap:     3,
            staircase: vec![
                StaircaseStep::new(8, 4),
                StaircaseStep::new(16, 6),
                StaircaseStep::new(24, 8),
                StaircaseStep::new(32, 10),
                StaircaseStep::new(40, 12),
            ],
            open_threshold:  4,
            close_threshold: 3.0,
            seed:            None,
        }
    }
}

impl CheckoutConfig {
    /// Same configuration under another discipline.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.horizon == 0 {
            return Err(CoreError::Config("horizon must be at least one minute".into()));
        }
        if self.station_count == 0 || self.station_count > u16::MAX as usize {
            return Err(CoreError::Config(format!(
                "station_count must be in 1..={}, got {}",
                u16::MAX,
                self.station_count
            )));
        }
        if self.min_open == 0 || self.min_open > self.station_count {
            return Err(CoreError::Config(format!(
                "min_open must be in 1..={}, got {}",
                self.station_count, self.min_open
            )));
        }
        if self.initial_open < self.min_open || self.initial_open > self.station_count {
            return Err(CoreError::Config(format!(
                "initial_open must be in {}..={}, got {}",
                self.min_open, self.station_count, self.initial_open
            )));
        }
        self.interarrival.validate("interarrival")?;
        self.service_time.validate("service_time")?;
        if self.station_queue_capacity == 0 {
            return Err(CoreError::Config("station_queue_capacity must be positive".into()));
        }
        if self.shared_queue_capacity == 0 {
            return Err(CoreError::Config("shared_queue_capacity must be positive".into()));
        }
        if self.shared_station_cap == 0 {
            return Err(CoreError::Config("shared_station_cap must be positive".into()));
        }
        if !self.close_threshold.is_finite() || self.close_threshold < 0.0 {
            return Err(CoreError::Config("close_threshold must be a non-negative number".into()));
        }
        let ascending = self
            .staircase
            .windows(2)
            .all(|w| w[0].backlog < w[1].backlog && w[0].open_up_to <= w[1].open_up_to);
        if !ascending {
            return Err(CoreError::Config("staircase steps must be ascending".into()));
        }
        Ok(())
    }

    /// Upper bound on ticks needed to empty a full fleet after the horizon.
    ///
    /// Every customer that can be held at once, served back to back at the
    /// longest service time.
    pub fn drain_limit(&self) -> u64 {
        let held = self.station_count * (self.station_queue_capacity + 1) + self.shared_queue_capacity;
        // One idle tick per customer: a station never starts the next
        // customer in the tick that completes the previous one.
        held as u64 * (self.service_time.max_ticks() + 1)
    }
}
