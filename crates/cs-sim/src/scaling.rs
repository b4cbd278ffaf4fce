//! Station scaling (admission control): when to open and close stations.
//!
//! | Mode         | Open                                             | Close          |
//! |--------------|--------------------------------------------------|----------------|
//! | single queue | backlog staircase; or a station at its cap while | average rule   |
//! |              | the shared line is non-empty                     |                |
//! | per station  | any open station above the open threshold        | average rule   |
//!
//! The average rule closes the highest-numbered empty station when the mean
//! occupancy of open stations is at or below the close threshold.  The fleet
//! itself refuses to go below its minimum open count.

use cs_core::{CheckoutConfig, StaircaseStep, StationId, Tick};

use crate::Fleet;

/// A change to the set of open stations.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScalingAction {
    Opened(StationId),
    Closed(StationId),
}

// ── Close rule ────────────────────────────────────────────────────────────────

/// The close rule shared by both disciplines.
#[derive(Clone, Debug)]
pub struct CloseRule {
    threshold: f64,
}

impl CloseRule {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn apply(&self, fleet: &mut Fleet, now: Tick) -> Option<ScalingAction> {
        if fleet.average_occupancy() > self.threshold {
            return None;
        }
        fleet.close_highest_empty(now).map(ScalingAction::Closed)
    }
}

// ── Single queue ──────────────────────────────────────────────────────────────

/// Opening rules for single-queue mode.
#[derive(Clone, Debug)]
pub struct SingleQueueScaling {
    staircase:   Vec<StaircaseStep>,
    station_cap: usize,
    close:       CloseRule,
}

impl SingleQueueScaling {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            staircase:   config.staircase.clone(),
            station_cap: config.shared_station_cap,
            close:       CloseRule::new(config.close_threshold),
        }
    }

    /// Open count the staircase asks for at `backlog`, if any step is met.
    pub fn staircase_target(&self, backlog: usize) -> Option<usize> {
        self.staircase
            .iter()
            .filter(|step| backlog >= step.backlog)
            .map(|step| step.open_up_to)
            .max()
    }

    /// Apply both opening rules.  `shared_len` is the shared line's length.
    ///
    /// The staircase opens at most one station per tick; the cap rule may
    /// open one more on top.
    pub fn open(&self, fleet: &mut Fleet, shared_len: usize, now: Tick) -> Vec<ScalingAction> {
        let mut actions = Vec::new();

        let backlog = shared_len + fleet.occupancy();
        if let Some(target) = self.staircase_target(backlog) {
            if fleet.open_count() < target {
                actions.extend(fleet.open_next(now).map(ScalingAction::Opened));
            }
        }

        if shared_len > 0 && fleet.any_open_at_least(self.station_cap) {
            actions.extend(fleet.open_next(now).map(ScalingAction::Opened));
        }

        actions
    }

    pub fn close(&self, fleet: &mut Fleet, now: Tick) -> Option<ScalingAction> {
        self.close.apply(fleet, now)
    }

    #[inline]
    pub fn station_cap(&self) -> usize {
        self.station_cap
    }
}

// ── Per station ───────────────────────────────────────────────────────────────

/// Opening rule for per-station mode.
#[derive(Clone, Debug)]
pub struct PerStationScaling {
    open_threshold: usize,
    close:          CloseRule,
}

impl PerStationScaling {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            open_threshold: config.open_threshold,
            close:          CloseRule::new(config.close_threshold),
        }
    }

    pub fn open(&self, fleet: &mut Fleet, now: Tick) -> Option<ScalingAction> {
        if !fleet.any_open_at_least(self.open_threshold + 1) {
            return None;
        }
        fleet.open_next(now).map(ScalingAction::Opened)
    }

    pub fn close(&self, fleet: &mut Fleet, now: Tick) -> Option<ScalingAction> {
        self.close.apply(fleet, now)
    }
}
