//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter where one tick is one
//! simulated minute of store operation.  Integer ticks keep every timestamp
//! on a customer exact: service durations are drawn as real numbers but are
//! rounded up to whole ticks before they are stored.
//!
//! Only the arrival process works in real-valued minutes (its next-arrival
//! instant); it compares against [`Tick::as_minutes`].

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick (one simulated minute).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The tick as a real-valued minute count.
    #[inline]
    pub fn as_minutes(self) -> f64 {
        self.0 as f64
    }

    /// Split into (hours, minutes) since the store opened.
    #[inline]
    pub fn hours_minutes(self) -> (u64, u64) {
        (self.0 / 60, self.0 % 60)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The engine clock.
///
/// Holds the current tick and the horizon after which no new customers are
/// admitted.  The clock keeps running past the horizon while the fleet
/// drains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimClock {
    /// The most recently processed tick.  `Tick::ZERO` before the first
    /// `advance`.
    pub current_tick: Tick,
    /// First tick at which arrivals stop.
    pub horizon: Tick,
}

impl SimClock {
    pub fn new(horizon: u64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            horizon: Tick(horizon),
        }
    }

    /// Advance the clock by one tick and return the new current tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = self.current_tick.offset(1);
        self.current_tick
    }

    /// `true` while new arrivals may still be admitted.
    #[inline]
    pub fn accepting_arrivals(&self) -> bool {
        self.current_tick < self.horizon
    }

    /// `true` once the clock has reached (or passed) the horizon.
    #[inline]
    pub fn past_horizon(&self) -> bool {
        self.current_tick >= self.horizon
    }

    /// Ticks spent draining after the horizon (0 before it).
    #[inline]
    pub fn drain_ticks(&self) -> u64 {
        self.current_tick.since(self.horizon)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.current_tick.hours_minutes();
        write!(f, "{} ({}h {:02}m)", self.current_tick, h, m)
    }
}
