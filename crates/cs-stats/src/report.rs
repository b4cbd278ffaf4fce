//! Plain report types and their text rendering.

use std::fmt;

use cs_core::{StationId, Tick};
use cs_station::Station;

// ── StatsReport ───────────────────────────────────────────────────────────────

/// Customer-level results of a run.  Times are in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatsReport {
    pub completed:       u64,
    pub average_wait:    f64,
    pub average_service: f64,
    pub average_total:   f64,
    pub max_wait:        u64,
    pub min_wait:        u64,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CUSTOMERS")?;
        writeln!(f, "  Completed:            {}", self.completed)?;
        writeln!(f, "  Average wait:         {:.2} min", self.average_wait)?;
        writeln!(f, "  Average service:      {:.2} min", self.average_service)?;
        writeln!(f, "  Average total:        {:.2} min", self.average_total)?;
        writeln!(f, "  Max wait:             {:.2} min", self.max_wait as f64)?;
        writeln!(f, "  Min wait:             {:.2} min", self.min_wait as f64)
    }
}

// ── FleetReport ───────────────────────────────────────────────────────────────

/// One station's utilisation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StationSummary {
    pub station:      StationId,
    pub served:       u64,
    pub open_minutes: u64,
    /// Customers per open minute; 0 when nothing was served.
    pub per_minute:   f64,
}

/// Per-station utilisation for every station that was used.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FleetReport {
    pub rows: Vec<StationSummary>,
}

impl FleetReport {
    /// Summarise `stations` as of `now`.
    ///
    /// A station counts as used if it served anyone or was ever open.
    pub fn from_stations(stations: &[Station], now: Tick) -> Self {
        let rows = stations
            .iter()
            .filter(|s| s.completed_count() > 0 || s.ever_opened())
            .map(|s| StationSummary {
                station:      s.id(),
                served:       s.completed_count(),
                open_minutes: s.open_ticks(now),
                per_minute:   s.throughput_per_minute(now),
            })
            .collect();
        Self { rows }
    }

    #[inline]
    pub fn stations_used(&self) -> usize {
        self.rows.len()
    }

    /// Stations that completed at least one customer.
    pub fn stations_serving(&self) -> usize {
        self.rows.iter().filter(|r| r.served > 0).count()
    }

    pub fn total_served(&self) -> u64 {
        self.rows.iter().map(|r| r.served).sum()
    }

    pub fn total_open_minutes(&self) -> u64 {
        self.rows.iter().map(|r| r.open_minutes).sum()
    }

    /// Average customers per used station; 0 if none were used.
    pub fn average_served(&self) -> f64 {
        match self.rows.len() {
            0 => 0.0,
            n => self.total_served() as f64 / n as f64,
        }
    }

    /// Average open minutes per used station; 0 if none were used.
    pub fn average_open_minutes(&self) -> f64 {
        match self.rows.len() {
            0 => 0.0,
            n => self.total_open_minutes() as f64 / n as f64,
        }
    }
}

impl fmt::Display for FleetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STATIONS")?;
        for row in &self.rows {
            write!(
                f,
                "  Station #{:<2}  {:>4} served | {:>4} min open",
                row.station.0, row.served, row.open_minutes
            )?;
            if row.served > 0 {
                write!(f, " | {:.2} per min", row.per_minute)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  Stations used:        {}", self.stations_used())?;
        if !self.rows.is_empty() {
            writeln!(f, "  Average served:       {:.2}", self.average_served())?;
            writeln!(f, "  Average open:         {:.2} min", self.average_open_minutes())?;
        }
        Ok(())
    }
}
