//! The station fleet: every station, open or closed, in ID order.

use cs_core::{CheckoutConfig, SimRng, StationId, Tick};
use cs_station::{Customer, Station};

/// Owns the stations and answers fleet-wide questions for the routing and
/// scaling code.
///
/// Stations are stored in ascending ID order, so `stations[id.slot()]` is
/// station `id`, and every scan below is deterministic left-to-right.
#[derive(Clone, Debug)]
pub struct Fleet {
    stations: Vec<Station>,
    min_open: usize,
}

impl Fleet {
    /// All stations closed.
    pub fn new(config: &CheckoutConfig) -> Self {
        let stations = (0..config.station_count)
            .map(|slot| {
                Station::new(
                    StationId::from_slot(slot),
                    config.station_queue_capacity,
                    config.service_time,
                )
            })
            .collect();
        Self {
            stations,
            min_open: config.min_open,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[inline]
    pub(crate) fn stations_mut(&mut self) -> &mut [Station] {
        &mut self.stations
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.slot())
    }

    pub(crate) fn station_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.get_mut(id.slot())
    }

    pub fn open_count(&self) -> usize {
        self.stations.iter().filter(|s| s.is_open()).count()
    }

    /// Customers held by all stations (waiting + in service).
    pub fn occupancy(&self) -> usize {
        self.stations.iter().map(Station::occupancy).sum()
    }

    /// `true` when no station holds a customer.
    pub fn is_drained(&self) -> bool {
        self.stations.iter().all(Station::is_empty)
    }

    /// Mean occupancy over open stations; 0 when none are open.
    pub fn average_occupancy(&self) -> f64 {
        match self.open_count() {
            0 => 0.0,
            open => self.occupancy() as f64 / open as f64,
        }
    }

    /// The open station with the fewest customers among those whose line
    /// has room.  Ties go to the lowest ID.
    pub fn least_loaded(&self) -> Option<StationId> {
        self.stations
            .iter()
            .filter(|s| s.is_open() && !s.is_line_full())
            .min_by_key(|s| s.occupancy())
            .map(Station::id)
    }

    /// `true` if any open station holds at least `cap` customers.
    pub fn any_open_at_least(&self, cap: usize) -> bool {
        self.stations.iter().any(|s| s.is_open() && s.occupancy() >= cap)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Open stations 1..=n at `now`.
    pub fn open_initial(&mut self, n: usize, now: Tick) {
        for station in self.stations.iter_mut().take(n) {
            station.open(now);
        }
    }

    /// Open the lowest-numbered closed station.  `None` if all are open.
    pub fn open_next(&mut self, now: Tick) -> Option<StationId> {
        let station = self.stations.iter_mut().find(|s| !s.is_open())?;
        station.open(now);
        Some(station.id())
    }

    /// Close the highest-numbered open, empty station, unless that would
    /// leave fewer than the minimum open.  A station opened earlier in the
    /// same tick is a candidate like any other.
    pub fn close_highest_empty(&mut self, now: Tick) -> Option<StationId> {
        if self.open_count() <= self.min_open {
            return None;
        }
        let station = self
            .stations
            .iter_mut()
            .rev()
            .find(|s| s.is_open() && s.is_empty())?;
        station.close(now).then(|| station.id())
    }

    /// Run every open station's service process for `now`, in ID order.
    /// Returns the customers who finished.
    pub fn service_all(&mut self, now: Tick, rng: &mut SimRng) -> Vec<Customer> {
        self.stations
            .iter_mut()
            .filter(|s| s.is_open())
            .filter_map(|s| s.tick_service(now, rng))
            .collect()
    }
}
