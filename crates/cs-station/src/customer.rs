//! Customer lifecycle.
//!
//! ```text
//! Arrived ──► QueuedShared ──► QueuedStation ──► InService ──► Done
//!    └──────────────────────────────┘
//! ```
//!
//! `QueuedShared` only occurs in single-queue mode.  Transitions are strictly
//! forward; a customer never revisits a state.

use cs_core::{CustomerId, StationId, Tick};

/// Where a customer is in its visit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerState {
    /// Just created by the arrival process, not yet routed.
    Arrived,
    /// Waiting in the shared line.
    QueuedShared,
    /// Waiting in a station's own line.
    QueuedStation,
    /// At the register.
    InService,
    /// Paid and left.
    Done,
}

impl CustomerState {
    /// `true` in either waiting state.
    #[inline]
    pub fn is_waiting(self) -> bool {
        matches!(self, CustomerState::QueuedShared | CustomerState::QueuedStation)
    }
}

/// One shopper.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    id:            CustomerId,
    arrival_tick:  Tick,
    service_start: Option<Tick>,
    service_end:   Option<Tick>,
    station:       Option<StationId>,
    state:         CustomerState,
}

impl Customer {
    pub fn new(id: CustomerId, arrival_tick: Tick) -> Self {
        Self {
            id,
            arrival_tick,
            service_start: None,
            service_end:   None,
            station:       None,
            state:         CustomerState::Arrived,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Arrived → QueuedShared.
    pub fn enter_shared_queue(&mut self) {
        debug_assert_eq!(self.state, CustomerState::Arrived, "{} routed twice", self.id);
        self.state = CustomerState::QueuedShared;
    }

    /// Arrived | QueuedShared → QueuedStation.
    pub fn assign_to_station(&mut self, station: StationId) {
        debug_assert!(
            matches!(self.state, CustomerState::Arrived | CustomerState::QueuedShared),
            "{} assigned from {:?}",
            self.id,
            self.state
        );
        self.station = Some(station);
        self.state = CustomerState::QueuedStation;
    }

    /// QueuedStation → InService.
    ///
    /// `duration_minutes` is rounded up, so a customer always occupies the
    /// register for a whole number of ticks.
    pub fn begin_service(&mut self, now: Tick, duration_minutes: f64) {
        debug_assert_eq!(self.state, CustomerState::QueuedStation);
        let ticks = duration_minutes.ceil().max(0.0) as u64;
        self.service_start = Some(now);
        self.service_end = Some(now + ticks);
        self.state = CustomerState::InService;
    }

    /// `true` once an in-service customer's end tick has been reached.
    #[inline]
    pub fn is_service_done(&self, now: Tick) -> bool {
        self.state == CustomerState::InService && self.service_end.is_some_and(|end| now >= end)
    }

    /// InService → Done.
    pub fn finish_service(&mut self) {
        debug_assert_eq!(self.state, CustomerState::InService);
        self.state = CustomerState::Done;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> CustomerState {
        self.state
    }

    #[inline]
    pub fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    #[inline]
    pub fn service_start(&self) -> Option<Tick> {
        self.service_start
    }

    #[inline]
    pub fn service_end(&self) -> Option<Tick> {
        self.service_end
    }

    /// The station this customer was assigned to, if any yet.
    #[inline]
    pub fn station(&self) -> Option<StationId> {
        self.station
    }

    // ── Derived metrics (minutes; 0 until the timestamps exist) ──────────

    /// Minutes from arrival to reaching the register.
    pub fn wait(&self) -> u64 {
        self.service_start.map_or(0, |start| start.since(self.arrival_tick))
    }

    /// Minutes at the register.
    pub fn service_duration(&self) -> u64 {
        match (self.service_start, self.service_end) {
            (Some(start), Some(end)) => end.since(start),
            _ => 0,
        }
    }

    /// Minutes from arrival to leaving.
    pub fn total_time(&self) -> u64 {
        self.service_end.map_or(0, |end| end.since(self.arrival_tick))
    }

    /// Minutes waited so far while still in a line; 0 otherwise.
    pub fn current_wait(&self, now: Tick) -> u64 {
        if self.state.is_waiting() {
            now.since(self.arrival_tick)
        } else {
            0
        }
    }
}
