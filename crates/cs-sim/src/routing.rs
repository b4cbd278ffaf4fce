//! Routing disciplines: where an arriving customer goes.
//!
//! [`Strategy`] is a closed enum over the two disciplines.  The engine holds
//! one and dispatches with `match`; each variant owns the state that only it
//! needs (the shared line exists only in single-queue mode).

use std::fmt;

use cs_core::{BoundedQueue, CheckoutConfig, CustomerId, Mode, StationId, Tick};
use cs_station::Customer;

use crate::Fleet;
use crate::scaling::{PerStationScaling, ScalingAction, SingleQueueScaling};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Why an arriving customer was turned away.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DropReason {
    /// Single-queue mode: the shared line was at capacity.
    SharedQueueFull,
    /// Per-station mode: every open line was full and no station could open.
    NoStationAvailable,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DropReason::SharedQueueFull    => "shared queue full",
            DropReason::NoStationAvailable => "no station available",
        })
    }
}

/// What happened to the customer who arrived this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ArrivalOutcome {
    /// Accepted.  `station` is `None` when the customer joined the shared line.
    Queued {
        customer: CustomerId,
        station:  Option<StationId>,
    },
    Dropped {
        customer: CustomerId,
        reason:   DropReason,
    },
}

impl ArrivalOutcome {
    pub fn customer(&self) -> CustomerId {
        match *self {
            ArrivalOutcome::Queued { customer, .. } | ArrivalOutcome::Dropped { customer, .. } => {
                customer
            }
        }
    }

    pub fn drop_reason(&self) -> Option<DropReason> {
        match *self {
            ArrivalOutcome::Dropped { reason, .. } => Some(reason),
            ArrivalOutcome::Queued { .. }          => None,
        }
    }
}

// ── Single queue ──────────────────────────────────────────────────────────────

/// One shared line feeding every open station.
#[derive(Clone, Debug)]
pub struct SingleQueueStrategy {
    shared:  BoundedQueue<Customer>,
    scaling: SingleQueueScaling,
}

impl SingleQueueStrategy {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            shared:  BoundedQueue::new(config.shared_queue_capacity),
            scaling: SingleQueueScaling::new(config),
        }
    }

    /// Put an arriving customer at the back of the shared line.
    pub fn route(&mut self, mut customer: Customer) -> ArrivalOutcome {
        let id = customer.id();
        if self.shared.is_full() {
            return ArrivalOutcome::Dropped { customer: id, reason: DropReason::SharedQueueFull };
        }
        customer.enter_shared_queue();
        match self.shared.insert(customer) {
            Ok(())  => ArrivalOutcome::Queued { customer: id, station: None },
            Err(_)  => ArrivalOutcome::Dropped { customer: id, reason: DropReason::SharedQueueFull },
        }
    }

    /// One left-to-right pass: top up each open station from the shared
    /// line until it holds `station_cap` customers or its own line is full.
    /// Returns how many customers moved.
    pub fn pull(&mut self, fleet: &mut Fleet) -> usize {
        let cap = self.scaling.station_cap();
        let mut moved = 0;
        for station in fleet.stations_mut().iter_mut().filter(|s| s.is_open()) {
            while station.occupancy() < cap && !station.is_line_full() {
                let Some(customer) = self.shared.remove() else {
                    return moved;
                };
                let admitted = station.admit(customer);
                debug_assert!(admitted.is_ok(), "{} refused a pulled customer", station.id());
                moved += 1;
            }
        }
        moved
    }

    /// Open rules, then the pull, then the close rule.  A station opened
    /// here is filled in the same tick.
    pub fn scale(&mut self, fleet: &mut Fleet, now: Tick) -> Vec<ScalingAction> {
        let mut actions = self.scaling.open(fleet, self.shared.size(), now);
        self.pull(fleet);
        actions.extend(self.scaling.close(fleet, now));
        actions
    }

    #[inline]
    pub fn shared(&self) -> &BoundedQueue<Customer> {
        &self.shared
    }
}

// ── Per station ───────────────────────────────────────────────────────────────

/// Each arrival joins the shortest open line.
#[derive(Clone, Debug)]
pub struct PerStationStrategy {
    scaling: PerStationScaling,
}

impl PerStationStrategy {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            scaling: PerStationScaling::new(config),
        }
    }

    /// Send `customer` to the least-loaded open station with room.  If there
    /// is none, open the next closed station and send them there; the
    /// opening is pushed onto `actions`.
    pub fn route(
        &mut self,
        customer: Customer,
        fleet:    &mut Fleet,
        now:      Tick,
        actions:  &mut Vec<ScalingAction>,
    ) -> ArrivalOutcome {
        let id = customer.id();
        let target = fleet.least_loaded().or_else(|| {
            let opened = fleet.open_next(now)?;
            actions.push(ScalingAction::Opened(opened));
            Some(opened)
        });
        let dropped = ArrivalOutcome::Dropped { customer: id, reason: DropReason::NoStationAvailable };

        let Some(station_id) = target else {
            return dropped;
        };
        match fleet.station_mut(station_id).map(|s| s.admit(customer)) {
            Some(Ok(())) => ArrivalOutcome::Queued { customer: id, station: Some(station_id) },
            _            => dropped,
        }
    }

    pub fn scale(&mut self, fleet: &mut Fleet, now: Tick) -> Vec<ScalingAction> {
        let mut actions: Vec<ScalingAction> = self.scaling.open(fleet, now).into_iter().collect();
        actions.extend(self.scaling.close(fleet, now));
        actions
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

/// The routing discipline in use, fixed at construction.
#[derive(Clone, Debug)]
pub enum Strategy {
    SingleQueue(SingleQueueStrategy),
    PerStation(PerStationStrategy),
}

impl Strategy {
    pub fn from_config(config: &CheckoutConfig) -> Self {
        match config.mode {
            Mode::SingleQueue => Strategy::SingleQueue(SingleQueueStrategy::new(config)),
            Mode::PerStation  => Strategy::PerStation(PerStationStrategy::new(config)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Strategy::SingleQueue(_) => Mode::SingleQueue,
            Strategy::PerStation(_)  => Mode::PerStation,
        }
    }

    /// Route one arriving customer.  Stations opened to take them are
    /// appended to `actions`.
    pub fn route(
        &mut self,
        customer: Customer,
        fleet:    &mut Fleet,
        now:      Tick,
        actions:  &mut Vec<ScalingAction>,
    ) -> ArrivalOutcome {
        match self {
            Strategy::SingleQueue(s) => s.route(customer),
            Strategy::PerStation(s)  => s.route(customer, fleet, now, actions),
        }
    }

    /// Run the scaling step for this tick.
    pub fn scale(&mut self, fleet: &mut Fleet, now: Tick) -> Vec<ScalingAction> {
        match self {
            Strategy::SingleQueue(s) => s.scale(fleet, now),
            Strategy::PerStation(s)  => s.scale(fleet, now),
        }
    }

    /// The shared line, in single-queue mode.
    pub fn shared_queue(&self) -> Option<&BoundedQueue<Customer>> {
        match self {
            Strategy::SingleQueue(s) => Some(s.shared()),
            Strategy::PerStation(_)  => None,
        }
    }

    /// Customers in the shared line (0 in per-station mode).
    pub fn shared_len(&self) -> usize {
        self.shared_queue().map_or(0, BoundedQueue::size)
    }
}
