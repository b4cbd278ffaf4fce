//! Per-tick results returned by [`CheckoutSim::advance`][crate::CheckoutSim::advance].

use cs_core::{CustomerId, StationId, Tick};
use cs_station::Customer;

use crate::routing::{ArrivalOutcome, DropReason};
use crate::scaling::ScalingAction;

/// A customer who finished service this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Completion {
    pub customer: CustomerId,
    pub station:  StationId,
    /// Minutes from arrival to service start.
    pub wait:     u64,
    /// Minutes at the register.
    pub service:  u64,
}

impl Completion {
    /// `None` if the customer was never assigned to a station.
    pub fn from_customer(customer: &Customer) -> Option<Self> {
        Some(Self {
            customer: customer.id(),
            station:  customer.station()?,
            wait:     customer.wait(),
            service:  customer.service_duration(),
        })
    }
}

/// Everything that happened in one simulated minute, in the order it
/// happened: completions, then station openings and closings, then the
/// arrival (if any).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TickSummary {
    pub tick:        Tick,
    pub completions: Vec<Completion>,
    pub actions:     Vec<ScalingAction>,
    pub arrival:     Option<ArrivalOutcome>,
}

impl TickSummary {
    pub fn new(tick: Tick) -> Self {
        Self {
            tick,
            completions: Vec::new(),
            actions:     Vec::new(),
            arrival:     None,
        }
    }

    pub fn opened(&self) -> impl Iterator<Item = StationId> + '_ {
        self.actions.iter().filter_map(|a| match a {
            ScalingAction::Opened(id) => Some(*id),
            ScalingAction::Closed(_)  => None,
        })
    }

    pub fn closed(&self) -> impl Iterator<Item = StationId> + '_ {
        self.actions.iter().filter_map(|a| match a {
            ScalingAction::Closed(id) => Some(*id),
            ScalingAction::Opened(_)  => None,
        })
    }

    /// The reason this tick's arrival was dropped, if it was.
    pub fn dropped(&self) -> Option<DropReason> {
        self.arrival.as_ref().and_then(ArrivalOutcome::drop_reason)
    }
}

/// Dropped customers, by reason.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DropCounts {
    pub shared_queue_full: u64,
    pub no_station:        u64,
}

impl DropCounts {
    pub fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::SharedQueueFull    => self.shared_queue_full += 1,
            DropReason::NoStationAvailable => self.no_station += 1,
        }
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.shared_queue_full + self.no_station
    }
}
