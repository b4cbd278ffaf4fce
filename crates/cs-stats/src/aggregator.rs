//! Running statistics over completed customers.

use cs_station::{Customer, CustomerState};

use crate::StatsReport;

/// Sums and extrema of wait and service times.
///
/// Fed exactly once per customer, at the moment the customer's state becomes
/// `Done`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsAggregator {
    total_completed: u64,
    sum_wait:        u64,
    sum_service:     u64,
    max_wait:        u64,
    /// Smallest non-zero wait; `None` until one is seen.
    min_wait:        Option<u64>,
}

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished customer into the totals.
    ///
    /// Returns `false`, recording nothing, if the customer is not `Done`.
    pub fn record(&mut self, customer: &Customer) -> bool {
        if customer.state() != CustomerState::Done {
            return false;
        }
        let wait = customer.wait();
        self.total_completed += 1;
        self.sum_wait += wait;
        self.sum_service += customer.service_duration();
        self.max_wait = self.max_wait.max(wait);
        // Zero waits are excluded from the minimum.
        if wait > 0 {
            self.min_wait = Some(self.min_wait.map_or(wait, |m| m.min(wait)));
        }
        true
    }

    #[inline]
    pub fn total_completed(&self) -> u64 {
        self.total_completed
    }

    #[inline]
    pub fn sum_wait(&self) -> u64 {
        self.sum_wait
    }

    #[inline]
    pub fn sum_service(&self) -> u64 {
        self.sum_service
    }

    #[inline]
    pub fn max_wait(&self) -> u64 {
        self.max_wait
    }

    /// Smallest non-zero wait seen, or 0 if none.
    #[inline]
    pub fn min_wait(&self) -> u64 {
        self.min_wait.unwrap_or(0)
    }

    pub fn average_wait(&self) -> f64 {
        mean(self.sum_wait, self.total_completed)
    }

    pub fn average_service(&self) -> f64 {
        mean(self.sum_service, self.total_completed)
    }

    pub fn average_total(&self) -> f64 {
        self.average_wait() + self.average_service()
    }

    /// Customers completed per simulated minute over a run of `minutes`.
    pub fn efficiency(&self, minutes: u64) -> f64 {
        mean(self.total_completed, minutes)
    }

    /// Snapshot the current values into a printable report.
    pub fn report(&self) -> StatsReport {
        StatsReport {
            completed:       self.total_completed,
            average_wait:    self.average_wait(),
            average_service: self.average_service(),
            average_total:   self.average_total(),
            max_wait:        self.max_wait,
            min_wait:        self.min_wait(),
        }
    }
}

fn mean(sum: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
