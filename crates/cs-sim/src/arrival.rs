//! Customer arrival process.

use cs_core::{CustomerId, SimRng, Tick, TimeRange};
use cs_station::Customer;

/// Generates customers at uniformly distributed real-valued gaps.
///
/// The next arrival instant is measured from the tick at which the previous
/// arrival fired.  At most one customer arrives per tick.
#[derive(Clone, Debug)]
pub struct ArrivalProcess {
    interarrival: TimeRange,
    next_arrival: f64,
    next_id:      CustomerId,
}

impl ArrivalProcess {
    /// Draw the first arrival instant, measured from minute 0.
    pub fn new(interarrival: TimeRange, rng: &mut SimRng) -> Self {
        Self {
            interarrival,
            next_arrival: rng.sample_minutes(interarrival),
            next_id:      CustomerId::FIRST,
        }
    }

    /// `true` if an arrival is due at `now`.
    #[inline]
    pub fn is_due(&self, now: Tick) -> bool {
        now.as_minutes() >= self.next_arrival
    }

    /// Create the next customer, arriving at `now`, and draw the following
    /// arrival instant.
    pub fn fire(&mut self, now: Tick, rng: &mut SimRng) -> Customer {
        let customer = Customer::new(self.next_id, now);
        self.next_id = self.next_id.next();
        self.next_arrival = now.as_minutes() + rng.sample_minutes(self.interarrival);
        customer
    }

    /// The real-valued minute of the next arrival.
    #[inline]
    pub fn next_arrival(&self) -> f64 {
        self.next_arrival
    }

    /// Customers created so far.
    #[inline]
    pub fn issued(&self) -> u64 {
        u64::from(self.next_id.0) - 1
    }
}
