//! A checkout station: its own line, one service slot, and open-time
//! accounting.

use cs_core::{BoundedQueue, SimRng, StationId, Tick, TimeRange};

use crate::Customer;

/// One register.
///
/// # Invariant
///
/// A closed station is empty: its line is empty and nobody is in service.
/// [`close`](Self::close) refuses to run otherwise and
/// [`admit`](Self::admit) refuses customers while closed.
#[derive(Clone, Debug)]
pub struct Station {
    id:           StationId,
    open:         bool,
    waiting:      BoundedQueue<Customer>,
    in_service:   Option<Customer>,
    service_time: TimeRange,

    completed:       u64,
    cumulative_open: u64,
    opened_at:       Tick,
    ever_opened:     bool,
}

impl Station {
    /// A closed, empty station with a line of `queue_capacity`.
    pub fn new(id: StationId, queue_capacity: usize, service_time: TimeRange) -> Self {
        Self {
            id,
            open: false,
            waiting: BoundedQueue::new(queue_capacity),
            in_service: None,
            service_time,
            completed: 0,
            cumulative_open: 0,
            opened_at: Tick::ZERO,
            ever_opened: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Open the station at `at`.  Returns `false` if it was already open.
    pub fn open(&mut self, at: Tick) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.opened_at = at;
        self.ever_opened = true;
        true
    }

    /// Close the station at `at`.
    ///
    /// Fails, changing nothing, unless the station is open and empty.  On
    /// success the minutes since opening are added to the cumulative open
    /// time.
    pub fn close(&mut self, at: Tick) -> bool {
        if !self.open || !self.is_empty() {
            return false;
        }
        self.cumulative_open += at.since(self.opened_at);
        self.open = false;
        true
    }

    // ── Customers ─────────────────────────────────────────────────────────

    /// Put `customer` at the back of this station's line.
    ///
    /// Returns the customer in `Err` if the station is closed or its line is
    /// full; the customer is then untouched.
    pub fn admit(&mut self, mut customer: Customer) -> Result<(), Customer> {
        if !self.open || self.waiting.is_full() {
            return Err(customer);
        }
        customer.assign_to_station(self.id);
        self.waiting.insert(customer)
    }

    /// Run this station for one tick.
    ///
    /// - If the customer at the register is due, they finish and are
    ///   returned.
    /// - Otherwise, if the register is free, the next customer in line steps
    ///   up and a service duration is drawn from `rng`.
    ///
    /// A completion and a new service start never happen in the same call.
    pub fn tick_service(&mut self, now: Tick, rng: &mut SimRng) -> Option<Customer> {
        if let Some(current) = &self.in_service {
            if !current.is_service_done(now) {
                return None;
            }
            let mut done = self.in_service.take()?;
            done.finish_service();
            self.completed += 1;
            return Some(done);
        }

        if let Some(mut next) = self.waiting.remove() {
            let minutes = rng.sample_minutes(self.service_time);
            next.begin_service(now, minutes);
            self.in_service = Some(next);
        }
        None
    }

    // ── Read-only view ────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> StationId {
        self.id
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Customers waiting plus the one in service.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.waiting.size() + usize::from(self.in_service.is_some())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupancy() == 0
    }

    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.waiting.size()
    }

    /// `true` when the station's own line cannot take another customer.
    #[inline]
    pub fn is_line_full(&self) -> bool {
        self.waiting.is_full()
    }

    #[inline]
    pub fn in_service(&self) -> Option<&Customer> {
        self.in_service.as_ref()
    }

    /// Customers in line, front first.
    pub fn waiting(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.waiting.iter()
    }

    #[inline]
    pub fn completed_count(&self) -> u64 {
        self.completed
    }

    /// Minutes open over all closed intervals (excludes a current one).
    #[inline]
    pub fn cumulative_open_ticks(&self) -> u64 {
        self.cumulative_open
    }

    /// Tick at which the current (or last) open interval began.
    #[inline]
    pub fn opened_at(&self) -> Tick {
        self.opened_at
    }

    /// `true` if the station has been opened at least once.
    #[inline]
    pub fn ever_opened(&self) -> bool {
        self.ever_opened
    }

    /// Minutes open up to `now`, including the current interval.
    pub fn open_ticks(&self, now: Tick) -> u64 {
        if self.open {
            self.cumulative_open + now.since(self.opened_at)
        } else {
            self.cumulative_open
        }
    }

    /// Customers served per open minute up to `now`; 0 if never open.
    pub fn throughput_per_minute(&self, now: Tick) -> f64 {
        match self.open_ticks(now) {
            0 => 0.0,
            ticks => self.completed as f64 / ticks as f64,
        }
    }
}
