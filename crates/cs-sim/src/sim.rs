//! The `CheckoutSim` engine and its tick loop.

use cs_core::{BoundedQueue, CheckoutConfig, Mode, SimClock, SimRng, Tick};
use cs_station::{Customer, Station};
use cs_stats::{FleetReport, StatisticsAggregator};
use tracing::{debug, info, trace, warn};

use crate::arrival::ArrivalProcess;
use crate::routing::Strategy;
use crate::scaling::ScalingAction;
use crate::summary::{Completion, DropCounts, TickSummary};
use crate::{Fleet, SimError, SimObserver, SimResult};

/// The checkout simulator.
///
/// `CheckoutSim` holds all run state and drives the three-phase tick:
///
/// 1. **Service**: every open station, in ID order, either completes its
///    customer or starts the next one in its line.  Completions feed the
///    statistics.
/// 2. **Scaling**: the discipline's open rules run (single-queue mode then
///    pulls from the shared line), followed by the close rule.
/// 3. **Arrival**: while the clock is before the horizon, at most one
///    customer arrives and is routed.  A turned-away customer is counted in
///    [`dropped_customers`](Self::dropped_customers).
///
/// The clock is incremented at the start of [`advance`](Self::advance), so
/// the first processed tick is `T1`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug)]
pub struct CheckoutSim {
    config:     CheckoutConfig,
    clock:      SimClock,
    rng:        SimRng,
    fleet:      Fleet,
    strategy:   Strategy,
    arrivals:   ArrivalProcess,
    statistics: StatisticsAggregator,
    dropped:    DropCounts,
    admitted:   u64,
    started:    bool,
    finished:   bool,
    peak_open:  usize,
}

impl CheckoutSim {
    /// A fresh, not-yet-started engine.  `config` must already be valid.
    pub(crate) fn new(config: CheckoutConfig, mut rng: SimRng) -> Self {
        let arrivals = ArrivalProcess::new(config.interarrival, &mut rng);
        Self {
            clock:      SimClock::new(config.horizon),
            fleet:      Fleet::new(&config),
            strategy:   Strategy::from_config(&config),
            arrivals,
            statistics: StatisticsAggregator::new(),
            dropped:    DropCounts::default(),
            admitted:   0,
            started:    false,
            finished:   false,
            peak_open:  0,
            config,
            rng,
        }
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Open the initial stations and start the clock.  Does nothing if the
    /// engine was already started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let now = self.clock.current_tick;
        self.fleet.open_initial(self.config.initial_open, now);
        self.peak_open = self.fleet.open_count();
        debug!(
            tick = %now,
            mode = %self.strategy.mode(),
            open = self.peak_open,
            "checkout opened"
        );
    }

    /// Run one simulated minute.
    ///
    /// Returns what happened in it, or `None` (changing nothing) if the
    /// engine has not been started or has already finished.
    pub fn advance(&mut self) -> Option<TickSummary> {
        if !self.is_running() {
            return None;
        }
        let now = self.clock.advance();
        let mut summary = TickSummary::new(now);

        // ── ① Service ─────────────────────────────────────────────────────
        for customer in self.fleet.service_all(now, &mut self.rng) {
            self.statistics.record(&customer);
            summary.completions.extend(Completion::from_customer(&customer));
        }

        // ── ② Scaling ─────────────────────────────────────────────────────
        summary.actions = self.strategy.scale(&mut self.fleet, now);

        // ── ③ Arrival ─────────────────────────────────────────────────────
        if self.clock.accepting_arrivals() && self.arrivals.is_due(now) {
            let customer = self.arrivals.fire(now, &mut self.rng);
            let outcome = self.strategy.route(customer, &mut self.fleet, now, &mut summary.actions);
            match outcome.drop_reason() {
                Some(reason) => {
                    self.dropped.record(reason);
                    warn!(tick = %now, customer = %outcome.customer(), %reason, "customer dropped");
                }
                None => self.admitted += 1,
            }
            summary.arrival = Some(outcome);
        }

        self.log_actions(now, &summary.actions);
        self.peak_open = self.peak_open.max(self.fleet.open_count());

        trace!(
            tick = %now,
            completed = summary.completions.len(),
            backlog = self.customers_in_system(),
            open = self.fleet.open_count(),
            "tick"
        );

        if self.clock.past_horizon() && self.fleet.is_drained() && self.strategy.shared_len() == 0 {
            self.finished = true;
            info!(
                tick = %now,
                mode = %self.strategy.mode(),
                completed = self.statistics.total_completed(),
                dropped = self.dropped.total(),
                "run finished"
            );
        }

        Some(summary)
    }

    /// Start the engine (if needed) and advance until the fleet has drained.
    ///
    /// # Errors
    ///
    /// [`SimError::DrainExceeded`] if the fleet is still busy
    /// [`drain_limit`](CheckoutConfig::drain_limit) ticks past the horizon.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.start();
        let limit = self.config.drain_limit();
        while !self.finished {
            if self.clock.drain_ticks() >= limit {
                return Err(SimError::DrainExceeded {
                    tick: self.clock.current_tick,
                    limit,
                });
            }
            observer.on_tick_start(self.clock.current_tick.offset(1));
            if let Some(summary) = self.advance() {
                observer.on_tick_end(&summary);
            }
        }
        observer.on_sim_end(self.clock.current_tick, &self.statistics);
        Ok(())
    }

    /// Advance at most `n` ticks, stopping early if the run finishes.
    /// Returns the number of ticks processed.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut processed = 0;
        for _ in 0..n {
            if !self.is_running() {
                break;
            }
            observer.on_tick_start(self.clock.current_tick.offset(1));
            if let Some(summary) = self.advance() {
                observer.on_tick_end(&summary);
                processed += 1;
            }
        }
        processed
    }

    /// Return to the freshly built state: tick 0, all stations closed and
    /// empty, fresh statistics, and a newly drawn first arrival.
    ///
    /// The random stream carries on from where it was, so a reset run is not
    /// a replay of the previous one.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone(), self.rng.clone());
        debug!("engine reset");
    }

    // ── Read-only view ────────────────────────────────────────────────────

    /// `true` between [`start`](Self::start) and the end of the run.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.started && !self.finished
    }

    /// `true` once the clock is at or past the horizon and no customer is
    /// left anywhere.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.strategy.mode()
    }

    pub fn open_station_count(&self) -> usize {
        self.fleet.open_count()
    }

    /// Highest number of stations open at once so far.
    #[inline]
    pub fn peak_open_stations(&self) -> usize {
        self.peak_open
    }

    /// All stations, open or closed, in ID order.
    #[inline]
    pub fn stations(&self) -> &[Station] {
        self.fleet.stations()
    }

    #[inline]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The shared line, front first.  `None` in per-station mode.
    pub fn shared_queue_snapshot(&self) -> Option<Vec<&Customer>> {
        self.strategy.shared_queue().map(BoundedQueue::snapshot)
    }

    #[inline]
    pub fn statistics(&self) -> &StatisticsAggregator {
        &self.statistics
    }

    #[inline]
    pub fn dropped_customers(&self) -> DropCounts {
        self.dropped
    }

    /// Customers created by the arrival process so far, dropped or not.
    #[inline]
    pub fn arrivals(&self) -> u64 {
        self.arrivals.issued()
    }

    /// Customers accepted into a line.
    #[inline]
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Customers waiting anywhere or in service.
    pub fn customers_in_system(&self) -> usize {
        self.fleet.occupancy() + self.strategy.shared_len()
    }

    /// Real-valued minute of the next arrival.
    #[inline]
    pub fn next_arrival(&self) -> f64 {
        self.arrivals.next_arrival()
    }

    /// Per-station utilisation up to the current tick.
    pub fn fleet_report(&self) -> FleetReport {
        FleetReport::from_stations(self.fleet.stations(), self.clock.current_tick)
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    fn log_actions(&self, now: Tick, actions: &[ScalingAction]) {
        let open = self.fleet.open_count();
        for action in actions {
            match action {
                ScalingAction::Opened(station) => {
                    debug!(tick = %now, %station, open, "station opened");
                }
                ScalingAction::Closed(station) => {
                    debug!(tick = %now, %station, open, "station closed");
                }
            }
        }
    }
}
