//! Integration tests for cs-sim.

use cs_core::{CheckoutConfig, CoreError, CustomerId, Mode, SimRng, StationId, Tick};
use cs_station::{Customer, CustomerState};
use cs_stats::StatisticsAggregator;

use crate::routing::{PerStationStrategy, SingleQueueStrategy};
use crate::scaling::{CloseRule, PerStationScaling, SingleQueueScaling};
use crate::{
    ArrivalOutcome, CheckoutSim, DropCounts, DropReason, Fleet, NoopObserver, ScalingAction,
    SimBuilder, SimError, SimObserver, TickRecorder, TickSummary, compare_modes, run_mode,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn seeded(mode: Mode) -> CheckoutConfig {
    CheckoutConfig::default().with_mode(mode).with_seed(42)
}

fn build(config: CheckoutConfig) -> CheckoutSim {
    SimBuilder::new(config).build().unwrap()
}

fn customer(id: u32) -> Customer {
    Customer::new(CustomerId(id), Tick(0))
}

/// Fleet built from `config` with the first `open` stations opened at T0.
fn fleet_with_open(config: &CheckoutConfig, open: usize) -> Fleet {
    let mut fleet = Fleet::new(config);
    fleet.open_initial(open, Tick(0));
    fleet
}

/// Admit `n` fresh customers straight into station `id`'s line.
fn load_station(fleet: &mut Fleet, id: u16, n: u32) {
    let station = fleet.station_mut(StationId(id)).unwrap();
    for i in 0..n {
        station.admit(customer(1_000 + i)).unwrap();
    }
}

/// Start `sim` and advance it to the end, calling `check` after every tick.
fn step_to_end(sim: &mut CheckoutSim, mut check: impl FnMut(&CheckoutSim, &TickSummary)) {
    let limit = sim.config().horizon + sim.config().drain_limit();
    sim.start();
    while let Some(summary) = sim.advance() {
        check(sim, &summary);
        assert!(sim.current_tick().0 <= limit, "run did not drain by {limit}");
    }
}

/// A small store that cannot keep up: two stations, one-slot lines.
fn cramped(mode: Mode) -> CheckoutConfig {
    CheckoutConfig {
        horizon:                60,
        station_count:          2,
        initial_open:           2,
        min_open:               2,
        station_queue_capacity: 1,
        shared_queue_capacity:  1,
        staircase:              vec![],
        ..seeded(mode)
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = build(CheckoutConfig::default());
        assert_eq!(sim.mode(), Mode::SingleQueue);
        assert_eq!(sim.current_tick(), Tick::ZERO);
        assert_eq!(sim.stations().len(), 12);
        assert_eq!(sim.open_station_count(), 0);
        assert!(!sim.is_running());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CheckoutConfig { horizon: 0, ..CheckoutConfig::default() };
        let result = SimBuilder::new(config).build();
        assert!(matches!(result, Err(SimError::Config(CoreError::Config(_)))));
    }

    #[test]
    fn mode_override() {
        let sim = SimBuilder::new(CheckoutConfig::default())
            .mode(Mode::PerStation)
            .build()
            .unwrap();
        assert_eq!(sim.mode(), Mode::PerStation);
        assert_eq!(sim.config().mode, Mode::PerStation);
        assert!(sim.shared_queue_snapshot().is_none());
    }

    #[test]
    fn single_queue_has_empty_shared_line() {
        let sim = build(CheckoutConfig::default());
        assert_eq!(sim.shared_queue_snapshot().map(|q| q.len()), Some(0));
    }

    #[test]
    fn injected_rng_takes_precedence_over_seed() {
        let run = |seed: u64| {
            let mut sim = SimBuilder::new(CheckoutConfig::default().with_seed(seed))
                .rng(SimRng::new(9))
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.statistics().clone()
        };
        assert_eq!(run(1), run(2));
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn advance_before_start_is_noop() {
        let mut sim = build(seeded(Mode::SingleQueue));
        assert!(sim.advance().is_none());
        assert_eq!(sim.current_tick(), Tick::ZERO);
    }

    #[test]
    fn start_opens_initial_stations() {
        let mut sim = build(seeded(Mode::SingleQueue));
        sim.start();
        assert!(sim.is_running());
        assert_eq!(sim.open_station_count(), 2);
        assert!(sim.stations()[0].is_open());
        assert!(sim.stations()[1].is_open());
        assert!(!sim.stations()[2].is_open());
    }

    #[test]
    fn start_twice_is_noop() {
        let mut sim = build(seeded(Mode::PerStation));
        sim.start();
        sim.advance();
        sim.start();
        assert_eq!(sim.current_tick(), Tick(1));
        assert_eq!(sim.open_station_count(), 2);
    }

    #[test]
    fn first_advance_is_tick_one() {
        let mut sim = build(seeded(Mode::SingleQueue));
        sim.start();
        let summary = sim.advance().unwrap();
        assert_eq!(summary.tick, Tick(1));
        assert!(summary.completions.is_empty());
    }

    #[test]
    fn advance_after_finish_is_noop() {
        let mut sim = build(seeded(Mode::SingleQueue));
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.is_finished());
        assert!(!sim.is_running());
        let tick = sim.current_tick();
        assert!(sim.advance().is_none());
        assert_eq!(sim.current_tick(), tick);
    }

    #[test]
    fn run_ticks_stops_at_count() {
        let mut sim = build(seeded(Mode::PerStation));
        sim.start();
        assert_eq!(sim.run_ticks(30, &mut NoopObserver), 30);
        assert_eq!(sim.current_tick(), Tick(30));
        assert!(sim.is_running());
    }

    #[test]
    fn run_ticks_before_start_does_nothing() {
        let mut sim = build(seeded(Mode::PerStation));
        assert_eq!(sim.run_ticks(10, &mut NoopObserver), 0);
        assert_eq!(sim.current_tick(), Tick::ZERO);
    }

    #[test]
    fn reset_returns_to_fresh_state() {
        let mut sim = build(seeded(Mode::SingleQueue));
        sim.start();
        sim.run_ticks(120, &mut NoopObserver);
        assert!(sim.arrivals() > 0);

        sim.reset();
        assert_eq!(sim.current_tick(), Tick::ZERO);
        assert!(!sim.is_running());
        assert!(!sim.is_finished());
        assert_eq!(sim.open_station_count(), 0);
        assert_eq!(sim.arrivals(), 0);
        assert_eq!(sim.admitted(), 0);
        assert_eq!(sim.customers_in_system(), 0);
        assert_eq!(sim.dropped_customers(), DropCounts::default());
        assert_eq!(*sim.statistics(), StatisticsAggregator::new());
        assert!(sim.stations().iter().all(|s| s.cumulative_open_ticks() == 0));

        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.is_finished());
    }

    #[test]
    fn drain_limit_guards_a_fleet_that_never_opens() {
        // Bypasses validation: no station ever opens, so the shared line
        // never empties.
        let config = CheckoutConfig {
            horizon:      10,
            initial_open: 0,
            min_open:     0,
            staircase:    vec![],
            ..seeded(Mode::SingleQueue)
        };
        let limit = config.drain_limit();
        let mut sim = CheckoutSim::new(config, SimRng::new(1));
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::DrainExceeded { limit: l, .. } if l == limit));
        assert_eq!(sim.current_tick(), Tick(10 + limit));
    }
}

// ── Whole-run invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;

    fn check_run(mode: Mode) {
        let mut sim = build(seeded(mode));
        let (min_open, max_open) = (sim.config().min_open, sim.config().station_count);
        let horizon = sim.config().horizon;

        step_to_end(&mut sim, |sim, summary| {
            let in_system = sim.customers_in_system() as u64;
            assert_eq!(
                in_system,
                sim.admitted() - sim.statistics().total_completed(),
                "conservation broken at {}",
                summary.tick
            );
            assert_eq!(sim.arrivals(), sim.admitted() + sim.dropped_customers().total());

            let open = sim.open_station_count();
            assert!((min_open..=max_open).contains(&open), "{open} open at {}", summary.tick);

            if let Some(arrival) = &summary.arrival {
                assert!(summary.tick.0 < horizon);
                assert!(arrival.customer().0 as u64 <= sim.arrivals());
            }
            for c in &summary.completions {
                assert!((3..=5).contains(&c.service), "service {} outside range", c.service);
            }
            for station in sim.stations().iter().filter(|s| !s.is_open()) {
                assert!(station.is_empty(), "closed {} holds customers", station.id());
            }
        });

        assert!(sim.is_finished());
        assert!(sim.current_tick().0 >= horizon);
        assert_eq!(sim.customers_in_system(), 0);
        assert!(sim.admitted() > 0);
        assert_eq!(sim.statistics().total_completed(), sim.admitted());
        assert_eq!(sim.fleet_report().total_served(), sim.admitted());
    }

    #[test]
    fn single_queue_run_holds_invariants() {
        check_run(Mode::SingleQueue);
    }

    #[test]
    fn per_station_run_holds_invariants() {
        check_run(Mode::PerStation);
    }

    /// A close never lands below a station opened in the same tick, and no
    /// station beyond one past the peak is ever opened.
    fn check_no_swap(mode: Mode) {
        let mut sim = build(seeded(mode));
        step_to_end(&mut sim, |_, summary| {
            let closed: Vec<StationId> = summary.closed().collect();
            assert!(closed.len() <= 1, "{} closed {closed:?}", summary.tick);
            for opened in summary.opened() {
                for &c in &closed {
                    assert!(c >= opened, "{} opened {opened} but closed {c}", summary.tick);
                }
            }
        });
        assert!(sim.fleet_report().stations_used() <= sim.peak_open_stations() + 1);
    }

    #[test]
    fn single_queue_never_swaps_stations() {
        check_no_swap(Mode::SingleQueue);
    }

    #[test]
    fn per_station_never_swaps_stations() {
        check_no_swap(Mode::PerStation);
    }

    #[test]
    fn single_queue_stations_respect_cap() {
        let mut sim = build(seeded(Mode::SingleQueue));
        let cap = sim.config().shared_station_cap;
        step_to_end(&mut sim, |sim, _| {
            assert!(sim.stations().iter().all(|s| s.occupancy() <= cap));
        });
    }

    #[test]
    fn same_seed_same_run() {
        for mode in Mode::ALL {
            let a = run_mode(&CheckoutConfig::default(), mode, 7).unwrap();
            let b = run_mode(&CheckoutConfig::default(), mode, 7).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn same_seed_same_ticks() {
        let record = || {
            let mut sim = build(seeded(Mode::PerStation));
            let mut recorder = TickRecorder::default();
            sim.run(&mut recorder).unwrap();
            recorder.ticks
        };
        assert_eq!(record(), record());
    }

    #[test]
    fn run_reports_every_tick_in_order() {
        let mut sim = build(seeded(Mode::SingleQueue));
        let mut recorder = TickRecorder::default();
        sim.run(&mut recorder).unwrap();
        assert_eq!(recorder.ticks.len() as u64, sim.current_tick().0);
        for (i, summary) in recorder.ticks.iter().enumerate() {
            assert_eq!(summary.tick, Tick(i as u64 + 1));
        }
    }

    #[test]
    fn observer_hooks_fire() {
        #[derive(Default)]
        struct Counting {
            starts: u64,
            ends:   u64,
            done:   Option<(Tick, u64)>,
        }
        impl SimObserver for Counting {
            fn on_tick_start(&mut self, _tick: Tick) {
                self.starts += 1;
            }
            fn on_tick_end(&mut self, _summary: &TickSummary) {
                self.ends += 1;
            }
            fn on_sim_end(&mut self, final_tick: Tick, stats: &StatisticsAggregator) {
                self.done = Some((final_tick, stats.total_completed()));
            }
        }

        let mut sim = build(seeded(Mode::PerStation));
        let mut obs = Counting::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts, sim.current_tick().0);
        assert_eq!(obs.ends, obs.starts);
        assert_eq!(
            obs.done,
            Some((sim.current_tick(), sim.statistics().total_completed()))
        );
    }
}

// ── Dropped customers ─────────────────────────────────────────────────────────

#[cfg(test)]
mod drops {
    use super::*;

    #[test]
    fn single_queue_drops_when_shared_line_full() {
        let mut sim = build(cramped(Mode::SingleQueue));
        sim.run(&mut NoopObserver).unwrap();
        let dropped = sim.dropped_customers();
        assert!(dropped.shared_queue_full > 0);
        assert_eq!(dropped.no_station, 0);
        assert_eq!(sim.arrivals(), sim.admitted() + dropped.total());
        assert_eq!(sim.statistics().total_completed(), sim.admitted());
    }

    #[test]
    fn per_station_drops_when_no_station_can_open() {
        let mut sim = build(cramped(Mode::PerStation));
        sim.run(&mut NoopObserver).unwrap();
        let dropped = sim.dropped_customers();
        assert!(dropped.no_station > 0);
        assert_eq!(dropped.shared_queue_full, 0);
        assert_eq!(sim.statistics().total_completed(), sim.admitted());
    }

    #[test]
    fn drop_shows_in_tick_summary() {
        let mut sim = build(cramped(Mode::SingleQueue));
        let mut recorder = TickRecorder::default();
        sim.run(&mut recorder).unwrap();
        let reported = recorder.ticks.iter().filter(|t| t.dropped().is_some()).count() as u64;
        assert_eq!(reported, sim.dropped_customers().total());
    }

    #[test]
    fn drop_counts_by_reason() {
        let mut counts = DropCounts::default();
        counts.record(DropReason::SharedQueueFull);
        counts.record(DropReason::SharedQueueFull);
        counts.record(DropReason::NoStationAvailable);
        assert_eq!(counts.shared_queue_full, 2);
        assert_eq!(counts.no_station, 1);
        assert_eq!(counts.total(), 3);
    }
}

// ── Scaling rules ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod scaling {
    use super::*;

    #[test]
    fn staircase_target() {
        let scaling = SingleQueueScaling::new(&CheckoutConfig::default());
        assert_eq!(scaling.staircase_target(7), None);
        assert_eq!(scaling.staircase_target(8), Some(4));
        assert_eq!(scaling.staircase_target(23), Some(6));
        assert_eq!(scaling.staircase_target(40), Some(12));
        assert_eq!(scaling.staircase_target(500), Some(12));
    }

    #[test]
    fn single_queue_backlog_of_eight_opens_fourth_station() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 3);
        let scaling = SingleQueueScaling::new(&config);

        let actions = scaling.open(&mut fleet, 8, Tick(1));
        assert_eq!(actions, vec![ScalingAction::Opened(StationId(4))]);
        assert_eq!(fleet.open_count(), 4);
    }

    #[test]
    fn single_queue_below_first_step_opens_nothing() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 3);
        let scaling = SingleQueueScaling::new(&config);
        assert!(scaling.open(&mut fleet, 7, Tick(1)).is_empty());
    }

    #[test]
    fn staircase_opens_one_station_per_tick() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 2);
        let scaling = SingleQueueScaling::new(&config);
        assert_eq!(scaling.open(&mut fleet, 40, Tick(1)).len(), 1);
        assert_eq!(scaling.open(&mut fleet, 40, Tick(2)).len(), 1);
        assert_eq!(fleet.open_count(), 4);
    }

    #[test]
    fn station_at_cap_with_shared_backlog_opens_another() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 2);
        load_station(&mut fleet, 1, 3);
        let scaling = SingleQueueScaling::new(&config);

        let actions = scaling.open(&mut fleet, 1, Tick(1));
        assert_eq!(actions, vec![ScalingAction::Opened(StationId(3))]);
    }

    #[test]
    fn station_at_cap_with_empty_shared_line_opens_nothing() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 2);
        load_station(&mut fleet, 1, 3);
        let scaling = SingleQueueScaling::new(&config);
        assert!(scaling.open(&mut fleet, 0, Tick(1)).is_empty());
    }

    #[test]
    fn per_station_busy_station_opens_next() {
        let config = CheckoutConfig::default().with_mode(Mode::PerStation);
        let mut fleet = fleet_with_open(&config, 2);
        load_station(&mut fleet, 1, 5);
        load_station(&mut fleet, 2, 3);
        let scaling = PerStationScaling::new(&config);

        assert_eq!(scaling.open(&mut fleet, Tick(1)), Some(ScalingAction::Opened(StationId(3))));
        assert!(fleet.station(StationId(3)).unwrap().is_open());
    }

    #[test]
    fn per_station_at_threshold_opens_nothing() {
        let config = CheckoutConfig::default().with_mode(Mode::PerStation);
        let mut fleet = fleet_with_open(&config, 2);
        load_station(&mut fleet, 1, 4);
        let scaling = PerStationScaling::new(&config);
        assert_eq!(scaling.open(&mut fleet, Tick(1)), None);
    }

    #[test]
    fn close_targets_station_opened_this_tick_over_lower_empty() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 2);
        load_station(&mut fleet, 1, 5);
        assert_eq!(fleet.open_next(Tick(5)), Some(StationId(3)));
        let rule = CloseRule::new(config.close_threshold);

        assert_eq!(rule.apply(&mut fleet, Tick(5)), Some(ScalingAction::Closed(StationId(3))));
        assert!(fleet.station(StationId(2)).unwrap().is_open());
        assert_eq!(fleet.station(StationId(3)).unwrap().cumulative_open_ticks(), 0);
    }

    #[test]
    fn per_station_open_then_close_never_drops_a_lower_station() {
        let config = CheckoutConfig::default().with_mode(Mode::PerStation);
        let mut fleet = fleet_with_open(&config, 2);
        load_station(&mut fleet, 1, 5);
        let mut strategy = PerStationStrategy::new(&config);

        let actions = strategy.scale(&mut fleet, Tick(1));
        assert_eq!(
            actions,
            vec![ScalingAction::Opened(StationId(3)), ScalingAction::Closed(StationId(3))]
        );
        assert!(fleet.station(StationId(2)).unwrap().is_open());
        assert_eq!(fleet.open_count(), 2);
    }

    #[test]
    fn two_open_never_close() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 2);
        load_station(&mut fleet, 1, 1);
        let rule = CloseRule::new(config.close_threshold);
        assert_eq!(rule.apply(&mut fleet, Tick(5)), None);
        assert_eq!(fleet.open_count(), 2);
    }

    #[test]
    fn quiet_fleet_closes_highest_empty() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 4);
        load_station(&mut fleet, 4, 1);
        let rule = CloseRule::new(config.close_threshold);

        assert_eq!(rule.apply(&mut fleet, Tick(5)), Some(ScalingAction::Closed(StationId(3))));
        assert_eq!(fleet.open_count(), 3);
        assert_eq!(fleet.station(StationId(3)).unwrap().cumulative_open_ticks(), 5);
    }

    #[test]
    fn busy_fleet_stays_open() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 3);
        load_station(&mut fleet, 1, 5);
        load_station(&mut fleet, 2, 5);
        let rule = CloseRule::new(config.close_threshold);
        assert_eq!(rule.apply(&mut fleet, Tick(5)), None);
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use super::*;

    #[test]
    fn single_queue_arrival_joins_shared_line() {
        let config = CheckoutConfig::default();
        let mut strategy = SingleQueueStrategy::new(&config);
        let outcome = strategy.route(customer(1));
        assert_eq!(outcome, ArrivalOutcome::Queued { customer: CustomerId(1), station: None });
        let head = strategy.shared().peek().unwrap();
        assert_eq!(head.state(), CustomerState::QueuedShared);
    }

    #[test]
    fn single_queue_full_shared_line_drops() {
        let config = CheckoutConfig { shared_queue_capacity: 1, ..CheckoutConfig::default() };
        let mut strategy = SingleQueueStrategy::new(&config);
        strategy.route(customer(1));
        let outcome = strategy.route(customer(2));
        assert_eq!(outcome.drop_reason(), Some(DropReason::SharedQueueFull));
        assert_eq!(strategy.shared().size(), 1);
    }

    #[test]
    fn pull_fills_stations_left_to_right_up_to_cap() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 2);
        let mut strategy = SingleQueueStrategy::new(&config);
        for id in 1..=5 {
            strategy.route(customer(id));
        }

        assert_eq!(strategy.pull(&mut fleet), 5);
        let s1 = fleet.station(StationId(1)).unwrap();
        let s2 = fleet.station(StationId(2)).unwrap();
        assert_eq!(s1.occupancy(), 3);
        assert_eq!(s2.occupancy(), 2);
        let order: Vec<u32> = s1.waiting().map(|c| c.id().0).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert!(s2.waiting().all(|c| c.state() == CustomerState::QueuedStation));
        assert!(strategy.shared().is_empty());
    }

    #[test]
    fn pull_skips_closed_stations() {
        let config = CheckoutConfig::default();
        let mut fleet = fleet_with_open(&config, 1);
        let mut strategy = SingleQueueStrategy::new(&config);
        for id in 1..=5 {
            strategy.route(customer(id));
        }
        assert_eq!(strategy.pull(&mut fleet), 3);
        assert_eq!(strategy.shared().size(), 2);
        assert!(fleet.station(StationId(2)).unwrap().is_empty());
    }

    #[test]
    fn per_station_joins_least_loaded_lowest_id_on_tie() {
        let config = CheckoutConfig::default().with_mode(Mode::PerStation);
        let mut fleet = fleet_with_open(&config, 2);
        let mut strategy = PerStationStrategy::new(&config);
        let mut actions = Vec::new();

        let stations: Vec<_> = (1..=3)
            .map(|id| match strategy.route(customer(id), &mut fleet, Tick(1), &mut actions) {
                ArrivalOutcome::Queued { station, .. } => station,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(stations, vec![Some(StationId(1)), Some(StationId(2)), Some(StationId(1))]);
        assert!(actions.is_empty());
    }

    #[test]
    fn per_station_overflow_opens_next_then_drops() {
        let config = CheckoutConfig {
            mode:                   Mode::PerStation,
            station_count:          2,
            initial_open:           1,
            min_open:               1,
            station_queue_capacity: 1,
            ..CheckoutConfig::default()
        };
        let mut fleet = fleet_with_open(&config, 1);
        let mut strategy = PerStationStrategy::new(&config);
        let mut actions = Vec::new();

        let first = strategy.route(customer(1), &mut fleet, Tick(1), &mut actions);
        assert_eq!(first, ArrivalOutcome::Queued { customer: CustomerId(1), station: Some(StationId(1)) });

        let second = strategy.route(customer(2), &mut fleet, Tick(1), &mut actions);
        assert_eq!(second, ArrivalOutcome::Queued { customer: CustomerId(2), station: Some(StationId(2)) });
        assert_eq!(actions, vec![ScalingAction::Opened(StationId(2))]);

        let third = strategy.route(customer(3), &mut fleet, Tick(1), &mut actions);
        assert_eq!(third.drop_reason(), Some(DropReason::NoStationAvailable));
        assert_eq!(fleet.occupancy(), 2);
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod compare {
    use super::*;

    #[test]
    fn compare_uses_one_seed_for_both_modes() {
        let cmp = compare_modes(&CheckoutConfig::default().with_seed(11)).unwrap();
        assert_eq!(cmp.single_queue.mode, Mode::SingleQueue);
        assert_eq!(cmp.per_station.mode, Mode::PerStation);
        assert_eq!(cmp.single_queue.seed, 11);
        assert_eq!(cmp.per_station.seed, 11);
        assert_eq!(cmp.single_queue, run_mode(&CheckoutConfig::default(), Mode::SingleQueue, 11).unwrap());
    }

    #[test]
    fn unseeded_compare_still_shares_a_seed() {
        let cmp = compare_modes(&CheckoutConfig::default()).unwrap();
        assert_eq!(cmp.single_queue.seed, cmp.per_station.seed);
    }

    #[test]
    fn summaries_render() {
        let cmp = compare_modes(&CheckoutConfig::default().with_seed(3)).unwrap();
        let table = cmp.to_string();
        assert!(table.starts_with("COMPARISON (seed 3)"));
        assert!(table.contains("single-queue"));
        assert!(table.contains("per-station"));

        let single = cmp.single_queue.to_string();
        assert!(single.contains("CUSTOMERS"));
        assert!(single.contains("STATIONS"));
        assert!(single.contains("Dropped:"));
    }

    #[test]
    fn efficiency_matches_completed_over_minutes() {
        let run = run_mode(&CheckoutConfig::default(), Mode::PerStation, 5).unwrap();
        let expected = run.stats.completed as f64 / run.final_tick.0 as f64;
        assert!((run.efficiency - expected).abs() < 1e-12);
        assert!(run.peak_open >= 2 && run.peak_open <= 12);
    }
}
