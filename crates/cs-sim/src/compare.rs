//! Side-by-side runs of both disciplines.
//!
//! Both engines are built from the same configuration and the same seed, so
//! the arrival stream starts identically; the disciplines diverge as soon as
//! their service draws interleave differently with the arrival draws.

use std::fmt;

use cs_core::{CheckoutConfig, Mode, SimRng, Tick};
use cs_stats::{FleetReport, StatsReport};

use crate::summary::DropCounts;
use crate::{CheckoutSim, NoopObserver, SimBuilder, SimResult};

/// The outcome of one complete run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunSummary {
    pub mode:       Mode,
    pub seed:       u64,
    pub final_tick: Tick,
    pub stats:      StatsReport,
    pub fleet:      FleetReport,
    pub dropped:    DropCounts,
    pub peak_open:  usize,
    /// Completed customers per simulated minute.
    pub efficiency: f64,
}

impl RunSummary {
    /// Summarise `sim` as it stands; `seed` is recorded as given.
    pub fn from_sim(sim: &CheckoutSim, seed: u64) -> Self {
        let final_tick = sim.current_tick();
        Self {
            mode: sim.mode(),
            seed,
            final_tick,
            stats:      sim.statistics().report(),
            fleet:      sim.fleet_report(),
            dropped:    sim.dropped_customers(),
            peak_open:  sim.peak_open_stations(),
            efficiency: sim.statistics().efficiency(final_tick.0),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.final_tick.hours_minutes();
        writeln!(f, "== {} (seed {}) ==", self.mode, self.seed)?;
        writeln!(f, "Closed at {} ({}h {:02}m)", self.final_tick, h, m)?;
        writeln!(f)?;
        write!(f, "{}", self.stats)?;
        writeln!(f, "  Dropped:              {}", self.dropped.total())?;
        writeln!(f, "  Efficiency:           {:.2} per min", self.efficiency)?;
        writeln!(f)?;
        write!(f, "{}", self.fleet)?;
        writeln!(f, "  Peak open:            {}", self.peak_open)
    }
}

/// Both disciplines under the same seed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    pub single_queue: RunSummary,
    pub per_station:  RunSummary,
}

impl Comparison {
    /// The discipline with the lower average wait; single queue on a tie.
    pub fn lower_wait(&self) -> Mode {
        if self.per_station.stats.average_wait < self.single_queue.stats.average_wait {
            Mode::PerStation
        } else {
            Mode::SingleQueue
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s, p) = (&self.single_queue, &self.per_station);
        writeln!(f, "COMPARISON (seed {})", s.seed)?;
        writeln!(f, "  {:<22}{:>14}{:>14}", "", Mode::SingleQueue, Mode::PerStation)?;
        writeln!(f, "  {:<22}{:>14}{:>14}", "Completed", s.stats.completed, p.stats.completed)?;
        writeln!(
            f,
            "  {:<22}{:>14.2}{:>14.2}",
            "Average wait (min)", s.stats.average_wait, p.stats.average_wait
        )?;
        writeln!(
            f,
            "  {:<22}{:>14.2}{:>14.2}",
            "Average total (min)", s.stats.average_total, p.stats.average_total
        )?;
        writeln!(f, "  {:<22}{:>14}{:>14}", "Max wait (min)", s.stats.max_wait, p.stats.max_wait)?;
        writeln!(f, "  {:<22}{:>14}{:>14}", "Dropped", s.dropped.total(), p.dropped.total())?;
        writeln!(f, "  {:<22}{:>14}{:>14}", "Stations used", s.fleet.stations_used(), p.fleet.stations_used())?;
        writeln!(f, "  {:<22}{:>14}{:>14}", "Peak open", s.peak_open, p.peak_open)?;
        writeln!(f, "  {:<22}{:>14}{:>14}", "Closed at", s.final_tick.to_string(), p.final_tick.to_string())?;
        writeln!(f, "  Lower average wait: {}", self.lower_wait())
    }
}

/// Run `config` to completion under `mode` with a fixed `seed`.
pub fn run_mode(config: &CheckoutConfig, mode: Mode, seed: u64) -> SimResult<RunSummary> {
    let mut sim = SimBuilder::new(config.clone())
        .mode(mode)
        .rng(SimRng::new(seed))
        .build()?;
    sim.run(&mut NoopObserver)?;
    Ok(RunSummary::from_sim(&sim, seed))
}

/// Run both disciplines from the same seed.
///
/// Uses `config.seed` if set; otherwise draws one seed from OS entropy and
/// uses it for both runs.  With the `parallel` feature the two runs execute
/// on Rayon's thread pool.
pub fn compare_modes(config: &CheckoutConfig) -> SimResult<Comparison> {
    let seed = resolve_seed(config.seed);

    #[cfg(not(feature = "parallel"))]
    let (single_queue, per_station) = (
        run_mode(config, Mode::SingleQueue, seed),
        run_mode(config, Mode::PerStation, seed),
    );

    #[cfg(feature = "parallel")]
    let (single_queue, per_station) = rayon::join(
        || run_mode(config, Mode::SingleQueue, seed),
        || run_mode(config, Mode::PerStation, seed),
    );

    Ok(Comparison {
        single_queue: single_queue?,
        per_station:  per_station?,
    })
}

/// `seed`, or a fresh one from OS entropy.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| SimRng::from_entropy().gen_range(0..u64::MAX))
}
