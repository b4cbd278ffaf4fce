//! Run observer trait for progress reporting and data collection.

use cs_core::Tick;
use cs_stats::StatisticsAggregator;

use crate::TickSummary;

/// Callbacks invoked by [`CheckoutSim::run`][crate::CheckoutSim::run] at
/// key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: hourly progress line
///
/// ```rust,ignore
/// struct Hourly;
///
/// impl SimObserver for Hourly {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % 60 == 0 {
///             println!("{}: {} done", summary.tick, summary.completions.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the tick is processed.  `tick` is the tick about to run.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick with everything that happened in it.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once, after the fleet has drained.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &StatisticsAggregator) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Collects every [`TickSummary`] of a run.
#[derive(Default, Debug)]
pub struct TickRecorder {
    pub ticks: Vec<TickSummary>,
}

impl SimObserver for TickRecorder {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.ticks.push(summary.clone());
    }
}
