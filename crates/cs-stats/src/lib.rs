//! `cs-stats`: statistics for the checkout line simulator.
//!
//! [`StatisticsAggregator`] keeps running sums and extrema over completed
//! customers; nothing per customer is retained.  The report types are
//! derived, formatted views:
//!
//! | Type             | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`StatsReport`]  | completed count, average/max/min wait, averages       |
//! | [`FleetReport`]  | one [`StationSummary`] row per used station + totals  |

pub mod aggregator;
pub mod report;


pub use aggregator::StatisticsAggregator;
pub use report::{FleetReport, StationSummary, StatsReport};
