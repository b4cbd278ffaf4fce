//! `cs-sim`: tick loop orchestrator for the checkout line simulator.
//!
//! # Three-phase tick
//!
//! ```text
//! start():  open config.initial_open stations at T0
//!
//! advance():
//!   tick += 1
//!   ① Service:  each open station, ascending ID: finish the customer at
//!                the register if due, else start the next one in line.
//!   ② Scaling:  single queue: staircase + cap rule, pull from the shared
//!                line, close rule.
//!                per station:  open rule, close rule.
//!   ③ Arrival:  if tick < horizon and an arrival is due: route it, or
//!                count it as dropped.
//!   finished once tick >= horizon and nobody is left in the store.
//! ```
//!
//! # Modules
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`sim`]       | `CheckoutSim`, the engine                               |
//! | [`builder`]   | `SimBuilder`: validation and RNG injection              |
//! | [`fleet`]     | `Fleet`: all stations and fleet-wide queries            |
//! | [`routing`]   | `Strategy`, arrival outcomes and drop reasons           |
//! | [`scaling`]   | open/close rules per discipline                         |
//! | [`arrival`]   | `ArrivalProcess`                                        |
//! | [`summary`]   | `TickSummary`, `Completion`, `DropCounts`               |
//! | [`observer`]  | `SimObserver` hooks                                     |
//! | [`compare`]   | `compare_modes`: both disciplines from one seed         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `compare_modes` runs both engines on Rayon's pool.     |
//! | `serde`    | `Serialize` on summaries and comparison results.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_core::CheckoutConfig;
//! use cs_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(CheckoutConfig::default().with_seed(7)).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{}", sim.statistics().report());
//! ```

pub mod arrival;
pub mod builder;
pub mod compare;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod routing;
pub mod scaling;
pub mod sim;
pub mod summary;

#[cfg(test)]
mod tests;

pub use arrival::ArrivalProcess;
pub use builder::SimBuilder;
pub use compare::{Comparison, RunSummary, compare_modes, resolve_seed, run_mode};
pub use error::{SimError, SimResult};
pub use fleet::Fleet;
pub use observer::{NoopObserver, SimObserver, TickRecorder};
pub use routing::{ArrivalOutcome, DropReason, Strategy};
pub use scaling::ScalingAction;
pub use sim::CheckoutSim;
pub use summary::{Completion, DropCounts, TickSummary};
