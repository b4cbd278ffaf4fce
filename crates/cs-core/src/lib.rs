//! `cs-core`: foundational types for the checkout line simulator.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `StationId`                             |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` (one stream per engine)                      |
//! | [`config`]      | `CheckoutConfig`, `Mode`, `TimeRange`, `StaircaseStep`|
//! | [`queue`]       | `BoundedQueue<T>` fixed-capacity ring buffer          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and time types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod queue;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CheckoutConfig, Mode, StaircaseStep, TimeRange};
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, StationId};
pub use queue::BoundedQueue;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
