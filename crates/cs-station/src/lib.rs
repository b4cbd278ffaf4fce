//! `cs-station`: customers and checkout stations.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`customer`]    | `Customer`, `CustomerState` lifecycle                     |
//! | [`station`]     | `Station`: own line, service slot, open/close accounting  |
//!
//! A `Customer` is a plain value that moves by ownership: it lives in
//! exactly one queue or in one station's service slot, and is handed back to
//! the caller when service completes.

pub mod customer;
pub mod station;


pub use customer::{Customer, CustomerState};
pub use station::Station;
