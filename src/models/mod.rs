//! Domain models for the bus tracker.
//!
//! # Reference Data
//!
//! - [`Station`]: A named stop a rider can pick as "where I'm waiting".
//! - [`Bus`]: A vehicle with an ordered itinerary of [`RouteStop`]s and a list
//!   of rider [`Review`]s.
//!
//! All of these are immutable once the [`Catalog`](crate::catalog::Catalog) is
//! built. Fields such as `fullness` and `arrival_time` are snapshots; nothing
//! in this crate updates them.

mod bus;
mod station;

pub use bus::*;
pub use station::*;
