//! Station picker and bus board for a mock smart bus tracker.
//!
//! - [`catalog`]: the fixed stations and buses.
//! - [`selector`]: the rider's selected station, persisted through a [`store`].
//! - [`filter`]: which buses serve the selected station.
//! - [`board`] and [`render`]: what a front end draws.

pub mod board;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod models;
pub mod render;
pub mod selector;
pub mod store;
