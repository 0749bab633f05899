//! Static reference data: the stations a rider can pick and the buses on the board.
//!
//! A [`Catalog`] is validated once when it is built. Everything downstream
//! (filtering, rendering) assumes well-formed data and never re-checks it.

mod builtin;

use std::collections::HashSet;

use thiserror::Error;

use crate::filter::StationIndex;
use crate::models::{Bus, Station};

/// Reasons a catalog can be rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate station id: {0}")]
    DuplicateStationId(u32),

    #[error("Duplicate station name: {0}")]
    DuplicateStationName(String),

    #[error("Station {0} has a blank name")]
    BlankStationName(u32),

    #[error("Duplicate bus id: {0}")]
    DuplicateBusId(u32),

    #[error("Bus {0} has a blank number")]
    BlankBusNumber(u32),

    #[error("Bus {bus}: {field} is {value}%, expected 0..=100")]
    PercentOutOfRange {
        bus: String,
        field: &'static str,
        value: u8,
    },

    #[error("Bus {bus}: review rating {rating} is outside 1..=5")]
    RatingOutOfRange { bus: String, rating: u8 },

    #[error("Bus {bus}: route stop {position} has a blank name")]
    BlankRouteStop { bus: String, position: usize },
}

/// Immutable, ordered stations and buses.
#[derive(Debug, Clone)]
pub struct Catalog {
    stations: Vec<Station>,
    buses: Vec<Bus>,
    index: StationIndex,
}

impl Catalog {
    /// Validate and freeze a catalog. Input order is kept as display order.
    pub fn new(stations: Vec<Station>, buses: Vec<Bus>) -> Result<Self, CatalogError> {
        validate_stations(&stations)?;
        validate_buses(&buses)?;

        let index = StationIndex::build(&buses);
        tracing::debug!(
            stations = stations.len(),
            buses = buses.len(),
            indexed_stops = index.len(),
            "Catalog built"
        );

        Ok(Self {
            stations,
            buses,
            index,
        })
    }

    /// The ten Delhi stations and four DTC buses of the demo board.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::stations(), builtin::buses())
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    /// Look up a bus by its display number, ignoring ASCII case.
    pub fn bus_by_number(&self, number: &str) -> Option<&Bus> {
        let wanted = number.trim();
        self.buses
            .iter()
            .find(|b| b.number.eq_ignore_ascii_case(wanted))
    }

    /// Buses whose route includes `station`, in catalog order, answered from
    /// the prebuilt stop index.
    pub fn buses_serving(&self, station: &str) -> Vec<&Bus> {
        self.index
            .lookup(station)
            .iter()
            .map(|&position| &self.buses[position])
            .collect()
    }
}

fn validate_stations(stations: &[Station]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for station in stations {
        if !ids.insert(station.id) {
            return Err(CatalogError::DuplicateStationId(station.id));
        }
        if station.name.trim().is_empty() {
            return Err(CatalogError::BlankStationName(station.id));
        }
        if !names.insert(station.name.as_str()) {
            return Err(CatalogError::DuplicateStationName(station.name.clone()));
        }
    }

    Ok(())
}

fn validate_buses(buses: &[Bus]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();

    for bus in buses {
        if !ids.insert(bus.id) {
            return Err(CatalogError::DuplicateBusId(bus.id));
        }
        if bus.number.trim().is_empty() {
            return Err(CatalogError::BlankBusNumber(bus.id));
        }

        for (field, value) in [
            ("fullness", bus.fullness),
            ("routeProgress", bus.route_progress),
        ] {
            if value > 100 {
                return Err(CatalogError::PercentOutOfRange {
                    bus: bus.number.clone(),
                    field,
                    value,
                });
            }
        }

        if let Some(review) = bus.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
            return Err(CatalogError::RatingOutOfRange {
                bus: bus.number.clone(),
                rating: review.rating,
            });
        }

        if let Some(position) = bus.route.iter().position(|s| s.stop.trim().is_empty()) {
            return Err(CatalogError::BlankRouteStop {
                bus: bus.number.clone(),
                position,
            });
        }
    }

    Ok(())
}
