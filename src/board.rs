//! The presentation boundary: everything a front end needs to draw the
//! station picker and the bus cards, plus the one callback it drives.
//!
//! A [`Board`] pairs the immutable [`Catalog`] with the [`Selector`]. The
//! visible buses are recomputed from the current selection every time they
//! are asked for, so a view taken after `on_station_picked` returns always
//! reflects the new station.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::filter::filter_buses;
use crate::models::{Accent, Bus, CrowdLevel, Station};
use crate::selector::Selector;
use crate::store::PreferenceStore;

pub const PICK_STATION_LABEL: &str = "Select Bus Station";
pub const CHANGE_STATION_LABEL: &str = "Change Bus Station";

pub struct Board<S> {
    catalog: Catalog,
    selector: Selector<S>,
}

impl<S: PreferenceStore> Board<S> {
    /// Build a board and restore the last saved station from `store`.
    pub fn start(catalog: Catalog, store: S) -> Self {
        let mut selector = Selector::new(store);
        selector.restore();
        Self { catalog, selector }
    }

    /// Handler for the picker. Commits the selection before returning.
    pub fn on_station_picked(&mut self, station: &str) {
        if self.catalog.station_by_name(station).is_none() {
            tracing::warn!("Station {:?} is not in the catalog", station);
        }
        self.selector.select(station);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> Option<&str> {
        self.selector.current()
    }

    pub fn visible_buses(&self) -> Vec<&Bus> {
        let buses = filter_buses(self.selected(), self.catalog.buses());
        tracing::debug!(
            station = ?self.selected(),
            visible = buses.len(),
            "Recomputed visible buses"
        );
        buses
    }

    pub fn view(&self) -> BoardView {
        let selected = self.selected().map(str::to_string);
        let picker_label = if selected.is_some() {
            CHANGE_STATION_LABEL
        } else {
            PICK_STATION_LABEL
        };

        BoardView {
            picker_label,
            stations: self.catalog.stations().to_vec(),
            selected,
            buses: self.visible_buses().into_iter().map(BusCard::from).collect(),
        }
    }
}

/// Snapshot of the whole screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub picker_label: &'static str,
    pub stations: Vec<Station>,
    pub selected: Option<String>,
    pub buses: Vec<BusCard>,
}

/// One bus card, with its route and reviews already turned into display state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusCard {
    pub id: u32,
    pub number: String,
    pub arrival_time: String,
    pub fare: u32,
    pub crowd_level: CrowdLevel,
    pub fullness: u8,
    pub accent: Accent,
    pub route: Vec<StopView>,
    pub route_progress: u8,
    pub reviews: Vec<ReviewView>,
}

impl From<&Bus> for BusCard {
    fn from(bus: &Bus) -> Self {
        let last = bus.route.len().saturating_sub(1);
        let route = bus
            .route
            .iter()
            .enumerate()
            .map(|(i, stop)| StopView {
                name: stop.stop.clone(),
                marker: if stop.visited {
                    StopMarker::Visited
                } else {
                    StopMarker::Upcoming
                },
                is_last: i == last,
            })
            .collect();

        let reviews = bus
            .reviews
            .iter()
            .map(|review| ReviewView {
                rating: review.rating,
                stars: stars(review.rating),
                comment: review.comment.clone(),
            })
            .collect();

        Self {
            id: bus.id,
            number: bus.number.clone(),
            arrival_time: bus.arrival_time.clone(),
            fare: bus.fare,
            crowd_level: bus.crowd_level,
            fullness: bus.fullness,
            accent: bus.accent,
            route,
            route_progress: bus.route_progress,
            reviews,
        }
    }
}

/// A route stop as drawn: filled in the bus accent once passed, grey otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopView {
    pub name: String,
    pub marker: StopMarker,
    /// No connector is drawn after the final stop.
    pub is_last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopMarker {
    Visited,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub rating: u8,
    pub stars: String,
    pub comment: String,
}

/// Five-slot star string, e.g. `★★★☆☆` for a rating of 3.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}
