//! Deriving the visible buses from the current selection.

use std::collections::HashMap;

use crate::models::Bus;

/// Buses whose route stops at `selection`, in catalog order.
///
/// With no station selected nothing is shown. Matching is exact and
/// case-sensitive, and the whole list is rescanned on every call.
pub fn filter_buses<'a>(selection: Option<&str>, buses: &'a [Bus]) -> Vec<&'a Bus> {
    let Some(station) = selection else {
        return Vec::new();
    };

    buses.iter().filter(|bus| bus.serves(station)).collect()
}

/// Stop name to the positions of the buses calling there, in catalog order.
///
/// Built once per catalog so a selection change is a single map lookup
/// instead of a scan over every route. Positions index the bus slice the
/// index was built from.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    by_stop: HashMap<String, Vec<usize>>,
}

impl StationIndex {
    pub fn build(buses: &[Bus]) -> Self {
        let mut by_stop: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, bus) in buses.iter().enumerate() {
            for stop in &bus.route {
                let positions = by_stop.entry(stop.stop.clone()).or_default();
                // A route may loop back through the same stop.
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }
        }

        Self { by_stop }
    }

    pub fn lookup(&self, stop: &str) -> &[usize] {
        self.by_stop.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct stop names indexed.
    pub fn len(&self) -> usize {
        self.by_stop.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_stop.is_empty()
    }
}
