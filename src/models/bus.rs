use serde::{Deserialize, Serialize};

/// A bus shown on the board.
///
/// `fullness`, `arrival_time` and `route_progress` would come from a live feed
/// in a real deployment. Here they are fixed snapshots carried by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: u32,
    /// Display label, e.g. `DTC 423`.
    pub number: String,
    /// Fare in whole rupees.
    pub fare: u32,
    pub crowd_level: CrowdLevel,
    /// Occupancy percentage, `0..=100`.
    pub fullness: u8,
    /// Human-readable estimate such as `3 min`. Never parsed.
    pub arrival_time: String,
    pub accent: Accent,
    /// Stops in itinerary order.
    pub route: Vec<RouteStop>,
    /// Percentage of the route already covered, `0..=100`.
    pub route_progress: u8,
    pub reviews: Vec<Review>,
}

impl Bus {
    /// Whether any stop on this bus's route is named exactly `station`.
    pub fn serves(&self, station: &str) -> bool {
        self.route.iter().any(|stop| stop.stop == station)
    }
}

/// One stop on a bus's itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStop {
    /// Station or waypoint name.
    pub stop: String,
    /// Whether the bus has already passed this stop.
    pub visited: bool,
}

impl RouteStop {
    pub fn visited(stop: impl Into<String>) -> Self {
        Self {
            stop: stop.into(),
            visited: true,
        }
    }

    pub fn upcoming(stop: impl Into<String>) -> Self {
        Self {
            stop: stop.into(),
            visited: false,
        }
    }
}

/// A rider review. `rating` is validated to `1..=5` by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub rating: u8,
    pub comment: String,
}

impl Review {
    pub fn new(rating: u8, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }
}

/// How crowded a bus currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Card accent colour. Visited stops are drawn in the bus's accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Blue,
    Green,
    Red,
    Yellow,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus_via(stops: &[&str]) -> Bus {
        Bus {
            id: 1,
            number: "DTC 1".to_string(),
            fare: 10,
            crowd_level: CrowdLevel::Low,
            fullness: 0,
            arrival_time: "1 min".to_string(),
            accent: Accent::Blue,
            route: stops.iter().map(|s| RouteStop::upcoming(*s)).collect(),
            route_progress: 0,
            reviews: vec![],
        }
    }

    #[test]
    fn test_serves_matches_exact_stop_name() {
        let bus = bus_via(&["Connaught Place", "ITO"]);
        assert!(bus.serves("ITO"));
        assert!(!bus.serves("ito"));
        assert!(!bus.serves("Connaught"));
    }

    #[test]
    fn test_crowd_level_label_matches_json() {
        for level in [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High] {
            assert_eq!(serde_json::to_value(level).unwrap(), level.as_str());
        }
    }

    #[test]
    fn test_bus_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(bus_via(&["ITO"])).unwrap();
        assert_eq!(json["crowdLevel"], "Low");
        assert_eq!(json["arrivalTime"], "1 min");
        assert_eq!(json["routeProgress"], 0);
        assert_eq!(json["route"][0]["stop"], "ITO");
    }
}
