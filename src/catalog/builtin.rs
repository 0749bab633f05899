use crate::models::{Accent, Bus, CrowdLevel, Review, RouteStop, Station};

const STATION_NAMES: [&str; 10] = [
    "Connaught Place",
    "India Gate",
    "Chandni Chowk",
    "Lajpat Nagar",
    "Karol Bagh",
    "Nehru Place",
    "Saket",
    "Dwarka",
    "Rohini",
    "Janakpuri",
];

pub(super) fn stations() -> Vec<Station> {
    STATION_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| Station::new(id, *name))
        .collect()
}

/// Build a route where the first `visited` stops are already passed.
fn route(stops: &[&str], visited: usize) -> Vec<RouteStop> {
    stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            if i < visited {
                RouteStop::visited(*stop)
            } else {
                RouteStop::upcoming(*stop)
            }
        })
        .collect()
}

pub(super) fn buses() -> Vec<Bus> {
    vec![
        Bus {
            id: 1,
            number: "DTC 423".to_string(),
            fare: 30,
            crowd_level: CrowdLevel::Medium,
            fullness: 65,
            arrival_time: "3 min".to_string(),
            accent: Accent::Blue,
            route: route(
                &[
                    "Connaught Place",
                    "Mandi House",
                    "Pragati Maidan",
                    "ITO",
                    "Delhi Gate",
                    "Jama Masjid",
                ],
                2,
            ),
            route_progress: 33,
            reviews: vec![
                Review::new(4, "Clean and usually on time"),
                Review::new(3, "Can get crowded during peak hours"),
            ],
        },
        Bus {
            id: 2,
            number: "DTC 581".to_string(),
            fare: 25,
            crowd_level: CrowdLevel::Low,
            fullness: 40,
            arrival_time: "7 min".to_string(),
            accent: Accent::Green,
            route: route(
                &[
                    "India Gate",
                    "Udyog Bhawan",
                    "Patel Chowk",
                    "Central Secretariat",
                    "Janpath",
                ],
                3,
            ),
            route_progress: 60,
            reviews: vec![
                Review::new(5, "Very comfortable ride"),
                Review::new(4, "Friendly driver"),
            ],
        },
        Bus {
            id: 3,
            number: "DTC 724".to_string(),
            fare: 35,
            crowd_level: CrowdLevel::High,
            fullness: 90,
            arrival_time: "1 min".to_string(),
            accent: Accent::Red,
            route: route(
                &[
                    "Chandni Chowk",
                    "Chawri Bazar",
                    "New Delhi",
                    "Rajiv Chowk",
                    "Barakhamba Road",
                ],
                2,
            ),
            route_progress: 40,
            reviews: vec![
                Review::new(2, "Always packed, needs more frequent service"),
                Review::new(3, "Punctual but uncomfortable during rush hour"),
            ],
        },
        Bus {
            id: 4,
            number: "DTC 340".to_string(),
            fare: 20,
            crowd_level: CrowdLevel::Medium,
            fullness: 70,
            arrival_time: "5 min".to_string(),
            accent: Accent::Yellow,
            route: route(
                &[
                    "Lajpat Nagar",
                    "Moolchand",
                    "Defence Colony",
                    "AIIMS",
                    "Green Park",
                ],
                2,
            ),
            route_progress: 40,
            reviews: vec![
                Review::new(4, "Good connectivity to major areas"),
                Review::new(3, "Decent service, could be cleaner"),
            ],
        },
    ]
}
