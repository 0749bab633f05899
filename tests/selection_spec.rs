use smart_bus_tracker::board::Board;
use smart_bus_tracker::catalog::Catalog;
use smart_bus_tracker::filter::filter_buses;
use smart_bus_tracker::models::*;
use smart_bus_tracker::selector::{Selector, SELECTED_STATION_KEY};
use smart_bus_tracker::store::{MemoryStore, PreferenceStore};
use speculate2::speculate;

fn make_bus(id: u32, number: &str, stops: &[&str]) -> Bus {
    Bus {
        id,
        number: number.to_string(),
        fare: 25,
        crowd_level: CrowdLevel::Low,
        fullness: 30,
        arrival_time: "6 min".to_string(),
        accent: Accent::Green,
        route: stops.iter().map(|s| RouteStop::upcoming(*s)).collect(),
        route_progress: 0,
        reviews: vec![Review::new(4, "Fine")],
    }
}

fn numbers(buses: &[&Bus]) -> Vec<String> {
    buses.iter().map(|b| b.number.clone()).collect()
}

speculate! {
    before {
        let catalog = Catalog::builtin().expect("Builtin catalog should be valid");
        let store = MemoryStore::new();
    }

    describe "filter_buses" {
        it "returns nothing for stations no bus serves" {
            for station in ["Karol Bagh", "Nehru Place", "Saket", "Dwarka", "Rohini", "Janakpuri"] {
                assert!(
                    filter_buses(Some(station), catalog.buses()).is_empty(),
                    "{} should have no buses",
                    station
                );
            }
        }

        it "returns the single bus serving a station" {
            let result = filter_buses(Some("Chandni Chowk"), catalog.buses());
            assert_eq!(numbers(&result), vec!["DTC 724"]);
        }

        it "matches intermediate stops, not only the first" {
            let result = filter_buses(Some("ITO"), catalog.buses());
            assert_eq!(numbers(&result), vec!["DTC 423"]);
        }

        it "agrees with the catalog index for every stop" {
            for bus in catalog.buses() {
                for stop in &bus.route {
                    let scanned = numbers(&filter_buses(Some(stop.stop.as_str()), catalog.buses()));
                    let indexed = numbers(&catalog.buses_serving(&stop.stop));
                    assert_eq!(scanned, indexed, "stop {}", stop.stop);
                }
            }
        }
    }

    describe "selector" {
        it "starts with no selection when nothing is stored" {
            let mut selector = Selector::new(store.clone());
            assert_eq!(selector.restore(), None);
            assert_eq!(selector.current(), None);
        }

        it "survives a restart" {
            let mut first = Selector::new(store.clone());
            first.select("India Gate");
            drop(first);

            let mut second = Selector::new(store.clone());
            assert_eq!(second.restore(), Some("India Gate".to_string()));
            assert_eq!(second.current(), Some("India Gate"));
        }

        it "persists the plain station name under the fixed key" {
            let mut selector = Selector::new(store.clone());
            selector.select("Connaught Place");
            assert_eq!(
                store.get(SELECTED_STATION_KEY).expect("Read failed"),
                Some("Connaught Place".to_string())
            );
        }

        it "accepts stations outside the catalog" {
            let mut board = Board::start(catalog.clone(), store.clone());
            board.on_station_picked("Atlantis");

            assert_eq!(board.selected(), Some("Atlantis"));
            assert!(board.visible_buses().is_empty());
        }
    }

    describe "board" {
        it "shows nothing before a station is picked" {
            let board = Board::start(catalog.clone(), store.clone());
            assert!(board.visible_buses().is_empty());
        }

        it "gives the same result when a station is picked twice" {
            let mut board = Board::start(catalog.clone(), store.clone());
            board.on_station_picked("Lajpat Nagar");
            let once = numbers(&board.visible_buses());

            board.on_station_picked("Lajpat Nagar");
            let twice = numbers(&board.visible_buses());

            assert_eq!(once, vec!["DTC 340"]);
            assert_eq!(once, twice);
        }

        it "restores the previous station at startup" {
            store.set(SELECTED_STATION_KEY, "India Gate").expect("Write failed");

            let board = Board::start(catalog.clone(), store.clone());
            assert_eq!(board.selected(), Some("India Gate"));
            assert_eq!(numbers(&board.visible_buses()), vec!["DTC 581"]);
        }

        it "shows a bus at one station and not at another" {
            let catalog = Catalog::new(
                vec![Station::new(1, "Connaught Place"), Station::new(2, "India Gate")],
                vec![make_bus(1, "DTC 423", &["Connaught Place", "Mandi House", "ITO"])],
            ).expect("Catalog should be valid");
            let mut board = Board::start(catalog, store.clone());

            board.on_station_picked("Connaught Place");
            assert_eq!(numbers(&board.visible_buses()), vec!["DTC 423"]);

            board.on_station_picked("India Gate");
            assert!(board.visible_buses().is_empty());
        }

        it "keeps catalog order when several buses share a stop" {
            let catalog = Catalog::new(
                vec![Station::new(5, "Karol Bagh")],
                vec![
                    make_bus(10, "Bus A", &["Rohini", "Karol Bagh"]),
                    make_bus(2, "Other", &["Saket"]),
                    make_bus(7, "Bus B", &["Karol Bagh", "Dwarka"]),
                ],
            ).expect("Catalog should be valid");
            let mut board = Board::start(catalog, store.clone());

            board.on_station_picked("Karol Bagh");
            assert_eq!(numbers(&board.visible_buses()), vec!["Bus A", "Bus B"]);
        }

        it "recomputes after every change" {
            let mut board = Board::start(catalog.clone(), store.clone());

            board.on_station_picked("Connaught Place");
            assert_eq!(numbers(&board.visible_buses()), vec!["DTC 423"]);

            board.on_station_picked("Chandni Chowk");
            assert_eq!(numbers(&board.visible_buses()), vec!["DTC 724"]);
            assert_eq!(board.view().buses[0].number, "DTC 724");
        }
    }
}
