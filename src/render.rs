//! Plain-text rendering of the board for the terminal.

use crate::board::{BoardView, BusCard, StopMarker};

const BAR_WIDTH: usize = 20;
const VISITED: char = '●';
const UPCOMING: char = '○';

fn marker_symbol(marker: StopMarker) -> char {
    match marker {
        StopMarker::Visited => VISITED,
        StopMarker::Upcoming => UPCOMING,
    }
}

/// A fixed-width bar for a percentage, e.g. `[#####---------------] 25%`.
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// Numbered station list with the current selection marked.
///
/// ```text
/// Select Bus Station
///    1. Connaught Place
///  * 2. India Gate
/// ```
pub fn render_picker(view: &BoardView) -> String {
    let mut output = String::new();
    output.push_str(view.picker_label);
    output.push('\n');

    for (i, station) in view.stations.iter().enumerate() {
        let mark = if view.selected.as_deref() == Some(station.name.as_str()) {
            '*'
        } else {
            ' '
        };
        output.push_str(&format!(" {} {}. {}\n", mark, i + 1, station.name));
    }
    output
}

/// Heading plus one summary card per visible bus. Empty when nothing is selected.
pub fn render_board(view: &BoardView) -> String {
    let Some(station) = view.selected.as_deref() else {
        return String::new();
    };

    let mut output = format!("Buses arriving at {}\n", station);
    if view.buses.is_empty() {
        output.push_str("  (no buses serve this station)\n");
        return output;
    }

    for card in &view.buses {
        output.push('\n');
        render_card(&mut output, card);
    }
    output
}

fn render_card(output: &mut String, card: &BusCard) {
    output.push_str(&format!(
        "Bus {} [{}]  {}\n",
        card.number,
        card.accent.as_str(),
        card.arrival_time
    ));
    output.push_str(&format!(
        "  Fare: ₹{}   Crowd: {}\n",
        card.fare,
        card.crowd_level.as_str()
    ));
    output.push_str(&format!("  Fullness: {}\n", progress_bar(card.fullness)));
}

/// The route-and-reviews detail for one bus.
///
/// ```text
/// Bus Route
///   ● Connaught Place
///   │
///   ○ ITO
/// [######--------------] 33%
///
/// Reviews
///   ★★★★☆ Clean and usually on time
/// ```
pub fn render_bus_detail(card: &BusCard) -> String {
    let mut output = format!("Bus {}\n\nBus Route\n", card.number);

    for stop in &card.route {
        output.push_str(&format!("  {} {}\n", marker_symbol(stop.marker), stop.name));
        if !stop.is_last {
            output.push_str("  │\n");
        }
    }
    output.push_str(&progress_bar(card.route_progress));
    output.push_str("\n\nReviews\n");

    if card.reviews.is_empty() {
        output.push_str("  (no reviews yet)\n");
    }
    for review in &card.reviews {
        output.push_str(&format!("  {} {}\n", review.stars, review.comment));
    }
    output
}
