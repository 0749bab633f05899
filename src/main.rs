use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_bus_tracker::board::{Board, BusCard};
use smart_bus_tracker::catalog::Catalog;
use smart_bus_tracker::config::Config;
use smart_bus_tracker::render;
use smart_bus_tracker::store::{self, MemoryStore, PreferenceStore};

#[derive(Parser)]
#[command(name = "sbt")]
#[command(about = "Smart bus tracker: pick a station and see which buses serve it")]
struct Cli {
    /// Directory holding the preference store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep the selection in memory only
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List stations, marking the selected one
    Stations,
    /// Select the station you are waiting at
    Select {
        /// Station name, e.g. "Connaught Place"
        name: String,
    },
    /// Show buses arriving at the selected station
    Show {
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the route and reviews of one bus
    Route {
        /// Bus number, e.g. "DTC 423"
        number: String,
    },
}

/// Logs go to stderr so stdout carries only rendered output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "smart_bus_tracker=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_store(cli: &Cli) -> anyhow::Result<Box<dyn PreferenceStore>> {
    if cli.memory {
        return Ok(Box::new(MemoryStore::new()));
    }

    let config = Config::resolve(cli.data_dir.clone())?;
    let path = config.store_path();
    tracing::debug!("Opening preference store at {}", path.display());
    Ok(store::open_or_memory(&path))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let catalog = Catalog::builtin()?;
    let mut board = Board::start(catalog, open_store(&cli)?);

    match cli.command {
        Some(Commands::Stations) => {
            print!("{}", render::render_picker(&board.view()));
        }
        Some(Commands::Select { name }) => {
            board.on_station_picked(&name);
            print!("{}", render::render_board(&board.view()));
        }
        Some(Commands::Show { json }) => {
            let view = board.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else if view.selected.is_none() {
                println!("No station selected. Run `sbt select <NAME>` first.");
                print!("{}", render::render_picker(&view));
            } else {
                print!("{}", render::render_board(&view));
            }
        }
        Some(Commands::Route { number }) => {
            let bus = board
                .catalog()
                .bus_by_number(&number)
                .with_context(|| format!("No bus numbered {:?}", number))?;
            print!("{}", render::render_bus_detail(&BusCard::from(bus)));
        }
        None => {
            let view = board.view();
            print!("{}", render::render_picker(&view));
            if view.selected.is_some() {
                println!();
                print!("{}", render::render_board(&view));
            }
        }
    }

    Ok(())
}
