mod app;

use anyhow::{Result, anyhow};
use app::DeckApp;
use clap::Parser;
use flashcard_deck::config::{ViewConfig, parse_page_size};
use flashcard_deck::pagination::DEFAULT_PAGE_SIZE;
use flashcard_deck::source::{DEFAULT_SOURCE, DeckSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Browse a deck of flip cards loaded from a JSON document
#[derive(Parser, Debug)]
#[command(name = "flashcard-deck", version, about, long_about = None)]
struct Cli {
    /// Cards document: a file path or an http(s) URL
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    source: DeckSource,

    /// Number of cards shown per page
    #[arg(long, value_parser = parse_page_size, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = ViewConfig {
        source: cli.source,
        page_size: cli.page_size,
    };
    info!(source = %config.source, page_size = config.page_size, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards",
        options,
        Box::new(move |cc| Ok(Box::new(DeckApp::new(&cc.egui_ctx, config)))),
    )
    .map_err(|e| anyhow!("cannot open window: {e}"))
}
