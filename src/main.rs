//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against another player.
//! Usage: `gomoku [config.toml]` (defaults to `gomoku.toml`).

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::{AppConfig, GomokuEngine};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "gomoku.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = AppConfig::load_or_default(&path)?;
    let engine = GomokuEngine::from_config(&config.game)?;
    if let Some(err) = engine.last_error() {
        tracing::warn!(%err, "opening only partially applied");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, engine)))),
    )?;
    Ok(())
}
