#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::{App, Lang, Theme};
pub use config::PERSISTENCE;
pub use domain::{Mode, SectorRecord};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip the remote document store; the board uses static scores only
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Use this number as the live score instead of reading the store
    #[arg(long = "override", value_name = "SCORE", allow_negative_numbers = true)]
    pub score_override: Option<f64>,

    /// Start in this language (overrides the saved preference)
    #[arg(long, value_enum)]
    pub lang: Option<Lang>,

    /// Start with this theme (overrides the saved preference)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
