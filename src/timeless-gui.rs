//! Timeless day progress display
//!
//! A single-screen egui application showing how much of the current day is left:
//! - Circular progress ring with the remaining seconds and a mood emoji
//! - Live 12-hour clock
//! - Dark/light mode switch that also follows the system appearance
//! - A motivational quote rotated every 30 seconds

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination with the presenter
//! - `state/` - Theme state
//! - `ui/` - Panel layout and widgets
//! - `rendering/` - Progress ring drawing
//! - `utils/` - Formatting helpers

use anyhow::{Context, Result};
use eframe::egui;

mod utils;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use timeless::{AppConfig, CommandLine, QuoteCatalog};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that loads configuration and the quote catalog and launches the GUI.
fn main() -> Result<()> {
    timeless::init_logging("info")?;

    let args = CommandLine::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{}", CommandLine::usage());
        return Ok(());
    }

    let config = AppConfig::resolve(&args);
    let catalog = QuoteCatalog::load_or_embedded(config.quotes_path.as_deref())
        .context("no usable quote catalog")?;
    tracing::info!(quotes = catalog.len(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 860.0])
            .with_min_inner_size([320.0, 640.0])
            .with_title("Timeless"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeless",
        options,
        Box::new(move |cc| Ok(Box::new(TimelessApp::new(cc, config, catalog)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the display: {}", e))
}

/// The Timeless application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` drives the presenter's tasks and host appearance
/// - `ThemeCoordinator` applies the light/dark palette
/// - `PanelManager` lays out and renders the screen
struct TimelessApp {
    state: AppState,
}

impl TimelessApp {
    /// Creates the app, installing custom fonts and building the presenter.
    fn new(cc: &eframe::CreationContext, config: AppConfig, catalog: QuoteCatalog) -> Self {
        let fonts = timeless::FontSet::install(&cc.egui_ctx, config.font_dir.as_deref());
        Self {
            state: AppState::new(&config, catalog, fonts),
        }
    }
}

impl Drop for TimelessApp {
    /// Cancels the presenter's tasks when the window closes.
    fn drop(&mut self) {
        ApplicationCoordinator::shutdown(&mut self.state);
    }
}

impl eframe::App for TimelessApp {
    /// Main update loop:
    /// 1. Run due presenter tasks and host appearance changes
    /// 2. Apply theme
    /// 3. Render the screen
    /// 4. Handle the dark mode switch
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::step(&mut self.state, ctx);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            match interaction {
                PanelInteraction::DarkModeToggled => {
                    ApplicationCoordinator::toggle_dark_mode(&mut self.state);
                    ctx.request_repaint();
                }
            }
        }
    }
}
