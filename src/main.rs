//! LED Animator - A desktop application for drawing LED matrix animations.
//!
//! This application allows you to:
//! - Draw animations frame by frame on a pixel grid
//! - Preview them with timed playback
//! - Save them as `.leda` JSON files
//! - Export them as a packed bit integer for the LED controller

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;
mod utils;

use app::App;
use eframe::NativeOptions;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("led_animator=info".parse()?))
        .init();

    info!("LED Animator v{} starting", env!("CARGO_PKG_VERSION"));

    // Configure native window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("LED Animator")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "LED Animator",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("LED Animator shut down");
    Ok(())
}
