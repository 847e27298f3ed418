//! Application state and eframe integration.
//!
//! Main application structure implementing eframe::App trait.

use crate::config::ConfigManager;
use crate::ui::main_window::MainWindow;
use eframe::egui;

/// Main application state.
pub struct App {
    main_window: MainWindow,
}

impl App {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config_manager = ConfigManager::new();
        tracing::debug!("Config file: {}", config_manager.config_file_path().display());
        Self {
            main_window: MainWindow::new(&config_manager),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.main_window.render(ctx);
    }
}
