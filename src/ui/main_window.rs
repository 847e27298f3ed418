//! Main application window.
//!
//! Renders the current [`View`] of the [`Screen`] with egui and turns clicks
//! into editor operations. Widgets only collect [`Action`]s while drawing;
//! the actions run once the frame's panels are laid out.

use crate::config::{Config, ConfigManager};
use crate::core::cell_model::CellModel;
use crate::core::editor::AnimationEditor;
use crate::core::error::EditorError;
use crate::core::host::{Section, View, WidgetId, WidgetStyle, WindowHost};
use crate::core::palette::PaletteColor;
use crate::core::store::JsonFileStore;
use crate::ui::screen::Screen;
use crate::ui::theme;
use crate::utils::clipboard;
use anyhow::Context;
use egui::{Button, Color32, RichText, Stroke, TextEdit, Ui};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

/// User intent collected during rendering.
#[derive(Debug, Clone, PartialEq)]
enum Action {
    Open(String),
    NewFile,
    CreateNew,
    BackToFiles,
    SelectColor(PaletteColor),
    Paint { x: usize, y: usize },
    AddFrame,
    DeleteFrame,
    SelectFrame(usize),
    TogglePlayback,
    Save,
    Export,
    CopyExport,
    SaveExportAs,
    BackToAnimator,
    DismissError,
}

/// Main window state.
pub struct MainWindow {
    editor: AnimationEditor<JsonFileStore>,
    screen: Screen,
    config: Config,

    // UI State
    color_indicator: PaletteColor,
    status_message: String,
    status_is_error: bool,
    theme_applied: bool,
}

impl MainWindow {
    pub fn new(config_manager: &ConfigManager) -> Self {
        let config = config_manager.load();
        let animations_dir = config_manager.animations_dir(&config);
        info!(
            "Animations in {} ({:?} cells)",
            animations_dir.display(),
            config.cell_model
        );

        let editor = AnimationEditor::new(
            JsonFileStore::new(animations_dir),
            config.cell_model,
            config.default_speed_ms,
        );

        let mut window = Self {
            editor,
            screen: Screen::new(),
            config,
            color_indicator: PaletteColor::Black,
            status_message: "Ready".to_string(),
            status_is_error: false,
            theme_applied: false,
        };

        if let Err(e) = window.editor.start(&mut window.screen) {
            error!("Could not list animations: {}", e);
            window.set_status(&format!("Could not list animations: {}", e), true);
            window
                .editor
                .switch_window(&mut window.screen, View::FilePicker { files: Vec::new() });
        }

        window
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_dark_theme(ctx);
            self.theme_applied = true;
        }

        let now = Instant::now();
        if let Err(e) = self.editor.poll_playback(&mut self.screen, now) {
            self.report(e);
        }
        if let Some(delay) = self.editor.next_tick_in(now) {
            ctx.request_repaint_after(delay);
        }

        self.sync_screen();

        let mut actions = Vec::new();

        // Top panel with toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        // Bottom status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_main_content(ui, &mut actions);
        });

        self.render_error_dialog(ctx, &mut actions);

        for action in actions {
            self.apply(action);
        }
    }

    /// Populate freshly constructed views and reloaded sections from editor state.
    fn sync_screen(&mut self) {
        if self.screen.take_constructed() {
            match self.screen.view().cloned() {
                Some(View::Animator) => self.populate_animator(),
                Some(View::NewFile) => self.populate_new_file_form(),
                _ => {}
            }
        }

        for section in self.screen.take_reloads() {
            match section {
                Section::Frames => self.populate_frame_list(),
                Section::ColorPicker => self.color_indicator = self.editor.selected_color(),
            }
        }
    }

    fn populate_new_file_form(&mut self) {
        self.screen.set_entry(WidgetId::FileNameEntry, "");
        self.screen
            .set_entry(WidgetId::HeightEntry, self.config.default_height.to_string());
        self.screen
            .set_entry(WidgetId::WidthEntry, self.config.default_width.to_string());
    }

    fn populate_animator(&mut self) {
        self.screen
            .set_entry(WidgetId::SpeedEntry, self.editor.play_speed_ms().to_string());
        self.screen.configure(
            WidgetId::PlayToggle,
            WidgetStyle::play_toggle(self.editor.is_playing()),
        );
        self.color_indicator = self.editor.selected_color();
        self.populate_frame_list();

        let model = self.editor.cell_model();
        if let Some(frame) = self.editor.current_frame() {
            for (y, row) in frame.rows().iter().enumerate() {
                for (x, &value) in row.iter().enumerate() {
                    self.screen.configure(
                        WidgetId::Cell { x, y },
                        WidgetStyle::fill(model.display_color(value)),
                    );
                }
            }
        }
    }

    fn populate_frame_list(&mut self) {
        self.screen
            .clear_styles(|id| matches!(id, WidgetId::FrameButton(_)));
        let selected = self.editor.selected_frame();
        for i in 0..self.editor.animation().frame_count() {
            self.screen
                .configure(WidgetId::FrameButton(i), WidgetStyle::frame_button(i == selected));
        }
    }

    fn render_toolbar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("💡 LED Animator").color(theme::accent_color()));
            ui.separator();

            if let Some(view) = self.screen.view() {
                ui.label(view.title());
            }
            if !self.editor.file_name().is_empty() {
                ui.separator();
                ui.label(RichText::new(self.editor.file_name()).strong());
            }
        });
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let color = if self.status_is_error {
                theme::error_color()
            } else {
                theme::success_color()
            };
            ui.label(RichText::new(&self.status_message).color(color));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .small()
                        .color(Color32::GRAY),
                );
            });
        });
    }

    fn render_main_content(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        match self.screen.view().cloned() {
            Some(View::FilePicker { files }) => self.render_file_picker(ui, &files, actions),
            Some(View::NewFile) => self.render_new_file_form(ui, actions),
            Some(View::Animator) => self.render_animator(ui, actions),
            Some(View::Export { text }) => self.render_export(ui, &text, actions),
            None => {
                ui.label("Loading...");
            }
        }
    }

    fn render_file_picker(&mut self, ui: &mut Ui, files: &[String], actions: &mut Vec<Action>) {
        ui.heading("Saved Animations");
        ui.label(
            RichText::new(format!("Folder: {}", self.editor.store().dir().display()))
                .small()
                .weak(),
        );
        ui.add_space(5.0);

        if files.is_empty() {
            ui.label(RichText::new("No saved animations yet.").italics());
        } else {
            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - 40.0).max(100.0))
                .show(ui, |ui| {
                    for name in files {
                        if ui.selectable_label(false, name).clicked() {
                            actions.push(Action::Open(name.clone()));
                        }
                    }
                });
        }

        ui.add_space(10.0);
        if ui.button("➕ New Animation").clicked() {
            actions.push(Action::NewFile);
        }
    }

    fn render_new_file_form(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.heading("New Animation");
        ui.add_space(5.0);

        egui::Grid::new("new_file_form").num_columns(2).show(ui, |ui| {
            ui.label("Name:");
            ui.add(
                TextEdit::singleline(self.screen.entry_mut(WidgetId::FileNameEntry))
                    .desired_width(200.0),
            );
            ui.end_row();

            ui.label("Height:");
            ui.add(
                TextEdit::singleline(self.screen.entry_mut(WidgetId::HeightEntry))
                    .desired_width(60.0),
            );
            ui.end_row();

            ui.label("Width:");
            ui.add(
                TextEdit::singleline(self.screen.entry_mut(WidgetId::WidthEntry))
                    .desired_width(60.0),
            );
            ui.end_row();
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("✔ Create").clicked() {
                actions.push(Action::CreateNew);
            }
            if ui.button("⬅ Back").clicked() {
                actions.push(Action::BackToFiles);
            }
        });
    }

    fn render_animator(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        let grid_space = ui.available_size() - egui::vec2(200.0, 140.0);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                self.render_color_picker(ui, actions);
                ui.add_space(8.0);
                self.render_grid(ui, grid_space, actions);
            });

            ui.separator();

            ui.vertical(|ui| {
                self.render_frame_list(ui, actions);
            });
        });

        ui.separator();
        self.render_controls(ui, actions);
    }

    fn render_color_picker(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        if self.editor.cell_model() == CellModel::Monochrome {
            ui.label(RichText::new("Click a cell to toggle it").italics());
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for color in PaletteColor::ALL {
                let stroke = if color == self.color_indicator {
                    Stroke::new(3.0, theme::accent_color())
                } else {
                    Stroke::new(1.0, Color32::DARK_GRAY)
                };
                let button = Button::new("")
                    .fill(theme::palette_color(color))
                    .stroke(stroke)
                    .min_size(egui::vec2(22.0, 22.0));
                if ui.add(button).on_hover_text(color.name()).clicked() {
                    actions.push(Action::SelectColor(color));
                }
            }
            ui.label(format!("Color: {}", self.color_indicator));
        });
    }

    fn render_grid(&self, ui: &mut Ui, space: egui::Vec2, actions: &mut Vec<Action>) {
        let dims = self.editor.animation().dimensions();
        let side = (space.x / dims.width as f32)
            .min(space.y / dims.height as f32)
            .clamp(6.0, 48.0);

        egui::Grid::new("cell_grid")
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                for y in 0..dims.height {
                    for x in 0..dims.width {
                        let bg = self
                            .screen
                            .style(WidgetId::Cell { x, y })
                            .and_then(|s| s.bg)
                            .unwrap_or_default();
                        let cell = Button::new("")
                            .fill(theme::palette_color(bg))
                            .stroke(Stroke::new(1.0, Color32::DARK_GRAY))
                            .min_size(egui::vec2(side, side));
                        if ui.add(cell).clicked() {
                            actions.push(Action::Paint { x, y });
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn render_frame_list(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.heading("Frames");
        ui.horizontal(|ui| {
            if ui.button("➕ Add").on_hover_text("Duplicate the last frame").clicked() {
                actions.push(Action::AddFrame);
            }
            if ui.button("🗑 Delete").on_hover_text("Delete the selected frame").clicked() {
                actions.push(Action::DeleteFrame);
            }
        });
        ui.add_space(5.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for i in 0..self.editor.animation().frame_count() {
                let style = self.screen.style(WidgetId::FrameButton(i));
                let bg = style.and_then(|s| s.bg).unwrap_or(PaletteColor::White);
                let fg = style.and_then(|s| s.fg).unwrap_or(PaletteColor::Black);
                let button = Button::new(
                    RichText::new(format!("Frame {}", i + 1)).color(theme::palette_color(fg)),
                )
                .fill(theme::palette_color(bg))
                .min_size(egui::vec2(140.0, 0.0));
                if ui.add(button).clicked() {
                    actions.push(Action::SelectFrame(i));
                }
            }
        });
    }

    fn render_controls(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            let toggle = self
                .screen
                .style(WidgetId::PlayToggle)
                .cloned()
                .unwrap_or_else(|| WidgetStyle::play_toggle(false));
            let label = toggle.text.unwrap_or_else(|| "Play".to_string());
            let fill = theme::palette_color(toggle.bg.unwrap_or(PaletteColor::Green));
            if ui
                .add(Button::new(RichText::new(label).color(Color32::WHITE)).fill(fill))
                .clicked()
            {
                actions.push(Action::TogglePlayback);
            }

            ui.label("Speed (ms):");
            ui.add(
                TextEdit::singleline(self.screen.entry_mut(WidgetId::SpeedEntry))
                    .desired_width(60.0),
            );

            ui.separator();

            if ui.button("💾 Save").clicked() {
                actions.push(Action::Save);
            }
            if ui.button("📤 Export").clicked() {
                actions.push(Action::Export);
            }
            if ui.button("📂 Files").clicked() {
                actions.push(Action::BackToFiles);
            }
        });
    }

    fn render_export(&mut self, ui: &mut Ui, text: &str, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.heading("Export");
            ui.separator();
            if ui.button("📋 Copy").clicked() {
                actions.push(Action::CopyExport);
            }
            if ui.button("💾 Save As...").clicked() {
                actions.push(Action::SaveExportAs);
            }
            if ui.button("⬅ Back").clicked() {
                actions.push(Action::BackToAnimator);
            }
        });

        ui.add_space(5.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add(
                TextEdit::multiline(&mut &*text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(12),
            );
        });
    }

    fn render_error_dialog(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let Some(dialog) = self.screen.error() else {
            return;
        };

        egui::Window::new(RichText::new(&dialog.title).color(theme::error_color()))
            .id(egui::Id::new("error_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&dialog.message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    actions.push(Action::DismissError);
                }
            });
    }

    // Actions

    fn apply(&mut self, action: Action) {
        let screen = &mut self.screen;
        let result = match action {
            Action::Open(name) => self
                .editor
                .open(screen, &name)
                .map(|()| Some(format!("Opened '{}'", name))),
            Action::NewFile => {
                self.editor.open_new_file_window(screen);
                Ok(None)
            }
            Action::CreateNew => {
                let name = screen.value(WidgetId::FileNameEntry).unwrap_or_default();
                let height = screen.value(WidgetId::HeightEntry).unwrap_or_default();
                let width = screen.value(WidgetId::WidthEntry).unwrap_or_default();
                self.editor
                    .create_new(screen, &name, &height, &width)
                    .map(|()| Some(format!("Created '{}'", name.trim())))
            }
            Action::BackToFiles => self.editor.open_file_list(screen).map(|()| None),
            Action::SelectColor(color) => {
                self.editor.select_color(screen, color);
                Ok(None)
            }
            Action::Paint { x, y } => self.editor.paint_pixel(screen, x, y).map(|()| None),
            Action::AddFrame => {
                self.editor.add_frame(screen);
                Ok(None)
            }
            Action::DeleteFrame => {
                self.editor.delete_frame(screen);
                Ok(None)
            }
            Action::SelectFrame(index) => self.editor.select_frame(screen, index).map(|()| None),
            Action::TogglePlayback => self
                .editor
                .toggle_playback(screen, Instant::now())
                .map(|()| None),
            Action::Save => self
                .editor
                .save(screen)
                .map(|()| Some(format!("Saved '{}'", self.editor.file_name()))),
            Action::Export => self
                .editor
                .export(screen)
                .map(|()| Some("Export ready".to_string())),
            Action::CopyExport => {
                self.copy_export();
                Ok(None)
            }
            Action::SaveExportAs => {
                match self.save_export_as() {
                    Ok(Some(path)) => {
                        self.set_status(&format!("Export written to {}", path.display()), false)
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!("{:#}", e);
                        self.set_status(&format!("Error: {:#}", e), true);
                    }
                }
                Ok(None)
            }
            Action::BackToAnimator => {
                self.editor.back_to_animator(screen);
                Ok(None)
            }
            Action::DismissError => {
                screen.dismiss_error();
                Ok(None)
            }
        };

        match result {
            Ok(Some(message)) => self.set_status(&message, false),
            Ok(None) => {}
            // Already presented in the error dialog
            Err(EditorError::Validation(_)) => {}
            Err(e) => self.report(e),
        }
    }

    fn copy_export(&mut self) {
        let copied = match self.screen.view() {
            Some(View::Export { text }) => clipboard::copy_to_clipboard(text),
            _ => false,
        };
        if copied {
            self.set_status("Export copied to clipboard", false);
        } else {
            self.set_status("Could not copy export to clipboard", true);
        }
    }

    /// Write the export text to a file picked by the user. `None` if cancelled.
    fn save_export_as(&self) -> anyhow::Result<Option<PathBuf>> {
        let Some(View::Export { text }) = self.screen.view() else {
            return Ok(None);
        };

        let stem = if self.editor.file_name().is_empty() {
            "animation"
        } else {
            self.editor.file_name()
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .set_file_name(format!("{}.txt", stem))
            .save_file()
        else {
            return Ok(None);
        };

        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        info!("Export written to {}", path.display());
        Ok(Some(path))
    }

    fn report(&mut self, e: EditorError) {
        error!("{}", e);
        self.set_status(&format!("Error: {}", e), true);
    }

    fn set_status(&mut self, message: &str, is_error: bool) {
        self.status_message = message.to_string();
        self.status_is_error = is_error;
    }
}
