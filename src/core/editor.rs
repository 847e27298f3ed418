//! The animation editor.
//!
//! [`AnimationEditor`] owns the animation being edited and the editing state
//! around it. Every operation is driven by a UI event, mutates that state, and
//! then tells the [`WindowHost`] which widgets or sections to refresh.

use super::cell_model::CellModel;
use super::error::{EditorError, EditorResult, StoreError};
use super::export;
use super::host::{Section, View, WidgetId, WidgetStyle, WindowHost};
use super::model::{Animation, AnimationRecord, Dimensions, Frame, MAX_SIDE};
use super::palette::PaletteColor;
use super::playback::PlaybackTimer;
use super::store::FileStore;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const INVALID_VALUES_TITLE: &str = "Invalid values";

pub struct AnimationEditor<S: FileStore> {
    store: S,
    cell_model: CellModel,
    default_speed_ms: u64,

    animation: Animation,
    selected_frame: usize,
    selected_color: PaletteColor,
    play: bool,
    play_speed_ms: u64,
    file_name: String,

    window_shown: bool,
    timer: PlaybackTimer,
}

impl<S: FileStore> AnimationEditor<S> {
    pub fn new(store: S, cell_model: CellModel, default_speed_ms: u64) -> Self {
        Self {
            store,
            cell_model,
            default_speed_ms,
            animation: Animation::default(),
            selected_frame: 0,
            selected_color: PaletteColor::Black,
            play: false,
            play_speed_ms: default_speed_ms,
            file_name: String::new(),
            window_shown: false,
            timer: PlaybackTimer::new(),
        }
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.animation.frame(self.selected_frame)
    }

    pub fn selected_frame(&self) -> usize {
        self.selected_frame
    }

    pub fn selected_color(&self) -> PaletteColor {
        self.selected_color
    }

    pub fn is_playing(&self) -> bool {
        self.play
    }

    /// Last known good playback speed, without reading the speed field.
    pub fn play_speed_ms(&self) -> u64 {
        self.play_speed_ms
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn cell_model(&self) -> CellModel {
        self.cell_model
    }

    /// Where animations are stored.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// First view after launch.
    pub fn start(&mut self, host: &mut dyn WindowHost) -> EditorResult<()> {
        self.open_file_list(host)
    }

    pub fn select_color(&mut self, host: &mut dyn WindowHost, color: PaletteColor) {
        self.selected_color = color;
        host.reload(Section::ColorPicker);
    }

    /// Load the animation saved under `name` and show it in the animator.
    ///
    /// On failure the current animation is left untouched.
    pub fn open(&mut self, host: &mut dyn WindowHost, name: &str) -> EditorResult<()> {
        let record = self.store.load(name)?;
        let (speed, animation) =
            record
                .into_animation(self.cell_model)
                .map_err(|source| StoreError::Malformed {
                    name: name.to_string(),
                    source,
                })?;

        info!(
            "Opened '{}': {} frames of {}x{}",
            name,
            animation.frame_count(),
            animation.dimensions().height,
            animation.dimensions().width
        );

        self.file_name = name.to_string();
        self.animation = animation;
        self.play_speed_ms = speed;
        self.selected_frame = 0;
        self.switch_window(host, View::Animator);
        Ok(())
    }

    pub fn open_file_list(&mut self, host: &mut dyn WindowHost) -> EditorResult<()> {
        self.file_name.clear();
        let files = self.store.list_names()?;
        debug!("Found {} saved animations", files.len());
        self.switch_window(host, View::FilePicker { files });
        Ok(())
    }

    pub fn open_new_file_window(&mut self, host: &mut dyn WindowHost) {
        self.file_name.clear();
        self.switch_window(host, View::NewFile);
    }

    /// Show `view`, replacing whatever was shown before.
    pub fn switch_window(&mut self, host: &mut dyn WindowHost, view: View) {
        self.stop_playback();
        debug!("Switching to {} view", view.title());
        if self.window_shown {
            host.replace(view);
        } else {
            host.show(view);
            self.window_shown = true;
        }
    }

    /// Playback speed from the speed field, falling back to the last good value.
    fn play_speed(&mut self, host: &dyn WindowHost) -> u64 {
        if let Some(text) = host.value(WidgetId::SpeedEntry) {
            match text.trim().parse::<u64>() {
                Ok(speed) if speed > 0 => self.play_speed_ms = speed,
                _ => debug!("Ignoring speed '{}', keeping {} ms", text, self.play_speed_ms),
            }
        }
        self.play_speed_ms
    }

    /// Write the whole animation under the current file name. No-op without a name.
    pub fn save(&mut self, host: &mut dyn WindowHost) -> EditorResult<()> {
        if self.file_name.is_empty() {
            debug!("Save skipped, no file name");
            return Ok(());
        }

        let speed = self.play_speed(host);
        let record = AnimationRecord::new(speed, &self.animation);
        self.store.save(&self.file_name, &record)?;
        info!("Saved '{}' ({} frames)", self.file_name, self.animation.frame_count());
        Ok(())
    }

    /// Create, persist and open a blank animation from raw form input.
    pub fn create_new(
        &mut self,
        host: &mut dyn WindowHost,
        name: &str,
        height: &str,
        width: &str,
    ) -> EditorResult<()> {
        let name = name.trim();
        if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
            return Err(self.reject(host, "Please supply a file name without path separators"));
        }

        let dimensions = match (parse_dimension(height), parse_dimension(width)) {
            (Some(h), Some(w)) => Dimensions::new(h, w),
            _ => {
                return Err(self.reject(
                    host,
                    &format!("Please only supply integers from 1 to {} for width and height", MAX_SIDE),
                ))
            }
        };
        let animation = Animation::blank(dimensions)
            .map_err(|e| EditorError::Validation(e.to_string()))?;

        self.file_name = name.to_string();
        self.animation = animation;
        self.selected_frame = 0;
        self.play_speed_ms = self.default_speed_ms;
        info!("Created '{}' at {}x{}", name, dimensions.height, dimensions.width);

        self.save(host)?;
        self.switch_window(host, View::Animator);
        Ok(())
    }

    fn reject(&self, host: &mut dyn WindowHost, message: &str) -> EditorError {
        host.show_error(INVALID_VALUES_TITLE, message);
        EditorError::Validation(message.to_string())
    }

    /// Paint the cell at column `x`, row `y` of the selected frame.
    pub fn paint_pixel(&mut self, host: &mut dyn WindowHost, x: usize, y: usize) -> EditorResult<()> {
        let model = self.cell_model;
        let color = self.selected_color;
        let count = self.animation.frame_count();
        let frame = self
            .animation
            .frame_mut(self.selected_frame)
            .ok_or(EditorError::FrameOutOfRange {
                index: self.selected_frame,
                count,
            })?;
        let cell = frame
            .get_mut(x, y)
            .ok_or(EditorError::PixelOutOfBounds { x, y })?;

        *cell = model.paint(*cell, color);
        host.configure(WidgetId::Cell { x, y }, WidgetStyle::fill(model.display_color(*cell)));
        Ok(())
    }

    pub fn add_frame(&mut self, host: &mut dyn WindowHost) {
        self.animation.duplicate_last();
        host.reload(Section::Frames);
    }

    pub fn select_frame(&mut self, host: &mut dyn WindowHost, index: usize) -> EditorResult<()> {
        let count = self.animation.frame_count();
        if index >= count {
            return Err(EditorError::FrameOutOfRange { index, count });
        }

        host.configure(WidgetId::FrameButton(self.selected_frame), WidgetStyle::frame_button(false));
        self.selected_frame = index;
        host.configure(WidgetId::FrameButton(index), WidgetStyle::frame_button(true));
        self.repaint_grid(host);
        Ok(())
    }

    fn repaint_grid(&self, host: &mut dyn WindowHost) {
        let Some(frame) = self.current_frame() else {
            return;
        };
        for (y, row) in frame.rows().iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                host.configure(
                    WidgetId::Cell { x, y },
                    WidgetStyle::fill(self.cell_model.display_color(value)),
                );
            }
        }
    }

    /// Remove the selected frame. Refused while it is the only frame.
    pub fn delete_frame(&mut self, host: &mut dyn WindowHost) {
        if self.animation.remove(self.selected_frame).is_none() {
            debug!("Refusing to delete the last frame");
            return;
        }
        self.selected_frame = self.selected_frame.saturating_sub(1);
        host.reload(Section::Frames);
        self.repaint_grid(host);
    }

    pub fn toggle_playback(&mut self, host: &mut dyn WindowHost, now: Instant) -> EditorResult<()> {
        self.play = !self.play;
        host.configure(WidgetId::PlayToggle, WidgetStyle::play_toggle(self.play));

        if self.play {
            let interval = Duration::from_millis(self.play_speed(host));
            info!("Playback started at {} ms per frame", interval.as_millis());
            self.timer.start(now, interval);
            self.playback_tick(host, now)
        } else {
            info!("Playback stopped");
            self.timer.stop();
            Ok(())
        }
    }

    /// Advance to the next frame, wrapping around, and re-arm the timer.
    pub fn playback_tick(&mut self, host: &mut dyn WindowHost, now: Instant) -> EditorResult<()> {
        if !self.play {
            return Ok(());
        }
        let next = (self.selected_frame + 1) % self.animation.frame_count();
        self.select_frame(host, next)?;
        let interval = Duration::from_millis(self.play_speed(host));
        self.timer.rearm(now, interval);
        Ok(())
    }

    /// Run a tick if one is due. Returns whether a tick ran.
    pub fn poll_playback(&mut self, host: &mut dyn WindowHost, now: Instant) -> EditorResult<bool> {
        if !self.timer.is_due(now) {
            return Ok(false);
        }
        self.playback_tick(host, now)?;
        Ok(true)
    }

    /// Delay until the next tick, `None` while stopped.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    fn stop_playback(&mut self) {
        if self.timer.is_running() {
            debug!("Stopping playback for view switch");
        }
        self.play = false;
        self.timer.stop();
    }

    /// Save, then show the export text for the current animation.
    pub fn export(&mut self, host: &mut dyn WindowHost) -> EditorResult<()> {
        self.save(host)?;
        let text = self.export_text()?;
        info!("Exported '{}' ({} chars)", self.file_name, text.len());
        self.switch_window(host, View::Export { text });
        Ok(())
    }

    /// Export text for the configured cell model.
    pub fn export_text(&self) -> EditorResult<String> {
        let text = match self.cell_model {
            CellModel::Monochrome => export::pack_bits(&self.animation)?.to_string(),
            CellModel::Palette => export::text_dump(&self.animation),
        };
        Ok(text)
    }

    pub fn back_to_animator(&mut self, host: &mut dyn WindowHost) {
        self.switch_window(host, View::Animator);
    }
}

fn parse_dimension(text: &str) -> Option<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| (1..=MAX_SIDE).contains(&n))
}
