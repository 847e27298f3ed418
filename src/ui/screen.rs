//! Retained widget state for the immediate-mode renderer.
//!
//! egui rebuilds widgets every frame, so the [`WindowHost`] side of the editor
//! is a plain model: the current view, per-widget style overrides, editable
//! field contents and pending section reloads. The renderer reads it back.

use crate::core::host::{Section, View, WidgetId, WidgetStyle, WindowHost};
use std::collections::HashMap;
use tracing::debug;

/// Modal error dialog waiting to be dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

#[derive(Default)]
pub struct Screen {
    view: Option<View>,
    /// Set when a view was constructed and needs its widgets populated.
    constructed: bool,
    reloads: Vec<Section>,
    styles: HashMap<WidgetId, WidgetStyle>,
    entries: HashMap<WidgetId, String>,
    error: Option<ErrorDialog>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn style(&self, widget: WidgetId) -> Option<&WidgetStyle> {
        self.styles.get(&widget)
    }

    /// Mutable text of an editable widget, created empty on first use.
    pub fn entry_mut(&mut self, widget: WidgetId) -> &mut String {
        self.entries.entry(widget).or_default()
    }

    pub fn set_entry(&mut self, widget: WidgetId, text: impl Into<String>) {
        self.entries.insert(widget, text.into());
    }

    pub fn error(&self) -> Option<&ErrorDialog> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Whether a view was constructed since the last call.
    pub fn take_constructed(&mut self) -> bool {
        std::mem::take(&mut self.constructed)
    }

    pub fn take_reloads(&mut self) -> Vec<Section> {
        std::mem::take(&mut self.reloads)
    }

    /// Drop every style override whose widget matches `pred`.
    pub fn clear_styles(&mut self, pred: impl Fn(&WidgetId) -> bool) {
        self.styles.retain(|id, _| !pred(id));
    }

    fn construct(&mut self, view: View) {
        self.view = Some(view);
        self.constructed = true;
        self.reloads.clear();
        self.styles.clear();
        self.entries.clear();
    }
}

impl WindowHost for Screen {
    fn show(&mut self, view: View) {
        debug!("Showing {} view", view.title());
        self.construct(view);
    }

    fn replace(&mut self, view: View) {
        if let Some(old) = &self.view {
            debug!("Replacing {} view with {}", old.title(), view.title());
        }
        self.construct(view);
    }

    fn reload(&mut self, section: Section) {
        if !self.reloads.contains(&section) {
            self.reloads.push(section);
        }
    }

    fn configure(&mut self, widget: WidgetId, style: WidgetStyle) {
        let current = self.styles.entry(widget).or_default();
        if style.bg.is_some() {
            current.bg = style.bg;
        }
        if style.fg.is_some() {
            current.fg = style.fg;
        }
        if style.text.is_some() {
            current.text = style.text;
        }
    }

    fn value(&self, widget: WidgetId) -> Option<String> {
        self.entries.get(&widget).cloned()
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.error = Some(ErrorDialog {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
