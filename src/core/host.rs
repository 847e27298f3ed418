//! Window host contract between the editor and the GUI front end.

use super::palette::PaletteColor;

/// A full-window view the editor can switch to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// List of saved animation names.
    FilePicker { files: Vec<String> },
    /// Form for name, height and width of a new animation.
    NewFile,
    /// Grid editor for the current animation.
    Animator,
    /// Read-only export text.
    Export { text: String },
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::FilePicker { .. } => "Open",
            View::NewFile => "New Animation",
            View::Animator => "Animator",
            View::Export { .. } => "Export",
        }
    }
}

/// Part of a view that can be rebuilt without replacing the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    ColorPicker,
    Frames,
}

/// Typed address of a single widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    /// Grid cell at column `x`, row `y`.
    Cell { x: usize, y: usize },
    FrameButton(usize),
    PlayToggle,
    SpeedEntry,
    FileNameEntry,
    HeightEntry,
    WidthEntry,
}

/// Visual overrides applied to a widget. `None` fields are left as they are.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetStyle {
    pub bg: Option<PaletteColor>,
    pub fg: Option<PaletteColor>,
    pub text: Option<String>,
}

impl WidgetStyle {
    pub fn fill(bg: PaletteColor) -> Self {
        Self {
            bg: Some(bg),
            ..Default::default()
        }
    }

    pub fn colors(bg: PaletteColor, fg: PaletteColor) -> Self {
        Self {
            bg: Some(bg),
            fg: Some(fg),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Frame list entry, highlighted or not.
    pub fn frame_button(selected: bool) -> Self {
        if selected {
            Self::colors(PaletteColor::Black, PaletteColor::White)
        } else {
            Self::colors(PaletteColor::White, PaletteColor::Black)
        }
    }

    /// Play/pause toggle for the given playing state.
    pub fn play_toggle(playing: bool) -> Self {
        if playing {
            Self::fill(PaletteColor::Red).with_text("Pause")
        } else {
            Self::fill(PaletteColor::Green).with_text("Play")
        }
    }
}

/// What the editor needs from the window system.
///
/// `show` is used for the very first view, `replace` for every later one.
pub trait WindowHost {
    fn show(&mut self, view: View);
    fn replace(&mut self, view: View);
    fn reload(&mut self, section: Section);
    fn configure(&mut self, widget: WidgetId, style: WidgetStyle);
    /// Current text of an editable widget, `None` if the current view has no such widget.
    fn value(&self, widget: WidgetId) -> Option<String>;
    fn show_error(&mut self, title: &str, message: &str);
}
