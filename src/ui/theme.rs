//! Theme configuration for egui.
//!
//! Square-cornered dark theme plus the on-screen colors of the paint palette.

use crate::core::palette::PaletteColor;
use egui::{Color32, Rounding, Stroke, Style, Visuals};

/// Apply the dark theme to egui context.
pub fn apply_dark_theme(ctx: &egui::Context) {
    ctx.set_style(editor_style());
}

/// Charcoal panels with square corners, so widgets line up with the pixel grid.
fn editor_style() -> Style {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Style::default()
    };

    let bg_color = Color32::from_rgb(18, 18, 18);
    let panel_color = Color32::from_rgb(28, 28, 28);
    let widget_color = Color32::from_rgb(44, 44, 44);
    let text_color = Color32::from_rgb(210, 210, 210);

    style.visuals.panel_fill = panel_color;
    style.visuals.window_fill = bg_color;
    style.visuals.extreme_bg_color = Color32::from_rgb(8, 8, 8);

    style.visuals.widgets.noninteractive.bg_fill = widget_color;
    style.visuals.widgets.inactive.bg_fill = widget_color;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(64, 64, 64);
    style.visuals.widgets.active.bg_fill = accent_color();

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::BLACK);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent_color());

    style.visuals.selection.bg_fill = accent_color().gamma_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, accent_color());

    style.visuals.window_rounding = Rounding::ZERO;
    style.visuals.menu_rounding = Rounding::ZERO;
    for widget in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
        &mut style.visuals.widgets.open,
    ] {
        widget.rounding = Rounding::ZERO;
    }

    // Grid cells are buttons, keep them tight
    style.spacing.item_spacing = egui::vec2(2.0, 2.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.window_margin = 8.0.into();

    style
}

/// Screen color of a palette entry.
pub fn palette_color(color: PaletteColor) -> Color32 {
    match color {
        PaletteColor::Black => Color32::BLACK,
        PaletteColor::White => Color32::WHITE,
        PaletteColor::Red => Color32::from_rgb(220, 40, 40),
        PaletteColor::Green => Color32::from_rgb(60, 180, 75),
        PaletteColor::Blue => Color32::from_rgb(40, 90, 220),
        PaletteColor::Yellow => Color32::from_rgb(240, 220, 40),
        PaletteColor::Teal => Color32::from_rgb(0, 128, 128),
        PaletteColor::Orange => Color32::from_rgb(245, 130, 48),
        PaletteColor::Brown => Color32::from_rgb(128, 80, 40),
        PaletteColor::Purple => Color32::from_rgb(145, 30, 180),
        PaletteColor::Grey => Color32::from_rgb(128, 128, 128),
    }
}

/// Get the accent color for UI highlights.
pub fn accent_color() -> Color32 {
    Color32::from_rgb(255, 176, 0)
}

/// Get the success color for positive feedback.
pub fn success_color() -> Color32 {
    Color32::from_rgb(129, 199, 132)
}

/// Get the error color for negative feedback.
pub fn error_color() -> Color32 {
    Color32::from_rgb(239, 83, 80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_style_is_square_and_dark() {
        let style = editor_style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.window_rounding, Rounding::ZERO);
        assert_eq!(style.visuals.widgets.inactive.rounding, Rounding::ZERO);
        assert_eq!(style.visuals.widgets.active.bg_fill, accent_color());
        assert_eq!(style.spacing.item_spacing, egui::vec2(2.0, 2.0));
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        let colors: Vec<Color32> = PaletteColor::ALL.into_iter().map(palette_color).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a), "duplicate color at {}", i);
        }
    }
}
