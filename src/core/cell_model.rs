//! How a painted cell changes: binary toggle or palette index.

use super::palette::PaletteColor;
use serde::{Deserialize, Serialize};

/// Cell interpretation used by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellModel {
    /// Cells are bits; painting toggles them.
    #[default]
    Monochrome,
    /// Cells are color table indices; painting writes the selected color.
    Palette,
}

impl CellModel {
    /// Largest value a cell may hold under this model.
    pub fn max_value(self) -> u8 {
        match self {
            CellModel::Monochrome => 1,
            CellModel::Palette => PaletteColor::MAX_INDEX,
        }
    }

    /// New value for a cell that was clicked while `color` is selected.
    pub fn paint(self, current: u8, color: PaletteColor) -> u8 {
        match self {
            CellModel::Monochrome => {
                if current == 0 {
                    1
                } else {
                    0
                }
            }
            CellModel::Palette => color.index(),
        }
    }

    /// Color a cell widget shows for `value`.
    pub fn display_color(self, value: u8) -> PaletteColor {
        PaletteColor::from_index(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monochrome_toggle_ignores_color() {
        let model = CellModel::Monochrome;
        assert_eq!(model.paint(0, PaletteColor::Red), 1);
        assert_eq!(model.paint(1, PaletteColor::Red), 0);
        assert_eq!(model.paint(model.paint(0, PaletteColor::Blue), PaletteColor::Blue), 0);
    }

    #[test]
    fn test_palette_writes_color_index() {
        let model = CellModel::Palette;
        assert_eq!(model.paint(0, PaletteColor::Orange), 7);
        assert_eq!(model.paint(7, PaletteColor::Orange), 7);
    }

    #[test]
    fn test_display_color() {
        assert_eq!(CellModel::Monochrome.display_color(0), PaletteColor::Black);
        assert_eq!(CellModel::Monochrome.display_color(1), PaletteColor::White);
        assert_eq!(CellModel::Palette.display_color(9), PaletteColor::Purple);
    }
}
