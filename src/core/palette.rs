//! Fixed color table shared by the cell grid and the color picker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eleven paint colors. The discriminant is the value stored in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black = 0,
    White = 1,
    Red = 2,
    Green = 3,
    Blue = 4,
    Yellow = 5,
    Teal = 6,
    Orange = 7,
    Brown = 8,
    Purple = 9,
    Grey = 10,
}

impl PaletteColor {
    /// All colors in index order.
    pub const ALL: [PaletteColor; 11] = [
        PaletteColor::Black,
        PaletteColor::White,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Teal,
        PaletteColor::Orange,
        PaletteColor::Brown,
        PaletteColor::Purple,
        PaletteColor::Grey,
    ];

    /// Highest valid cell value for the palette.
    pub const MAX_INDEX: u8 = 10;

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Teal => "teal",
            PaletteColor::Orange => "orange",
            PaletteColor::Brown => "brown",
            PaletteColor::Purple => "purple",
            PaletteColor::Grey => "grey",
        }
    }

    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lookup_is_bidirectional() {
        for (i, color) in PaletteColor::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i);
            assert_eq!(PaletteColor::from_index(i as u8), Some(*color));
            assert_eq!(PaletteColor::from_name(color.name()), Some(*color));
        }
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(PaletteColor::from_index(11), None);
        assert_eq!(PaletteColor::from_name("magenta"), None);
    }

    #[test]
    fn test_table_values() {
        assert_eq!(PaletteColor::Black.index(), 0);
        assert_eq!(PaletteColor::Teal.index(), 6);
        assert_eq!(PaletteColor::Grey.index(), PaletteColor::MAX_INDEX);
    }
}
