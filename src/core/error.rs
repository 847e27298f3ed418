//! Error types for the animation core.

use thiserror::Error;

/// Violations of the animation data model invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("animation has no frames")]
    Empty,

    #[error("dimensions must be at least 1x1, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },

    #[error("dimensions {height}x{width} exceed the {max}x{max} limit")]
    TooLarge { height: usize, width: usize, max: usize },

    #[error("frame {frame} is {found_height}x{found_width}, expected {height}x{width}")]
    ShapeMismatch {
        frame: usize,
        height: usize,
        width: usize,
        found_height: usize,
        found_width: usize,
    },

    #[error("cell value {value} in frame {frame} at ({col}, {row}) exceeds {max}")]
    CellOutOfRange {
        frame: usize,
        row: usize,
        col: usize,
        value: u8,
        max: u8,
    },
}

/// Failures of the animation file store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("animation '{0}' not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid animation file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed animation '{name}': {source}")]
    Malformed {
        name: String,
        #[source]
        source: ModelError,
    },
}

/// Failures while building an export.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("cell value {value} in frame {frame} at ({col}, {row}) is not a bit")]
    NonBinaryCell {
        frame: usize,
        row: usize,
        col: usize,
        value: u8,
    },
}

/// Errors surfaced by editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("invalid values: {0}")]
    Validation(String),

    #[error("frame {index} out of range ({count} frames)")]
    FrameOutOfRange { index: usize, count: usize },

    #[error("pixel ({x}, {y}) is outside the matrix")]
    PixelOutOfBounds { x: usize, y: usize },
}

pub type EditorResult<T> = Result<T, EditorError>;
