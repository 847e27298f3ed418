//! Animation model, persistence, export and the editor that ties them together.

pub mod cell_model;
pub mod editor;
pub mod error;
pub mod export;
pub mod host;
pub mod model;
pub mod palette;
pub mod playback;
pub mod store;
