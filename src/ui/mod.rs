//! egui front end: the screen model the editor talks to and the window that draws it.

pub mod main_window;
pub mod screen;
pub mod theme;
