//! Application state and input handling

pub mod screen;

pub use screen::{App, MenuOption};
