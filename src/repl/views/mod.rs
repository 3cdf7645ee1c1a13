//! # Views Module
//!
//! Rendering of the terminal interface from the view model.

pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
