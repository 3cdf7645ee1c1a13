//! # Keyboard and Screen Seams
//!
//! The controller reads keys through [`EventStream`] and draws through
//! [`RenderStream`]. Crossterm backs both in the binary. The mocks record
//! what was drawn so the cucumber suite can read the screen back.
//!
//! ```text
//! binary:  AppController ──▶ TerminalEventStream  ──▶ crossterm::event
//!                        ──▶ TerminalRenderStream ──▶ BufWriter<Stdout>
//!
//! tests:   AppController ──▶ MockEventStream      ──▶ queued key events
//!                        ──▶ MockRenderStream     ──▶ commands + screen text
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Columns and rows
pub type TerminalSize = (u16, u16);

/// Source of key and resize events
pub trait EventStream: Send {
    /// Wait up to `timeout` for an event; `false` leaves time for responses
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Next event; only called after `poll` returned `true`
    fn read(&mut self) -> Result<Event>;
}

/// Screen the renderer draws on
///
/// Text goes through [`Write`]; the renderer flushes once per frame.
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move to column `x`, row `y`
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
