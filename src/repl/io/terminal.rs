//! # Crossterm Streams
//!
//! The real keyboard and screen. Nothing outside this file calls crossterm's
//! terminal functions directly.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

/// Whether the UI should see this event at all
///
/// Terminals that report key releases and repeats would otherwise insert
/// characters twice and submit a form once per edge.
fn is_user_input(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind == KeyEventKind::Press,
        _ => true,
    }
}

/// Keyboard and resize events from the terminal
#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        loop {
            let event = event::read()?;
            if is_user_input(&event) {
                return Ok(event);
            }
        }
    }
}

/// Buffered stdout
///
/// Cursor moves and text are queued and reach the terminal together on
/// [`Write::flush`], which the renderer calls once per frame. Screen mode
/// switches are written immediately.
pub struct TerminalRenderStream {
    out: BufWriter<Stdout>,
}

impl TerminalRenderStream {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for TerminalRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TerminalRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl RenderStream for TerminalRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        Ok(queue!(self.out, terminal::Clear(ClearType::All))?)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        Ok(queue!(self.out, cursor::MoveTo(x, y))?)
    }

    fn hide_cursor(&mut self) -> Result<()> {
        Ok(queue!(self.out, cursor::Hide)?)
    }

    fn show_cursor(&mut self) -> Result<()> {
        Ok(queue!(self.out, cursor::Show)?)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        Ok(execute!(self.out, EnterAlternateScreen)?)
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        Ok(execute!(self.out, LeaveAlternateScreen)?)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::enable_raw_mode()?)
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::disable_raw_mode()?)
    }
}
