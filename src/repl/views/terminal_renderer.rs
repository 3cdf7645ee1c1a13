//! # Terminal Renderer
//!
//! Draws the single-screen country UI from the view model.
//!
//! ```text
//! row 0        Country Application
//! row 1        ─────────────────────
//! rows 2..     body (menu, form or result)
//! height - 2   key hints
//! height - 1   status bar
//! ```

use crate::repl::events::{FormField, Mode, ViewEvent};
use crate::repl::io::RenderStream;
use crate::repl::models::ResultState;
use crate::repl::view_models::ViewModel;
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const APP_TITLE: &str = "Country Application";
pub const SUCCESS_MESSAGE: &str = "Country was successfully processed!";

const BODY_TOP: u16 = 2;
const ERROR_PREFIX: &str = "Error: ";
const LABEL_WIDTH: usize = 12;
/// Marker, space, label column and one space before the value
const VALUE_COLUMN: usize = 2 + LABEL_WIDTH + 1;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the screen for the first frame
    fn initialize(&mut self) -> Result<()>;

    /// Redraw everything
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Redraw only the body rows (typing and focus changes)
    fn render_form(&mut self, view_model: &ViewModel) -> Result<()>;

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Dispatch one queued view event
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(view_model),
            ViewEvent::FormRedrawRequired => self.render_form(view_model),
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(view_model),
        }
    }

    /// Restore the cursor before leaving
    fn cleanup(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Heading,
    Dim,
    Success,
    Error,
}

/// One body row made of styled segments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ScreenLine {
    segments: Vec<(String, Style)>,
}

impl ScreenLine {
    fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Plain)
    }

    fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            segments: vec![(text.into(), style)],
        }
    }

    fn blank() -> Self {
        Self::default()
    }

    fn push(mut self, text: impl Into<String>, style: Style) -> Self {
        self.segments.push((text.into(), style));
        self
    }
}

/// Cut `text` so it occupies at most `width` terminal columns
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        result.push(ch);
    }
    result
}

/// Replace control characters with spaces
///
/// Text from the service may carry line breaks or escape sequences. Printed
/// raw they would move the cursor or drive the terminal.
pub fn printable(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(padding))
}

fn body_lines(view_model: &ViewModel) -> Vec<ScreenLine> {
    let mode = view_model.get_mode();
    match mode {
        Mode::Select => menu_lines(),
        Mode::Result => result_lines(view_model.session().result()),
        _ => form_lines(view_model, mode),
    }
}

fn menu_lines() -> Vec<ScreenLine> {
    let mut lines = vec![
        ScreenLine::styled(Mode::Select.title(), Style::Heading),
        ScreenLine::blank(),
    ];
    lines.extend(
        Mode::FORMS
            .iter()
            .enumerate()
            .map(|(index, mode)| ScreenLine::plain(format!("  {}. {}", index + 1, mode.title()))),
    );
    lines
}

fn form_lines(view_model: &ViewModel, mode: Mode) -> Vec<ScreenLine> {
    let focused = view_model.focused_field();
    let mut lines = vec![ScreenLine::styled(mode.title(), Style::Heading), ScreenLine::blank()];

    for field in mode.fields() {
        let marker = if focused == Some(*field) { "›" } else { " " };
        let label = pad_to_width(&format!("{}:", field.label()), LABEL_WIDTH);
        let value = view_model.field_value(*field);
        let line = ScreenLine::plain(format!("{marker} {label} "));
        lines.push(if value.is_empty() {
            line.push(field.placeholder(), Style::Dim)
        } else {
            line.push(value, Style::Plain)
        });
    }
    lines
}

fn result_lines(result: &ResultState) -> Vec<ScreenLine> {
    let mut lines = vec![
        ScreenLine::styled(Mode::Result.title(), Style::Heading),
        ScreenLine::blank(),
    ];

    match result {
        ResultState::Empty => lines.push(ScreenLine::styled("No result yet", Style::Dim)),
        ResultState::Success => lines.push(ScreenLine::styled(SUCCESS_MESSAGE, Style::Success)),
        ResultState::Country(country) => {
            lines.push(ScreenLine::plain(format!("Country: {}", country.name)));
            lines.push(ScreenLine::plain(format!("Capital: {}", country.capital)));
        }
        ResultState::Language(language) => {
            lines.push(ScreenLine::plain(format!("Language: {}", language.name)));
        }
        ResultState::CountryList(countries) if countries.is_empty() => {
            lines.push(ScreenLine::styled("No countries found", Style::Dim));
        }
        ResultState::CountryList(countries) => {
            lines.push(ScreenLine::plain(format!("Countries ({}):", countries.len())));
            lines.extend(countries.iter().map(|country| {
                ScreenLine::plain(format!("  - {} ({})", country.name, country.capital))
            }));
        }
        ResultState::Failure(error) => {
            // Multi-line payloads (HTML error pages) continue under the first line
            let mut message = error.message().lines();
            let first = message.next().unwrap_or_default();
            lines.push(ScreenLine::styled(format!("{ERROR_PREFIX}{first}"), Style::Error));
            let indent = " ".repeat(ERROR_PREFIX.len());
            lines.extend(
                message.map(|line| ScreenLine::styled(format!("{indent}{line}"), Style::Error)),
            );
        }
    }
    lines
}

fn hint_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Select => "1-6 Choose  Ctrl+R Start Over  Ctrl+C Quit",
        Mode::Result => "1-6 Choose  Esc Menu  Ctrl+R Start Over  Ctrl+C Quit",
        _ => "Enter Submit  Tab Next  Esc Menu  Ctrl+R Start Over  Ctrl+C Quit",
    }
}

fn status_text(view_model: &ViewModel, width: usize) -> String {
    let status = view_model.status_line();
    let mode = view_model.get_mode();

    let mut left = format!(" {} ", mode.title().to_uppercase());
    if !status.server().is_empty() {
        left.push_str(&format!("| {} ", status.server()));
    }

    let middle = if status.is_executing() {
        format!("Executing... ({})", status.pending_requests())
    } else {
        status.status_message().unwrap_or_default().to_string()
    };

    let mut right = String::new();
    if !status.profile_name().is_empty() {
        right.push_str(&format!("profile: {} ", status.profile_name()));
    }
    if let Some(ms) = status.last_duration_ms() {
        right.push_str(&format!("| {ms}ms "));
    }

    let line = printable(&format!("{left} {middle}"));
    let room = width.saturating_sub(right.width());
    if line.width() + right.width() <= width {
        format!("{}{right}", pad_to_width(&line, room))
    } else {
        pad_to_width(&line, width)
    }
}

/// Terminal-based view renderer using crossterm
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn render_stream_mut(&mut self) -> &mut RS {
        &mut self.render_stream
    }

    fn width(&self) -> usize {
        self.terminal_size.0 as usize
    }

    fn hint_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(2)
    }

    fn status_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(1)
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        match style {
            Style::Plain => {}
            Style::Heading => queue!(self.render_stream, SetAttribute(Attribute::Bold))?,
            Style::Dim => queue!(self.render_stream, SetForegroundColor(Color::DarkGrey))?,
            Style::Success => queue!(self.render_stream, SetForegroundColor(Color::Green))?,
            Style::Error => queue!(self.render_stream, SetForegroundColor(Color::Red))?,
        }
        Ok(())
    }

    fn draw_line(&mut self, row: u16, line: &ScreenLine) -> Result<()> {
        let width = self.width();
        self.render_stream.move_cursor(0, row)?;

        let mut used = 0;
        for (text, style) in &line.segments {
            let visible = truncate_to_width(&printable(text), width.saturating_sub(used));
            if visible.is_empty() {
                continue;
            }
            used += visible.width();
            self.apply_style(*style)?;
            queue!(
                self.render_stream,
                Print(visible),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        queue!(self.render_stream, Print(" ".repeat(width.saturating_sub(used))))?;
        Ok(())
    }

    fn draw_header(&mut self) -> Result<()> {
        let rule = "─".repeat(self.width());
        self.draw_line(0, &ScreenLine::styled(APP_TITLE, Style::Heading))?;
        self.draw_line(1, &ScreenLine::styled(rule, Style::Dim))
    }

    fn draw_body(&mut self, view_model: &ViewModel) -> Result<()> {
        let lines = body_lines(view_model);
        let last_row = self.hint_row();

        for (offset, row) in (BODY_TOP..last_row).enumerate() {
            match lines.get(offset) {
                Some(line) => self.draw_line(row, line)?,
                None => self.draw_line(row, &ScreenLine::blank())?,
            }
        }
        Ok(())
    }

    fn draw_hints(&mut self, mode: Mode) -> Result<()> {
        let row = self.hint_row();
        self.draw_line(row, &ScreenLine::styled(hint_text(mode), Style::Dim))
    }

    /// Park the cursor at the end of the focused field, or hide it
    fn place_cursor(&mut self, view_model: &ViewModel) -> Result<()> {
        let Some(field) = view_model.focused_field() else {
            return self.render_stream.hide_cursor();
        };
        let Some(index) = view_model
            .get_mode()
            .fields()
            .iter()
            .position(|candidate: &FormField| *candidate == field)
        else {
            return self.render_stream.hide_cursor();
        };

        let row = BODY_TOP + 2 + index as u16;
        let column = VALUE_COLUMN + view_model.field_value(field).width();
        let column = column.min(self.width().saturating_sub(1)) as u16;
        self.render_stream.move_cursor(column, row)?;
        self.render_stream.show_cursor()
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        // Controller handles raw mode and the alternate screen
        self.render_stream.clear_screen()?;
        self.render_stream.hide_cursor()
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        self.draw_header()?;
        self.draw_body(view_model)?;
        self.draw_hints(view_model.get_mode())?;
        self.render_status_bar(view_model)?;
        self.place_cursor(view_model)?;

        self.render_stream.flush()?;
        Ok(())
    }

    fn render_form(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.draw_body(view_model)?;
        self.place_cursor(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let width = self.width();
        let text = status_text(view_model, width);

        self.render_stream.move_cursor(0, self.status_row())?;
        queue!(
            self.render_stream,
            SetAttribute(Attribute::Reverse),
            Print(text),
            SetAttribute(Attribute::Reset)
        )?;

        if view_model.focused_field().is_some() {
            self.place_cursor(view_model)?;
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        queue!(self.render_stream, ResetColor, SetAttribute(Attribute::Reset))?;
        self.render_stream.show_cursor()?;
        self.render_stream.flush()?;
        Ok(())
    }
}
