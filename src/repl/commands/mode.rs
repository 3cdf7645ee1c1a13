//! # Mode Transition Commands
//!
//! Commands for moving between the menu, the forms and the result screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::Mode;

/// Open a form by its menu shortcut ('1'..'6' or the action letter)
///
/// Works on the menu and on the result screen, so a new action can be
/// started straight from a result.
pub struct MenuSelectCommand;

impl Command for MenuSelectCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        if !matches!(context.mode(), Mode::Select | Mode::Result) {
            return false;
        }
        if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match event.code {
            KeyCode::Char(ch) => Mode::from_shortcut(ch).is_some(),
            _ => false,
        }
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(Mode::from_shortcut(ch)
                .map(|mode| vec![CommandEvent::mode_change(mode)])
                .unwrap_or_default()),
            _ => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "MenuSelect"
    }
}

/// Leave a form or the result screen for the menu (Esc)
///
/// Field values are kept.
pub struct BackToMenuCommand;

impl Command for BackToMenuCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Esc) && context.mode() != Mode::Select
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::mode_change(Mode::Select)])
    }

    fn name(&self) -> &'static str {
        "BackToMenu"
    }
}
