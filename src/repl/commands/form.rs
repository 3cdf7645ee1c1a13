//! # Form Commands
//!
//! Typing, field focus and submission inside a form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent, FocusDirection};

fn in_form(context: &CommandContext) -> bool {
    context.mode().is_form()
}

/// Type a character into the focused field
pub struct InsertCharCommand;

impl Command for InsertCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context)
            && matches!(event.code, KeyCode::Char(_))
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(vec![CommandEvent::TextInsertRequested { ch }]),
            _ => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "InsertChar"
    }
}

/// Delete the last character of the focused field (Backspace)
pub struct DeleteCharCommand;

impl Command for DeleteCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && matches!(event.code, KeyCode::Backspace)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TextDeleteRequested])
    }

    fn name(&self) -> &'static str {
        "DeleteChar"
    }
}

/// Focus the next field (Tab or Down)
pub struct FocusNextFieldCommand;

impl Command for FocusNextFieldCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && matches!(event.code, KeyCode::Tab | KeyCode::Down)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::focus_move(FocusDirection::Next)])
    }

    fn name(&self) -> &'static str {
        "FocusNextField"
    }
}

/// Focus the previous field (Shift+Tab or Up)
pub struct FocusPreviousFieldCommand;

impl Command for FocusPreviousFieldCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && matches!(event.code, KeyCode::BackTab | KeyCode::Up)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::focus_move(FocusDirection::Previous)])
    }

    fn name(&self) -> &'static str {
        "FocusPreviousField"
    }
}

/// Submit the form's action (Enter)
///
/// Nothing stops a second Enter while the first request is still out; each
/// press sends its own request.
pub struct SubmitFormCommand;

impl Command for SubmitFormCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_form(context) && matches!(event.code, KeyCode::Enter)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(context
            .mode()
            .action()
            .map(|action| vec![CommandEvent::submit(action)])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "SubmitForm"
    }
}
