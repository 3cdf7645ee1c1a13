//! # Command System
//!
//! Commands map key events to [`CommandEvent`]s. Each command decides from a
//! read-only snapshot of the view model whether a key is meant for it; the
//! registry runs the first one that claims the key. Commands never touch the
//! view model themselves; the controller applies the events they produce.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::repl::events::{FormField, Mode};
use crate::repl::view_models::ViewModel;

pub mod app;
pub mod events;
pub mod form;
pub mod mode;

pub use app::{AppTerminateCommand, StartOverCommand};
pub use events::{CommandEvent, FocusDirection};
pub use form::{
    DeleteCharCommand, FocusNextFieldCommand, FocusPreviousFieldCommand, InsertCharCommand,
    SubmitFormCommand,
};
pub use mode::{BackToMenuCommand, MenuSelectCommand};

/// Command trait: key binding check plus the events the key produces
pub trait Command {
    /// Check if command is relevant for current state and event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events this key press should cause
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging
    fn name(&self) -> &'static str;
}

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelSnapshot {
    pub current_mode: Mode,
    pub focused_field: Option<FormField>,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            current_mode: view_model.get_mode(),
            focused_field: view_model.focused_field(),
        }
    }

    /// Snapshot of a view model showing `mode` with its first field focused
    pub fn in_mode(mode: Mode) -> Self {
        Self {
            current_mode: mode,
            focused_field: mode.fields().first().copied(),
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    pub fn mode(&self) -> Mode {
        self.state.current_mode
    }
}

/// Type alias for command collection to reduce complexity
pub type CommandCollection = Vec<Box<dyn Command + Send>>;

/// Registry that holds all available commands
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    /// Register all default commands
    ///
    /// Application commands come first so Ctrl chords are never typed into a
    /// field.
    fn register_default_commands(&mut self) {
        // Application commands
        self.add_command(Box::new(AppTerminateCommand));
        self.add_command(Box::new(StartOverCommand));

        // Mode commands
        self.add_command(Box::new(MenuSelectCommand));
        self.add_command(Box::new(BackToMenuCommand));

        // Form commands
        self.add_command(Box::new(SubmitFormCommand));
        self.add_command(Box::new(FocusNextFieldCommand));
        self.add_command(Box::new(FocusPreviousFieldCommand));
        self.add_command(Box::new(DeleteCharCommand));
        self.add_command(Box::new(InsertCharCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command + Send>) {
        self.commands.push(command);
    }

    /// Process a key event and return the events of the first relevant command
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!(
                    "Found relevant command: {} for key {:?} in mode {:?}",
                    command.name(),
                    event,
                    context.mode()
                );
                return command.execute(event, context);
            }
        }

        tracing::debug!(
            "No relevant command found for key {:?} in mode {:?}",
            event,
            context.mode()
        );
        Ok(Vec::new())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
