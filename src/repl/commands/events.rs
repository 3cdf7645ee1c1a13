//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! This maintains proper separation of concerns - commands suggest, controller decides.

use crate::repl::events::{Action, Mode};

/// Direction for field focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Next,
    Previous,
}

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Request mode change
    ModeChangeRequested { new_mode: Mode },

    /// Request a character to be appended to the focused field
    TextInsertRequested { ch: char },

    /// Request the last character of the focused field to be removed
    TextDeleteRequested,

    /// Request focus to move to another field
    FocusMoveRequested { direction: FocusDirection },

    /// Request an action to be sent to the country service
    SubmitRequested { action: Action },

    /// Request a full reset of the session ("start over")
    ResetRequested,

    /// Request to quit application
    QuitRequested,
}

impl CommandEvent {
    /// Create a mode change event
    pub fn mode_change(new_mode: Mode) -> Self {
        Self::ModeChangeRequested { new_mode }
    }

    /// Create a focus move event
    pub fn focus_move(direction: FocusDirection) -> Self {
        Self::FocusMoveRequested { direction }
    }

    /// Create a submit event
    pub fn submit(action: Action) -> Self {
        Self::SubmitRequested { action }
    }
}
