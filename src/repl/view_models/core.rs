//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! This is the central coordinator; mode, form and request handling live in
//! their own manager files as further `impl ViewModel` blocks.

use crate::repl::events::ViewEvent;
use crate::repl::models::{SessionState, StatusLine};
use crate::repl::view_models::request_manager::{RequestTracker, ResponsePolicy};

/// Owner of all UI state for one session
///
/// Only the controller loop holds a ViewModel, so every state change,
/// including a late service response, happens on that one owner.
#[derive(Debug)]
pub struct ViewModel {
    pub(super) session: SessionState,
    /// Index of the focused field within the current mode's form
    pub(super) focus: usize,
    pub(super) status_line: StatusLine,
    pub(super) requests: RequestTracker,
    pub(super) terminal_size: (u16, u16),
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    /// Create a new ViewModel that applies responses in arrival order
    pub fn new() -> Self {
        Self::with_policy(ResponsePolicy::default())
    }

    pub fn with_policy(policy: ResponsePolicy) -> Self {
        Self {
            session: SessionState::new(),
            focus: 0,
            status_line: StatusLine::new(),
            requests: RequestTracker::new(policy),
            terminal_size: (80, 24),
            pending_view_events: Vec::new(),
        }
    }

    /// Current session snapshot (mode, fields and last result)
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Replace the whole session with the next state
    pub(super) fn replace_session(&mut self, next: SessionState) {
        self.session = next;
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_line.set_status_message(message);
        self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
    }

    /// Store the profile name for display
    pub fn set_profile_name(&mut self, profile_name: impl Into<String>) {
        self.status_line.set_profile_name(profile_name);
    }

    pub fn set_server(&mut self, server: impl Into<String>) {
        self.status_line.set_server(server);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    /// Queue view events for the controller to render
    pub(super) fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            if !self.pending_view_events.contains(&event) {
                self.pending_view_events.push(event);
            }
        }
    }

    /// Take all queued view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
