//! # Mode Management
//!
//! Handles screen mode transitions and the full "start over" reset.

use crate::repl::events::{Mode, ViewEvent};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Get current mode
    pub fn get_mode(&self) -> Mode {
        self.session.mode()
    }

    /// Switch to another screen
    ///
    /// Field values and the last result are kept. Selecting the mode that is
    /// already active changes nothing.
    pub fn select_mode(&mut self, mode: Mode) {
        let old_mode = self.get_mode();
        if old_mode == mode {
            tracing::debug!("Mode {:?} already active", mode);
            return;
        }

        tracing::debug!("Changing mode from {:?} to {:?}", old_mode, mode);
        let next = self.session.with_mode(mode);
        self.replace_session(next);
        self.focus = 0;
        self.status_line.clear_status_message();

        self.emit_view_event([ViewEvent::FullRedrawRequired]);
        tracing::info!("Changed mode from {:?} to {:?}", old_mode, mode);
    }

    /// Start over: menu screen, empty fields, no result
    ///
    /// Requests still in flight are left running. Whether their responses
    /// are applied afterwards depends on the response policy.
    pub fn reset(&mut self) {
        let next = self.session.reset();
        self.replace_session(next);
        self.focus = 0;
        self.requests.start_new_epoch();
        self.status_line.clear_status_message();

        self.emit_view_event([ViewEvent::FullRedrawRequired]);
        tracing::info!("Session reset");
    }
}
