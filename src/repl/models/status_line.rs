//! # Status Line Model
//!
//! Encapsulates all state related to the status line display,
//! providing a clean interface for status bar rendering.

/// Status line model containing all status bar display state
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Temporary status message to display
    status_message: Option<String>,

    /// Name of the profile section the settings came from
    profile_name: String,

    /// Base URL of the country service
    server: String,

    /// Number of requests sent and not yet completed
    pending_requests: usize,

    /// Duration of the last completed request in milliseconds
    last_duration_ms: Option<u64>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn set_profile_name(&mut self, name: impl Into<String>) {
        self.profile_name = name.into();
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn set_server(&mut self, server: impl Into<String>) {
        self.server = server.into();
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn request_started(&mut self) {
        self.pending_requests += 1;
    }

    pub fn request_finished(&mut self, duration_ms: u64) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        self.last_duration_ms = Some(duration_ms);
    }

    pub fn pending_requests(&self) -> usize {
        self.pending_requests
    }

    pub fn is_executing(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn last_duration_ms(&self) -> Option<u64> {
        self.last_duration_ms
    }
}
