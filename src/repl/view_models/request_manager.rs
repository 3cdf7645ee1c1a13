//! # Request Management
//!
//! Turns a submitted action into a ticketed service request and folds the
//! service's outcome back into the session.
//!
//! The view model never talks to the network itself. `submit` hands the
//! controller a [`PendingRequest`]; the controller runs it and later calls
//! `apply_outcome` with the same ticket. Outcomes are applied in the order
//! they are handed back, so with [`ResponsePolicy::LastWriterWins`] the
//! result shown is that of whichever response arrived last.

use crate::repl::events::{Action, ViewEvent};
use crate::repl::models::ResultState;
use crate::repl::services::{ServiceOutcome, ServiceRequest};
use crate::repl::view_models::core::ViewModel;

/// What to do with a response whose request is no longer the latest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Apply every response as it arrives
    #[default]
    LastWriterWins,
    /// Drop responses to requests that were followed by another submit or
    /// by a reset
    DiscardSuperseded,
}

/// Identity of one submitted request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    /// Sequence number, unique within the session
    pub id: u64,
    /// Reset generation the request was issued in
    pub epoch: u64,
}

/// A request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub request: ServiceRequest,
}

/// Bookkeeping for issued tickets
#[derive(Debug, Clone)]
pub struct RequestTracker {
    policy: ResponsePolicy,
    next_id: u64,
    latest_id: Option<u64>,
    epoch: u64,
}

impl RequestTracker {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            next_id: 1,
            latest_id: None,
            epoch: 0,
        }
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn issue(&mut self) -> RequestTicket {
        let ticket = RequestTicket {
            id: self.next_id,
            epoch: self.epoch,
        };
        self.next_id += 1;
        self.latest_id = Some(ticket.id);
        ticket
    }

    /// Mark every ticket issued so far as belonging to a previous session
    pub fn start_new_epoch(&mut self) {
        self.epoch += 1;
    }

    /// Whether a response for this ticket should reach the session
    pub fn accepts(&self, ticket: RequestTicket) -> bool {
        match self.policy {
            ResponsePolicy::LastWriterWins => true,
            ResponsePolicy::DiscardSuperseded => {
                ticket.epoch == self.epoch && self.latest_id == Some(ticket.id)
            }
        }
    }
}

impl ViewModel {
    pub fn response_policy(&self) -> ResponsePolicy {
        self.requests.policy()
    }

    /// Prepare the request for an action from the current field values
    ///
    /// The session itself is unchanged until the outcome comes back.
    pub fn submit(&mut self, action: Action) -> PendingRequest {
        let request = ServiceRequest::from_action(action, self.session.fields());
        let ticket = self.requests.issue();

        self.status_line.request_started();
        self.status_line
            .set_status_message(format!("Sending {}...", action.name()));
        self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);

        tracing::info!("Submitting {} as request #{}", action.name(), ticket.id);
        tracing::debug!("Request #{}: {:?}", ticket.id, request);
        PendingRequest { ticket, request }
    }

    /// Submit the action of the form currently shown, if any
    pub fn submit_current_form(&mut self) -> Option<PendingRequest> {
        let action = self.get_mode().action()?;
        Some(self.submit(action))
    }

    /// Fold a completed request into the session
    ///
    /// Success and failure both end in result mode. Returns whether the
    /// outcome was applied; under [`ResponsePolicy::DiscardSuperseded`] a stale
    /// outcome is dropped and the session is left untouched.
    pub fn apply_outcome(
        &mut self,
        ticket: RequestTicket,
        outcome: ServiceOutcome,
        duration_ms: u64,
    ) -> bool {
        self.status_line.request_finished(duration_ms);

        if !self.requests.accepts(ticket) {
            tracing::debug!("Discarding superseded response for request #{}", ticket.id);
            self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
            return false;
        }

        match &outcome {
            Ok(_) => tracing::info!("Request #{} succeeded in {}ms", ticket.id, duration_ms),
            Err(error) => tracing::warn!(
                "Request #{} failed (status {:?}, {:?}): {}",
                ticket.id,
                error.status_code(),
                error.cause(),
                error.detail().unwrap_or(error.message())
            ),
        }

        let next = self.session.with_result(ResultState::from(outcome));
        self.replace_session(next);
        self.focus = 0;
        self.status_line.clear_status_message();
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
        true
    }
}
