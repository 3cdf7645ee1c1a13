//! # Application Controller
//!
//! The controller owns the view model and runs the event loop. It turns key
//! events into commands, sends submitted requests to the country service on
//! background tasks, and folds their outcomes back in as they arrive.

use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, FocusDirection, ViewModelSnapshot},
    events::ViewEvent,
    io::{EventStream, RenderStream},
    services::{CountryService, HttpCountryService, ServiceOutcome},
    view_models::{PendingRequest, RequestTicket, ViewModel},
    views::{TerminalRenderer, ViewRenderer},
};
use crate::{cmd_args::CommandLineArgs, config, config::ServiceProfile};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const RESPONSE_CHANNEL_CAPACITY: usize = 32;

/// A finished request on its way back to the controller
#[derive(Debug)]
pub struct ResponseMessage {
    pub ticket: RequestTicket,
    pub outcome: ServiceOutcome,
    pub duration_ms: u64,
}

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    service: Arc<dyn CountryService>,
    response_sender: mpsc::Sender<ResponseMessage>,
    response_receiver: mpsc::Receiver<ResponseMessage>,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the controller from command line arguments and the profile file
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let profile_name = cmd_args.profile();
        let profile_path = config::get_profile_path();
        tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

        let profile = ServiceProfile::load(profile_name, &profile_path)?.apply_args(&cmd_args);
        let service = HttpCountryService::new(profile.server(), profile.timeout())?;

        let mut controller =
            Self::with_service(&profile, Arc::new(service), event_stream, render_stream)?;
        controller.view_model.set_profile_name(profile_name);
        Ok(controller)
    }

    /// Create the controller around an already built service
    pub fn with_service(
        profile: &ServiceProfile,
        service: Arc<dyn CountryService>,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = ViewModel::with_policy(profile.response_policy());
        view_model.set_server(profile.server());

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        let (response_sender, response_receiver) = mpsc::channel(RESPONSE_CHANNEL_CAPACITY);

        tracing::info!(
            "Controller ready: server {}, policy {:?}",
            profile.server(),
            profile.response_policy()
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            service,
            response_sender,
            response_receiver,
            should_quit: false,
        })
    }

    /// Run the main application loop
    ///
    /// The terminal is restored even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        self.enter_terminal()?;
        let result = self.event_loop().await;
        let cleanup = self.leave_terminal();
        result.and(cleanup)
    }

    fn enter_terminal(&mut self) -> Result<()> {
        let stream = self.view_renderer.render_stream_mut();
        stream.enable_raw_mode()?;
        stream.enter_alternate_screen()?;

        self.view_renderer.initialize()?;
        self.redraw()
    }

    fn leave_terminal(&mut self) -> Result<()> {
        self.view_renderer.cleanup()?;
        let stream = self.view_renderer.render_stream_mut();
        stream.leave_alternate_screen()?;
        stream.disable_raw_mode()
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            if self.event_stream.poll(POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) => self.process_key_event(key_event)?,
                    Event::Resize(width, height) => {
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                        self.view_model.update_terminal_size(width, height);
                        self.view_renderer.update_size(width, height);
                    }
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }

            self.process_pending_responses();
            self.render_pending_view_events()?;

            // Let request tasks progress on a single-threaded runtime
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Run one key event through the command registry and apply the result
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        match self.command_registry.process_event(key_event, &context) {
            Ok(events) => {
                tracing::debug!("Command events generated: {:?}", events);
                for event in events {
                    self.apply_command_event(event);
                }
            }
            Err(e) => tracing::warn!("Failed to process key event {:?}: {}", key_event, e),
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::ModeChangeRequested { new_mode } => {
                tracing::debug!("Applying mode change request: {:?}", new_mode);
                self.view_model.select_mode(new_mode);
            }
            CommandEvent::TextInsertRequested { ch } => self.view_model.insert_char(ch),
            CommandEvent::TextDeleteRequested => self.view_model.delete_char_before_cursor(),
            CommandEvent::FocusMoveRequested { direction } => match direction {
                FocusDirection::Next => self.view_model.focus_next_field(),
                FocusDirection::Previous => self.view_model.focus_previous_field(),
            },
            CommandEvent::SubmitRequested { action } => {
                let pending = self.view_model.submit(action);
                self.dispatch(pending);
            }
            CommandEvent::ResetRequested => self.view_model.reset(),
            CommandEvent::QuitRequested => self.should_quit = true,
        }
    }

    /// Send a request on its own task; the outcome comes back over the channel
    fn dispatch(&self, pending: PendingRequest) {
        let service = Arc::clone(&self.service);
        let sender = self.response_sender.clone();

        tokio::spawn(async move {
            let start_time = Instant::now();
            let outcome = service.execute(&pending.request).await;
            let duration_ms = start_time.elapsed().as_millis() as u64;

            let message = ResponseMessage {
                ticket: pending.ticket,
                outcome,
                duration_ms,
            };
            if sender.send(message).await.is_err() {
                tracing::debug!(
                    "Response for request #{} dropped, controller is gone",
                    pending.ticket.id
                );
            }
        });
    }

    fn apply_response(&mut self, message: ResponseMessage) -> bool {
        self.view_model
            .apply_outcome(message.ticket, message.outcome, message.duration_ms)
    }

    /// Apply every response that has already arrived, in arrival order
    pub fn process_pending_responses(&mut self) -> usize {
        let mut count = 0;
        while let Ok(message) = self.response_receiver.try_recv() {
            self.apply_response(message);
            count += 1;
        }
        count
    }

    /// Wait for the next response and apply it; returns whether it was applied
    pub async fn next_response(&mut self) -> bool {
        match self.response_receiver.recv().await {
            Some(message) => self.apply_response(message),
            None => false,
        }
    }

    /// Render queued view events, collapsing them into one full redraw when asked
    pub fn render_pending_view_events(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        if view_events.is_empty() {
            return Ok(());
        }

        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            return self.view_renderer.render_full(&self.view_model);
        }
        for event in &view_events {
            self.view_renderer
                .handle_view_event(event, &self.view_model)?;
        }
        Ok(())
    }

    /// Draw the whole screen; this frame covers every queued view event
    pub fn redraw(&mut self) -> Result<()> {
        self.view_model.collect_pending_view_events();
        self.view_renderer.render_full(&self.view_model)
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Check if the application should quit (for testing)
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
