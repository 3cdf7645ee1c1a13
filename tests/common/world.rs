use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

use countryline::cmd_args::CommandLineArgs;
use countryline::config::ServiceProfile;
use countryline::repl::{
    events::{FormField, Mode},
    io::{MockEventStream, MockRenderStream},
    services::HttpCountryService,
    AppController,
};

pub type TestController = AppController<MockEventStream, MockRenderStream>;

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Address nothing listens on, for transport failures
pub const UNREACHABLE_SERVER: &str = "http://127.0.0.1:9";

/// One running application wired to a mock country service
#[derive(World)]
#[world(init = Self::new)]
pub struct CountrylineWorld {
    /// Real controller driven by injected key events
    pub controller: Option<TestController>,

    /// Shares the controller's recording of everything drawn
    pub screen: MockRenderStream,

    /// Mock country service
    pub mock_server: Option<MockServer>,

    /// Responses applied so far, in arrival order
    pub applied_responses: Vec<bool>,
}

impl std::fmt::Debug for CountrylineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountrylineWorld")
            .field(
                "mode",
                &self.controller.as_ref().map(|c| c.view_model().get_mode()),
            )
            .field("server", &self.mock_server.as_ref().map(|s| s.uri()))
            .field("applied_responses", &self.applied_responses)
            .finish()
    }
}

impl CountrylineWorld {
    pub fn new() -> Self {
        Self {
            controller: None,
            screen: MockRenderStream::new(),
            mock_server: None,
            applied_responses: Vec::new(),
        }
    }

    /// Start a mock service and an application pointed at it
    pub async fn start_with_mock_service(&mut self, extra_args: &[&str]) -> Result<()> {
        let server = MockServer::start().await;
        let uri = server.uri();
        self.mock_server = Some(server);
        self.start_application(&uri, extra_args)
    }

    pub fn start_application(&mut self, server: &str, extra_args: &[&str]) -> Result<()> {
        let mut args = vec!["countryline", "--server", server];
        args.extend_from_slice(extra_args);
        let cmd_args = CommandLineArgs::parse_from(args);

        let profile = ServiceProfile::default().apply_args(&cmd_args);
        let service = HttpCountryService::new(profile.server(), Duration::from_secs(2))?;

        let mut controller = AppController::with_service(
            &profile,
            Arc::new(service),
            MockEventStream::empty(),
            self.screen.clone(),
        )?;
        controller.redraw()?;
        self.controller = Some(controller);
        Ok(())
    }

    pub fn controller(&mut self) -> &mut TestController {
        self.controller
            .as_mut()
            .expect("application should be started by a Given step")
    }

    pub fn mock_server(&self) -> &MockServer {
        self.mock_server
            .as_ref()
            .expect("mock service should be started by a Given step")
    }

    pub fn mode(&mut self) -> Mode {
        self.controller().view_model().get_mode()
    }

    pub fn field_value(&mut self, field: FormField) -> String {
        self.controller().view_model().field_value(field).to_string()
    }

    pub fn send_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let controller = self.controller();
        controller
            .process_key_event(KeyEvent::new(code, modifiers))
            .expect("key event should be processed");
        controller
            .render_pending_view_events()
            .expect("view events should render");
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send_key_event(code, KeyModifiers::NONE);
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Wait for `count` responses and apply them as they arrive
    pub async fn wait_for_responses(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            let applied = tokio::time::timeout(RESPONSE_TIMEOUT, self.controller().next_response())
                .await
                .context("timed out waiting for a service response")?;
            self.applied_responses.push(applied);
        }
        self.controller().render_pending_view_events()
    }

    /// Everything currently on screen
    pub fn screen_text(&mut self) -> String {
        self.controller().redraw().expect("screen should redraw");
        self.screen.screen_text()
    }
}

impl Default for CountrylineWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a mode from its on-screen title, e.g. "Get Country"
pub fn mode_from_title(title: &str) -> Mode {
    [Mode::Select, Mode::Result]
        .into_iter()
        .chain(Mode::FORMS)
        .find(|mode| mode.title() == title)
        .unwrap_or_else(|| panic!("no mode titled '{title}'"))
}

/// Resolve a form field from its label, e.g. "New capital"
pub fn field_from_label(label: &str) -> FormField {
    [
        FormField::Name,
        FormField::Capital,
        FormField::NewName,
        FormField::NewCapital,
        FormField::LanguageId,
    ]
    .into_iter()
    .find(|field| field.label() == label)
    .unwrap_or_else(|| panic!("no field labelled '{label}'"))
}
