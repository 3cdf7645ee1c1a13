//! # Country UI
//!
//! Terminal front end for the country service, split the MVVM way:
//!
//! - `events`: modes, form fields, actions and view events
//! - `models`: session state and the records shown on screen
//! - `services`: the country service client
//! - `view_models`: the state machine driven by user actions and responses
//! - `commands`: key bindings
//! - `controllers`: the event loop
//! - `io` / `views`: terminal input and drawing

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};
pub use controllers::{AppController, ResponseMessage};
pub use events::{Action, FormField, Mode, ViewEvent};
pub use models::{Country, FormFields, Language, ResultState, SessionState};
pub use services::{CountryService, HttpCountryService, ServiceError, ServiceRequest};
pub use view_models::{ResponsePolicy, ViewModel};
pub use views::{TerminalRenderer, ViewRenderer};
