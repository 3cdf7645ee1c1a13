//! # View Models Module
//!
//! The ViewModel owns one session and exposes the operations the UI offers:
//! mode selection, field editing, submitting and resetting.
//!
//! - `core`: struct definition and view event queue
//! - `mode_manager`: mode selection and reset
//! - `form_manager`: field editing and focus
//! - `request_manager`: request tickets and outcome application

pub mod core;
pub mod form_manager;
pub mod mode_manager;
pub mod request_manager;


pub use self::core::ViewModel;
pub use request_manager::{PendingRequest, RequestTicket, RequestTracker, ResponsePolicy};
