//! # Models Module
//!
//! Data and state of a session: the records exchanged with the service,
//! the form input, the last result and the status line.

pub mod country;
pub mod form_fields;
pub mod result_state;
pub mod session;
pub mod status_line;

pub use country::{Country, Language};
pub use form_fields::FormFields;
pub use result_state::ResultState;
pub use session::SessionState;
pub use status_line::StatusLine;
