//! # countryline - Terminal Client for a Country Service
//!
//! Add, look up, update and delete countries and look up languages from a
//! single keyboard-driven screen.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌──────────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│    Models    │
//! │             │              │              │              │              │
//! │ - Terminal  │              │ - Modes      │              │ - Session    │
//! │ - Rendering │              │ - Forms      │              │ - Result     │
//! │             │              │ - Tickets    │              │              │
//! └─────────────┘              └──────────────┘              └──────────────┘
//!                                      ▲
//!                                      │ Commands / outcomes
//!                                      ▼
//!                               ┌──────────────┐   spawn    ┌────────────────┐
//!                               │  Controller  │───────────▶│ CountryService │
//!                               │ - Event Loop │◀───────────│     (HTTP)     │
//!                               └──────────────┘   mpsc     └────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
