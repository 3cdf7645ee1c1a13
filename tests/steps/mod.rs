//! Step definitions for Cucumber tests
//!
//! Steps are organized by concern:
//! - `application` - starting the application against a mock service
//! - `service` - what the mock country service answers
//! - `keys` - key presses and typing
//! - `screen` - mode, field and screen assertions

pub mod application;
pub mod keys;
pub mod screen;
pub mod service;
