//! # Controllers Module
//!
//! The controller that runs the event loop and talks to the country service.

pub mod app_controller;

pub use app_controller::{AppController, ResponseMessage};
