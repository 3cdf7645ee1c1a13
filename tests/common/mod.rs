//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - Cucumber world implementation
//! - Lookups from on-screen names to application types

pub mod world;

pub use world::CountrylineWorld;
