//! # Services Layer
//!
//! Abstracts the external resources the UI talks to. The only one is the
//! country service.

pub mod country_service;

pub use country_service::{
    extract_error_payload, CountryService, FailureCause, HttpCountryService, ServiceError,
    ServiceOutcome, ServiceRequest, ServiceResponse, FALLBACK_ERROR_MESSAGE,
};
