//! # Result State Model
//!
//! Outcome of the last completed request. Exactly one variant is held at a
//! time, so a success can never be shown together with an error.

use crate::repl::models::{Country, Language};
use crate::repl::services::{ServiceError, ServiceOutcome, ServiceResponse};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultState {
    /// Nothing completed since start or the last reset
    #[default]
    Empty,
    /// Create, update or delete succeeded
    Success,
    /// A single country was fetched
    Country(Country),
    /// A single language was fetched
    Language(Language),
    /// Countries speaking a language were fetched
    CountryList(Vec<Country>),
    /// The request failed
    Failure(ServiceError),
}

impl ResultState {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResultState::Empty)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResultState::Success)
    }

    pub fn country(&self) -> Option<&Country> {
        match self {
            ResultState::Country(country) => Some(country),
            _ => None,
        }
    }

    pub fn language(&self) -> Option<&Language> {
        match self {
            ResultState::Language(language) => Some(language),
            _ => None,
        }
    }

    pub fn countries(&self) -> Option<&[Country]> {
        match self {
            ResultState::CountryList(countries) => Some(countries),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            ResultState::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Message shown in the error line, if this is a failure
    pub fn error_message(&self) -> Option<&str> {
        self.error().map(ServiceError::message)
    }
}

impl From<ServiceOutcome> for ResultState {
    fn from(outcome: ServiceOutcome) -> Self {
        match outcome {
            Ok(ServiceResponse::Done) => ResultState::Success,
            Ok(ServiceResponse::Country(country)) => ResultState::Country(country),
            Ok(ServiceResponse::Language(language)) => ResultState::Language(language),
            Ok(ServiceResponse::Countries(countries)) => ResultState::CountryList(countries),
            Err(error) => ResultState::Failure(error),
        }
    }
}
