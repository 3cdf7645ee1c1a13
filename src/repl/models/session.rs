//! # Session State
//!
//! The whole UI session as one value: active mode, form fields and the last
//! result. Every transition builds a new value that replaces the old one, so
//! a late response overwriting the result is an explicit replacement rather
//! than a stray field write.

use crate::repl::events::{FormField, Mode};
use crate::repl::models::{FormFields, ResultState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    mode: Mode,
    fields: FormFields,
    result: ResultState,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    /// Same session showing another mode; fields and result are kept
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        Self {
            fields: self.fields.with(field, value),
            ..self.clone()
        }
    }

    /// Same session showing a completed request's result
    pub fn with_result(&self, result: ResultState) -> Self {
        Self {
            mode: Mode::Result,
            result,
            fields: self.fields.clone(),
        }
    }

    /// Fresh session, as at start-up
    pub fn reset(&self) -> Self {
        Self::default()
    }
}
