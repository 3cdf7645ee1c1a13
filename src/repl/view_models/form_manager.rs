//! # Form Management
//!
//! Field editing and focus movement within the active form.

use crate::repl::events::{FormField, ViewEvent};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Field that receives typed characters, if the current mode has a form
    pub fn focused_field(&self) -> Option<FormField> {
        self.get_mode().fields().get(self.focus).copied()
    }

    pub fn field_value(&self, field: FormField) -> &str {
        self.session.fields().get(field)
    }

    /// Replace a field's value; empty strings are accepted as-is
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let next = self.session.with_field(field, value);
        self.replace_session(next);
        self.emit_view_event([ViewEvent::FormRedrawRequired]);
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.focused_field() {
            let mut value = self.field_value(field).to_string();
            value.push(ch);
            self.set_field(field, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn delete_char_before_cursor(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut value = self.field_value(field).to_string();
            if value.pop().is_some() {
                self.set_field(field, value);
            }
        }
    }

    /// Move focus to the next field, wrapping around
    pub fn focus_next_field(&mut self) {
        let count = self.get_mode().fields().len();
        if count > 1 {
            self.focus = (self.focus + 1) % count;
            self.emit_view_event([ViewEvent::FormRedrawRequired]);
        }
    }

    /// Move focus to the previous field, wrapping around
    pub fn focus_previous_field(&mut self) {
        let count = self.get_mode().fields().len();
        if count > 1 {
            self.focus = (self.focus + count - 1) % count;
            self.emit_view_event([ViewEvent::FormRedrawRequired]);
        }
    }
}
