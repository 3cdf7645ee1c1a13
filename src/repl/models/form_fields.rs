//! # Form Fields Model
//!
//! The text typed into the forms. Values survive mode switches and are only
//! cleared by a full reset.

use crate::repl::events::FormField;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub capital: String,
    pub new_name: String,
    pub new_capital: String,
    pub language_id: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Capital => &self.capital,
            FormField::NewName => &self.new_name,
            FormField::NewCapital => &self.new_capital,
            FormField::LanguageId => &self.language_id,
        }
    }

    /// Copy of these fields with one value replaced
    pub fn with(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut fields = self.clone();
        let value = value.into();
        match field {
            FormField::Name => fields.name = value,
            FormField::Capital => fields.capital = value,
            FormField::NewName => fields.new_name = value,
            FormField::NewCapital => fields.new_capital = value,
            FormField::LanguageId => fields.language_id = value,
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
