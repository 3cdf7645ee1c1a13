//! # Core Event Types
//!
//! Common types used throughout the event system: the screen modes, the
//! editable form fields, and the service actions a form can submit.

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Main menu listing the available actions
    #[default]
    Select,
    /// Add country form
    Add,
    /// Get country form
    Get,
    /// Update country form
    Update,
    /// Delete country form
    Delete,
    /// Get language form
    GetLanguage,
    /// Countries speaking a language form
    CountriesWithLanguage,
    /// Outcome of the last completed request
    Result,
}

impl Mode {
    /// Forms reachable from the menu, in menu order
    pub const FORMS: [Mode; 6] = [
        Mode::Add,
        Mode::Get,
        Mode::Update,
        Mode::Delete,
        Mode::GetLanguage,
        Mode::CountriesWithLanguage,
    ];

    /// Title shown on the menu button and the form header
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Select => "Select Action",
            Mode::Add => "Add Country",
            Mode::Get => "Get Country",
            Mode::Update => "Update Country",
            Mode::Delete => "Delete Country",
            Mode::GetLanguage => "Get Language",
            Mode::CountriesWithLanguage => "Countries With Language",
            Mode::Result => "Result",
        }
    }

    /// Fields shown by this mode's form, in focus order
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Mode::Add => &[FormField::Name, FormField::Capital],
            Mode::Get | Mode::Delete => &[FormField::Name],
            Mode::Update => &[FormField::Name, FormField::NewName, FormField::NewCapital],
            Mode::GetLanguage | Mode::CountriesWithLanguage => &[FormField::LanguageId],
            Mode::Select | Mode::Result => &[],
        }
    }

    /// Action submitted from this mode's form
    pub fn action(&self) -> Option<Action> {
        match self {
            Mode::Add => Some(Action::AddCountry),
            Mode::Get => Some(Action::GetCountry),
            Mode::Update => Some(Action::UpdateCountry),
            Mode::Delete => Some(Action::DeleteCountry),
            Mode::GetLanguage => Some(Action::GetLanguage),
            Mode::CountriesWithLanguage => Some(Action::CountriesWithLanguage),
            Mode::Select | Mode::Result => None,
        }
    }

    /// Whether this mode shows an input form
    pub fn is_form(&self) -> bool {
        self.action().is_some()
    }

    /// Form selected by a menu shortcut ('1'..'6' or the action letter)
    pub fn from_shortcut(ch: char) -> Option<Mode> {
        match ch {
            '1' | 'a' => Some(Mode::Add),
            '2' | 'g' => Some(Mode::Get),
            '3' | 'u' => Some(Mode::Update),
            '4' | 'd' => Some(Mode::Delete),
            '5' | 'l' => Some(Mode::GetLanguage),
            '6' | 'c' => Some(Mode::CountriesWithLanguage),
            _ => None,
        }
    }
}

/// One editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Capital,
    NewName,
    NewCapital,
    LanguageId,
}

impl FormField {
    /// Input placeholder text
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Enter country name",
            FormField::Capital => "Enter country capital",
            FormField::NewName => "Enter new country name",
            FormField::NewCapital => "Enter new country capital",
            FormField::LanguageId => "Enter language ID",
        }
    }

    /// Short label rendered to the left of the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Capital => "Capital",
            FormField::NewName => "New name",
            FormField::NewCapital => "New capital",
            FormField::LanguageId => "Language ID",
        }
    }
}

/// Service action a form submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddCountry,
    GetCountry,
    UpdateCountry,
    DeleteCountry,
    GetLanguage,
    CountriesWithLanguage,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddCountry => "addCountry",
            Action::GetCountry => "getCountry",
            Action::UpdateCountry => "updateCountry",
            Action::DeleteCountry => "deleteCountry",
            Action::GetLanguage => "getLanguage",
            Action::CountriesWithLanguage => "countriesWithLanguage",
        }
    }
}
