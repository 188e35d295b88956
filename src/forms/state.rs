//! src/forms/state.rs

/// UI state of a form, driving which controls are disabled and which
/// message, if any, is rendered above the fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FormState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormState::Success)
    }

    /// The inline error message, when one is displayed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormState::Error(message) => Some(message),
            _ => None,
        }
    }
}
