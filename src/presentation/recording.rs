//! Recording presenter
//!
//! Keeps every callback in order along with the resulting screen state.
//! Used by the tests and by embedders that render outside the terminal.

use std::collections::HashSet;

use super::Presenter;
use crate::auth::results::{Field, Form};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    ShowError { message: String, field: Field },
    ClearError,
    Highlight(Field),
    ClearHighlight(Field),
    ShowSuccess(String),
    ResetForm(Form),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
    highlighted: HashSet<Field>,
    focused: Option<Field>,
    error: Option<String>,
    success: Option<String>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    pub fn is_highlighted(&self, field: Field) -> bool {
        self.highlighted.contains(&field)
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// The visible error banner.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The visible success banner.
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }
}

impl Presenter for RecordingPresenter {
    fn show_error(&mut self, message: &str, field: Field) {
        self.error = Some(message.to_string());
        self.focused = Some(field);
        self.events.push(PresenterEvent::ShowError {
            message: message.to_string(),
            field,
        });
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.events.push(PresenterEvent::ClearError);
    }

    fn highlight_field(&mut self, field: Field) {
        self.highlighted.insert(field);
        self.events.push(PresenterEvent::Highlight(field));
    }

    fn clear_field_highlight(&mut self, field: Field) {
        self.highlighted.remove(&field);
        self.events.push(PresenterEvent::ClearHighlight(field));
    }

    fn show_success(&mut self, message: &str) {
        self.success = Some(message.to_string());
        self.events.push(PresenterEvent::ShowSuccess(message.to_string()));
    }

    fn reset_form(&mut self, form: Form) {
        self.focused = None;
        self.events.push(PresenterEvent::ResetForm(form));
    }
}
