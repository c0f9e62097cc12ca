//! Presentation layer
//!
//! The flows decide what to show; a `Presenter` decides how. Adapters are
//! free to render however they like but must dismiss success banners after
//! the configured delay, `SUCCESS_DISMISS_AFTER` by default.

pub mod recording;
pub mod terminal;

use std::time::Duration;

use crate::auth::results::{Field, Form};

pub use recording::{PresenterEvent, RecordingPresenter};
pub use terminal::TerminalPresenter;

/// How long a success banner stays visible.
pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Callbacks the flows drive while handling a submission.
pub trait Presenter {
    /// Shows the error banner and moves focus to `field`.
    fn show_error(&mut self, message: &str, field: Field);

    fn clear_error(&mut self);

    fn highlight_field(&mut self, field: Field);

    fn clear_field_highlight(&mut self, field: Field);

    /// Shows a success banner; the adapter dismisses it on its own.
    fn show_success(&mut self, message: &str);

    fn reset_form(&mut self, form: Form);
}
