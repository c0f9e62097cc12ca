//! Form result types
//!
//! Defines the field and form references handed to the presentation layer and
//! the outcome returned by each flow.

use std::fmt;

use crate::error::ValidationError;

/// A single input field on one of the two forms, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordConfirmation,
    Terms,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "passwordCheck",
            Field::Terms => "terms",
        };
        f.write_str(name)
    }
}

/// The two forms handled by the flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Registration,
    Login,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Registration => f.write_str("registration"),
            Form::Login => f.write_str("login"),
        }
    }
}

/// Result of one form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Accepted { message: String },
    Rejected { error: ValidationError },
}

impl FormOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FormOutcome::Accepted { .. })
    }

    /// The rejecting error, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FormOutcome::Accepted { .. } => None,
            FormOutcome::Rejected { error } => Some(error),
        }
    }

    /// The field to highlight, if the submission was rejected.
    pub fn field(&self) -> Option<Field> {
        self.error().map(ValidationError::field)
    }
}
