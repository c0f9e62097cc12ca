//! Error types
//!
//! Defines the validation errors surfaced to users and the storage and
//! application errors raised underneath them.

use std::fmt;
use std::io;

use crate::auth::results::Field;

/// A single rejected form field.
///
/// Every variant is recoverable: the user corrects the field and submits again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    UsernameBlank,
    UsernameTooShort,
    UsernameSpecialCharacters,
    UsernameNotEnoughUniqueCharacters,
    UsernameTaken,
    EmailBlank,
    EmailInvalidFormat,
    EmailForbiddenDomain,
    PasswordTooShort,
    PasswordMissingMixedCase,
    PasswordMissingDigit,
    PasswordMissingSpecialCharacter,
    PasswordContainsPasswordWord,
    PasswordContainsUsername,
    PasswordsDoNotMatch,
    TermsNotAccepted,
    UsernameNotFound,
    PasswordBlank,
    IncorrectPassword,
}

impl ValidationError {
    /// The form field this error is reported against.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::UsernameBlank
            | ValidationError::UsernameTooShort
            | ValidationError::UsernameSpecialCharacters
            | ValidationError::UsernameNotEnoughUniqueCharacters
            | ValidationError::UsernameTaken
            | ValidationError::UsernameNotFound => Field::Username,
            ValidationError::EmailBlank
            | ValidationError::EmailInvalidFormat
            | ValidationError::EmailForbiddenDomain => Field::Email,
            ValidationError::PasswordTooShort
            | ValidationError::PasswordMissingMixedCase
            | ValidationError::PasswordMissingDigit
            | ValidationError::PasswordMissingSpecialCharacter
            | ValidationError::PasswordContainsPasswordWord
            | ValidationError::PasswordContainsUsername
            | ValidationError::PasswordBlank
            | ValidationError::IncorrectPassword => Field::Password,
            ValidationError::PasswordsDoNotMatch => Field::PasswordConfirmation,
            ValidationError::TermsNotAccepted => Field::Terms,
        }
    }

    /// User-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::UsernameBlank => "Username cannot be blank.",
            ValidationError::UsernameTooShort => "Username must be at least 4 characters long.",
            ValidationError::UsernameSpecialCharacters => {
                "Username cannot contain special characters or spaces."
            }
            ValidationError::UsernameNotEnoughUniqueCharacters => {
                "Username must contain at least two unique characters."
            }
            ValidationError::UsernameTaken => "Username is already taken.",
            ValidationError::EmailBlank => "Email cannot be blank.",
            ValidationError::EmailInvalidFormat => "Please enter a valid email address.",
            ValidationError::EmailForbiddenDomain => {
                "Email cannot be from the domain \"example.com\"."
            }
            ValidationError::PasswordTooShort => "Password must be at least 12 characters long.",
            ValidationError::PasswordMissingMixedCase => {
                "Password must contain at least one uppercase and one lowercase letter."
            }
            ValidationError::PasswordMissingDigit => "Password must contain at least one number.",
            ValidationError::PasswordMissingSpecialCharacter => {
                "Password must contain at least one special character."
            }
            ValidationError::PasswordContainsPasswordWord => {
                "Password cannot contain the word \"password\"."
            }
            ValidationError::PasswordContainsUsername => "Password cannot contain your username.",
            ValidationError::PasswordsDoNotMatch => "Passwords do not match.",
            ValidationError::TermsNotAccepted => "You must accept the terms and conditions.",
            ValidationError::UsernameNotFound => "Username does not exist.",
            ValidationError::PasswordBlank => "Password cannot be blank.",
            ValidationError::IncorrectPassword => "Incorrect password.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Storage module errors
///
/// Only writes fail; reads degrade to an empty user list.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialization(serde_json::Error),
    InvalidSlot(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Serialization(e) => write!(f, "Serialization error: {}", e),
            StoreError::InvalidSlot(s) => write!(f, "Invalid storage slot: {}", s),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialization(e) => Some(e),
            StoreError::InvalidSlot(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error)
    }
}

/// Application-level error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store(e) => write!(f, "Storage error: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::Store(error)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_map_to_fields() {
        assert_eq!(ValidationError::UsernameTaken.field(), Field::Username);
        assert_eq!(ValidationError::UsernameNotFound.field(), Field::Username);
        assert_eq!(ValidationError::EmailForbiddenDomain.field(), Field::Email);
        assert_eq!(ValidationError::IncorrectPassword.field(), Field::Password);
        assert_eq!(
            ValidationError::PasswordsDoNotMatch.field(),
            Field::PasswordConfirmation
        );
        assert_eq!(ValidationError::TermsNotAccepted.field(), Field::Terms);
    }

    #[test]
    fn test_display_is_user_message() {
        assert_eq!(
            ValidationError::EmailForbiddenDomain.to_string(),
            "Email cannot be from the domain \"example.com\"."
        );
        assert_eq!(
            ValidationError::IncorrectPassword.to_string(),
            "Incorrect password."
        );
    }

    #[test]
    fn test_store_error_wraps_io() {
        let err: AppError = StoreError::from(io::Error::other("disk full")).into();
        assert_eq!(err.to_string(), "Storage error: IO error: disk full");
    }
}
