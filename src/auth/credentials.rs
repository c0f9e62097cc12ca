//! Credential records and form input
//!
//! Defines the persisted user record and the ephemeral form submissions.

use serde::{Deserialize, Serialize};

/// A registered user as stored in the users slot.
///
/// Username and email are stored lowercased; the password is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// Builds a record from already-validated input, case-folding the
    /// username and email.
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_lowercase(),
            email: email.to_lowercase(),
            password: password.to_string(),
        }
    }
}

/// Raw fields of the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub terms_accepted: bool,
}

/// Raw fields of the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub keep_logged_in: bool,
}
