//! Form validation
//!
//! Handles user records, field validation rules and form outcomes.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{LoginForm, RegistrationForm, UserRecord};
pub use results::{Field, Form, FormOutcome};
pub use validator::{
    trim_input, validate_email, validate_login, validate_password, validate_username,
};
