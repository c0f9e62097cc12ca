//! Form flows
//!
//! One synchronous orchestration per form: validate, then apply the success
//! side effects. Each call runs to completion for a single submission.

pub mod login;
pub mod registration;

pub use login::{LOGIN_SUCCESS, LOGIN_SUCCESS_PERSISTENT, submit_login};
pub use registration::{REGISTRATION_SUCCESS, submit_registration};
