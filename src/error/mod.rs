//! Error handling
//!
//! Defines error types and handling for the form validator.

pub mod handlers;
pub mod types;

pub use types::*;
