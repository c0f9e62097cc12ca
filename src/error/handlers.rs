//! Error handlers
//!
//! Provides error logging and classification for the console front end.

use crate::error::types::{AppError, StoreError};
use log::error;

/// Broad category of an application error, used to pick the console reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The submission could not be persisted; the user may retry.
    Retryable,
    /// Startup cannot continue.
    Fatal,
}

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("Application error: {}", err);
}

/// Classify an error
pub fn error_category(err: &AppError) -> ErrorCategory {
    match err {
        AppError::Store(StoreError::InvalidSlot(_)) => ErrorCategory::Fatal,
        AppError::Store(_) => ErrorCategory::Retryable,
        AppError::Config(_) => ErrorCategory::Fatal,
        AppError::IoError(_) => ErrorCategory::Fatal,
    }
}
