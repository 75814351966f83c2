//! Authentication error types.

use thiserror::Error;

use crmdesk_core::error::AppError;

/// Errors raised by the session guard.
///
/// A plain bad password is *not* an error (it returns `Ok(false)`); only
/// the lockout condition is raised, carrying the countdown for user
/// messaging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Validation was attempted while the guard is locked.
    #[error("too many login attempts, retry in {remaining_seconds} seconds")]
    LockedOut {
        /// Whole seconds until the lock expires (ceiling).
        remaining_seconds: u64,
    },
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::LockedOut { .. } => AppError::rate_limit(err.to_string()),
        }
    }
}
