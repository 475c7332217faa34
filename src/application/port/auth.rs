// SPDX-License-Identifier: MPL-2.0
//! Authentication provider port definition.
//!
//! The application only reacts to a session becoming available; it never
//! mutates identity state. Sign-in flows belong to the provider.

use crate::domain::user::User;
use futures_util::future::BoxFuture;
use std::fmt;

/// Errors produced while resolving the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No user is signed in.
    NoSession,
    /// The provider could not be reached.
    Unavailable(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoSession => write!(f, "no active session"),
            AuthError::Unavailable(msg) => write!(f, "auth provider unavailable: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Port for the external authentication provider.
pub trait AuthProvider: Send + Sync {
    /// Resolves the current session's user.
    ///
    /// The feed's one-shot fetch is gated on this resolving successfully.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when no session exists or the provider
    /// cannot be reached.
    fn resolve_session(&self) -> BoxFuture<'static, Result<User, AuthError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_display() {
        assert_eq!(format!("{}", AuthError::NoSession), "no active session");
        let err = AuthError::Unavailable("offline".to_string());
        assert!(format!("{err}").contains("offline"));
    }
}
