//! Session gate
//!
//! Login is a single stateless check per submission:
//! - required fields are validated first ([`LoginForm::validate`])
//! - the pair is then handed to a [`CredentialVerifier`]
//! - success yields an explicit [`Session`] owned by the caller
//!
//! There is no lockout, retry counter or rate limiting. The check is a gate,
//! not a security boundary.

use crate::core::error::{AdminError, Result};
use crate::core::validation::LoginForm;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Decides whether a username/password pair is accepted
///
/// Swapping the implementation (for a remote credential check, say) does not
/// change what callers of [`SessionGate::authenticate`] see.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed credential pair compared by equality
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: &'static str,
    password: &'static str,
}

impl StaticCredentials {
    pub const ADMIN_USERNAME: &'static str = "admin";
    pub const ADMIN_PASSWORD: &'static str = "password";

    /// The built-in administrator pair
    pub fn admin() -> Self {
        Self {
            username: Self::ADMIN_USERNAME,
            password: Self::ADMIN_PASSWORD,
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::admin()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Client-side marker of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    username: String,
    issued_at: DateTime<Utc>,
}

impl Session {
    fn issue(username: &str) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            username: username.to_string(),
            issued_at: Utc::now(),
        }
    }

    /// Opaque token; never validated against the record store
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Login gate in front of the record management view
pub struct SessionGate {
    verifier: Box<dyn CredentialVerifier>,
}

impl SessionGate {
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
        }
    }

    /// Check the pair against the verifier
    ///
    /// Assumes both fields were already validated; see [`SessionGate::login`].
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session> {
        if self.verifier.verify(username, password) {
            tracing::info!(username = %username, "login accepted");
            Ok(Session::issue(username))
        } else {
            tracing::warn!(username = %username, "login rejected");
            Err(AdminError::InvalidCredentials)
        }
    }

    /// Validate the form, then authenticate
    ///
    /// A missing field fails with a validation error without consulting the
    /// verifier.
    pub fn login(&self, form: &LoginForm) -> Result<Session> {
        if let Err(e) = form.validate() {
            tracing::warn!(error = %e, "login form incomplete");
            return Err(e.into());
        }
        self.authenticate(&form.username, &form.password)
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new(StaticCredentials::admin())
    }
}
