// src/services/auth_service.rs
//
// Credential check for the single login gate.
//
// The verification strategy is an `Authenticator`; the default one checks
// salted hashes kept in the `users` table.

use std::sync::Arc;

use log::{error, info, warn};

use crate::domain::{hash_password, verify_password, DomainError, UserId};
use crate::error::AppResult;
use crate::repositories::UserRepository;

#[cfg_attr(test, mockall::automock)]
pub trait Authenticator: Send + Sync {
    /// `Ok(false)` for unknown users and wrong passwords alike.
    /// `Err` only when the credential store could not be consulted.
    fn authenticate(&self, username: &str, password: &str) -> AppResult<bool>;
}

/// Verifies against users stored through a `UserRepository`
pub struct StoredCredentialAuthenticator {
    user_repo: Arc<dyn UserRepository>,
}

impl StoredCredentialAuthenticator {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

impl Authenticator for StoredCredentialAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<bool> {
        let Some(user) = self.user_repo.find_by_username(username)? else {
            return Ok(false);
        };
        Ok(verify_password(password, &user.password_hash))
    }
}

pub struct AuthService {
    authenticator: Arc<dyn Authenticator>,
    user_repo: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(authenticator: Arc<dyn Authenticator>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            authenticator,
            user_repo,
        }
    }

    /// Default wiring: stored salted hashes
    pub fn with_stored_credentials(user_repo: Arc<dyn UserRepository>) -> Self {
        let authenticator = Arc::new(StoredCredentialAuthenticator::new(user_repo.clone()));
        Self::new(authenticator, user_repo)
    }

    /// Login gate. Fails closed: an unreachable store is a rejected login.
    pub fn validate(&self, username: &str, password: &str) -> bool {
        match self.check(username, password) {
            Ok(valid) => valid,
            Err(e) => {
                error!("Credential check for '{}' failed: {}", username, e);
                false
            }
        }
    }

    /// Like `validate`, but keeps store failures distinct from bad credentials
    pub fn check(&self, username: &str, password: &str) -> AppResult<bool> {
        let valid = self.authenticator.authenticate(username, password)?;
        if valid {
            info!("User '{}' logged in", username);
        } else {
            warn!("Rejected credentials for user '{}'", username);
        }
        Ok(valid)
    }

    /// Store a new user with a hashed password
    pub fn register_user(&self, username: &str, password: &str) -> AppResult<UserId> {
        if username.trim().is_empty() {
            return Err(DomainError::MissingField { field: "username" }.into());
        }
        if password.is_empty() {
            return Err(DomainError::MissingField { field: "password" }.into());
        }

        let id = self.user_repo.insert(username, &hash_password(password))?;
        info!("Registered user '{}'", username);
        Ok(id)
    }
}
