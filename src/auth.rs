//! Authentication service: credential checks, registration, and session
//! identity resolution.

use std::sync::Arc;

use thiserror::Error;

use crate::models::User;
use crate::security;
use crate::session::Session;
use crate::store::{StoreError, UserStore};

/// Authentication and registration failures
#[derive(Error, Debug)]
pub enum AuthError {
    /// Bad username or password; deliberately does not say which
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("That username is already taken")]
    UsernameTaken,

    #[error("Username and password are required")]
    EmptyField,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service over the user repository
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Resolve the user bound to a session
    ///
    /// An anonymous session or a stale user id (the account no longer
    /// exists in the store) both resolve to `None`; neither is an error.
    pub fn current_user(&self, session: &Session) -> Result<Option<User>, StoreError> {
        let Some(user_id) = session.user_id else {
            return Ok(None);
        };
        Ok(self.store.load()?.into_iter().find(|u| u.id == user_id))
    }

    /// Check credentials and return the matched user
    ///
    /// The failure is the same whether the username is unknown or the
    /// password is wrong.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let users = self.store.load()?;

        let user = users.into_iter().find(|u| u.username == username);
        match user {
            Some(user) if user.verify_password(password) => {
                tracing::info!("User {} signed in", user.username);
                Ok(user)
            }
            _ => {
                tracing::info!("Failed sign-in attempt");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Create a new account and persist it
    ///
    /// The username is trimmed before validation; uniqueness is exact and
    /// case-sensitive. A rejected registration leaves the store untouched.
    pub fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::EmptyField);
        }

        let mut users = self.store.load()?;
        if users.iter().any(|u| u.username == username) {
            tracing::info!("Registration rejected: username already taken");
            return Err(AuthError::UsernameTaken);
        }

        let user = User {
            id: User::next_id(&users),
            username: username.to_string(),
            password_hash: security::hash_password(password),
        };
        users.push(user.clone());
        self.store.save(&users)?;

        tracing::info!("User {} registered", user.username);
        Ok(user)
    }
}
