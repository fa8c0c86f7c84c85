//! User registration and credential verification.
//!
//! Usernames are unique and immutable once created; accounts are never
//! deleted and credentials never change in the current scope.

use std::collections::HashMap;

use parking_lot::RwLock;
use quadmarket_types::{QuadmarketError, Result, Username};

/// A registered user. Fields are private: the password never leaves
/// this module.
#[derive(Debug, Clone)]
struct UserAccount {
    password: String,
}

/// Owns all user records and enforces username uniqueness.
///
/// Internally synchronized: registration holds the write lock across the
/// existence check and the insert, so duplicate-registration races cannot
/// create two accounts with the same name.
pub struct AccountRegistry {
    users: RwLock<HashMap<Username, UserAccount>>,
}

impl AccountRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    /// Returns [`QuadmarketError::UsernameTaken`] if the username exists,
    /// regardless of the supplied password.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let mut users = self.users.write();
        if users.contains_key(username) {
            return Err(QuadmarketError::UsernameTaken(username.to_string()));
        }
        users.insert(
            username.to_string(),
            UserAccount {
                password: password.to_string(),
            },
        );
        tracing::debug!(username, "user registered");
        Ok(())
    }

    /// Verify a user's credentials.
    ///
    /// # Errors
    /// Returns [`QuadmarketError::InvalidCredentials`] for an unknown
    /// username or a mismatched password — the same value for both, so the
    /// response does not reveal which usernames exist.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        let users = self.users.read();
        match users.get(username) {
            Some(account) if account.password == password => Ok(()),
            _ => Err(QuadmarketError::InvalidCredentials),
        }
    }

    /// Whether a username is registered. Used by other components to
    /// validate foreign references before mutation.
    #[must_use]
    pub fn exists(&self, username: &str) -> bool {
        self.users.read().contains_key(username)
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Whether no users are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
