//! User store.
//!
//! `MockStore` stands in for a real database: `save` only records the call and
//! `lookup` hands back a fixed identity for any non-negative id. A lookup never
//! returns what was saved before it.

use thiserror::Error;

use crate::journal::Journal;
use crate::user::User;

/// Lookup was asked for an id that can never exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid user ID: {id}")]
pub struct InvalidIdError {
    pub id: i64,
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("journal write failed")]
    Journal(#[source] anyhow::Error),
}

pub trait UserStore {
    /// Build a new user record. Cannot fail.
    fn create(&self, name: &str, email: &str) -> User;

    /// Persist a user.
    fn save(&mut self, user: &User) -> Result<(), SaveError>;

    /// Fetch a user by id.
    fn lookup(&mut self, id: i64) -> Result<User, InvalidIdError>;
}

/// Identity returned by every successful mock lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockIdentity {
    pub name: String,
    pub email: String,
}

impl Default for MockIdentity {
    fn default() -> Self {
        Self {
            name: "Example User".to_string(),
            email: "user@example.com".to_string(),
        }
    }
}

#[derive(Default)]
pub struct MockStore {
    identity: MockIdentity,
    journal: Option<Journal>,
}

impl MockStore {
    pub fn new(identity: MockIdentity) -> Self {
        Self {
            identity,
            journal: None,
        }
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn journal(&self) -> Option<&Journal> {
        self.journal.as_ref()
    }
}

impl UserStore for MockStore {
    fn create(&self, name: &str, email: &str) -> User {
        let user = User::new(name, email);
        tracing::debug!(id = user.id, name = %user.name, "created user");
        user
    }

    fn save(&mut self, user: &User) -> Result<(), SaveError> {
        tracing::info!(id = user.id, name = %user.name, "saving user");
        if let Some(journal) = self.journal.as_mut() {
            journal.user_saved(user).map_err(SaveError::Journal)?;
        }
        Ok(())
    }

    fn lookup(&mut self, id: i64) -> Result<User, InvalidIdError> {
        let result = if id < 0 {
            Err(InvalidIdError { id })
        } else {
            Ok(User::with_id(id, &self.identity.name, &self.identity.email))
        };

        match &result {
            Ok(_) => tracing::info!(id, "lookup returned mock user"),
            Err(e) => tracing::warn!(id, error = %e, "lookup rejected"),
        }

        if let Some(journal) = self.journal.as_mut() {
            let error = result.as_ref().err().map(ToString::to_string);
            if let Err(e) = journal.user_lookup(id, error.as_deref()) {
                tracing::warn!(error = %e, "failed to journal lookup");
            }
        }

        result
    }
}
