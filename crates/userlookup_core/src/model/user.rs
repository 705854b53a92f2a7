//! User domain model.
//!
//! # Responsibility
//! - Define the user record shared by repository and service layers.
//!
//! # Invariants
//! - `id` is caller-supplied and not validated by core.
//! - `name` carries no uniqueness or format constraint; empty is allowed.

use serde::{Deserialize, Serialize};

/// Caller-supplied numeric identifier of a user.
pub type UserId = i64;

/// User record produced by a [`UserRepository`](crate::repo::user_repo::UserRepository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Creates a user record from its parts.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
